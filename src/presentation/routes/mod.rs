// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::student_service::StudentService;
use crate::presentation::handlers::student_handler;
use crate::presentation::openapi;
use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 学生服务，由调用方构造并显式传入
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<S: StudentService + 'static>(service: Arc<S>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    Router::new()
        .merge(public_routes)
        .merge(student_routes(service))
        .layer(TraceLayer::new_for_http())
}

/// 学生路由表
///
/// | 方法 | 路径 | 处理器 |
/// |---|---|---|
/// | POST | `/students/save` | `save_student` |
/// | DELETE | `/students/delete/{id}` | `delete_student` |
/// | GET | `/students/all` | `find_all_students` |
/// | GET | `/students/count` | `count_students` |
/// | GET | `/students/byYear` | `students_by_year` |
pub fn student_routes<S: StudentService + 'static>(service: Arc<S>) -> Router {
    Router::new()
        .route("/students/save", post(student_handler::save_student::<S>))
        .route(
            "/students/delete/{id}",
            delete(student_handler::delete_student::<S>),
        )
        .route("/students/all", get(student_handler::find_all_students::<S>))
        .route("/students/count", get(student_handler::count_students::<S>))
        .route("/students/byYear", get(student_handler::students_by_year::<S>))
        .layer(Extension(service))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
