// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::create_test_app;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use studentrs::infrastructure::repositories::student_repo_impl::StudentRepositoryImpl;
use studentrs::infrastructure::services::student_service_impl::StudentServiceImpl;
use studentrs::presentation::routes;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let db = super::helpers::create_test_db().await;
    let service = Arc::new(StudentServiceImpl::new(Arc::new(
        StudentRepositoryImpl::new(db),
    )));
    let app = routes::routes(service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn version_returns_crate_version() {
    let app = create_test_app().await;

    let response = app.server.get("/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

/// OpenAPI 文档包含全部学生端点
#[tokio::test]
async fn openapi_document_lists_student_endpoints() {
    let app = create_test_app().await;

    let response = app.server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let doc = response.json::<serde_json::Value>();
    let paths = doc["paths"].as_object().expect("paths should be an object");
    for path in [
        "/students/save",
        "/students/delete/{id}",
        "/students/all",
        "/students/count",
        "/students/byYear",
    ] {
        assert!(paths.contains_key(path), "missing path {}", path);
    }
    assert!(doc["components"]["schemas"]["Student"].is_object());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = create_test_app().await;

    let response = app.server.get("/students/unknown").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
