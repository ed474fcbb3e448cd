// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Json;
use utoipa::OpenApi;

use crate::domain::models::student::{Student, YearCount};
use crate::presentation::handlers::student_handler;

/// 学生管理 API 文档
#[derive(OpenApi)]
#[openapi(
    info(
        title = "studentrs",
        description = "Student management API: CRUD and birth-year statistics"
    ),
    paths(
        student_handler::save_student,
        student_handler::delete_student,
        student_handler::find_all_students,
        student_handler::count_students,
        student_handler::students_by_year,
    ),
    components(schemas(Student, YearCount)),
    tags((name = "students", description = "Student management"))
)]
pub struct ApiDoc;

/// 返回 OpenAPI 文档
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
