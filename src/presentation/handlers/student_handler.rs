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

use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::domain::models::student::{Student, YearCount};
use crate::domain::services::student_service::StudentService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::json_body::JsonBody;
use crate::presentation::extractors::student_id::StudentId;

/// 保存学生
///
/// 创建新学生或更新已有学生
#[utoipa::path(
    post,
    path = "/students/save",
    request_body = Student,
    responses(
        (status = 201, description = "Student created or updated", body = Student),
        (status = 400, description = "Invalid student data"),
    ),
    tag = "students"
)]
pub async fn save_student<S: StudentService + 'static>(
    Extension(service): Extension<Arc<S>>,
    JsonBody(student): JsonBody<Student>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let saved = service.save(student).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// 删除学生
#[utoipa::path(
    delete,
    path = "/students/delete/{id}",
    params(("id" = i32, Path, description = "Id of the student to delete")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
    ),
    tag = "students"
)]
pub async fn delete_student<S: StudentService + 'static>(
    Extension(service): Extension<Arc<S>>,
    StudentId(id): StudentId,
) -> Result<StatusCode, AppError> {
    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// 获取全部学生
#[utoipa::path(
    get,
    path = "/students/all",
    responses((status = 200, description = "All students ordered by id", body = [Student])),
    tag = "students"
)]
pub async fn find_all_students<S: StudentService + 'static>(
    Extension(service): Extension<Arc<S>>,
) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(service.find_all().await?))
}

/// 学生总数
#[utoipa::path(
    get,
    path = "/students/count",
    responses((status = 200, description = "Number of students", body = i64)),
    tag = "students"
)]
pub async fn count_students<S: StudentService + 'static>(
    Extension(service): Extension<Arc<S>>,
) -> Result<Json<i64>, AppError> {
    Ok(Json(service.count_students().await?))
}

/// 按出生年份统计学生数量
#[utoipa::path(
    get,
    path = "/students/byYear",
    responses((status = 200, description = "Student count per birth year", body = [YearCount])),
    tag = "students"
)]
pub async fn students_by_year<S: StudentService + 'static>(
    Extension(service): Extension<Arc<S>>,
) -> Result<Json<Vec<YearCount>>, AppError> {
    Ok(Json(service.find_nbr_student_by_year().await?))
}
