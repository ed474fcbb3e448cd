// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::student_repository::RepositoryError;
use crate::domain::services::student_service::ServiceError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的HTTP状态码
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            return match err {
                ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::NotFound => StatusCode::NOT_FOUND,
                ServiceError::Repository(repo_err) => repository_status(repo_err),
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_err) => repository_status(repo_err),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 构造统一格式的错误响应 `{"error": "..."}`
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(json!({ "error": message.into() }));
    (status, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }
        error_response(status, self.0.to_string())
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
