// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::debug;

use crate::presentation::errors::error_response;

/// JSON 请求体提取器
///
/// 与 `axum::Json` 相同，但所有解析失败（语法错误、字段类型错误、
/// 缺少 `Content-Type`）统一返回 400 和 `{"error": ...}` 响应体。
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err(error_response(
                    StatusCode::BAD_REQUEST,
                    rejection.body_text(),
                ))
            }
        }
    }
}
