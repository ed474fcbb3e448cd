// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Response;

use crate::presentation::errors::error_response;

/// 路径中的学生ID
///
/// 非整数的ID返回 400。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub i32);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(StudentId(id)),
            Err(_) => Err(error_response(
                StatusCode::BAD_REQUEST,
                "Student id must be an integer",
            )),
        }
    }
}
