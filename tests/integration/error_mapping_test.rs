// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DbErr;
use serde_json::json;
use std::sync::Arc;
use studentrs::domain::models::student::{Student, YearCount};
use studentrs::domain::repositories::student_repository::RepositoryError;
use studentrs::domain::services::student_service::{ServiceError, StudentService};
use studentrs::presentation::routes;

/// 所有调用都以数据库错误失败的服务
struct FailingStudentService;

fn db_failure() -> ServiceError {
    ServiceError::Repository(RepositoryError::Database(DbErr::Custom(
        "connection refused".to_string(),
    )))
}

#[async_trait]
impl StudentService for FailingStudentService {
    async fn save(&self, _student: Student) -> Result<Student, ServiceError> {
        Err(db_failure())
    }

    async fn delete(&self, _id: i32) -> Result<bool, ServiceError> {
        Err(db_failure())
    }

    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        Err(db_failure())
    }

    async fn count_students(&self) -> Result<i64, ServiceError> {
        Err(db_failure())
    }

    async fn find_nbr_student_by_year(&self) -> Result<Vec<YearCount>, ServiceError> {
        Err(db_failure())
    }
}

fn failing_server() -> TestServer {
    TestServer::new(routes::routes(Arc::new(FailingStudentService))).unwrap()
}

#[tokio::test]
async fn test_service_failures_map_to_500_with_error_body() {
    let server = failing_server();

    let responses = vec![
        server
            .post("/students/save")
            .json(&json!({ "name": "Ana", "birthYear": 2001 }))
            .await,
        server.delete("/students/delete/1").await,
        server.get("/students/all").await,
        server.get("/students/count").await,
        server.get("/students/byYear").await,
    ];

    for response in responses {
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let error = response.json::<serde_json::Value>()["error"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(error.contains("connection refused"), "unexpected error: {}", error);
    }
}

#[tokio::test]
async fn test_malformed_body_is_rejected_before_service_call() {
    let server = failing_server();

    let response = server
        .post("/students/save")
        .text("not json")
        .content_type("application/json")
        .await;

    // 400 rather than the service's 500 proves the service was never reached
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let server = failing_server();

    let response = server
        .post("/students/save")
        .text(r#"{"name": "Ana", "birthYear": 2001}"#)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
