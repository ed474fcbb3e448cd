// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use studentrs::config::settings::DatabaseSettings;
use studentrs::infrastructure::database::connection;
use studentrs::infrastructure::repositories::student_repo_impl::StudentRepositoryImpl;
use studentrs::infrastructure::services::student_service_impl::StudentServiceImpl;
use studentrs::presentation::routes;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub student_repo: Arc<StudentRepositoryImpl>,
}

/// 创建迁移完成的内存 SQLite 数据库
///
/// 内存数据库随连接销毁，连接池固定为单连接
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: None,
        idle_timeout: None,
        sqlx_logging: Some(false),
    };

    let db = connection::create_pool(&db_settings)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None).await.unwrap();

    Arc::new(db)
}

/// 创建带有真实服务与仓库的测试应用
pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let student_repo = Arc::new(StudentRepositoryImpl::new(db_pool.clone()));
    let student_service = Arc::new(StudentServiceImpl::new(student_repo.clone()));

    let app = routes::routes(student_service);
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        db_pool,
        student_repo,
    }
}
