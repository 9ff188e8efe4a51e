//! Shared fixtures for database and HTTP tests.

use crate::{
    Application,
    config::{Config, DatabaseConfig},
    db::{
        handlers::{ClassInfoRepository, ClassInfos, StudentRepository, Students},
        models::{class_info::ClassInfoCreateDBRequest, students::StudentCreateDBRequest},
    },
    types::{ClassInfoId, StudentId},
};
use axum_test::TestServer;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Full application router on the test database
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let app = Application::new_with_pool(create_test_config(), pool)
        .await
        .expect("Failed to create application");
    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: Some("postgres://localhost/classbook_test".to_string()),
            // the test database is dropped by sqlx::test
            revert_migrations_on_shutdown: false,
            ..Default::default()
        },
        enable_otel_export: false,
    }
}

pub async fn create_test_student(pool: &PgPool, student_name: &str, grade: i64) -> StudentId {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = Students::new(&mut conn, CancellationToken::new());
    repo.create(&StudentCreateDBRequest {
        student_name: student_name.to_string(),
        grade,
    })
    .await
    .expect("Failed to create test student")
}

pub async fn create_test_class_info(pool: &PgPool, student_id: StudentId, class_name: &str) -> ClassInfoId {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = ClassInfos::new(&mut conn, CancellationToken::new());
    repo.create(&ClassInfoCreateDBRequest {
        student_id,
        class_name: class_name.to_string(),
    })
    .await
    .expect("Failed to create test class")
}
