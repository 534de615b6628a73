#![allow(dead_code, unused_macros)]

use actix_web::test::TestRequest;
use hrms_lite::db::init_db;
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> SqlitePool {
    init_db("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open")
}

/// Build the service under test around `$pool`.
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .configure(hrms_lite::routes::configure),
        )
        .await
    };
}

pub fn employee_json(code: &str, name: &str, email: &str, department: &str) -> Value {
    json!({
        "employee_code": code,
        "full_name": name,
        "email": email,
        "department": department,
    })
}

pub fn ann_lee() -> Value {
    employee_json("E001", "Ann Lee", "ann@example.com", "Engineering")
}

pub fn attendance_json(employee_id: i64, date: &str, status: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "date": date,
        "status": status,
    })
}

pub fn post_employee(body: &Value) -> TestRequest {
    TestRequest::post().uri("/employees").set_json(body)
}

pub fn post_attendance(body: &Value) -> TestRequest {
    TestRequest::post().uri("/attendance").set_json(body)
}
