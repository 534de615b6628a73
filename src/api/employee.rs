use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppError,
    model::{
        attendance::AttendanceStatus,
        employee::{EmployeeWithStats, NewEmployee},
    },
    repo,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListQuery {
    /// Maximum number of employees returned (default 100)
    #[param(example = 100)]
    pub limit: Option<u32>,
    /// Number of employees skipped, in `employee_code` order (default 0)
    #[param(example = 0)]
    pub offset: Option<u32>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = crate::model::employee::Employee),
        (status = 409, description = "employee_code (the employee id) or email already in use", body = crate::error::ErrorBody, example = json!({
            "detail": "Employee with this employee_code already exists"
        })),
        (status = 422, description = "Malformed employee", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner().normalized();
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut tx = pool.begin().await?;
    let employee = repo::employee::create(&mut tx, &payload).await?;
    tx.commit().await?;

    info!(id = employee.id, code = %employee.employee_code, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    params(EmployeeListQuery),
    responses(
        (status = 200, description = "Employees ordered by employee_code", body = [crate::model::employee::Employee]),
        (status = 422, description = "Malformed limit or offset", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<EmployeeListQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(repo::employee::DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let mut conn = pool.acquire().await?;
    let employees = repo::employee::list(&mut conn, limit, offset).await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let mut conn = pool.acquire().await?;
    let employee = repo::employee::get(&mut conn, employee_id).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Employee with attendance summary
#[utoipa::path(
    get,
    path = "/employees/{id}/stats",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee and number of present days", body = EmployeeWithStats),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn get_employee_stats(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let mut tx = pool.begin().await?;
    let employee = repo::employee::get(&mut tx, employee_id).await?;
    let total_present_days =
        repo::attendance::count_with_status(&mut tx, employee_id, AttendanceStatus::Present).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(EmployeeWithStats {
        employee,
        total_present_days,
    }))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee and all of its attendance deleted"),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let mut tx = pool.begin().await?;
    repo::employee::delete(&mut tx, employee_id).await?;
    tx.commit().await?;

    info!(id = employee_id, "Employee deleted");
    Ok(HttpResponse::NoContent().finish())
}
