use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    model::attendance::NewAttendance,
    repo,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Employee whose attendance is listed
    #[param(example = 1)]
    pub employee_id: i64,
    /// Earliest date included
    #[param(example = "2024-01-01", value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    /// Latest date included
    #[param(example = "2024-01-31", value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = NewAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = crate::model::attendance::Attendance),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody, example = json!({
            "detail": "Employee not found"
        })),
        (status = 409, description = "Already marked for this date", body = crate::error::ErrorBody, example = json!({
            "detail": "Attendance already marked for this employee on this date"
        })),
        (status = 422, description = "Malformed attendance", body = crate::error::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewAttendance>,
) -> Result<HttpResponse, AppError> {
    let mut tx = pool.begin().await?;
    let attendance = repo::attendance::create(&mut tx, &payload).await?;
    tx.commit().await?;

    info!(
        id = attendance.id,
        employee_id = attendance.employee_id,
        date = %attendance.date,
        "Attendance marked"
    );
    Ok(HttpResponse::Created().json(attendance))
}

/// List attendance with optional date range
#[utoipa::path(
    get,
    path = "/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance, newest date first", body = [crate::model::attendance::Attendance]),
        (status = 422, description = "Missing employee_id or malformed date", body = crate::error::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let records = repo::attendance::list_for_employee(
        &mut conn,
        query.employee_id,
        query.start_date,
        query.end_date,
    )
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

/// List all attendance of one employee
///
/// An unknown employee yields an empty list rather than a 404.
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance, newest date first", body = [crate::model::attendance::Attendance])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance_for_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let mut conn = pool.acquire().await?;
    let records = repo::attendance::list_for_employee(&mut conn, employee_id, None, None).await?;

    Ok(HttpResponse::Ok().json(records))
}
