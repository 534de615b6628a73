use chrono::{NaiveDate, Utc};
use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::model::attendance::{Attendance, AttendanceStatus, NewAttendance};
use crate::repo::employee;
use crate::utils::db_utils::{ConstraintViolation, constraint_violation};

const ALREADY_MARKED: &str = "Attendance already marked for this employee on this date";

/// Record one day's status for an employee.
///
/// `NotFound` when the employee does not exist, `Conflict` when the
/// (employee, date) pair is already recorded.
pub async fn create(conn: &mut SqliteConnection, input: &NewAttendance) -> Result<Attendance, AppError> {
    if !employee::exists(conn, input.employee_id).await? {
        return Err(AppError::employee_not_found());
    }

    let already_marked: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM attendance WHERE employee_id = ? AND date = ?)",
    )
    .bind(input.employee_id)
    .bind(input.date)
    .fetch_one(&mut *conn)
    .await?;
    if already_marked {
        return Err(AppError::Conflict(ALREADY_MARKED.into()));
    }

    insert(conn, input).await
}

/// Insert without the owner and pair pre-checks; constraint violations are
/// translated to the errors [`create`] would have reported.
pub async fn insert(conn: &mut SqliteConnection, input: &NewAttendance) -> Result<Attendance, AppError> {
    let result = sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (employee_id, date, status, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, employee_id, date, status, created_at
        "#,
    )
    .bind(input.employee_id)
    .bind(input.date)
    .bind(input.status)
    .bind(Utc::now())
    .fetch_one(&mut *conn)
    .await;

    match result {
        Ok(attendance) => {
            debug!(
                id = attendance.id,
                employee_id = attendance.employee_id,
                date = %attendance.date,
                status = %attendance.status,
                "Attendance inserted"
            );
            Ok(attendance)
        }
        Err(e) => match constraint_violation(&e) {
            Some(ConstraintViolation::Unique(columns)) => {
                warn!(%columns, employee_id = input.employee_id, "Attendance insert lost a uniqueness race");
                Err(AppError::Conflict(ALREADY_MARKED.into()))
            }
            // employee removed between the existence check and the insert
            Some(ConstraintViolation::ForeignKey) => Err(AppError::employee_not_found()),
            None => Err(e.into()),
        },
    }
}

/// Attendance of one employee, newest date first, optionally bounded on
/// either side (bounds are inclusive).
pub async fn list_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<Attendance>, AppError> {
    let mut conditions = vec!["employee_id = ?"];
    if start_date.is_some() {
        conditions.push("date >= ?");
    }
    if end_date.is_some() {
        conditions.push("date <= ?");
    }

    let sql = format!(
        "SELECT id, employee_id, date, status, created_at FROM attendance WHERE {} ORDER BY date DESC",
        conditions.join(" AND ")
    );
    debug!(%sql, employee_id, ?start_date, ?end_date, "Fetching attendance");

    let mut query = sqlx::query_as::<_, Attendance>(&sql).bind(employee_id);
    if let Some(start) = start_date {
        query = query.bind(start);
    }
    if let Some(end) = end_date {
        query = query.bind(end);
    }

    Ok(query.fetch_all(&mut *conn).await?)
}

pub async fn count_with_status(
    conn: &mut SqliteConnection,
    employee_id: i64,
    status: AttendanceStatus,
) -> Result<i64, AppError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE employee_id = ? AND status = ?")
            .bind(employee_id)
            .bind(status)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count)
}
