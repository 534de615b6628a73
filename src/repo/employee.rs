use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::model::employee::{Employee, NewEmployee, normalize_email};
use crate::utils::db_utils::{ConstraintViolation, constraint_violation};

const CODE_TAKEN: &str = "Employee with this employee_code already exists";
const EMAIL_TAKEN: &str = "Employee with this email already exists";

pub const DEFAULT_LIMIT: u32 = 100;

/// Insert a new employee.
///
/// Fails with `Conflict` when the code or the email is already in use; the
/// code is reported first when both collide. Emails are compared with the
/// domain lowercased.
pub async fn create(conn: &mut SqliteConnection, input: &NewEmployee) -> Result<Employee, AppError> {
    let email = normalize_email(&input.email);

    let code_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE employee_code = ?)")
            .bind(&input.employee_code)
            .fetch_one(&mut *conn)
            .await?;
    if code_taken {
        return Err(AppError::Conflict(CODE_TAKEN.into()));
    }

    let email_taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?)")
        .bind(&email)
        .fetch_one(&mut *conn)
        .await?;
    if email_taken {
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }

    insert(conn, input).await
}

/// Insert without the uniqueness pre-checks.
///
/// A concurrent writer can take the code or email between the checks in
/// [`create`] and this statement; the store's UNIQUE constraints then reject
/// the row and the violation is reported as the same `Conflict`.
pub async fn insert(conn: &mut SqliteConnection, input: &NewEmployee) -> Result<Employee, AppError> {
    let result = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employee_code, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, employee_code, full_name, email, department, created_at
        "#,
    )
    .bind(&input.employee_code)
    .bind(&input.full_name)
    .bind(normalize_email(&input.email))
    .bind(&input.department)
    .bind(Utc::now())
    .fetch_one(&mut *conn)
    .await;

    match result {
        Ok(employee) => {
            debug!(id = employee.id, code = %employee.employee_code, "Employee inserted");
            Ok(employee)
        }
        Err(e) => match constraint_violation(&e) {
            Some(ConstraintViolation::Unique(columns)) => {
                warn!(%columns, "Employee insert lost a uniqueness race");
                if columns.contains("email") {
                    Err(AppError::Conflict(EMAIL_TAKEN.into()))
                } else {
                    Err(AppError::Conflict(CODE_TAKEN.into()))
                }
            }
            _ => Err(e.into()),
        },
    }
}

/// Employees ordered by `employee_code`, `limit` rows starting at `offset`.
pub async fn list(conn: &mut SqliteConnection, limit: u32, offset: u32) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, employee_code, full_name, email, department, created_at
        FROM employees
        ORDER BY employee_code ASC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(i64::from(limit))
    .bind(i64::from(offset))
    .fetch_all(&mut *conn)
    .await?;

    Ok(employees)
}

pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Employee>, AppError> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, employee_code, full_name, email, department, created_at
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(employee)
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Employee, AppError> {
    find(conn, id).await?.ok_or_else(AppError::employee_not_found)
}

pub async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?)")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(exists)
}

/// Delete an employee; its attendance rows go with it through the
/// `ON DELETE CASCADE` foreign key.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::employee_not_found());
    }

    debug!(id, "Employee deleted");
    Ok(())
}

/// Remove every employee (and, by cascade, every attendance row).
pub async fn delete_all(conn: &mut SqliteConnection) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM employees").execute(&mut *conn).await?;
    Ok(result.rows_affected())
}
