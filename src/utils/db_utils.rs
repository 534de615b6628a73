use sqlx::error::ErrorKind;

/// ===============================
/// Storage constraint classification
/// ===============================
#[derive(Debug, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Columns named by the store, e.g. `employees.email`
    Unique(String),
    ForeignKey,
}

/// Classify a failed write as a constraint violation, if it is one.
///
/// Pre-checks catch the common case; this is what turns the losing side of a
/// concurrent insert into the same conflict signal instead of a 500.
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintViolation::Unique(unique_columns(
            db_err.message(),
        ))),
        ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}

/// `UNIQUE constraint failed: attendance.employee_id, attendance.date`
/// -> `attendance.employee_id, attendance.date`
fn unique_columns(message: &str) -> String {
    message
        .split_once("failed:")
        .map(|(_, cols)| cols.trim().to_string())
        .unwrap_or_else(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_columns_strip_sqlite_prefix() {
        assert_eq!(
            unique_columns("UNIQUE constraint failed: employees.email"),
            "employees.email"
        );
        assert_eq!(
            unique_columns("UNIQUE constraint failed: attendance.employee_id, attendance.date"),
            "attendance.employee_id, attendance.date"
        );
    }

    #[test]
    fn unique_columns_keep_unknown_messages() {
        assert_eq!(unique_columns("duplicate key"), "duplicate key");
    }

    #[test]
    fn non_database_errors_are_not_violations() {
        assert_eq!(constraint_violation(&sqlx::Error::RowNotFound), None);
    }
}
