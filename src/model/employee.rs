use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_code": "E001",
        "full_name": "Ann Lee",
        "email": "ann@example.com",
        "department": "Engineering",
        "created_at": "2024-01-10T09:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "E001")]
    pub employee_code: String,

    #[schema(example = "Ann Lee")]
    pub full_name: String,

    #[schema(example = "ann@example.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2024-01-10T09:00:00Z", value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "employee_code must not be empty"))]
    #[schema(example = "E001")]
    pub employee_code: String,

    #[validate(length(min = 1, message = "full_name must not be empty"))]
    #[schema(example = "Ann Lee")]
    pub full_name: String,

    #[validate(
        email(message = "email is not a valid email address"),
        custom(function = "domain_has_dot")
    )]
    #[schema(example = "ann@example.com", format = "email")]
    pub email: String,

    #[validate(length(min = 1, message = "department must not be empty"))]
    #[schema(example = "Engineering")]
    pub department: String,
}

impl NewEmployee {
    /// Same input with the email's domain lowercased.
    pub fn normalized(mut self) -> Self {
        self.email = normalize_email(&self.email);
        self
    }
}

/// Lowercase the part after the last `@`; the local part is kept as typed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn domain_has_dot(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if domain.contains('.') => Ok(()),
        _ => {
            let mut err = ValidationError::new("email_domain");
            err.message = Some("email domain must contain a dot".into());
            Err(err)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeWithStats {
    #[serde(flatten)]
    pub employee: Employee,

    /// Attendance rows marked `present`
    #[schema(example = 12)]
    pub total_present_days: i64,
}
