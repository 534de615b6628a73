use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1,
        "date": "2024-01-10",
        "status": "present",
        "created_at": "2024-01-10T09:00:00Z"
    })
)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-10", value_type = String, format = Date)]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(example = "2024-01-10T09:00:00Z", value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewAttendance {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-10", value_type = String, format = Date)]
    pub date: NaiveDate,

    #[schema(example = "present")]
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_uses_lowercase_literals() {
        assert_eq!(AttendanceStatus::Present.to_string(), "present");
        assert_eq!(AttendanceStatus::Absent.as_ref(), "absent");
        assert_eq!(
            AttendanceStatus::from_str("absent").unwrap(),
            AttendanceStatus::Absent
        );
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Present).unwrap(),
            serde_json::json!("present")
        );
    }

    #[test]
    fn unknown_status_is_rejected_not_coerced() {
        let payload = r#"{"employee_id": 1, "date": "2024-01-10", "status": "late"}"#;
        assert!(serde_json::from_str::<NewAttendance>(payload).is_err());

        let payload = r#"{"employee_id": 1, "date": "2024-01-10", "status": "Present"}"#;
        assert!(serde_json::from_str::<NewAttendance>(payload).is_err());
    }

    #[test]
    fn date_must_be_calendar_date() {
        let payload = r#"{"employee_id": 1, "date": "2024-02-30", "status": "present"}"#;
        assert!(serde_json::from_str::<NewAttendance>(payload).is_err());

        let payload = r#"{"employee_id": 1, "date": "2024-02-29", "status": "present"}"#;
        let parsed = serde_json::from_str::<NewAttendance>(payload).unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
