use crate::api::health::HealthStatus;
use crate::error::ErrorBody;
use crate::model::attendance::{Attendance, AttendanceStatus, NewAttendance};
use crate::model::employee::{Employee, EmployeeWithStats, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "0.1.0",
        description = r#"
## HRMS Lite

Employee records and their daily attendance.

### Rules
- `employee_code` and `email` are unique across employees
- at most one attendance record per employee per date
- deleting an employee deletes its attendance

### Errors
Every failure carries a JSON body `{"detail": "..."}`:
`404` unknown employee, `409` uniqueness conflict, `422` malformed input.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::get_employee_stats,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::list_attendance_for_employee
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            EmployeeWithStats,
            Attendance,
            NewAttendance,
            AttendanceStatus,
            ErrorBody,
            HealthStatus
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
