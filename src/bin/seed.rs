//! Fill the database with sample employees and ten days of attendance.
//!
//! Usage: `hrms-seed [employee_count]` (default 40). Existing rows are removed.

use anyhow::Context;
use chrono::{Duration, Utc};
use hrms_lite::config::Config;
use hrms_lite::db::init_db;
use hrms_lite::logging;
use hrms_lite::model::attendance::{AttendanceStatus, NewAttendance};
use hrms_lite::model::employee::NewEmployee;
use hrms_lite::repo;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

const DEPARTMENTS: [&str; 5] = ["Engineering", "HR", "Finance", "Operations", "Sales"];
const DAYS_BACK: i64 = 10;
const PRESENT_PROBABILITY: f64 = 0.8;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config);

    let count: u32 = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("employee count is not a number: {raw}"))?,
        None => 40,
    };

    let pool = init_db(&config.database_url, config.max_connections).await?;
    let mut tx = pool.begin().await?;

    let removed = repo::employee::delete_all(&mut tx).await?;
    info!(removed, "Cleared existing employees");

    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    for i in 1..=count {
        let department = DEPARTMENTS.choose(&mut rng).copied().unwrap_or("Engineering");
        let employee = repo::employee::create(
            &mut tx,
            &NewEmployee {
                employee_code: format!("E{i:03}"),
                full_name: format!("Employee {i}"),
                email: format!("employee{i}@example.com"),
                department: department.to_string(),
            },
        )
        .await?;

        for offset in 0..DAYS_BACK {
            let status = if rng.gen_bool(PRESENT_PROBABILITY) {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            repo::attendance::create(
                &mut tx,
                &NewAttendance {
                    employee_id: employee.id,
                    date: today - Duration::days(offset),
                    status,
                },
            )
            .await?;
        }
    }

    tx.commit().await?;

    let summary = format!(
        "Seeded {count} employees with {} attendance records.",
        i64::from(count) * DAYS_BACK
    );
    info!("{summary}");
    println!("{summary}");
    Ok(())
}
