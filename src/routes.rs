use crate::{
    api::{attendance, employee, health},
    config::Config,
    error::AppError,
};
use actix_cors::Cors;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Extractor failures are input validation failures
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.route("/health", web::get().to(health::health))
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                )
                // /employees/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::delete().to(employee::delete_employee)),
                )
                // /employees/{id}/stats
                .service(
                    web::resource("/{id}/stats").route(web::get().to(employee::get_employee_stats)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(
                    web::resource("")
                        .route(web::post().to(attendance::mark_attendance))
                        .route(web::get().to(attendance::list_attendance)),
                )
                // /attendance/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(attendance::list_attendance_for_employee)),
                ),
        );
}

/// Browser access policy: configured origins, any method or header, no credentials.
pub fn cors(config: &Config) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    config
        .cors_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
