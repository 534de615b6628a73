mod common;

use actix_web::http::{Method, StatusCode};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web::Data};
use common::test_pool;
use hrms_lite::config::Config;
use hrms_lite::routes;

const FRONTEND: &str = "http://localhost:5173";

fn config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "BACKEND_CORS_ORIGINS" => Some(FRONTEND.to_string()),
        _ => None,
    })
    .unwrap()
}

#[actix_web::test]
async fn configured_origin_is_allowed_without_credentials() {
    let pool = test_pool().await;
    let config = config();
    let app = test::init_service(
        App::new()
            .wrap(routes::cors(&config))
            .app_data(Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = TestRequest::get()
        .uri("/health")
        .insert_header(("Origin", FRONTEND))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        FRONTEND
    );
    assert!(resp.headers().get("access-control-allow-credentials").is_none());
}

#[actix_web::test]
async fn preflight_for_delete_succeeds() {
    let pool = test_pool().await;
    let config = config();
    let app = test::init_service(
        App::new()
            .wrap(routes::cors(&config))
            .app_data(Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/employees/1")
        .insert_header(("Origin", FRONTEND))
        .insert_header(("Access-Control-Request-Method", "DELETE"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        FRONTEND
    );
}
