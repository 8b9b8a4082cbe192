use actix_web::{test, web, App};
use backend::routes;
use backend::{AppState, RequestTrace, SecurityConfig};

/// The health endpoint must answer 200 even when the database is down,
/// reporting the failure in the body instead.
#[actix_web::test]
async fn health_reports_db_failure_without_erroring() {
    backend_test_support::test_logging::init();

    let state = AppState::new(
        sea_orm::DatabaseConnection::default(), // Disconnected
        SecurityConfig::new(b"health-test-secret".to_vec()),
    );

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].as_str().is_some());
    assert_eq!(body["migrations"], "unknown");
    assert!(body["app_version"].as_str().is_some());
    assert!(body["time"].as_str().is_some());
}
