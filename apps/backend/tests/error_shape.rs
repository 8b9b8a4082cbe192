use actix_web::{test, web, App, HttpResponse};
use backend::errors::ErrorCode;
use backend::{AppError, RequestTrace};
use backend_test_support::problem_details::assert_problem_details_from_parts;

async fn test_error_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::ValidationError,
        "Example failure".to_string(),
    ))
}

#[actix_web::test]
async fn test_error_shape() {
    backend_test_support::test_logging::init();

    // Minimal app with the RequestTrace middleware establishing trace scope
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/error", web::get().to(test_error_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let headers = resp.headers().clone();

    // The middleware stamps x-request-id; the error renderer stamps
    // x-trace-id. Both must carry the same id.
    let request_id = headers
        .get("x-request-id")
        .expect("x-request-id header should be present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!request_id.is_empty());

    let content_type = headers.get("content-type").unwrap().to_str().unwrap();
    assert_eq!(content_type, "application/problem+json");

    let status = resp.status();
    let body = test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        "VALIDATION_ERROR",
        actix_web::http::StatusCode::BAD_REQUEST,
        Some("Example failure"),
    );

    // Trace parity across header and body
    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["trace_id"].as_str().unwrap(), request_id);
}

#[actix_web::test]
async fn test_error_shape_not_found_code() {
    backend_test_support::test_logging::init();

    async fn handler() -> Result<HttpResponse, AppError> {
        Err(AppError::not_found(
            ErrorCode::GameNotFound,
            "Game with id 42 not found".to_string(),
        ))
    }

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/missing", web::get().to(handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/missing").to_request();
    let resp = test::call_service(&app, req).await;

    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        "GAME_NOT_FOUND",
        actix_web::http::StatusCode::NOT_FOUND,
        Some("42"),
    );
}
