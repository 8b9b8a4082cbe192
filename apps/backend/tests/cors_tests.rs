use actix_web::{http::header, test, web, App, HttpResponse};
use backend::cors_middleware;
use serial_test::serial;

async fn ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[actix_web::test]
#[serial]
async fn configured_origin_is_allowed() {
    backend_test_support::test_logging::init();
    std::env::set_var("CORS_ALLOWED_ORIGINS", "https://admin.partydeck.app");

    let app = test::init_service(
        App::new()
            .wrap(cors_middleware())
            .route("/api/health", web::get().to(ok)),
    )
    .await;

    let req = test::TestRequest::with_uri("/api/health")
        .method(actix_web::http::Method::OPTIONS)
        .insert_header((header::ORIGIN, "https://admin.partydeck.app"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let allowed = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("allow-origin header expected")
        .to_str()
        .unwrap();
    assert_eq!(allowed, "https://admin.partydeck.app");

    std::env::remove_var("CORS_ALLOWED_ORIGINS");
}

#[actix_web::test]
#[serial]
async fn unconfigured_env_falls_back_to_localhost() {
    backend_test_support::test_logging::init();
    std::env::remove_var("CORS_ALLOWED_ORIGINS");

    let app = test::init_service(
        App::new()
            .wrap(cors_middleware())
            .route("/api/health", web::get().to(ok)),
    )
    .await;

    let req = test::TestRequest::with_uri("/api/health")
        .method(actix_web::http::Method::OPTIONS)
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let allowed = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("allow-origin header expected")
        .to_str()
        .unwrap();
    assert_eq!(allowed, "http://localhost:3000");
}
