use std::time::SystemTime;

use actix_web::{test, web, App, HttpResponse};
use backend::{
    mint_access_token, AppError, AppState, JwtClaims, RequestTrace, Role, SecurityConfig,
};

fn test_state() -> AppState {
    AppState::new(
        sea_orm::DatabaseConnection::default(),
        SecurityConfig::new(b"auth-test-secret".to_vec()),
    )
}

async fn admin_only(claims: JwtClaims) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    Ok(HttpResponse::Ok().finish())
}

#[actix_web::test]
async fn bearer_token_authorizes_the_matching_role() {
    backend_test_support::test_logging::init();

    let state = test_state();
    let token = mint_access_token("admin", Role::Admin, SystemTime::now(), &state.security)
        .expect("mint should succeed");

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .route("/guarded", web::get().to(admin_only)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/guarded")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn wrong_role_is_forbidden() {
    backend_test_support::test_logging::init();

    let state = test_state();
    let token = mint_access_token("evening-host", Role::Host, SystemTime::now(), &state.security)
        .expect("mint should succeed");

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .route("/guarded", web::get().to(admin_only)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/guarded")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 403);
}

#[actix_web::test]
async fn missing_bearer_is_unauthorized() {
    backend_test_support::test_logging::init();

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(test_state()))
            .route("/guarded", web::get().to(admin_only)),
    )
    .await;

    let req = test::TestRequest::get().uri("/guarded").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED_MISSING_BEARER");
}

#[actix_web::test]
async fn revoked_token_is_rejected_until_restart() {
    backend_test_support::test_logging::init();

    let state = test_state();
    let token = mint_access_token("admin", Role::Admin, SystemTime::now(), &state.security)
        .expect("mint should succeed");

    // Logout revokes the exact presented token
    state.revoked.revoke(&token);

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .route("/guarded", web::get().to(admin_only)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/guarded")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED_REVOKED_TOKEN");
}
