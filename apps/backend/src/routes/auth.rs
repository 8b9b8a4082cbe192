//! Login, logout and role-check routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::extractors::jwt::JwtClaims;
use crate::services::auth as auth_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn admin_login(
    http_req: HttpRequest,
    body: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { login, password } = body.into_inner();
    let security = app_state.security.clone();

    let token = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(
            async move { auth_service::admin_login(txn, &security, &login, &password).await },
        )
    })
    .await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

async fn host_login(
    http_req: HttpRequest,
    body: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { login, password } = body.into_inner();
    let security = app_state.security.clone();

    let token = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { auth_service::host_login(txn, &security, &login, &password).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

/// Revokes whatever token was presented; no verification, so an expired
/// token can still be logged out.
async fn logout(
    token: AuthToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    auth_service::logout(&app_state.revoked, &token.token);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

async fn check_admin(claims: JwtClaims) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Admin is authorized".to_string(),
    }))
}

async fn check_host(claims: JwtClaims) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Host)?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Host is authorized".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/admin/login").route(web::post().to(admin_login)));
    cfg.service(web::resource("/host/login").route(web::post().to(host_login)));
    cfg.service(web::resource("/logout").route(web::post().to(logout)));
    cfg.service(web::resource("/admin/check").route(web::post().to(check_admin)));
    cfg.service(web::resource("/host/check").route(web::post().to(check_host)));
}
