//! Host account management routes (admin only).

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::jwt::JwtClaims;
use crate::services::hosts as host_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct HostRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct HostCreatedResponse {
    message: String,
    host_id: i64,
}

#[derive(Debug, Serialize)]
struct HostListEntry {
    id: i64,
    login: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn create_host(
    http_req: HttpRequest,
    claims: JwtClaims,
    body: web::Json<HostRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let HostRequest { login, password } = body.into_inner();

    let host = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(host_service::create_host(txn, login, password).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(HostCreatedResponse {
        message: "Host created successfully!".to_string(),
        host_id: host.id,
    }))
}

async fn list_hosts(
    http_req: HttpRequest,
    claims: JwtClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;

    let hosts = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(host_service::list_hosts(txn).await?) })
    })
    .await?;

    let body: Vec<HostListEntry> = hosts
        .into_iter()
        .map(|h| HostListEntry {
            id: h.id,
            login: h.login,
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

async fn edit_host(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    body: web::Json<HostRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let host_id = path.into_inner();
    let HostRequest { login, password } = body.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(host_service::edit_host(txn, host_id, login, password).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Host updated successfully!".to_string(),
    }))
}

async fn delete_host(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let host_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(host_service::delete_host(txn, host_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Host deleted successfully!".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_host))
            .route(web::get().to(list_hosts)),
    );
    cfg.service(
        web::resource("/{host_id}")
            .route(web::patch().to(edit_host))
            .route(web::delete().to(delete_host)),
    );
}
