//! Card-set catalog routes (admin only).

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::jwt::JwtClaims;
use crate::services::sets as set_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetCreateRequest {
    pub name: String,
    pub category_id: i64,
    #[serde(default)]
    pub cards: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SetEditRequest {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct SetMutatedResponse {
    message: String,
    set_id: i64,
}

#[derive(Debug, Serialize)]
struct SetCardEntry {
    id: i64,
    number: i32,
    description: String,
    tags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SetInfoResponse {
    name: String,
    cards: Vec<SetCardEntry>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn create_set(
    http_req: HttpRequest,
    claims: JwtClaims,
    body: web::Json<SetCreateRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let SetCreateRequest {
        name,
        category_id,
        cards,
    } = body.into_inner();

    let set = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(set_service::create_set(txn, name, category_id, &cards).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SetMutatedResponse {
        message: "Set created successfully!".to_string(),
        set_id: set.id,
    }))
}

async fn set_info(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let set_id = path.into_inner();

    let info = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(set_service::set_info(txn, set_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SetInfoResponse {
        name: info.name,
        cards: info
            .cards
            .into_iter()
            .map(|c| SetCardEntry {
                id: c.id,
                number: c.number,
                description: c.description,
                tags: c.tags,
            })
            .collect(),
    }))
}

async fn edit_set(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    body: web::Json<SetEditRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let set_id = path.into_inner();
    let SetEditRequest { name, cards } = body.into_inner();

    let set = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(set_service::edit_set(txn, set_id, name, &cards).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SetMutatedResponse {
        message: "Set updated successfully!".to_string(),
        set_id: set.id,
    }))
}

async fn delete_set(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let set_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(set_service::delete_set(txn, set_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Set deleted successfully!".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_set)));
    cfg.service(
        web::resource("/{set_id}")
            .route(web::get().to(set_info))
            .route(web::patch().to(edit_set))
            .route(web::delete().to(delete_set)),
    );
}
