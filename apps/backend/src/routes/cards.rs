//! Card catalog routes (admin only).

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::jwt::JwtClaims;
use crate::services::cards as card_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CardAddRequest {
    pub category_id: i64,
    pub description: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CardEditRequest {
    pub description: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CardAddedResponse {
    message: String,
    card_id: i64,
}

#[derive(Debug, Serialize)]
struct CardInfoResponse {
    /// Formatted as "{category_id}.{number}"
    number: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn add_card(
    http_req: HttpRequest,
    claims: JwtClaims,
    body: web::Json<CardAddRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let CardAddRequest {
        category_id,
        description,
        hashtags,
    } = body.into_inner();

    let card = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(card_service::add_card(txn, category_id, description, &hashtags).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CardAddedResponse {
        message: "Card added successfully!".to_string(),
        card_id: card.id,
    }))
}

async fn card_info(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let card_id = path.into_inner();

    let card = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(card_service::card_info(txn, card_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CardInfoResponse {
        number: card.formatted_number(),
        description: card.description,
    }))
}

async fn edit_card(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    body: web::Json<CardEditRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let card_id = path.into_inner();
    let CardEditRequest {
        description,
        hashtags,
    } = body.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(card_service::edit_card(txn, card_id, description, &hashtags).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Card updated successfully!".to_string(),
    }))
}

async fn delete_card(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let card_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(card_service::delete_card(txn, card_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Card deleted successfully!".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(add_card)));
    cfg.service(
        web::resource("/{card_id}")
            .route(web::get().to(card_info))
            .route(web::patch().to(edit_card))
            .route(web::delete().to(delete_card)),
    );
}
