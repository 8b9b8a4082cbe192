//! Category catalog routes (admin only).

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::jwt::JwtClaims;
use crate::services::categories as category_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
struct CategoryCreatedResponse {
    message: String,
    category_id: i64,
}

#[derive(Debug, Serialize)]
struct CategoryListEntry {
    id: i64,
    name: String,
    color: String,
}

#[derive(Debug, Serialize)]
struct CardEntry {
    id: i64,
    description: String,
    tags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SetEntry {
    id: i64,
    name: String,
}

#[derive(Debug, Serialize)]
struct CategoryDataResponse {
    name: String,
    color: String,
    cards: Vec<CardEntry>,
    sets: Vec<SetEntry>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

async fn create_category(
    http_req: HttpRequest,
    claims: JwtClaims,
    body: web::Json<CategoryRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let CategoryRequest { name, color } = body.into_inner();

    let category = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(category_service::create_category(txn, name, color).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoryCreatedResponse {
        message: "Category created successfully!".to_string(),
        category_id: category.id,
    }))
}

async fn list_categories(
    http_req: HttpRequest,
    claims: JwtClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;

    let categories = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(category_service::list_categories(txn).await?) })
    })
    .await?;

    let body: Vec<CategoryListEntry> = categories
        .into_iter()
        .map(|c| CategoryListEntry {
            id: c.id,
            name: c.name,
            color: c.color,
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

async fn category_data(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let category_id = path.into_inner();

    let data = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(category_service::category_data(txn, category_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoryDataResponse {
        name: data.name,
        color: data.color,
        cards: data
            .cards
            .into_iter()
            .map(|c| CardEntry {
                id: c.id,
                description: c.description,
                tags: c.tags,
            })
            .collect(),
        sets: data
            .sets
            .into_iter()
            .map(|s| SetEntry {
                id: s.id,
                name: s.name,
            })
            .collect(),
    }))
}

async fn edit_category(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    body: web::Json<CategoryRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let category_id = path.into_inner();
    let CategoryRequest { name, color } = body.into_inner();

    let category = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(category_service::edit_category(txn, category_id, name, color).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoryCreatedResponse {
        message: "Category updated successfully!".to_string(),
        category_id: category.id,
    }))
}

async fn delete_category(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let category_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(category_service::delete_category(txn, category_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Category and all associated sets and cards deleted successfully!".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_category))
            .route(web::get().to(list_categories)),
    );
    cfg.service(
        web::resource("/{category_id}")
            .route(web::get().to(category_data))
            .route(web::patch().to(edit_category))
            .route(web::delete().to(delete_category)),
    );
}
