//! Game session routes.
//!
//! Creation, editing and deletion are admin operations; start and finish
//! belong to the host running the evening. Drawing a card and polling the
//! status serve the public game screen and take no token.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Role;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::jwt::JwtClaims;
use crate::services::games as game_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<i64>,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    pub category_id: i64,
}

#[derive(Debug, Serialize)]
struct GameCreatedResponse {
    message: String,
    id: i64,
}

#[derive(Debug, Serialize)]
struct GameMutatedResponse {
    message: String,
    game_id: i64,
}

#[derive(Debug, Serialize)]
struct GameListEntry {
    id: i64,
    name: String,
    /// Present for hosts, who pick a game to run by its state
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct GameStatusResponse {
    game_id: i64,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct GameCategoryEntry {
    id: i64,
    name: String,
    color: String,
}

#[derive(Debug, Serialize)]
struct GameCategoriesResponse {
    game_id: i64,
    categories: Vec<GameCategoryEntry>,
}

async fn create_game(
    http_req: HttpRequest,
    claims: JwtClaims,
    body: web::Json<GameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let GameRequest {
        name,
        sets,
        categories,
        hashtags,
    } = body.into_inner();

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(game_service::create_game(txn, name, &sets, &categories, &hashtags).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameCreatedResponse {
        message: "Game created successfully!".to_string(),
        id: game.id,
    }))
}

/// Admins see id+name; hosts also see each game's status.
async fn list_games(
    http_req: HttpRequest,
    claims: JwtClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let include_status = claims.claims.role == Role::Host;

    let games = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_service::list_games(txn).await?) })
    })
    .await?;

    let body: Vec<GameListEntry> = games
        .into_iter()
        .map(|g| GameListEntry {
            id: g.id,
            name: g.name,
            status: include_status.then(|| g.status.as_wire()),
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

async fn game_info(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let game_id = path.into_inner();

    let info = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_service::game_info(txn, game_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(info))
}

async fn edit_game(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    body: web::Json<GameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let game_id = path.into_inner();
    let GameRequest {
        name,
        sets,
        categories,
        hashtags,
    } = body.into_inner();

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(game_service::edit_game(txn, game_id, name, &sets, &categories, &hashtags).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameMutatedResponse {
        message: "Game updated successfully!".to_string(),
        game_id: game.id,
    }))
}

async fn delete_game(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Admin)?;
    let game_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_service::delete_game(txn, game_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameMutatedResponse {
        message: "Game deleted successfully!".to_string(),
        game_id,
    }))
}

async fn start_game(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Host)?;
    let game_id = path.into_inner();

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_service::start_game(txn, game_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameMutatedResponse {
        message: "Game started successfully!".to_string(),
        game_id: game.id,
    }))
}

async fn finish_game(
    http_req: HttpRequest,
    claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    claims.require_role(Role::Host)?;
    let game_id = path.into_inner();

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_service::finish_game(txn, game_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameMutatedResponse {
        message: "Game finished successfully!".to_string(),
        game_id: game.id,
    }))
}

/// Draw one card of the requested category. The draw service owns its
/// transactions so it can retry optimistic-lock races.
async fn draw_card(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<DrawRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let category_id = body.into_inner().category_id;

    let card =
        game_service::draw_card(Some(&http_req), &app_state, game_id, category_id).await?;

    Ok(HttpResponse::Ok().json(card))
}

/// Status inspection; sweeps a stale started game back to waiting.
async fn game_status(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();

    let status = game_service::game_status(Some(&http_req), &app_state, game_id).await?;

    Ok(HttpResponse::Ok().json(GameStatusResponse {
        game_id,
        status: status.as_wire(),
    }))
}

/// The categories selected for a game; both roles use this for the picker.
async fn game_categories(
    http_req: HttpRequest,
    _claims: JwtClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();

    let categories = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(game_service::game_categories(txn, game_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameCategoriesResponse {
        game_id,
        categories: categories
            .into_iter()
            .map(|c| GameCategoryEntry {
                id: c.id,
                name: c.name,
                color: c.color,
            })
            .collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(list_games)),
    );
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(game_info))
            .route(web::patch().to(edit_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/{game_id}/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/{game_id}/finish").route(web::post().to(finish_game)));
    cfg.service(web::resource("/{game_id}/draw").route(web::post().to(draw_card)));
    cfg.service(web::resource("/{game_id}/status").route(web::get().to(game_status)));
    cfg.service(web::resource("/{game_id}/categories").route(web::get().to(game_categories)));
}
