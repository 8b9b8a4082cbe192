use actix_web::web;

pub mod auth;
pub mod cards;
pub mod categories;
pub mod games;
pub mod health;
pub mod hosts;
pub mod sets;

/// Configure application routes.
///
/// Paths inside each module are relative; this is the single place that
/// decides where a resource lives.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/categories").configure(categories::configure_routes));
    cfg.service(web::scope("/api/sets").configure(sets::configure_routes));
    cfg.service(web::scope("/api/cards").configure(cards::configure_routes));
    cfg.service(web::scope("/api/hosts").configure(hosts::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Health check: /api/health
    cfg.configure(health::configure_routes);
}
