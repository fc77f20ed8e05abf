use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Offers
        .route("/api/offers", get(handlers::a001_offer::list_all))
        .route("/api/discounts", get(handlers::a001_offer::list_all))
}
