use axum::Json;
use contracts::domain::a001_offer::Offer;

use crate::domain::a001_offer;

/// GET /api/offers
///
/// Also mounted at /api/discounts for older clients.
pub async fn list_all() -> Result<Json<Vec<Offer>>, axum::http::StatusCode> {
    to_json(a001_offer::service::list_all())
}

fn to_json(result: anyhow::Result<Vec<Offer>>) -> Result<Json<Vec<Offer>>, axum::http::StatusCode> {
    match result {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list offers: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
