use async_trait::async_trait;
use contracts::domain::a001_offer::Offer;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, join_url};

/// Path of the offer catalog on the backend
pub const OFFERS_PATH: &str = "/api/offers";

/// Any failure while loading offers: network, HTTP status or payload.
///
/// Callers treat all of them the same way, the message is for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Failed to send request: {}", err),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            message: format!("Failed to fetch offers: HTTP {}", code),
        }
    }

    pub fn payload(err: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Failed to parse response: {}", err),
        }
    }
}

/// Remote read of the offer collection. Each call is one outbound request.
#[async_trait(?Send)]
pub trait OfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, FetchFailure>;
}

/// `GET /api/offers` against the backend
#[derive(Debug, Clone)]
pub struct HttpOfferSource {
    url: String,
}

impl HttpOfferSource {
    pub fn new(base: &str) -> Self {
        Self {
            url: join_url(base, OFFERS_PATH),
        }
    }

    /// Source pointed at the backend of the current page
    pub fn from_window() -> Self {
        Self::new(&api_base())
    }
}

#[async_trait(?Send)]
impl OfferSource for HttpOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, FetchFailure> {
        log::debug!("Loading offers: {}", self.url);

        let response = Request::get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FetchFailure::network)?;

        if !response.ok() {
            return Err(FetchFailure::status(response.status()));
        }

        let text = response.text().await.map_err(FetchFailure::network)?;
        parse_offers(&text)
    }
}

/// Decode the response body, keeping the order sent by the server
pub fn parse_offers(body: &str) -> Result<Vec<Offer>, FetchFailure> {
    serde_json::from_str::<Vec<Offer>>(body).map_err(FetchFailure::payload)
}
