use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of an offer as sent by the catalog.
///
/// The catalog may use numeric or textual ids, so both JSON forms are
/// accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfferId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferId::Number(n) => write!(f, "{}", n),
            OfferId::Text(s) => f.write_str(s),
        }
    }
}

impl AggregateId for OfferId {
    fn as_string(&self) -> String {
        self.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Offer id must not be empty".to_string());
        }
        Ok(i64::from_string(s)
            .map(OfferId::Number)
            .unwrap_or_else(|_| OfferId::Text(s.to_string())))
    }
}

impl From<i64> for OfferId {
    fn from(value: i64) -> Self {
        OfferId::Number(value)
    }
}

impl From<i32> for OfferId {
    fn from(value: i32) -> Self {
        OfferId::Number(value.into())
    }
}

impl From<&str> for OfferId {
    fn from(value: &str) -> Self {
        OfferId::Text(value.to_string())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Discount offer, read-only on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub details: String,
}

impl Offer {
    pub fn new(id: impl Into<OfferId>, name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            details: details.into(),
        }
    }

    /// Stable key used to identify the offer between renders
    pub fn key(&self) -> String {
        self.id.as_string()
    }
}
