pub mod aggregate;

pub use aggregate::{Offer, OfferId};
