use crate::domain::a001_offer::api::FetchFailure;
use contracts::domain::a001_offer::Offer;

/// How the single fetch attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Settled(Settlement),
}

/// View state of the offer list, owned by one mounted component.
///
/// Goes from `Loading` to `Settled` exactly once. A failed fetch leaves an
/// empty list and renders the same as an empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferListState {
    offers: Vec<Offer>,
    phase: LoadPhase,
}

impl Default for OfferListState {
    fn default() -> Self {
        Self {
            offers: Vec::new(),
            phase: LoadPhase::Loading,
        }
    }
}

impl OfferListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Apply the fetch result. Returns false if the state was already settled.
    pub fn settle(&mut self, result: Result<Vec<Offer>, FetchFailure>) -> bool {
        if !self.is_loading() {
            return false;
        }
        match result {
            Ok(offers) => {
                self.offers = offers;
                self.phase = LoadPhase::Settled(Settlement::Loaded);
            }
            Err(_) => {
                self.offers = Vec::new();
                self.phase = LoadPhase::Settled(Settlement::Failed);
            }
        }
        true
    }

    pub fn render(&self) -> OfferListView {
        if self.is_loading() {
            return OfferListView::Loading;
        }
        OfferListView::Offers(self.offers.iter().map(OfferEntry::from).collect())
    }
}

/// What the component shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferListView {
    Loading,
    Offers(Vec<OfferEntry>),
}

impl OfferListView {
    /// Rendered entries, empty while loading
    pub fn entries(self) -> Vec<OfferEntry> {
        match self {
            OfferListView::Loading => Vec::new(),
            OfferListView::Offers(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferEntry {
    pub key: String,
    pub name: String,
    pub details: String,
}

impl From<&Offer> for OfferEntry {
    fn from(offer: &Offer) -> Self {
        Self {
            key: offer.key(),
            name: offer.name.clone(),
            details: offer.details.clone(),
        }
    }
}
