use contracts::domain::a001_offer::Offer;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Read-only catalog, set once at startup
static CATALOG: OnceCell<Vec<Offer>> = OnceCell::new();

/// Catalog served when no offers.json is deployed
const DEFAULT_CATALOG: &str = r#"[
    {"id": 1, "name": "Welcome discount", "details": "10% off your first order"},
    {"id": 2, "name": "Free delivery", "details": "Free shipping on orders over $50"},
    {"id": 3, "name": "Weekend sale", "details": "15% off home & garden, Saturday and Sunday"}
]"#;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate offer id: {0}")]
    DuplicateId(String),
    #[error("Catalog is already initialized")]
    AlreadyInitialized,
}

/// Parse a JSON array of offers, rejecting ids that would render to the same key
pub fn parse_catalog(json: &str) -> Result<Vec<Offer>, CatalogError> {
    let offers: Vec<Offer> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for offer in &offers {
        let key = offer.key();
        if !seen.insert(key.clone()) {
            return Err(CatalogError::DuplicateId(key));
        }
    }
    Ok(offers)
}

pub fn default_catalog() -> Result<Vec<Offer>, CatalogError> {
    parse_catalog(DEFAULT_CATALOG)
}

/// Загрузка каталога из файла, при отсутствии файла — встроенный каталог
pub fn load_catalog(path: &Path) -> Result<Vec<Offer>, CatalogError> {
    if !path.exists() {
        tracing::warn!(
            "Offer catalog not found at {}, using embedded default",
            path.display()
        );
        return default_catalog();
    }

    tracing::info!("Loading offer catalog from: {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&contents)
}

pub fn initialize(offers: Vec<Offer>) -> Result<(), CatalogError> {
    CATALOG
        .set(offers)
        .map_err(|_| CatalogError::AlreadyInitialized)
}

pub fn get_all() -> Option<&'static [Offer]> {
    CATALOG.get().map(Vec::as_slice)
}
