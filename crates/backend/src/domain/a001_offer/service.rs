use super::repository;
use contracts::domain::a001_offer::Offer;

/// Список всех предложений в порядке каталога
pub fn list_all() -> anyhow::Result<Vec<Offer>> {
    from_catalog(repository::get_all())
}

fn from_catalog(catalog: Option<&[Offer]>) -> anyhow::Result<Vec<Offer>> {
    catalog
        .map(<[Offer]>::to_vec)
        .ok_or_else(|| anyhow::anyhow!("Offer catalog is not initialized"))
}
