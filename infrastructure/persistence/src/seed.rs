use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use business::domain::product::model::ProductDraft;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("seed.read_error: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("seed.parse_error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("seed.invalid_product: entry {index} needs a name and a non-zero price")]
    InvalidProduct { index: usize },
}

/// One entry of a catalog seed file.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    name: Option<String>,
    price: Option<f64>,
}

/// Parses a JSON array of `{ "name", "price" }` objects into product drafts.
///
/// Entries go through the same validation as a create request.
pub fn parse_catalog_seed(json: &str) -> Result<Vec<ProductDraft>, SeedError> {
    let entries: Vec<SeedProduct> = serde_json::from_str(json)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            ProductDraft::new(entry.name, entry.price)
                .map_err(|_| SeedError::InvalidProduct { index })
        })
        .collect()
}

/// Reads and parses a catalog seed file.
pub fn load_catalog_seed(path: &Path) -> Result<Vec<ProductDraft>, SeedError> {
    let json = std::fs::read_to_string(path)?;
    let drafts = parse_catalog_seed(&json)?;
    tracing::info!(
        path = %path.display(),
        products = drafts.len(),
        "Loaded catalog seed"
    );
    Ok(drafts)
}
