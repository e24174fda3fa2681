use std::env;
use std::path::PathBuf;

use anyhow::Context;
use business::domain::product::model::ProductDraft;
use persistence::seed::load_catalog_seed;

/// Where the initial catalog comes from.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_SEED_PATH: JSON file with the initial products (optional)
    pub fn from_env() -> Self {
        let seed_path = env::var("CATALOG_SEED_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self { seed_path }
    }

    /// Loads the seed products, or none when no seed file is configured.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or holds an invalid product
    pub fn load_seed(&self) -> anyhow::Result<Vec<ProductDraft>> {
        match &self.seed_path {
            Some(path) => load_catalog_seed(path)
                .with_context(|| format!("failed to load catalog seed {}", path.display())),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_empty_catalog_when_no_seed_configured() {
        let config = CatalogConfig::default();

        let drafts = config.load_seed().unwrap();

        assert!(drafts.is_empty());
    }

    #[test]
    fn should_fail_when_seed_file_missing() {
        let config = CatalogConfig {
            seed_path: Some(PathBuf::from("/nonexistent/seed.json")),
        };

        let error = config.load_seed().unwrap_err();

        assert!(error.to_string().contains("/nonexistent/seed.json"));
    }
}
