#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_and_price_required")]
    MissingFields,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
