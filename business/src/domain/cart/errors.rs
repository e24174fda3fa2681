#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_id_required")]
    MissingProductId,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.line_not_found")]
    NotInCart,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
