use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

use super::model::CartLine;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// All cart lines, in the order they were first added.
    async fn get_all(&self) -> Result<Vec<CartLine>, RepositoryError>;
    /// Bumps the quantity of the line for `product`, or appends a new line
    /// with quantity 1. Returns the line as stored afterwards.
    async fn add_product(&self, product: &Product) -> Result<CartLine, RepositoryError>;
    async fn delete(&self, product_id: ProductId) -> Result<(), RepositoryError>;
}
