use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, ProductDraft};

/// Storage port for the product catalog.
///
/// Implementations own identifier assignment: `insert` hands out ids from a
/// counter that never goes backwards, so a deleted id is never reused.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    /// Overwrites name and price of the stored product with the same id.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
