use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartLine, CartError> {
        let product_id = params.product_id.ok_or(CartError::MissingProductId)?;
        self.logger
            .info(&format!("Adding product to cart: {}", product_id));

        // Unknown products stop here; nothing is written to the cart
        let product = self
            .product_repository
            .get_by_id(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let line = self.repository.add_product(&product).await?;

        self.logger.info(&format!(
            "Cart line {} now has quantity {}",
            line.id, line.quantity
        ));
        Ok(line)
    }
}
