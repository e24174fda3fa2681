use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Removing product from cart: {}", params.product_id));

        self.repository
            .delete(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotInCart,
                other => CartError::Repository(other),
            })?;

        self.logger
            .info(&format!("Cart line removed: {}", params.product_id));
        Ok(())
    }
}
