use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::shared::value_objects::ProductId;

pub struct AddToCartParams {
    pub product_id: Option<ProductId>,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartLine, CartError>;
}
