use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// A product in the cart together with how many times it was added.
///
/// Name and price are copied from the product when the line is created and
/// are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn for_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
        }
    }
}
