use business::domain::cart::model::CartLine;
use business::domain::shared::value_objects::ProductId;

/// Row of the in-memory cart table, keyed by product id.
#[derive(Debug, Clone)]
pub struct CartLineEntity {
    pub product_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLineEntity {
    pub fn from_domain(line: &CartLine) -> Self {
        Self {
            product_id: line.id.value(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }

    pub fn to_domain(&self) -> CartLine {
        CartLine::from_repository(
            ProductId::new(self.product_id),
            self.name.clone(),
            self.price,
            self.quantity,
        )
    }
}
