use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

/// Row of the in-memory product table.
#[derive(Debug, Clone)]
pub struct ProductEntity {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            price: product.price,
        }
    }

    pub fn to_domain(&self) -> Product {
        Product::from_repository(ProductId::new(self.id), self.name.clone(), self.price)
    }
}
