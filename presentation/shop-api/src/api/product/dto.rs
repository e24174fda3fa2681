use poem_openapi::Object;

use business::domain::product::model::Product;

/// Body of create and update requests. Both fields are required; they are
/// optional here so that a missing field is answered with the API's own
/// validation error.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product price (cannot be zero)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: u64,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    pub message: String,
    /// The stored product, with its assigned id
    pub product: ProductResponse,
}
