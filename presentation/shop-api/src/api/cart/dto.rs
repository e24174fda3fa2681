use poem_openapi::Object;

use business::domain::cart::model::CartLine;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddToCartRequest {
    /// Identifier of the catalog product to add
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<u64>,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Identifier of the product this line was created from
    pub id: u64,
    /// Product name when first added
    pub name: String,
    /// Product price when first added
    pub price: f64,
    /// Number of times the product was added
    pub quantity: u32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id.value(),
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub cart: Vec<CartLineResponse>,
}
