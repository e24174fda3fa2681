use crate::domain::shared::value_objects::ProductId;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Name and price of a product that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl ProductDraft {
    /// Both fields are required: a missing or blank name and a missing or
    /// zero price are rejected the same way.
    pub fn new(name: Option<String>, price: Option<f64>) -> Result<Self, ProductError> {
        let name = name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ProductError::MissingFields)?;
        let price = price
            .filter(|price| *price != 0.0 && price.is_finite())
            .ok_or(ProductError::MissingFields)?;

        Ok(Self { name, price })
    }
}

impl Product {
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: f64) -> Self {
        Self { id, name, price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_create_draft_when_name_and_price_present() {
        let result = ProductDraft::new(Some("Pen".to_string()), Some(2.0));

        assert!(result.is_ok());
        let draft = result.unwrap();
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.price, 2.0);
    }

    #[test]
    fn should_reject_draft_when_name_missing() {
        let result = ProductDraft::new(None, Some(2.0));

        assert!(matches!(result.unwrap_err(), ProductError::MissingFields));
    }

    #[test]
    fn should_reject_draft_when_name_blank() {
        let result = ProductDraft::new(Some("   ".to_string()), Some(2.0));

        assert!(matches!(result.unwrap_err(), ProductError::MissingFields));
    }

    #[test]
    fn should_reject_draft_when_price_missing() {
        let result = ProductDraft::new(Some("Pen".to_string()), None);

        assert!(matches!(result.unwrap_err(), ProductError::MissingFields));
    }

    #[test]
    fn should_reject_draft_when_price_zero() {
        let result = ProductDraft::new(Some("Pen".to_string()), Some(0.0));

        assert!(matches!(result.unwrap_err(), ProductError::MissingFields));
    }

    #[test]
    fn should_keep_draft_fields_when_building_product() {
        let draft = ProductDraft::new(Some("Mug".to_string()), Some(5.5)).unwrap();

        let product = Product::from_draft(ProductId::new(2), draft);

        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.name, "Mug");
        assert_eq!(product.price, 5.5);
    }

    proptest! {
        #[test]
        fn should_accept_any_named_product_with_non_zero_price(
            name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
            price in prop_oneof![0.01f64..1_000_000.0, -1_000_000.0f64..-0.01],
        ) {
            let draft = ProductDraft::new(Some(name.clone()), Some(price)).unwrap();
            prop_assert_eq!(draft.name, name);
            prop_assert_eq!(draft.price, price);
        }
    }
}
