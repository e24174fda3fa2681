use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
/// Cart lines reuse the identifier of the product they were created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The identifier handed out to the first product of an empty catalog.
    pub const FIRST: ProductId = ProductId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_catalog_ids_at_one() {
        assert_eq!(ProductId::FIRST.value(), 1);
    }

    #[test]
    fn should_return_following_id_when_next() {
        let id = ProductId::new(41);
        assert_eq!(id.next(), ProductId::new(42));
    }

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn should_parse_product_id_from_path_segment() {
        let id: ProductId = "12".parse().unwrap();
        assert_eq!(id, ProductId::new(12));
    }

    #[test]
    fn should_reject_non_numeric_product_id() {
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-3".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_order_ids_numerically() {
        assert!(ProductId::new(2) < ProductId::new(10));
    }
}
