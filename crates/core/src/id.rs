//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers wrap plain integers. Any integer is representable so lookups can
//! accept arbitrary caller input; positivity is enforced where records are
//! constructed, not here.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Opaque grouping key attached to each product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = i64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert_eq!("-7".parse::<CategoryId>().unwrap(), CategoryId::new(-7));
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "abc".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ProductId:")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&CategoryId::new(2)).unwrap();
        assert_eq!(json, "2");
        let id: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(id.get(), 3);
        assert_eq!(id.to_string(), "3");
    }
}
