use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, DomainResult, ProductId};

/// A single sellable item.
///
/// Fields are public: callers only ever receive owned copies, so editing one
/// has no effect on the catalog it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description_short: String,
    pub description_long: String,
    pub price_per_liter: Decimal,
    #[serde(rename = "pricePer10Liter")]
    pub price_per_10_liter: Decimal,
    pub origin: String,
    pub is_organic: bool,
    /// Image filename or path; not resolved.
    pub image_url: String,
}

impl Product {
    /// Check the record-level rules (positive id, non-blank name, non-negative prices).
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.get() <= 0 {
            return Err(DomainError::validation(format!(
                "product id must be positive, got {}",
                self.id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.price_per_liter < Decimal::ZERO || self.price_per_10_liter < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "product {} has a negative price",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: i64, category: i64, name: &str, description_long: &str) -> Product {
        Product {
            id: ProductId::new(id),
            category_id: CategoryId::new(category),
            name: name.to_string(),
            description_short: String::new(),
            description_long: description_long.to_string(),
            price_per_liter: Decimal::new(199, 2),
            price_per_10_liter: Decimal::new(189, 2),
            origin: "Nowhere".to_string(),
            is_organic: false,
            image_url: "placeholder.png".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn validate_accepts_well_formed_product() {
        assert!(product(1, 1, "Apple Juice", "Crisp.").validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_id() {
        let err = product(0, 1, "Apple Juice", "").validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for zero id"),
        }
        assert!(product(-4, 1, "Apple Juice", "").validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = product(1, 1, "   ", "").validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut p = product(1, 1, "Apple Juice", "");
        p.price_per_10_liter = Decimal::new(-1, 2);
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(product(7, 1, "Pineapple Juice", "")).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["pricePerLiter"], "1.99");
        assert_eq!(json["pricePer10Liter"], "1.89");
        assert_eq!(json["isOrganic"], false);
        assert_eq!(json["imageUrl"], "placeholder.png");
    }
}
