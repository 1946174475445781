//! The storefront catalog: an ordered, immutable product table.

use std::collections::HashSet;

use storefront_core::{CategoryId, DomainError, ProductId};

use crate::error::{CatalogError, CatalogResult, NotFoundError};
use crate::product::Product;
use crate::search::{self, QueryCase, SearchHit};

const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// Immutable in-memory product catalog.
///
/// Built once and then shared by reference with whatever serves queries. All
/// queries are linear scans in catalog order and return owned copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every record and id uniqueness.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id
                ))
                .into());
            }
        }

        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Build a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::Deserialize(e.to_string()))?;
        Self::new(products)
    }

    /// The product table shipped with the storefront.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_PRODUCTS)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Distinct category ids, in order of first appearance.
    pub fn categories(&self) -> Vec<CategoryId> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category_id)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Every product tagged with `category_id`, in catalog order.
    ///
    /// Unknown categories yield an empty list.
    pub fn list_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect()
    }

    /// The product with `product_id`, or a [`NotFoundError`] carrying that id.
    pub fn get_by_id(&self, product_id: ProductId) -> Result<Product, NotFoundError> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or(NotFoundError(product_id))
    }

    /// Products matching `query`, most relevant first.
    ///
    /// Catalog text is lower-cased before matching; the query is used exactly as
    /// given (see [`QueryCase::AsGiven`]).
    pub fn search(&self, query: &str) -> Vec<Product> {
        self.search_scored(query, QueryCase::AsGiven)
            .into_iter()
            .map(|hit| hit.product)
            .collect()
    }

    /// Like [`Catalog::search`] but keeps each score and lets the caller choose
    /// how the query is cased.
    pub fn search_scored(&self, query: &str, case: QueryCase) -> Vec<SearchHit> {
        search::rank(&self.products, query, case)
    }
}
