use thiserror::Error;

use storefront_core::{DomainError, ProductId};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// No product with the requested id exists.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("product not found with id {0}")]
pub struct NotFoundError(pub ProductId);

/// Failure to build a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("failed to deserialize catalog: {0}")]
    Deserialize(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
