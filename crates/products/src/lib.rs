//! Products domain module (static catalog).
//!
//! This crate holds the storefront's product catalog: an immutable, ordered set
//! of products built once at startup and queried by category, by id, or by a
//! substring-count search. Deterministic domain logic only (no HTTP, no storage).

pub mod catalog;
pub mod error;
pub mod product;
pub mod search;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, NotFoundError};
pub use product::Product;
pub use search::{QueryCase, SearchHit};
pub use storefront_core::{CategoryId, ProductId};
