//! `storefront-core` — domain foundation building blocks.
//!
//! Identifiers and the error model shared by the storefront crates. Pure domain
//! primitives, no infrastructure concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId};
