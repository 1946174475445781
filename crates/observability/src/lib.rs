//! Process-wide logging setup for storefront binaries.

/// Initialize tracing with the format chosen by `STOREFRONT_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, format, writer).
pub mod tracing;

pub use self::tracing::{LogFormat, LOG_FORMAT_ENV};
