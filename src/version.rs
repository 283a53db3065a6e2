//! Library version accessor.

/// Crate version, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the complete library version.
pub fn version() -> &'static str {
    VERSION
}
