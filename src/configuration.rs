//! Configurations
//!
//! A configuration is a name plus a flat map of properties. The [`Configuration`] trait is
//! the capability surface shared by both variants, so callers can be written generically:
//!
//! - [`ImmutableConfiguration`]: every write returns a new snapshot built from a copy of
//!   the property map; earlier snapshots are never touched. Safe to share across threads.
//! - [`MutableConfiguration`]: a shared single-threaded handle; writes modify the one
//!   backing map in place and return another handle to the same instance.

use crate::error::Result;
use crate::property::Property;
use serde_json::Value;
use std::collections::HashMap;

mod immutable;
mod mutable;

pub use immutable::ImmutableConfiguration;
pub use mutable::MutableConfiguration;

/// Key of the property injected on load with the directory of the loaded file
pub const ROOT_PATH_KEY: &str = "RootPath";

/// Backing storage shared by both variants. Keys always equal the property's own name.
pub(crate) type PropertyMap = HashMap<String, Property>;

/// Capability interface implemented by both configuration variants
pub trait Configuration: Clone {
    /// Create an empty configuration
    fn new(name: impl Into<String>) -> Self;

    fn name(&self) -> String;

    /// Rename; the immutable variant returns a renamed copy
    fn set_name(&self, name: impl Into<String>) -> Self;

    /// Raw value of a stored property, or `KeyNotFound`
    fn value(&self, key: &str) -> Result<Value>;

    /// Stored value if present, otherwise `default`. Never fails.
    fn value_with_default(&self, key: &str, default: impl Into<Value>) -> Value {
        self.property(key).with_default(default).into_value()
    }

    /// Insert or overwrite the property at `key`
    fn add(&self, key: impl Into<String>, value: impl Into<Value>) -> Self;

    /// Delete the property at `key`; absent keys are a no-op
    fn remove(&self, key: &str) -> Self;

    /// Number of stored properties
    fn size(&self) -> usize;

    /// Stored property, or an orphan placeholder carrying the default value
    fn property(&self, key: &str) -> Property;

    fn has_property(&self, key: &str) -> bool;

    /// Set the value given to orphan properties synthesized by [`Configuration::property`]
    fn with_default_value(&self, value: impl Into<Value>) -> Self;

    /// Stored properties sorted by name
    fn properties(&self) -> Vec<Property>;

    /// Stored keys sorted
    fn keys(&self) -> Vec<String> {
        self.properties()
            .into_iter()
            .map(|property| property.name().to_string())
            .collect()
    }
}

pub(crate) fn lookup_value(properties: &PropertyMap, key: &str) -> Result<Value> {
    properties
        .get(key)
        .map(|property| property.value().clone())
        .ok_or_else(|| crate::error::ConfigError::key_not_found(key))
}

pub(crate) fn lookup_property(
    properties: &PropertyMap,
    key: &str,
    default_value: Option<&Value>,
) -> Property {
    match properties.get(key) {
        Some(property) => property.clone(),
        None => Property::orphan(key, default_value.cloned()),
    }
}

pub(crate) fn sorted_properties(properties: &PropertyMap) -> Vec<Property> {
    let mut sorted: Vec<Property> = properties.values().cloned().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}
