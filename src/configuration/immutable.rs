//! Copy-on-write configuration.

use super::{lookup_property, lookup_value, sorted_properties, Configuration, PropertyMap};
use crate::configuration::MutableConfiguration;
use crate::error::Result;
use crate::property::Property;
use serde_json::Value;
use std::sync::Arc;

/// Immutable configuration snapshot
///
/// Writes copy the property map, apply the change to the copy and return a new snapshot
/// around it. The receiver, and every clone of it, keeps observing the old map. The map
/// sits behind an `Arc`, so cloning a snapshot is cheap and readers on other threads
/// only ever see a complete map.
#[derive(Debug, Clone)]
#[must_use = "writes on an immutable configuration return a new snapshot"]
pub struct ImmutableConfiguration {
    name: String,
    properties: Arc<PropertyMap>,
    default_value: Option<Value>,
}

impl ImmutableConfiguration {
    /// Copy the map, apply `edit` to the copy, and wrap it in a new snapshot
    fn with_edited_properties(&self, edit: impl FnOnce(&mut PropertyMap)) -> Self {
        let mut properties = PropertyMap::clone(&self.properties);
        edit(&mut properties);
        Self {
            name: self.name.clone(),
            properties: Arc::new(properties),
            default_value: self.default_value.clone(),
        }
    }

    /// Independent mutable copy of this snapshot, including its default value
    pub fn thaw(&self) -> MutableConfiguration {
        MutableConfiguration::from_parts(
            self.name.clone(),
            PropertyMap::clone(&self.properties),
            self.default_value.clone(),
        )
    }

    pub(crate) fn from_parts(
        name: String,
        properties: PropertyMap,
        default_value: Option<Value>,
    ) -> Self {
        Self {
            name,
            properties: Arc::new(properties),
            default_value,
        }
    }
}

impl Configuration for ImmutableConfiguration {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Arc::new(PropertyMap::new()),
            default_value: None,
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Arc::clone(&self.properties),
            default_value: self.default_value.clone(),
        }
    }

    fn value(&self, key: &str) -> Result<Value> {
        lookup_value(&self.properties, key)
    }

    fn add(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let property = Property::stored(key.clone(), value.into());
        self.with_edited_properties(|properties| {
            properties.insert(key, property);
        })
    }

    // An absent key still yields a fresh snapshot.
    fn remove(&self, key: &str) -> Self {
        self.with_edited_properties(|properties| {
            properties.remove(key);
        })
    }

    fn size(&self) -> usize {
        self.properties.len()
    }

    fn property(&self, key: &str) -> Property {
        lookup_property(&self.properties, key, self.default_value.as_ref())
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// The default is carried by the returned snapshot only.
    fn with_default_value(&self, value: impl Into<Value>) -> Self {
        Self {
            name: self.name.clone(),
            properties: Arc::clone(&self.properties),
            default_value: Some(value.into()),
        }
    }

    fn properties(&self) -> Vec<Property> {
        sorted_properties(&self.properties)
    }
}

/// Equality covers the name and stored properties; the default value is not part of a
/// configuration's identity.
impl PartialEq for ImmutableConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.properties == other.properties
    }
}
