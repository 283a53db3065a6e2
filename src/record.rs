//! Marshalling records
//!
//! The flat shape that crosses the JSON boundary. Orphan flags and default values never
//! appear here, whichever configuration variant produced the record.

use crate::configuration::Configuration;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// One persisted property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

/// Persisted configuration: a name plus properties keyed by name.
///
/// `BTreeMap` keeps the saved JSON ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: BTreeMap<String, PropertyRecord>,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Project a configuration into its marshalling record
pub fn to_record<C: Configuration>(configuration: &C) -> ConfigurationRecord {
    let properties = configuration
        .properties()
        .into_iter()
        .map(|property| {
            let name = property.name().to_string();
            let record = PropertyRecord {
                name: name.clone(),
                value: property.into_value(),
            };
            (name, record)
        })
        .collect();

    ConfigurationRecord {
        name: configuration.name(),
        properties,
    }
}

/// Rebuild a configuration of variant `C` from a record.
///
/// The map key is authoritative: an entry whose inner `name` disagrees is stored under
/// its key.
pub fn from_record<C: Configuration>(record: ConfigurationRecord) -> C {
    let mut configuration = C::new(record.name);
    for (key, property) in record.properties {
        if !property.name.is_empty() && property.name != key {
            warn!(
                key = %key,
                property_name = %property.name,
                "Property name does not match its key; using the key"
            );
        }
        configuration = configuration.add(key, property.value);
    }
    configuration
}
