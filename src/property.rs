//! Properties
//!
//! A property is a `(name, value)` pair held by value. Lookups that miss hand back an
//! *orphan* property: a placeholder carrying the requested name and either `Null` or the
//! configuration's default value, which `with_default` may replace.

use serde_json::Value;

/// Where a property's value came from
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    /// Value that was stored in, or loaded into, a configuration
    Stored(Value),
    /// Placeholder synthesized on a lookup miss
    Orphan(Value),
}

/// A named configuration value
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    slot: Slot,
}

impl Property {
    pub(crate) fn stored(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            slot: Slot::Stored(value),
        }
    }

    pub(crate) fn orphan(name: impl Into<String>, fallback: Option<Value>) -> Self {
        Self {
            name: name.into(),
            slot: Slot::Orphan(fallback.unwrap_or(Value::Null)),
        }
    }

    /// Property key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value; `Null` when nothing was ever set
    pub fn value(&self) -> &Value {
        match &self.slot {
            Slot::Stored(value) | Slot::Orphan(value) => value,
        }
    }

    /// Consume the property, returning its value
    pub fn into_value(self) -> Value {
        match self.slot {
            Slot::Stored(value) | Slot::Orphan(value) => value,
        }
    }

    /// True when the property was synthesized because its key was absent
    pub fn is_orphan(&self) -> bool {
        matches!(self.slot, Slot::Orphan(_))
    }

    /// Substitute `default` as the value of an orphan property.
    ///
    /// Stored properties are returned untouched: a default never overrides a value that
    /// is actually present, including an explicit `Null`.
    pub fn with_default(self, default: impl Into<Value>) -> Property {
        match self.slot {
            Slot::Orphan(_) => Property {
                name: self.name,
                slot: Slot::Orphan(default.into()),
            },
            Slot::Stored(_) => self,
        }
    }
}
