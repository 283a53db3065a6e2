//! In-place configuration.

use super::{lookup_property, lookup_value, sorted_properties, Configuration, PropertyMap};
use crate::configuration::ImmutableConfiguration;
use crate::error::Result;
use crate::property::Property;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct MutableState {
    name: String,
    properties: PropertyMap,
    default_value: Option<Value>,
}

/// Mutable configuration handle
///
/// Clones share one backing state: a write through any handle is visible through all of
/// them. The handle is `!Send`; there is no internal locking, so accumulate on one thread
/// and [`freeze`](MutableConfiguration::freeze) the result to share it.
#[derive(Debug, Clone)]
pub struct MutableConfiguration {
    inner: Rc<RefCell<MutableState>>,
}

impl MutableConfiguration {
    pub(crate) fn from_parts(
        name: String,
        properties: PropertyMap,
        default_value: Option<Value>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MutableState {
                name,
                properties,
                default_value,
            })),
        }
    }

    /// Independent immutable snapshot of the current state
    pub fn freeze(&self) -> ImmutableConfiguration {
        let state = self.inner.borrow();
        ImmutableConfiguration::from_parts(
            state.name.clone(),
            state.properties.clone(),
            state.default_value.clone(),
        )
    }

    /// True when both handles point at the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn update(&self, edit: impl FnOnce(&mut MutableState)) -> Self {
        edit(&mut *self.inner.borrow_mut());
        self.clone()
    }
}

impl Configuration for MutableConfiguration {
    fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), PropertyMap::new(), None)
    }

    fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    fn set_name(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|state| state.name = name)
    }

    fn value(&self, key: &str) -> Result<Value> {
        lookup_value(&self.inner.borrow().properties, key)
    }

    fn add(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let property = Property::stored(key.clone(), value.into());
        self.update(|state| {
            state.properties.insert(key, property);
        })
    }

    fn remove(&self, key: &str) -> Self {
        self.update(|state| {
            state.properties.remove(key);
        })
    }

    fn size(&self) -> usize {
        self.inner.borrow().properties.len()
    }

    fn property(&self, key: &str) -> Property {
        let state = self.inner.borrow();
        lookup_property(&state.properties, key, state.default_value.as_ref())
    }

    fn has_property(&self, key: &str) -> bool {
        self.inner.borrow().properties.contains_key(key)
    }

    /// The default sticks to this instance for every later lookup.
    fn with_default_value(&self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.update(|state| state.default_value = Some(value))
    }

    fn properties(&self) -> Vec<Property> {
        sorted_properties(&self.inner.borrow().properties)
    }
}

impl PartialEq for MutableConfiguration {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let (a, b) = (self.inner.borrow(), other.inner.borrow());
        a.name == b.name && a.properties == b.properties
    }
}
