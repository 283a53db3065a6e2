//! Store facade
//!
//! Stateless entry point bundling creation, load and save for one configuration
//! variant, so a caller picks the variant once and the rest of its code stays generic.

use crate::configuration::{Configuration, ImmutableConfiguration, MutableConfiguration};
use crate::error::Result;
use crate::persistence;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

/// Facade over the configuration variant `C`
pub struct ConfigStore<C> {
    variant: PhantomData<fn() -> C>,
}

impl<C: Configuration> ConfigStore<C> {
    pub fn new() -> Self {
        Self {
            variant: PhantomData,
        }
    }

    /// New empty configuration
    pub fn create(&self, name: impl Into<String>) -> C {
        C::new(name)
    }

    /// See [`persistence::load`]
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<C> {
        persistence::load(path)
    }

    /// See [`persistence::save`]
    pub fn save<P: AsRef<Path>>(&self, configuration: &C, path: P) -> Result<()> {
        persistence::save(configuration, path)
    }
}

impl<C: Configuration> Default for ConfigStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ConfigStore<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ConfigStore<C> {}

impl<C> fmt::Debug for ConfigStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("variant", &std::any::type_name::<C>())
            .finish()
    }
}

/// Store producing copy-on-write configurations
pub fn immutable() -> ConfigStore<ImmutableConfiguration> {
    ConfigStore::new()
}

/// Store producing in-place configurations
pub fn mutable() -> ConfigStore<MutableConfiguration> {
    ConfigStore::new()
}

/// Recommended store; immutable configurations are safe to pass around freely
pub fn recommended() -> ConfigStore<ImmutableConfiguration> {
    immutable()
}
