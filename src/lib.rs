//! Propstore: Named Configuration Value Store
//!
//! Loads a named set of key/value properties from a JSON file, lets callers query and
//! modify them through an immutable (copy-on-write) or mutable (in-place) configuration,
//! and saves the result back to indented JSON.
//!
//! ```no_run
//! use propstore::Configuration;
//!
//! let store = propstore::recommended();
//! let config = store.create("app").add("Key1", "Value1");
//! store.save(&config, "/tmp/app.json")?;
//!
//! let loaded = store.load("/tmp/app.json")?;
//! assert_eq!(loaded.value("Key1")?, "Value1");
//! assert_eq!(loaded.value(propstore::ROOT_PATH_KEY)?, "/tmp");
//! # Ok::<(), propstore::ConfigError>(())
//! ```

pub mod api;
pub mod configuration;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod property;
pub mod record;
pub mod version;

pub use api::{immutable, mutable, recommended, ConfigStore};
pub use configuration::{
    Configuration, ImmutableConfiguration, MutableConfiguration, ROOT_PATH_KEY,
};
pub use error::{ConfigError, ErrorKind, Result};
pub use persistence::{from_json_str, load, save, to_json_string};
pub use property::Property;
pub use record::{from_record, to_record, ConfigurationRecord, PropertyRecord};
pub use version::version;
