//! Load/Save
//!
//! Reads and writes configurations as UTF-8 JSON:
//!
//! ```json
//! {
//!   "name": "app",
//!   "properties": {
//!     "Key1": {
//!       "name": "Key1",
//!       "value": "Value1"
//!     }
//!   }
//! }
//! ```
//!
//! Saved files are pretty-printed with a two-space indent, properties sorted by key, and
//! end with a newline. Every successful load injects [`ROOT_PATH_KEY`] with the directory
//! of the loaded file.

use crate::configuration::{Configuration, ROOT_PATH_KEY};
use crate::error::{ConfigError, Result};
use crate::record::{from_record, to_record, ConfigurationRecord};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Decode a configuration from JSON text without touching the filesystem
pub fn from_json_str<C: Configuration>(json: &str) -> Result<C> {
    let record: ConfigurationRecord = serde_json::from_str(json)
        .map_err(|e| ConfigError::decode("decode configuration", e))?;
    Ok(from_record(record))
}

/// Encode a configuration as pretty-printed JSON text
pub fn to_json_string<C: Configuration>(configuration: &C) -> Result<String> {
    serde_json::to_string_pretty(&to_record(configuration)).map_err(|e| {
        ConfigError::encode(
            format!("encode configuration {:?}", configuration.name()),
            e,
        )
    })
}

/// Load a configuration of variant `C` from `path`.
///
/// Fails with `Io` when the file cannot be read and `Decode` when it is not a valid
/// configuration document. On success the returned configuration holds a `RootPath`
/// property set to the file's directory, overwriting any stored value.
pub fn load<C: Configuration, P: AsRef<Path>>(path: P) -> Result<C> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading configuration");

    let content = fs::read(path).map_err(|e| ConfigError::io("read", path, e))?;
    let record: ConfigurationRecord = serde_json::from_slice(&content)
        .map_err(|e| ConfigError::decode(format!("decode {}", path.display()), e))?;

    let configuration: C = from_record(record);
    let configuration = configuration.add(ROOT_PATH_KEY, root_path_of(path));

    debug!(
        path = %path.display(),
        name = %configuration.name(),
        properties = configuration.size(),
        "Loaded configuration"
    );
    Ok(configuration)
}

/// Save a configuration to `path`.
///
/// The document is written to a uniquely named temporary file in the target directory
/// and renamed over `path`, so a failed save never leaves a truncated file behind. On
/// unix the file is created owner-only (`0600`). An empty path or a missing parent
/// directory fails with `Io`.
pub fn save<C: Configuration, P: AsRef<Path>>(configuration: &C, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!(
        path = %path.display(),
        name = %configuration.name(),
        properties = configuration.size(),
        "Saving configuration"
    );

    let mut content = to_json_string(configuration)?;
    content.push('\n');

    let dir = parent_dir_of(path)?;
    let mut temp_file =
        NamedTempFile::new_in(dir).map_err(|e| ConfigError::io("create", dir, e))?;
    temp_file
        .write_all(content.as_bytes())
        .and_then(|()| temp_file.as_file().sync_all())
        .map_err(|e| ConfigError::io("write", temp_file.path(), e))?;

    // Dropping an unpersisted temp file removes it.
    temp_file
        .persist(path)
        .map_err(|e| ConfigError::io("rename", path, e.error))?;

    debug!(path = %path.display(), "Saved configuration");
    Ok(())
}

/// Directory component of `path` as a string; a bare file name resolves to `"."`.
pub fn root_path_of(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            dunce::simplified(parent).to_string_lossy().into_owned()
        }
        Some(_) => ".".to_string(),
        // Root or prefix only
        None => path.to_string_lossy().into_owned(),
    }
}

/// Directory a save into `path` writes its temporary file to
fn parent_dir_of(path: &Path) -> Result<&Path> {
    if path.file_name().is_none() {
        return Err(ConfigError::io(
            "write",
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    }
    Ok(match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    })
}
