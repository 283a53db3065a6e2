//! Shared fixtures for integration tests

use propstore::Configuration;
use std::path::PathBuf;
use tempfile::TempDir;

pub const VALID_CONFIGURATION_JSON: &str = r#"{
  "name": "validConfiguration",
  "properties": {
    "Key1": {
      "name": "Key1",
      "value": "Value1"
    },
    "Key2": {
      "name": "Key2",
      "value": "Value2"
    },
    "Key3": {
      "name": "Key3",
      "value": "Value3"
    }
  }
}
"#;

/// The configuration described by [`VALID_CONFIGURATION_JSON`], in any variant
pub fn valid_configuration<C: Configuration>() -> C {
    C::new("validConfiguration")
        .add("Key1", "Value1")
        .add("Key2", "Value2")
        .add("Key3", "Value3")
}

/// Write `content` to `file_name` inside `dir` and return the full path
pub fn write_fixture(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}
