//! Copy-on-write semantics of the immutable configuration

use super::test_utils::valid_configuration;
use propstore::{Configuration, ErrorKind, ImmutableConfiguration};
use serde_json::{json, Value};

#[test]
fn test_add_value_to_empty_configuration() {
    let config = propstore::immutable().create("").add("KeyAdded", "ValueAdded");
    assert_eq!(config.value("KeyAdded").unwrap(), json!("ValueAdded"));
}

#[test]
fn test_add_keeps_original_unchanged() {
    let original: ImmutableConfiguration = valid_configuration();
    let _ = original.add("NewKey", "NewValue");

    assert_eq!(
        original.value("NewKey").unwrap_err().kind(),
        ErrorKind::KeyNotFound
    );
}

#[test]
fn test_change_value_keeps_original_unchanged() {
    let original: ImmutableConfiguration = valid_configuration();
    let changed = original.add("Key1", "NewValue");

    assert_ne!(changed.value("Key1").unwrap(), original.value("Key1").unwrap());
}

#[test]
fn test_remove_value() {
    let original: ImmutableConfiguration = valid_configuration();
    let removed = original.remove("Key1");

    assert!(removed.value("Key1").is_err());
    assert!(original.value("Key1").is_ok());
}

#[test]
fn test_name_is_immutable() {
    let original: ImmutableConfiguration = valid_configuration();
    let renamed = original.set_name("NewName");
    assert_ne!(renamed.name(), original.name());
}

#[test]
fn test_value_with_default() {
    let config: ImmutableConfiguration = valid_configuration();

    assert_eq!(config.value_with_default("Key1", "Default"), json!("Value1"));
    assert_eq!(config.value_with_default("Missing", "Default"), json!("Default"));
    assert!(!config.has_property("Missing"));
}

#[test]
fn test_property_of_missing_key_is_orphan() {
    let config: ImmutableConfiguration = valid_configuration();
    let property = config.property("Missing");

    assert!(property.is_orphan());
    assert_eq!(property.name(), "Missing");
    assert_eq!(property.value(), &Value::Null);
    assert_eq!(config.size(), 3);
}

#[test]
fn test_default_value_does_not_leak_to_receiver() {
    let config: ImmutableConfiguration = valid_configuration();
    let defaulted = config.with_default_value(0);

    assert_eq!(defaulted.value_with_default("Missing", 5), json!(5));
    assert_eq!(defaulted.property("Missing").into_value(), json!(0));
    assert_eq!(config.property("Missing").into_value(), Value::Null);
}

#[test]
fn test_snapshot_survives_concurrent_readers() {
    let config: ImmutableConfiguration = valid_configuration();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let snapshot = config.clone();
            std::thread::spawn(move || {
                let local = snapshot.add(format!("Thread{}", i), i);
                (snapshot.size(), local.size())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (3, 4));
    }
    assert_eq!(config.size(), 3);
}
