//! In-place semantics of the mutable configuration

use super::test_utils::valid_configuration;
use propstore::{Configuration, ErrorKind, MutableConfiguration};
use serde_json::json;

#[test]
fn test_add_mutates_receiver() {
    let config: MutableConfiguration = valid_configuration();
    config.add("NewKey", "NewValue");

    assert_eq!(config.value("NewKey").unwrap(), json!("NewValue"));
}

#[test]
fn test_second_reference_observes_add() {
    let config: MutableConfiguration = valid_configuration();
    let other_reference = config.clone();

    config.add("Shared", 1);

    assert!(other_reference.has_property("Shared"));
    assert_eq!(other_reference.size(), config.size());
}

#[test]
fn test_change_value_in_place() {
    let config: MutableConfiguration = valid_configuration();
    let returned = config.add("Key1", "NewValue");

    assert_eq!(config.value("Key1").unwrap(), json!("NewValue"));
    assert!(returned.ptr_eq(&config));
}

#[test]
fn test_remove_value_in_place() {
    let config: MutableConfiguration = valid_configuration();
    config.remove("Key1");

    assert_eq!(
        config.value("Key1").unwrap_err().kind(),
        ErrorKind::KeyNotFound
    );
    assert_eq!(config.size(), 2);
}

#[test]
fn test_set_name_in_place() {
    let config: MutableConfiguration = valid_configuration();
    config.set_name("NewName");
    assert_eq!(config.name(), "NewName");
}

#[test]
fn test_sticky_default_for_orphans() {
    let config: MutableConfiguration = valid_configuration();
    config.with_default_value("sticky");

    let orphan = config.property("Missing");
    assert!(orphan.is_orphan());
    assert_eq!(orphan.value(), &json!("sticky"));

    // Per-call default still wins over the sticky one
    assert_eq!(config.value_with_default("Missing", "call"), json!("call"));
    // And never overrides stored values
    assert_eq!(config.value_with_default("Key2", "call"), json!("Value2"));
}

#[test]
fn test_freeze_then_keep_mutating() {
    let config: MutableConfiguration = valid_configuration();
    let frozen = config.freeze();
    config.add("AfterFreeze", true);

    assert!(!frozen.has_property("AfterFreeze"));
    let thawed = frozen.thaw();
    assert!(!thawed.ptr_eq(&config));
    assert_eq!(thawed.size(), 3);
}
