//! Integration tests for the property store

mod immutable_configuration;
mod mutable_configuration;
mod test_utils;
