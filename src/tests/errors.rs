use pretty_assertions::assert_eq;

use crate::Error;

#[test]
fn null_reference_shows_message() {
    let err = Error::null_reference("id must be set");
    assert_eq!(err.to_string(), "id must be set");
    assert!(err.is_null_reference());
    assert!(!err.is_unsupported());
}

#[test]
fn null_reference_default_text() {
    assert_eq!(Error::null_reference("").to_string(), "required value is absent");
}

#[test]
fn unsupported_names_operation() {
    let err = Error::Unsupported {
        operation: "hash_floats",
    };
    assert_eq!(err.to_string(), "unsupported operation: hash_floats");
    assert!(err.is_unsupported());
}
