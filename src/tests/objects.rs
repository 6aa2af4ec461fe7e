use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ptr;

use pretty_assertions::assert_eq;

use crate::JavaHash;
use crate::objects::{
    NULL_STRING, compare, deep_equals, hash, is_null, non_null, null_safe_equals,
    null_safe_hash_code, null_safe_to_string, null_safe_to_string_or, require_non_null,
    require_non_null_else, require_non_null_else_get, require_non_null_with,
    require_non_null_with_message, same_reference,
};

// ---------------------------------------------------------------------------
// require_non_null
// ---------------------------------------------------------------------------

#[test]
fn require_non_null_absent_fails() {
    let err = require_non_null(None::<u8>).unwrap_err();
    assert!(err.is_null_reference());
    assert_eq!(
        err,
        crate::Error::NullReference {
            message: String::new()
        }
    );
}

#[test]
fn require_non_null_preserves_identity() {
    let value = String::from("kept");
    let out = require_non_null(Some(&value)).unwrap();
    assert!(ptr::eq(ptr::from_ref(out), ptr::from_ref(&value)));

    let boxed = Box::new(5);
    let addr = ptr::from_ref(&*boxed);
    let out = require_non_null(Some(boxed)).unwrap();
    assert!(ptr::eq(addr, ptr::from_ref(&*out)));
}

#[test]
fn require_non_null_carries_message() {
    let err = require_non_null_with_message(None::<u8>, "id").unwrap_err();
    assert_eq!(err.to_string(), "id");
}

#[test]
fn require_non_null_with_is_lazy() {
    let out = require_non_null_with(Some(1), || panic!("message built for a present value"));
    assert_eq!(out, Ok(1));

    let err = require_non_null_with(None::<u8>, || format!("slot {}", 3)).unwrap_err();
    assert_eq!(err.to_string(), "slot 3");
}

#[test]
fn require_non_null_else_falls_back() {
    assert_eq!(require_non_null_else(Some(1), 2), 1);
    assert_eq!(require_non_null_else(None, 2), 2);
}

#[test]
fn require_non_null_else_get_falls_back() {
    assert_eq!(require_non_null_else_get(Some(1), || Some(2)), Ok(1));
    assert_eq!(require_non_null_else_get(None, || Some(2)), Ok(2));
    assert!(require_non_null_else_get(None::<u8>, || None).unwrap_err().is_null_reference());
}

// ---------------------------------------------------------------------------
// Identity and nullity
// ---------------------------------------------------------------------------

#[test]
fn same_reference_is_identity() {
    let a = 1;
    let b = 1;
    assert!(same_reference::<i32>(None, None));
    assert!(same_reference(Some(&a), Some(&a)));
    assert!(!same_reference(Some(&a), Some(&b)));
    assert!(!same_reference(Some(&a), None));
    assert!(!same_reference(None, Some(&a)));
}

#[test]
fn null_checks() {
    assert!(is_null::<str>(None));
    assert!(!is_null(Some("x")));
    assert!(non_null(Some("x")));
    assert!(!non_null::<str>(None));
}

// ---------------------------------------------------------------------------
// compare
// ---------------------------------------------------------------------------

#[test]
fn compare_same_reference_skips_comparator() {
    let a = 10;
    let ord = compare(Some(&a), Some(&a), |_, _| panic!("comparator called"));
    assert_eq!(ord, Ordering::Equal);

    let ord = compare::<i32, _>(None, None, |_, _| panic!("comparator called"));
    assert_eq!(ord, Ordering::Equal);
}

#[test]
fn compare_delegates_unchanged() {
    let a = 1;
    let b = 1;
    // Equal values, distinct references: the comparator decides.
    assert_eq!(compare(Some(&a), Some(&b), |_, _| Ordering::Less), Ordering::Less);

    let c = 2;
    assert_eq!(compare(Some(&a), Some(&c), |x, y| x.cmp(&y)), Ordering::Less);
    assert_eq!(compare(None, Some(&c), |x, y| x.cmp(&y)), Ordering::Less);
}

// ---------------------------------------------------------------------------
// null_safe_equals
// ---------------------------------------------------------------------------

#[test]
fn null_safe_equals_rules() {
    let a = String::from("x");
    let b = String::from("x");
    let c = String::from("y");
    assert!(null_safe_equals::<String>(None, None));
    assert!(null_safe_equals(Some(&a), Some(&a)));
    assert!(null_safe_equals(Some(&a), Some(&b)));
    assert!(!null_safe_equals(Some(&a), Some(&c)));
    assert!(!null_safe_equals(Some(&a), None));
    assert!(!null_safe_equals(None, Some(&a)));
}

/// Identity wins over value equality, even for NaN.
#[test]
fn null_safe_equals_identity_beats_nan() {
    let nan = f64::NAN;
    let other = f64::NAN;
    assert!(null_safe_equals(Some(&nan), Some(&nan)));
    assert!(!null_safe_equals(Some(&nan), Some(&other)));
}

// ---------------------------------------------------------------------------
// deep_equals
// ---------------------------------------------------------------------------

#[test]
fn deep_equals_sequences() {
    let a = vec![1, 2, 3];
    let b = vec![1, 2, 3];
    let shorter = vec![1, 2];
    let different = vec![1, 2, 4];
    assert!(deep_equals(Some(&a), Some(&b)));
    assert!(!deep_equals(Some(&a), Some(&shorter)));
    assert!(!deep_equals(Some(&shorter), Some(&a)));
    assert!(!deep_equals(Some(&a), Some(&different)));
}

#[test]
fn deep_equals_absent() {
    let a = vec![1];
    assert!(deep_equals::<Vec<i32>>(None, None));
    assert!(!deep_equals(Some(&a), None));
    assert!(!deep_equals(None, Some(&a)));
}

#[test]
fn deep_equals_slices_and_deques() {
    let a: &[u8] = &[1, 2];
    let b = vec![1_u8, 2];
    assert!(deep_equals(Some(a), Some(b.as_slice())));

    let q1: VecDeque<_> = [1, 2, 3].into_iter().collect();
    let mut q2 = VecDeque::new();
    q2.push_back(2);
    q2.push_back(3);
    q2.push_front(1);
    assert!(deep_equals(Some(&q1), Some(&q2)));

    let x = [0.5, 1.5];
    let y = [0.5, 1.5];
    assert!(deep_equals(Some(&x), Some(&y)));
}

/// Non-sequence operands are only equal by identity.
#[test]
fn deep_equals_non_sequences_require_identity() {
    let a = String::from("same");
    let b = String::from("same");
    assert!(deep_equals(Some(&a), Some(&a)));
    assert!(!deep_equals(Some(&a), Some(&b)));

    let n = 5;
    let m = 5;
    assert!(!deep_equals(Some(&n), Some(&m)));
}

/// Elements compare with `==`, nested sequences included.
#[test]
fn deep_equals_nested_elements() {
    let a = vec![vec![1], vec![2, 3]];
    let b = vec![vec![1], vec![2, 3]];
    assert!(deep_equals(Some(&a), Some(&b)));
}

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

#[test]
fn null_safe_hash_code_rules() {
    assert_eq!(null_safe_hash_code::<i32>(None), 0);
    assert_eq!(null_safe_hash_code(Some(&42)), 42);
    assert_eq!(null_safe_hash_code(Some("hello")), "hello".java_hash_code());
}

#[test]
fn hash_absent_is_zero() {
    assert_eq!(hash(None), 0);
}

#[test]
fn hash_empty_is_one() {
    assert_eq!(hash(Some(&[])), 1);
    assert_eq!(crate::java_hash!(), 1);
}

#[test]
fn hash_filled_differs_from_contents() {
    let h12 = crate::java_hash!(1, 2);
    let h34 = crate::java_hash!(3, 4);
    assert_eq!(h12, 994);
    assert_ne!(h12, 1_i32.java_hash_code());
    assert_ne!(h12, 2_i32.java_hash_code());
    assert_ne!(h12, 0);
    assert_ne!(h12, 1);
    assert_ne!(h12, h34);
}

#[test]
fn hash_mixed_values() {
    let name = String::from("a");
    let missing: Option<&str> = None;
    let h = crate::java_hash!(name, 2_i64, true, missing);
    let expected = crate::arrays::accumulate([97, 2, 1231, 0]);
    assert_eq!(h, expected);
}

#[test]
fn hash_slice_matches_macro() {
    let x = 3;
    let y = "b";
    assert_eq!(hash(Some(&[&x, &y])), crate::java_hash!(x, y));
}

// ---------------------------------------------------------------------------
// String conversion
// ---------------------------------------------------------------------------

#[test]
fn to_string_absent_defaults_to_null() {
    assert_eq!(null_safe_to_string::<i32>(None), NULL_STRING);
    assert_eq!(null_safe_to_string::<i32>(None), "null");
}

#[test]
fn to_string_absent_uses_fallback() {
    assert_eq!(null_safe_to_string_or::<i32>(None, "n/a"), "n/a");
}

#[test]
fn to_string_present_uses_display() {
    assert_eq!(null_safe_to_string(Some(&42)), "42");
    assert_eq!(null_safe_to_string_or(Some("text"), "n/a"), "text");
}
