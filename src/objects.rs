//! Null-tolerant object helpers in the manner of `java.util.Objects`.
//!
//! A Java reference that may be `null` is modelled as `Option<&T>`.
//! Identity comparisons use pointer equality ([`same_reference`]), never
//! value equality.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::Display;
use std::ptr;

use crate::arrays;
use crate::error::{Error, Result};
use crate::java_hash::JavaHash;

/// Fallback text of [`null_safe_to_string`].
pub const NULL_STRING: &str = "null";

// ---------------------------------------------------------------------------
// Identity and nullity
// ---------------------------------------------------------------------------

/// Returns `true` if `a` and `b` are the same reference, or both absent.
///
/// Zero-sized values may share an address, so distinct ZST values can
/// compare as the same reference.
#[must_use]
pub fn same_reference<T: ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => ptr::eq(a, b),
        _ => false,
    }
}

/// Returns `true` if `value` is absent.
#[must_use]
pub const fn is_null<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_none()
}

/// Returns `true` if `value` is present.
#[must_use]
pub const fn non_null<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_some()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Returns `value` unchanged if present.
///
/// # Errors
///
/// Returns [`Error::NullReference`] with an empty message if `value` is
/// absent.
pub fn require_non_null<T>(value: Option<T>) -> Result<T> {
    require_non_null_with_message(value, "")
}

/// Returns `value` unchanged if present.
///
/// # Errors
///
/// Returns [`Error::NullReference`] carrying `message` if `value` is absent.
pub fn require_non_null_with_message<T>(value: Option<T>, message: impl Into<String>) -> Result<T> {
    require_non_null_with(value, || message.into())
}

/// Returns `value` unchanged if present. The message is only built on
/// failure.
///
/// # Errors
///
/// Returns [`Error::NullReference`] carrying `message()` if `value` is
/// absent.
pub fn require_non_null_with<T, F>(value: Option<T>, message: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| {
        let message = message();
        tracing::debug!(%message, "required value is absent");
        Error::NullReference { message }
    })
}

/// Returns `value` if present, otherwise `default`.
#[must_use]
pub fn require_non_null_else<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Returns `value` if present, otherwise the value produced by `supplier`.
///
/// # Errors
///
/// Returns [`Error::NullReference`] if `value` is absent and `supplier`
/// also yields nothing.
pub fn require_non_null_else_get<T, F>(value: Option<T>, supplier: F) -> Result<T>
where
    F: FnOnce() -> Option<T>,
{
    value.map_or_else(
        || require_non_null_with_message(supplier(), "supplier produced no value"),
        Ok,
    )
}

// ---------------------------------------------------------------------------
// Comparison and equality
// ---------------------------------------------------------------------------

/// Returns [`Ordering::Equal`] if `a` and `b` are the same reference,
/// otherwise `comparator(a, b)` unchanged.
///
/// Two absent references are the same reference, so `comparator` is never
/// called for them.
pub fn compare<'a, T, F>(a: Option<&'a T>, b: Option<&'a T>, comparator: F) -> Ordering
where
    T: ?Sized,
    F: FnOnce(Option<&'a T>, Option<&'a T>) -> Ordering,
{
    if same_reference(a, b) {
        Ordering::Equal
    } else {
        comparator(a, b)
    }
}

/// `a == b` by identity, or `a` present and equal to a present `b`.
///
/// Both absent is `true`; exactly one absent is `false`.
#[must_use]
pub fn null_safe_equals<T: PartialEq + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    same_reference(a, b) || matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// A value that may be compared element-wise by [`deep_equals`].
///
/// Sequence-like types return their elements in order from
/// [`as_sequence`](Self::as_sequence); every other type returns `None`.
pub trait DeepEquals {
    /// Element type yielded when `self` is sequence-like.
    type Element: PartialEq + ?Sized;

    /// Returns the ordered elements, or `None` if `self` is not
    /// sequence-like.
    fn as_sequence(&self) -> Option<impl Iterator<Item = &Self::Element>>;
}

/// Element-wise equality for sequence-like values.
///
/// - the same reference (including both absent): `true`
/// - exactly one absent: `false`
/// - both sequence-like: `true` iff equal lengths and pairwise-equal
///   elements in order
/// - otherwise `false`, even when the values are equal
///
/// Elements are compared with `==`; there is no recursion into
/// non-sequence structure.
#[must_use]
pub fn deep_equals<T: DeepEquals + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    if same_reference(a, b) {
        return true;
    }
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    match (a.as_sequence(), b.as_sequence()) {
        (Some(a), Some(b)) => Iterator::eq(a, b),
        _ => false,
    }
}

impl<T: PartialEq> DeepEquals for [T] {
    type Element = T;

    fn as_sequence(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<T: PartialEq, const N: usize> DeepEquals for [T; N] {
    type Element = T;

    fn as_sequence(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<T: PartialEq> DeepEquals for Vec<T> {
    type Element = T;

    fn as_sequence(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<T: PartialEq> DeepEquals for VecDeque<T> {
    type Element = T;

    fn as_sequence(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

macro_rules! impl_scalar_deep_equals {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepEquals for $ty {
                type Element = Self;

                fn as_sequence(&self) -> Option<impl Iterator<Item = &Self>> {
                    None::<std::iter::Empty<&Self>>
                }
            }
        )*
    };
}

impl_scalar_deep_equals!(str, String, bool, char, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Returns the hash code of a present value, 0 for an absent one.
#[must_use]
pub fn null_safe_hash_code<T: JavaHash + ?Sized>(value: Option<&T>) -> i32 {
    value.map_or(0, T::java_hash_code)
}

/// Hashes `values` as if they were an `Object[]`.
///
/// `hash(None)` is 0 and `hash(Some(&[]))` is 1. The [`java_hash!`](crate::java_hash!)
/// macro builds the slice from its arguments.
#[must_use]
pub fn hash(values: Option<&[&dyn JavaHash]>) -> i32 {
    arrays::hash_objects(values)
}

// ---------------------------------------------------------------------------
// String conversion
// ---------------------------------------------------------------------------

/// Returns the `Display` text of a present value, `"null"` otherwise.
#[must_use]
pub fn null_safe_to_string<T: Display + ?Sized>(value: Option<&T>) -> String {
    null_safe_to_string_or(value, NULL_STRING)
}

/// Returns the `Display` text of a present value, `fallback` otherwise.
#[must_use]
pub fn null_safe_to_string_or<T: Display + ?Sized>(value: Option<&T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_owned(), ToString::to_string)
}
