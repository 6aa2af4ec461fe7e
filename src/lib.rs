//! Null-tolerant object helpers and bit-exact `java.util` hash codes.
//!
//! Rust code that exchanges hashed data with a JVM peer, or ports logic
//! that relies on `java.util.Objects` and `java.util.Arrays`, needs the exact
//! same 32-bit results. This crate reproduces them.
//!
//! # Modules
//!
//! - [`arrays`]: `Arrays.hashCode` per primitive element kind, plus the
//!   [`PrimitiveArray`] tagged union
//! - [`objects`]: `Objects`-style equality, hashing, string conversion and
//!   non-null validation over `Option<&T>`
//! - [`java_hash`]: the [`JavaHash`] trait, a value's own `hashCode()`
//!
//! # Key properties
//!
//! - **Absent is not empty**: `None` hashes to 0, an empty slice to 1
//! - **Wrapping arithmetic**: `31 · acc + element` in two's-complement `i32`
//! - **Pure**: no state, safe to call from any thread
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use javautil::{arrays, java_hash};
//!
//! assert_eq!(arrays::hash_ints(Some(&[1, 2])), 994);
//! assert_eq!(java_hash!(1, 2), 994);
//! assert_eq!(arrays::hash_ints(None), 0);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod arrays;
pub mod error;
pub mod java_hash;
pub mod objects;

#[cfg(test)]
mod tests;

pub use arrays::{ElementKind, PrimitiveArray};
pub use error::{Error, Result};
pub use java_hash::JavaHash;
pub use objects::DeepEquals;

/// Hashes its arguments like Java's `Objects.hash(Object...)`.
///
/// Every argument must implement [`JavaHash`]; pass `None::<T>` for an
/// absent reference. `java_hash!()` is 1.
///
/// ```
/// use javautil::java_hash;
///
/// assert_eq!(java_hash!(), 1);
/// assert_eq!(java_hash!("a"), 31 + 97);
/// assert_eq!(java_hash!(1, None::<i32>), 31 * 32);
/// ```
#[macro_export]
macro_rules! java_hash {
    ($($value:expr),* $(,)?) => {{
        let values: &[&dyn $crate::JavaHash] = &[$(&$value as &dyn $crate::JavaHash),*];
        $crate::objects::hash(::core::option::Option::Some(values))
    }};
}
