//! Bit-exact `java.util.Arrays.hashCode` for every primitive element kind.
//!
//! Every variant folds its elements with the same polynomial accumulator:
//! `acc = 31 · acc + contribution(element)`, starting at [`SEED`], using
//! wrapping 32-bit arithmetic. An absent sequence hashes to [`ABSENT`].

use std::fmt;

use crate::error::{Error, Result};
use crate::java_hash::JavaHash;

/// Initial accumulator value; the hash of a present but empty sequence.
pub const SEED: i32 = 1;

/// Per-element multiplier.
pub const MULTIPLIER: i32 = 31;

/// Hash of an absent sequence.
pub const ABSENT: i32 = 0;

/// Contribution of `true` to a boolean array hash.
pub const TRUE_HASH: i32 = 1231;

/// Contribution of `false` to a boolean array hash.
pub const FALSE_HASH: i32 = 1237;

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Folds one contribution into the accumulator: `31 · acc + contribution`.
#[inline]
#[must_use]
pub const fn mix(acc: i32, contribution: i32) -> i32 {
    acc.wrapping_mul(MULTIPLIER).wrapping_add(contribution)
}

/// Folds a sequence of contributions starting from [`SEED`].
#[must_use]
pub fn accumulate<I: IntoIterator<Item = i32>>(contributions: I) -> i32 {
    contributions.into_iter().fold(SEED, mix)
}

fn hash_with<T: Copy>(values: Option<&[T]>, contribution: impl Fn(T) -> i32) -> i32 {
    values.map_or(ABSENT, |values| {
        accumulate(values.iter().copied().map(contribution))
    })
}

// ---------------------------------------------------------------------------
// Element contributions
// ---------------------------------------------------------------------------

/// Low 32 bits of `value ^ (value >> 32)`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn long_contribution(value: i64) -> i32 {
    (value ^ (value >> 32)) as i32
}

/// The value itself.
#[inline]
#[must_use]
pub const fn int_contribution(value: i32) -> i32 {
    value
}

/// Sign-extended to 32 bits.
#[inline]
#[must_use]
pub fn short_contribution(value: i16) -> i32 {
    i32::from(value)
}

/// The UTF-16 code unit, zero-extended.
#[inline]
#[must_use]
pub fn char_contribution(value: u16) -> i32 {
    i32::from(value)
}

/// Sign-extended to 32 bits.
#[inline]
#[must_use]
pub fn byte_contribution(value: i8) -> i32 {
    i32::from(value)
}

/// [`TRUE_HASH`] or [`FALSE_HASH`].
#[inline]
#[must_use]
pub const fn boolean_contribution(value: bool) -> i32 {
    if value { TRUE_HASH } else { FALSE_HASH }
}

/// [`long_contribution`] of the raw IEEE-754 bit pattern.
///
/// NaN payloads are not canonicalized: distinct NaN bit patterns may hash
/// differently.
#[inline]
#[must_use]
pub const fn double_contribution(value: f64) -> i32 {
    long_contribution(value.to_bits().cast_signed())
}

// ---------------------------------------------------------------------------
// Per-kind hash functions
// ---------------------------------------------------------------------------

/// Hash of a `long[]`.
#[must_use]
pub fn hash_longs(values: Option<&[i64]>) -> i32 {
    hash_with(values, long_contribution)
}

/// Hash of an `int[]`.
#[must_use]
pub fn hash_ints(values: Option<&[i32]>) -> i32 {
    hash_with(values, int_contribution)
}

/// Hash of a `short[]`.
#[must_use]
pub fn hash_shorts(values: Option<&[i16]>) -> i32 {
    hash_with(values, short_contribution)
}

/// Hash of a `char[]`, given as UTF-16 code units.
#[must_use]
pub fn hash_chars(values: Option<&[u16]>) -> i32 {
    hash_with(values, char_contribution)
}

/// Hash of a `byte[]`.
#[must_use]
pub fn hash_bytes(values: Option<&[i8]>) -> i32 {
    hash_with(values, byte_contribution)
}

/// Hash of a `boolean[]`.
#[must_use]
pub fn hash_booleans(values: Option<&[bool]>) -> i32 {
    hash_with(values, boolean_contribution)
}

/// Hash of a `double[]`.
#[must_use]
pub fn hash_doubles(values: Option<&[f64]>) -> i32 {
    hash_with(values, double_contribution)
}

/// Hash of a `float[]`: not supported.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`], whether or not `values` is present.
pub fn hash_floats(values: Option<&[f32]>) -> Result<i32> {
    tracing::warn!(len = ?values.map(<[f32]>::len), "float array hashing is not supported");
    Err(Error::Unsupported {
        operation: "hash_floats",
    })
}

/// Hash of an `Object[]`.
///
/// Each element contributes its own [`JavaHash::java_hash_code`]; use
/// `Option<T>` elements to represent absent references, which contribute 0.
#[must_use]
pub fn hash_objects<T: JavaHash>(values: Option<&[T]>) -> i32 {
    values.map_or(ABSENT, |values| {
        accumulate(values.iter().map(JavaHash::java_hash_code))
    })
}

// ---------------------------------------------------------------------------
// Tagged dispatch
// ---------------------------------------------------------------------------

/// Element kind of a [`PrimitiveArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `long`, 64-bit signed.
    Long,
    /// `int`, 32-bit signed.
    Int,
    /// `short`, 16-bit signed.
    Short,
    /// `char`, UTF-16 code unit.
    Char,
    /// `byte`, 8-bit signed.
    Byte,
    /// `boolean`.
    Boolean,
    /// `double`, IEEE-754 binary64.
    Double,
    /// `float`, IEEE-754 binary32. Hashing is unsupported.
    Float,
}

impl ElementKind {
    /// Java name of the element type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Int => "int",
            Self::Short => "short",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Float => "float",
        }
    }

    /// Returns `false` only for [`Float`](Self::Float).
    #[must_use]
    pub const fn is_hashable(self) -> bool {
        !matches!(self, Self::Float)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed primitive array of one element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveArray<'a> {
    /// `long[]`
    Long(&'a [i64]),
    /// `int[]`
    Int(&'a [i32]),
    /// `short[]`
    Short(&'a [i16]),
    /// `char[]`
    Char(&'a [u16]),
    /// `byte[]`
    Byte(&'a [i8]),
    /// `boolean[]`
    Boolean(&'a [bool]),
    /// `double[]`
    Double(&'a [f64]),
    /// `float[]`
    Float(&'a [f32]),
}

impl PrimitiveArray<'_> {
    /// Returns the element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Long(_) => ElementKind::Long,
            Self::Int(_) => ElementKind::Int,
            Self::Short(_) => ElementKind::Short,
            Self::Char(_) => ElementKind::Char,
            Self::Byte(_) => ElementKind::Byte,
            Self::Boolean(_) => ElementKind::Boolean,
            Self::Double(_) => ElementKind::Double,
            Self::Float(_) => ElementKind::Float,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Long(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Short(v) => v.len(),
            Self::Char(v) => v.len(),
            Self::Byte(v) => v.len(),
            Self::Boolean(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_slice {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$elem]> for PrimitiveArray<'a> {
                fn from(values: &'a [$elem]) -> Self {
                    Self::$variant(values)
                }
            }
        )*
    };
}

impl_from_slice! {
    i64 => Long,
    i32 => Int,
    i16 => Short,
    u16 => Char,
    i8 => Byte,
    bool => Boolean,
    f64 => Double,
    f32 => Float,
}

/// Hashes `array` with the function for its element kind.
///
/// An absent array hashes to [`ABSENT`] regardless of kind.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] for [`PrimitiveArray::Float`].
pub fn hash_code(array: Option<PrimitiveArray<'_>>) -> Result<i32> {
    let Some(array) = array else {
        return Ok(ABSENT);
    };
    let hash = match array {
        PrimitiveArray::Long(v) => hash_longs(Some(v)),
        PrimitiveArray::Int(v) => hash_ints(Some(v)),
        PrimitiveArray::Short(v) => hash_shorts(Some(v)),
        PrimitiveArray::Char(v) => hash_chars(Some(v)),
        PrimitiveArray::Byte(v) => hash_bytes(Some(v)),
        PrimitiveArray::Boolean(v) => hash_booleans(Some(v)),
        PrimitiveArray::Double(v) => hash_doubles(Some(v)),
        PrimitiveArray::Float(v) => return hash_floats(Some(v)),
    };
    Ok(hash)
}
