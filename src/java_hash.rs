//! `JavaHash`: the `hashCode()` a Java peer would compute for a value.

use crate::arrays;

/// A value with a Java-compatible 32-bit hash code.
///
/// This is the "element's own hash code" consumed by
/// [`arrays::hash_objects`] and [`objects`](crate::objects). The trait is
/// object-safe, so heterogeneous values can be hashed through
/// `&dyn JavaHash`.
///
/// `f32` deliberately has no implementation.
pub trait JavaHash {
    /// Returns the Java `hashCode()` of `self`.
    fn java_hash_code(&self) -> i32;
}

impl JavaHash for bool {
    fn java_hash_code(&self) -> i32 {
        arrays::boolean_contribution(*self)
    }
}

impl JavaHash for i8 {
    fn java_hash_code(&self) -> i32 {
        arrays::byte_contribution(*self)
    }
}

impl JavaHash for i16 {
    fn java_hash_code(&self) -> i32 {
        arrays::short_contribution(*self)
    }
}

impl JavaHash for i32 {
    fn java_hash_code(&self) -> i32 {
        arrays::int_contribution(*self)
    }
}

impl JavaHash for i64 {
    fn java_hash_code(&self) -> i32 {
        arrays::long_contribution(*self)
    }
}

impl JavaHash for f64 {
    fn java_hash_code(&self) -> i32 {
        arrays::double_contribution(*self)
    }
}

/// `String.valueOf(c).hashCode()`: the code unit for BMP chars (matching
/// `Character.hashCode`), the surrogate-pair polynomial otherwise.
impl JavaHash for char {
    fn java_hash_code(&self) -> i32 {
        let mut units = [0_u16; 2];
        self.encode_utf16(&mut units)
            .iter()
            .copied()
            .map(arrays::char_contribution)
            .fold(0, arrays::mix)
    }
}

/// `String.hashCode`: the polynomial over UTF-16 code units, starting at 0.
impl JavaHash for str {
    fn java_hash_code(&self) -> i32 {
        self.encode_utf16()
            .map(arrays::char_contribution)
            .fold(0, arrays::mix)
    }
}

impl JavaHash for String {
    fn java_hash_code(&self) -> i32 {
        self.as_str().java_hash_code()
    }
}

/// Absent values hash to 0.
impl<T: JavaHash> JavaHash for Option<T> {
    fn java_hash_code(&self) -> i32 {
        self.as_ref().map_or(0, JavaHash::java_hash_code)
    }
}

impl<T: JavaHash + ?Sized> JavaHash for &T {
    fn java_hash_code(&self) -> i32 {
        (**self).java_hash_code()
    }
}

impl<T: JavaHash + ?Sized> JavaHash for Box<T> {
    fn java_hash_code(&self) -> i32 {
        (**self).java_hash_code()
    }
}

// Sequences hash like `List.hashCode`, which equals `Arrays.hashCode(Object[])`.

impl<T: JavaHash> JavaHash for [T] {
    fn java_hash_code(&self) -> i32 {
        arrays::hash_objects(Some(self))
    }
}

impl<T: JavaHash, const N: usize> JavaHash for [T; N] {
    fn java_hash_code(&self) -> i32 {
        self.as_slice().java_hash_code()
    }
}

impl<T: JavaHash> JavaHash for Vec<T> {
    fn java_hash_code(&self) -> i32 {
        self.as_slice().java_hash_code()
    }
}
