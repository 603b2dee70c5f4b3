//! Read-only access to dynamically shaped style values.
//!
//! Converters never look at a concrete document type. They go through the
//! [`Convertible`] trait, which answers a handful of shape questions
//! (is this an array? a string?) and hands out borrowed sub-values.
//!
//! Two document models are supported out of the box:
//!
//! | Document | Type | Feature |
//! |----------|------|---------|
//! | JSON | `serde_json::Value` | always |
//! | YAML | `serde_yaml::Value` | `yaml` |
//!
//! Accessors are strict: numbers never come from strings, booleans never come
//! from numbers, and `null` is nothing at all.

mod json;
#[cfg(feature = "yaml")]
mod yaml;

/// An opaque, borrowed style value.
///
/// Implementations must be free of side effects. A converter may call any
/// accessor several times and expects the same answer every time.
pub trait Convertible {
    /// Returns `true` if the value is an array.
    fn is_array(&self) -> bool;

    /// Returns the number of members, or `0` for anything that is not an array.
    fn array_length(&self) -> usize;

    /// Returns the array member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `index >= array_length()`,
    /// in the same way slice indexing does.
    fn array_member(&self, index: usize) -> &Self;

    /// Returns `true` if the value is an object (a string-keyed map).
    fn is_object(&self) -> bool;

    /// Returns the member stored under `key`, if the value is an object that has one.
    fn object_member(&self, key: &str) -> Option<&Self>;

    fn to_bool(&self) -> Option<bool>;

    /// Returns the value as a single-precision number.
    fn to_number(&self) -> Option<f32>;

    /// Returns the value as a double-precision number.
    fn to_double(&self) -> Option<f64>;

    fn to_str(&self) -> Option<&str>;
}
