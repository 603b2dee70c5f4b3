//! Fixed-size numeric arrays.
//!
//! One routine serves every element precision and length. Style properties
//! use `[f32; 2]` for offsets and translations, `[f32; 4]` for paddings and
//! `[f64; 3]` for light positions, but any `N` works.

use super::Convert;
use crate::error::ConversionError;
use crate::value::Convertible;

/// A number type that fixed-size arrays can hold.
pub trait Numeric: Copy + Default {
    /// Reads a single element, or `None` if it is not a number.
    fn extract<V: Convertible + ?Sized>(value: &V) -> Option<Self>;
}

impl Numeric for f32 {
    fn extract<V: Convertible + ?Sized>(value: &V) -> Option<Self> {
        value.to_number()
    }
}

impl Numeric for f64 {
    fn extract<V: Convertible + ?Sized>(value: &V) -> Option<Self> {
        value.to_double()
    }
}

impl<T: Numeric, const N: usize> Convert for [T; N] {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        // Wrong length and a bad element get the same message.
        let invalid = || ConversionError::shape(format!("value must be an array of {N} numbers"));

        if !value.is_array() || value.array_length() != N {
            return Err(invalid());
        }

        let mut result = [T::default(); N];
        for (index, slot) in result.iter_mut().enumerate() {
            *slot = T::extract(value.array_member(index)).ok_or_else(invalid)?;
        }
        Ok(result)
    }
}
