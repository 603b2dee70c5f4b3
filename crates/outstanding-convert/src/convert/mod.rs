//! Conversion of dynamic style values into typed values.
//!
//! [`Convert`] is the single contract every target type implements. Callers
//! pick the target type and go through [`convert`], which is the same call for
//! a boolean as for a list of anchors:
//!
//! ```rust
//! use outstanding_convert::{convert, Color, LineCapType};
//! use serde_json::json;
//!
//! let width: f32 = convert(&json!(2.5)).unwrap();
//! let cap: LineCapType = convert(&json!("round")).unwrap();
//! let offset: [f32; 2] = convert(&json!([0, -4])).unwrap();
//! let fill: Color = convert(&json!("#ff0000")).unwrap();
//! let fonts: Vec<String> = convert(&json!(["Open Sans", "Arial"])).unwrap();
//!
//! let err = convert::<[f32; 2], _>(&json!([1, 2, 3])).unwrap_err();
//! assert_eq!(err.to_string(), "value must be an array of 2 numbers");
//! ```
//!
//! # Failure reporting
//!
//! Converters stop at the first problem. Messages are fixed strings, with one
//! deliberate difference between composite types:
//!
//! | Target | On element failure |
//! |--------|--------------------|
//! | `[f32; N]`, `[f64; N]` | `value must be an array of N numbers` |
//! | `Vec<f32>`, `Vec<f64>` | `value must be an array of numbers` |
//! | `Vec<String>` | `value must be an array of strings` |
//! | `Vec<E>` for enums | the element's own message, unchanged |

mod array;
mod color;
mod enums;
mod scalar;
mod sequence;

pub use array::Numeric;
pub use enums::{convert_enum, INVALID_ENUM_VALUE};
pub use sequence::SequenceElement;

use crate::error::ConversionError;
use crate::value::Convertible;

pub(crate) const EXPECTED_BOOLEAN: &str = "value must be a boolean";
pub(crate) const EXPECTED_NUMBER: &str = "value must be a number";
pub(crate) const EXPECTED_STRING: &str = "value must be a string";
pub(crate) const EXPECTED_ARRAY: &str = "value must be an array";
pub(crate) const EXPECTED_OBJECT: &str = "value must be an object";

/// A type that can be produced from a dynamic style value.
///
/// Implementations must be pure: the same input always yields the same
/// result, and a failure never comes with a partial value.
pub trait Convert: Sized {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError>;
}

/// Converts `value` into `T`.
///
/// Failures are also reported as `trace` events carrying the target type.
pub fn convert<T, V>(value: &V) -> Result<T, ConversionError>
where
    T: Convert,
    V: Convertible + ?Sized,
{
    T::convert(value).map_err(|err| {
        tracing::trace!(
            ty = std::any::type_name::<T>(),
            kind = %err.kind(),
            error = %err,
            "style value conversion failed"
        );
        err
    })
}

/// Converts the member `key` of an object value.
///
/// Returns `Ok(None)` when the member is absent, leaving defaults to the
/// caller. A present member that fails to convert reports its own error.
///
/// # Example
///
/// ```rust
/// use outstanding_convert::{convert_member, VisibilityType};
/// use serde_json::json;
///
/// let layout = json!({ "visibility": "none" });
/// let visibility = convert_member::<VisibilityType, _>(&layout, "visibility").unwrap();
/// assert_eq!(visibility, Some(VisibilityType::None));
///
/// let width = convert_member::<f32, _>(&layout, "line-width").unwrap();
/// assert_eq!(width, None);
/// ```
pub fn convert_member<T, V>(value: &V, key: &str) -> Result<Option<T>, ConversionError>
where
    T: Convert,
    V: Convertible + ?Sized,
{
    if !value.is_object() {
        return Err(ConversionError::shape(EXPECTED_OBJECT));
    }
    value.object_member(key).map(convert).transpose()
}
