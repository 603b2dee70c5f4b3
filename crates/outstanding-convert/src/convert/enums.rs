//! The shared enum conversion path.

use super::EXPECTED_STRING;
use crate::enums::StyleEnum;
use crate::error::ConversionError;
use crate::value::Convertible;

pub const INVALID_ENUM_VALUE: &str = "value must be a valid enumeration value";

/// Converts a string value into a member of `E`.
///
/// The value must be a string before its name is looked up, so a number
/// never reaches the name table.
pub fn convert_enum<E, V>(value: &V) -> Result<E, ConversionError>
where
    E: StyleEnum,
    V: Convertible + ?Sized,
{
    let name = value
        .to_str()
        .ok_or_else(|| ConversionError::shape(EXPECTED_STRING))?;
    E::from_name(name).ok_or_else(|| ConversionError::membership(INVALID_ENUM_VALUE))
}
