//! Booleans, numbers and strings.

use super::{Convert, EXPECTED_BOOLEAN, EXPECTED_NUMBER, EXPECTED_STRING};
use crate::error::ConversionError;
use crate::value::Convertible;

impl Convert for bool {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        value
            .to_bool()
            .ok_or_else(|| ConversionError::shape(EXPECTED_BOOLEAN))
    }
}

impl Convert for f32 {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        value
            .to_number()
            .ok_or_else(|| ConversionError::shape(EXPECTED_NUMBER))
    }
}

impl Convert for f64 {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        value
            .to_double()
            .ok_or_else(|| ConversionError::shape(EXPECTED_NUMBER))
    }
}

impl Convert for String {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        value
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| ConversionError::shape(EXPECTED_STRING))
    }
}

#[cfg(test)]
mod tests {
    use crate::{convert, ErrorKind};
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_bool() {
        assert_eq!(convert::<bool, _>(&json!(true)), Ok(true));
        assert_eq!(convert::<bool, _>(&json!(false)), Ok(false));
    }

    #[test]
    fn test_bool_rejects_everything_else() {
        for value in [json!(1), json!(0), json!("true"), json!(null), json!([true]), json!({})] {
            let err = convert::<bool, _>(&value).unwrap_err();
            assert_eq!(err.message(), "value must be a boolean", "input {value}");
            assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(convert::<f32, _>(&json!(1.5)), Ok(1.5));
        assert_eq!(convert::<f32, _>(&json!(-3)), Ok(-3.0));
        assert_eq!(convert::<f64, _>(&json!(0.1)), Ok(0.1));
    }

    #[test]
    fn test_number_errors() {
        assert_snapshot!(convert::<f32, _>(&json!("1")).unwrap_err(), @"value must be a number");
        assert_snapshot!(convert::<f64, _>(&json!(true)).unwrap_err(), @"value must be a number");
    }

    #[test]
    fn test_string() {
        assert_eq!(convert::<String, _>(&json!("Open Sans")), Ok("Open Sans".to_string()));
        assert_eq!(convert::<String, _>(&json!("")), Ok(String::new()));
    }

    #[test]
    fn test_string_errors() {
        assert_snapshot!(convert::<String, _>(&json!(5)).unwrap_err(), @"value must be a string");
        assert_snapshot!(convert::<String, _>(&json!(["a"])).unwrap_err(), @"value must be a string");
    }
}
