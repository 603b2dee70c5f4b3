//! Variable-length homogeneous sequences.

use super::{Convert, EXPECTED_ARRAY};
use crate::error::ConversionError;
use crate::value::Convertible;

const NUMBERS_EXPECTED: &str = "value must be an array of numbers";
const STRINGS_EXPECTED: &str = "value must be an array of strings";

/// An element type that `Vec<T>` can be converted into.
///
/// `sequence_error` decides what the sequence reports when an element fails:
/// a coarse sequence-level message, or the element's error itself.
pub trait SequenceElement: Convert {
    fn sequence_error(element: ConversionError) -> ConversionError;
}

impl SequenceElement for f32 {
    fn sequence_error(_element: ConversionError) -> ConversionError {
        ConversionError::shape(NUMBERS_EXPECTED)
    }
}

impl SequenceElement for f64 {
    fn sequence_error(_element: ConversionError) -> ConversionError {
        ConversionError::shape(NUMBERS_EXPECTED)
    }
}

impl SequenceElement for String {
    fn sequence_error(_element: ConversionError) -> ConversionError {
        ConversionError::shape(STRINGS_EXPECTED)
    }
}

impl<T: SequenceElement> Convert for Vec<T> {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        if !value.is_array() {
            return Err(ConversionError::shape(EXPECTED_ARRAY));
        }

        let len = value.array_length();
        let mut result = Vec::with_capacity(len);
        for index in 0..len {
            let element = T::convert(value.array_member(index)).map_err(T::sequence_error)?;
            result.push(element);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::{convert, ErrorKind, SymbolAnchorType, TextVariableAnchorType, TextWritingModeType};
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_strings_keep_order() {
        assert_eq!(
            convert::<Vec<String>, _>(&json!(["x", "y"])),
            Ok(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_string_element_failure_is_collapsed() {
        let err = convert::<Vec<String>, _>(&json!(["x", 5])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_snapshot!(err, @"value must be an array of strings");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(convert::<Vec<f32>, _>(&json!([0, 0.5, 1])), Ok(vec![0.0, 0.5, 1.0]));
        assert_eq!(convert::<Vec<f64>, _>(&json!([2, 4])), Ok(vec![2.0, 4.0]));
        assert_snapshot!(
            convert::<Vec<f32>, _>(&json!([1, "2"])).unwrap_err(),
            @"value must be an array of numbers"
        );
        assert_snapshot!(
            convert::<Vec<f64>, _>(&json!([true])).unwrap_err(),
            @"value must be an array of numbers"
        );
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(convert::<Vec<f32>, _>(&json!([])), Ok(vec![]));
        assert_eq!(convert::<Vec<String>, _>(&json!([])), Ok(vec![]));
        assert_eq!(convert::<Vec<TextWritingModeType>, _>(&json!([])), Ok(vec![]));
    }

    #[test]
    fn test_not_an_array() {
        for err in [
            convert::<Vec<f32>, _>(&json!(1)).unwrap_err(),
            convert::<Vec<String>, _>(&json!("x")).unwrap_err(),
            convert::<Vec<TextWritingModeType>, _>(&json!("horizontal")).unwrap_err(),
        ] {
            assert_eq!(err.message(), "value must be an array");
            assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        }
    }

    #[test]
    fn test_enum_sequence_keeps_order_and_duplicates() {
        let anchors = convert::<Vec<TextVariableAnchorType>, _>(&json!(["top", "bottom", "top"]));
        assert_eq!(
            anchors,
            Ok(vec![
                SymbolAnchorType::Top,
                SymbolAnchorType::Bottom,
                SymbolAnchorType::Top
            ])
        );
    }

    #[test]
    fn test_enum_sequence_passes_element_error_through() {
        let single = convert::<TextWritingModeType, _>(&json!("diagonal")).unwrap_err();
        let err =
            convert::<Vec<TextWritingModeType>, _>(&json!(["horizontal", "diagonal"])).unwrap_err();
        assert_eq!(err.message(), single.message());
        assert_eq!(err.kind(), ErrorKind::ElementFailure);
        assert_snapshot!(err, @"value must be a valid enumeration value");
    }

    #[test]
    fn test_enum_sequence_non_string_element() {
        let err = convert::<Vec<TextWritingModeType>, _>(&json!(["vertical", 1])).unwrap_err();
        assert_eq!(err.message(), "value must be a string");
    }

    #[test]
    fn test_first_failure_wins() {
        let err = convert::<Vec<TextWritingModeType>, _>(&json!([2, "diagonal"])).unwrap_err();
        assert_eq!(err.message(), "value must be a string");
    }
}
