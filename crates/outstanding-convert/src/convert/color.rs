use super::{Convert, EXPECTED_STRING};
use crate::color::Color;
use crate::error::ConversionError;
use crate::value::Convertible;

const INVALID_COLOR: &str = "value must be a valid color";

impl Convert for Color {
    fn convert<V: Convertible + ?Sized>(value: &V) -> Result<Self, ConversionError> {
        let text = value
            .to_str()
            .ok_or_else(|| ConversionError::shape(EXPECTED_STRING))?;
        Color::parse(text).ok_or_else(|| ConversionError::grammar(INVALID_COLOR))
    }
}

#[cfg(test)]
mod tests {
    use crate::{convert, Color, ErrorKind};
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_valid_colors() {
        assert_eq!(
            convert::<Color, _>(&json!("#ff0000")),
            Ok(Color::new(1.0, 0.0, 0.0, 1.0))
        );
        assert_eq!(convert::<Color, _>(&json!("white")), Ok(Color::WHITE));
        assert_eq!(
            convert::<Color, _>(&json!("rgba(0, 0, 0, 0)")),
            Ok(Color::TRANSPARENT)
        );
    }

    #[test]
    fn test_invalid_color_string() {
        let err = convert::<Color, _>(&json!("notacolor")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GrammarMismatch);
        assert_snapshot!(err, @"value must be a valid color");
    }

    #[test]
    fn test_unterminated_or_commented_color() {
        for text in ["rgb(255, 0, 0", "hsla(0, 0%, 0%, 1", "red /* comment */"] {
            let err = convert::<Color, _>(&json!(text)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::GrammarMismatch);
            assert_eq!(err.message(), "value must be a valid color");
        }
    }

    #[test]
    fn test_non_string() {
        let err = convert::<Color, _>(&json!(0xff0000)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_snapshot!(err, @"value must be a string");
    }

    #[test]
    fn test_channel_array_is_not_a_color() {
        let err = convert::<Color, _>(&json!([255, 0, 0])).unwrap_err();
        assert_eq!(err.message(), "value must be a string");
    }
}
