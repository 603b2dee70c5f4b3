//! # Outstanding Convert - typed style values
//!
//! Style documents (themes, stylesheets, layer definitions) are parsed into
//! untyped JSON or YAML trees. This crate turns values in those trees into
//! the typed values a renderer needs, and validates their shape on the way:
//!
//! - booleans, numbers and strings
//! - enumerations with a fixed name table ([`StyleEnum`])
//! - CSS colors ([`Color`])
//! - fixed-size numeric arrays (`[f32; N]`, `[f64; N]`)
//! - homogeneous sequences (`Vec<f32>`, `Vec<String>`, `Vec<E>` for enums)
//!
//! ## Quick Start
//!
//! ```rust
//! use outstanding_convert::{convert, convert_member, Color, LineJoinType};
//! use serde_json::json;
//!
//! let paint = json!({
//!     "line-color": "#3bb2d0",
//!     "line-join": "round",
//!     "line-translate": [0, 2],
//! });
//!
//! let color: Option<Color> = convert_member(&paint, "line-color").unwrap();
//! let join: Option<LineJoinType> = convert_member(&paint, "line-join").unwrap();
//! let translate: Option<[f32; 2]> = convert_member(&paint, "line-translate").unwrap();
//!
//! assert_eq!(join, Some(LineJoinType::Round));
//! assert_eq!(translate, Some([0.0, 2.0]));
//! assert!(color.is_some());
//!
//! let err = convert::<LineJoinType, _>(&json!("sharp")).unwrap_err();
//! assert_eq!(err.to_string(), "value must be a valid enumeration value");
//! ```
//!
//! ## Core Concepts
//!
//! - [`Convertible`]: read-only view over a dynamic value
//! - [`Convert`]: the conversion contract, one implementation per target type
//! - [`ConversionError`]: what went wrong, with a stable message
//! - [`style_enum!`]: declares new enums that plug into conversion
//!
//! ## Feature Flags
//!
//! - `yaml`: implements [`Convertible`] for `serde_yaml::Value`

mod color;
mod convert;
mod enums;
mod error;
mod value;

pub use color::{Color, ColorParseError};
pub use convert::{
    convert, convert_enum, convert_member, Convert, Numeric, SequenceElement, INVALID_ENUM_VALUE,
};
pub use enums::{
    AlignmentType, CirclePitchScaleType, HillshadeIlluminationAnchorType, IconTextFitType,
    LightAnchorType, LineCapType, LineJoinType, RasterResamplingType, StyleEnum,
    SymbolAnchorType, SymbolPlacementType, SymbolZOrderType, TextJustifyType, TextTransformType,
    TextVariableAnchorType, TextWritingModeType, TranslateAnchorType, VisibilityType,
};
pub use error::{ConversionError, ConversionResult, ErrorKind};
pub use value::Convertible;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
