//! The enum vocabulary of style documents.
//!
//! Wire names are part of the document format and must not change.

use crate::style_enum;

style_enum! {
    /// Reference frame for aligning icons and text.
    pub enum AlignmentType {
        Map => "map",
        Viewport => "viewport",
        Auto => "auto",
    }
}

style_enum! {
    /// Scaling of circles when the map is pitched.
    pub enum CirclePitchScaleType {
        Map => "map",
        Viewport => "viewport",
    }
}

style_enum! {
    /// Reference frame for the hillshade light source direction.
    pub enum HillshadeIlluminationAnchorType {
        Map => "map",
        Viewport => "viewport",
    }
}

style_enum! {
    /// How an icon is stretched to fit its text.
    pub enum IconTextFitType {
        None => "none",
        Both => "both",
        Width => "width",
        Height => "height",
    }
}

style_enum! {
    pub enum LightAnchorType {
        Map => "map",
        Viewport => "viewport",
    }
}

style_enum! {
    /// Line ending shape.
    pub enum LineCapType {
        Round => "round",
        Butt => "butt",
        Square => "square",
    }
}

style_enum! {
    /// Line corner shape.
    pub enum LineJoinType {
        Miter => "miter",
        Bevel => "bevel",
        Round => "round",
        /// Round joins approximated with extra geometry.
        FakeRound => "fakeround",
        FlipBevel => "flipbevel",
    }
}

style_enum! {
    pub enum RasterResamplingType {
        Linear => "linear",
        Nearest => "nearest",
    }
}

style_enum! {
    /// Which part of a symbol sits on its anchor point.
    pub enum SymbolAnchorType {
        Center => "center",
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
}

/// Candidate anchors tried in order when placing variable-anchor text.
pub type TextVariableAnchorType = SymbolAnchorType;

style_enum! {
    /// Where symbols are placed relative to their geometry.
    pub enum SymbolPlacementType {
        Point => "point",
        Line => "line",
        LineCenter => "line-center",
    }
}

style_enum! {
    /// Draw order of overlapping symbols.
    pub enum SymbolZOrderType {
        Auto => "auto",
        ViewportY => "viewport-y",
        Source => "source",
    }
}

style_enum! {
    pub enum TextJustifyType {
        Auto => "auto",
        Center => "center",
        Left => "left",
        Right => "right",
    }
}

style_enum! {
    pub enum TextTransformType {
        None => "none",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
    }
}

style_enum! {
    /// Reference frame for translations.
    pub enum TranslateAnchorType {
        Map => "map",
        Viewport => "viewport",
    }
}

style_enum! {
    pub enum VisibilityType {
        Visible => "visible",
        None => "none",
    }
}

style_enum! {
    /// Text orientation candidates for point labels.
    pub enum TextWritingModeType {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}
