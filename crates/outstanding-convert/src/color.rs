//! Color values and the CSS color grammar.
//!
//! [`Color::parse`] accepts the CSS color forms style documents use:
//!
//! | Form | Example |
//! |------|---------|
//! | Hex | `#f00`, `#f008`, `#ff0000`, `#ff000080` |
//! | Named | `red`, `CornflowerBlue`, `transparent` |
//! | RGB | `rgb(255, 0, 0)`, `rgba(100%, 0%, 0%, 0.5)` |
//! | HSL | `hsl(120, 100%, 50%)`, `hsla(120, 100%, 50%, 0.5)` |
//!
//! Tokenizing, hex digits and the named-color table come from `cssparser`.
//! The functional forms take comma-separated arguments only, and `rgb`/`hsl`
//! take exactly three while `rgba`/`hsla` take exactly four.

use std::fmt;
use std::str::FromStr;

use cssparser::color::{parse_hash_color, parse_named_color};
use cssparser::{ParseError, Parser, ParserInput, Token};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color with premultiplied components in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use outstanding_convert::Color;
///
/// let red = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
/// assert_eq!(red.r, 0.5); // premultiplied
/// assert_eq!(red.a, 0.5);
/// assert_eq!(red.to_string(), "rgba(255,0,0,0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from already premultiplied components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channels and a straight (non-premultiplied) alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        Self {
            r: r as f32 / 255.0 * a,
            g: g as f32 / 255.0 * a,
            b: b as f32 / 255.0 * a,
            a,
        }
    }

    /// Parses a CSS color string, returning `None` if it is not one.
    pub fn parse(text: &str) -> Option<Self> {
        // The tokenizer would skip comments; the color grammar has none.
        if text.contains("/*") {
            return None;
        }
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let color = parse_color(&mut parser).ok()?;
        parser.expect_exhausted().ok()?;
        Some(color)
    }

    /// Returns 8-bit channels with the alpha divided back out, plus the alpha.
    pub fn to_rgba8(self) -> (u8, u8, u8, f32) {
        if self.a <= 0.0 {
            return (0, 0, 0, 0.0);
        }
        let channel = |c: f32| clamp_byte(c / self.a * 255.0);
        (channel(self.r), channel(self.g), channel(self.b), self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba8();
        write!(f, "rgba({},{},{},{})", r, g, b, a)
    }
}

/// Error returned by [`Color::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}'")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A numeric argument of a color function.
#[derive(Debug, Clone, Copy)]
enum Component {
    Number(f32),
    /// Percentage as a unit value (`50%` is `0.5`).
    Percentage(f32),
}

impl Component {
    fn channel(self) -> u8 {
        match self {
            Component::Number(n) => clamp_byte(n),
            Component::Percentage(p) => clamp_byte(p * 255.0),
        }
    }

    /// Hue in degrees. A percentage hue is read as its bare number (`10%` is 10 degrees).
    fn hue(self) -> f32 {
        match self {
            Component::Number(n) => n,
            Component::Percentage(p) => p * 100.0,
        }
    }

    fn unit(self) -> f32 {
        match self {
            Component::Number(n) => n.clamp(0.0, 1.0),
            Component::Percentage(p) => p.clamp(0.0, 1.0),
        }
    }
}

fn clamp_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn parse_color<'i>(input: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i, ()>> {
    let start = input.position();
    let location = input.current_source_location();
    let token = input.next()?.clone();
    match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => parse_hash_color(value.as_bytes())
            .map(|(r, g, b, a)| Color::from_rgba8(r, g, b, a))
            .map_err(|()| location.new_unexpected_token_error(token.clone())),
        Token::Ident(ref name) if name.eq_ignore_ascii_case("transparent") => {
            Ok(Color::TRANSPARENT)
        }
        Token::Ident(ref name) => parse_named_color(&name.to_ascii_lowercase())
            .map(|(r, g, b)| Color::from_rgba8(r, g, b, 1.0))
            .map_err(|()| location.new_unexpected_token_error(token.clone())),
        Token::Function(ref name) => {
            let name = name.to_ascii_lowercase();
            let color = input.parse_nested_block(|args| parse_function(&name, args))?;
            // End of input closes an open block silently; require the `)`.
            if !input.slice_from(start).ends_with(')') {
                return Err(location.new_custom_error(()));
            }
            Ok(color)
        }
        _ => Err(location.new_unexpected_token_error(token)),
    }
}

fn parse_function<'i>(name: &str, args: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i, ()>> {
    let location = args.current_source_location();
    let components = args.parse_comma_separated(|arg| parse_component(arg))?;
    let color = match (name, components.as_slice()) {
        ("rgb", &[r, g, b]) => Some(Color::from_rgba8(r.channel(), g.channel(), b.channel(), 1.0)),
        ("rgba", &[r, g, b, a]) => Some(Color::from_rgba8(
            r.channel(),
            g.channel(),
            b.channel(),
            a.unit(),
        )),
        ("hsl", &[h, s, l]) => Some(hsl_to_color(h.hue(), s.unit(), l.unit(), 1.0)),
        ("hsla", &[h, s, l, a]) => Some(hsl_to_color(h.hue(), s.unit(), l.unit(), a.unit())),
        _ => None,
    };
    color.ok_or_else(|| location.new_custom_error(()))
}

fn parse_component<'i>(input: &mut Parser<'i, '_>) -> Result<Component, ParseError<'i, ()>> {
    let location = input.current_source_location();
    match *input.next()? {
        Token::Number { value, .. } => Ok(Component::Number(value)),
        Token::Percentage { unit_value, .. } => Ok(Component::Percentage(unit_value)),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn hsl_to_color(hue_degrees: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
    let h = hue_degrees.rem_euclid(360.0) / 360.0;
    let m2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = lightness * 2.0 - m2;
    Color::from_rgba8(
        clamp_byte(hue_to_rgb(m1, m2, h + 1.0 / 3.0) * 255.0),
        clamp_byte(hue_to_rgb(m1, m2, h) * 255.0),
        clamp_byte(hue_to_rgb(m1, m2, h - 1.0 / 3.0) * 255.0),
        alpha,
    )
}

fn hue_to_rgb(m1: f32, m2: f32, mut h: f32) -> f32 {
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }
    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}
