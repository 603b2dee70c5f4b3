//! Enumerations of the styling vocabulary.
//!
//! Every enum that appears in a style document implements [`StyleEnum`],
//! which is nothing more than a static table of `(name, constant)` pairs.
//! All conversion behavior is derived from that table, so one algorithm
//! serves every enum (see [`convert_enum`](crate::convert_enum)).
//!
//! Enums are declared with [`style_enum!`](crate::style_enum), which also
//! wires up conversion, sequences, `Display`, `FromStr` and serde:
//!
//! ```rust
//! use outstanding_convert::{convert, style_enum};
//! use serde_json::json;
//!
//! style_enum! {
//!     /// How a label reacts to hovering.
//!     pub enum HoverMode {
//!         Ignore => "ignore",
//!         Highlight => "highlight",
//!     }
//! }
//!
//! let mode: HoverMode = convert(&json!("highlight")).unwrap();
//! assert_eq!(mode, HoverMode::Highlight);
//!
//! let modes: Vec<HoverMode> = convert(&json!(["ignore", "highlight"])).unwrap();
//! assert_eq!(modes.len(), 2);
//! ```

mod types;

pub use types::*;

/// An enumeration with a fixed, injective name table.
pub trait StyleEnum: Copy + PartialEq + Sized + 'static {
    /// Every member with its canonical name, in declaration order.
    const NAMES: &'static [(&'static str, Self)];

    /// Looks up a member by its exact (case-sensitive) name.
    fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    }

    /// Returns the canonical name of this member.
    ///
    /// `NAMES` must list every member. A member missing from a hand-written
    /// table is a bug: debug builds panic, release builds return `""`.
    fn name(self) -> &'static str {
        let name = Self::NAMES
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(name, _)| *name);
        debug_assert!(name.is_some(), "member missing from StyleEnum::NAMES");
        name.unwrap_or_default()
    }
}

/// Declares a style enum together with its name table and conversions.
///
/// Each variant is paired with its wire name. The generated type implements
/// [`StyleEnum`](crate::StyleEnum), [`Convert`](crate::Convert),
/// [`SequenceElement`](crate::SequenceElement), `Display`, `FromStr`,
/// `Serialize` and `Deserialize`.
#[macro_export]
macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::StyleEnum for $name {
            const NAMES: &'static [(&'static str, Self)] = &[
                $(($wire, $name::$variant),)+
            ];

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        $crate::impl_style_enum_conversions!($name);
    };
}

/// Implements conversions for a type that already implements
/// [`StyleEnum`](crate::StyleEnum).
///
/// [`style_enum!`](crate::style_enum) calls this for you; use it directly
/// only for hand-written enums.
#[macro_export]
macro_rules! impl_style_enum_conversions {
    ($name:ty) => {
        impl $crate::Convert for $name {
            fn convert<V: $crate::Convertible + ?Sized>(
                value: &V,
            ) -> ::std::result::Result<Self, $crate::ConversionError> {
                $crate::convert_enum(value)
            }
        }

        impl $crate::SequenceElement for $name {
            fn sequence_error(element: $crate::ConversionError) -> $crate::ConversionError {
                element.element()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::StyleEnum::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ConversionError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::StyleEnum>::from_name(s)
                    .ok_or_else(|| $crate::ConversionError::membership($crate::INVALID_ENUM_VALUE))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::StyleEnum::name(*self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let name = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$name as $crate::StyleEnum>::from_name(&name).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::custom(format_args!(
                        "unknown {} '{}'",
                        stringify!($name),
                        name
                    ))
                })
            }
        }
    };
}
