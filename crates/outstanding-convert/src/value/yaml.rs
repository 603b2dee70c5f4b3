//! [`Convertible`] for YAML style documents.
//!
//! Tagged values (`!tag value`) are neither arrays, objects nor scalars here;
//! style documents have no use for tags.

use serde_yaml::Value;

use super::Convertible;

impl Convertible for Value {
    fn is_array(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    fn array_length(&self) -> usize {
        match self {
            Value::Sequence(items) => items.len(),
            _ => 0,
        }
    }

    fn array_member(&self, index: usize) -> &Self {
        match self {
            Value::Sequence(items) => &items[index],
            _ => panic!("array_member called on a non-sequence YAML value"),
        }
    }

    fn is_object(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    fn object_member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn to_number(&self) -> Option<f32> {
        match self {
            Value::Number(n) => n.as_f64().map(|n| n as f32),
            _ => None,
        }
    }

    fn to_double(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn to_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
