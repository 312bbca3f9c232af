//! Syntactic fragments that make up a [`HoconValue`].

use crate::object::HoconObject;
use crate::value::HoconValue;

/// One fragment of a value as written in a document.
///
/// Scalars of every kind (`null`, booleans, numbers, quoted and unquoted
/// strings) are kept as their literal text; conversion to a typed value only
/// happens when a caller asks for one.
#[derive(Debug, Clone, PartialEq)]
pub enum HoconElement {
    Literal(String),
    Object(HoconObject),
    /// Each slot of an array is itself a full value.
    Array(Vec<HoconValue>),
}

impl HoconElement {
    pub fn literal(text: impl Into<String>) -> Self {
        HoconElement::Literal(text.into())
    }

    pub fn is_string(&self) -> bool {
        matches!(self, HoconElement::Literal(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, HoconElement::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, HoconElement::Array(_))
    }

    /// Literal text of a string-like fragment; empty for objects and arrays.
    pub fn get_string(&self) -> &str {
        match self {
            HoconElement::Literal(text) => text,
            HoconElement::Object(_) | HoconElement::Array(_) => "",
        }
    }

    pub fn as_object(&self) -> Option<&HoconObject> {
        match self {
            HoconElement::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut HoconObject> {
        match self {
            HoconElement::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[HoconValue]> {
        match self {
            HoconElement::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<HoconObject> for HoconElement {
    fn from(obj: HoconObject) -> Self {
        HoconElement::Object(obj)
    }
}

impl From<Vec<HoconValue>> for HoconElement {
    fn from(items: Vec<HoconValue>) -> Self {
        HoconElement::Array(items)
    }
}
