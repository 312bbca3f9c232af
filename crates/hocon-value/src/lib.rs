//! # hocon-value
//!
//! The value model of **HOCON** (Human-Optimized Config Object Notation), the
//! JSON superset used for human-edited configuration files.
//!
//! A HOCON value is not always a single token. `greeting = hello world` is a
//! concatenation of literals, `a = {x: 1}` followed by `a = {y: 2}` merges two
//! objects, and `list = [1, 2] [3]` flattens two arrays. This crate keeps the
//! fragments a parser collected for a key as an ordered list and decides from
//! them what the value is, then coerces it on demand into the types callers
//! need: booleans, integers, floats, byte sizes and unit-suffixed durations.
//!
//! ## Quick start
//!
//! ```rust
//! use hocon_value::{HoconElement, HoconObject, HoconValue};
//!
//! // timeout = 2 s
//! let mut root = HoconObject::new();
//! let timeout = root.get_or_create_key("timeout");
//! timeout.append_value(HoconElement::literal("2"));
//! timeout.append_value(HoconElement::literal(" "));
//! timeout.append_value(HoconElement::literal("s"));
//!
//! let value = root.get_key("timeout").unwrap();
//! assert_eq!(value.get_string(), "2 s");
//! assert_eq!(value.get_duration(false).unwrap().num_seconds(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `HoconValue`: kind checks, concatenation, typed accessors, rendering
//! - [`element`] — `HoconElement`: literal, object or array fragment
//! - [`object`] — `HoconObject`: ordered keys and the fallback merge
//! - [`units`] — boolean, byte-size and duration literal grammars
//! - [`root`] — `HoconRoot`: a finished document with path lookup
//! - [`json`] — lifting JSON documents into the model and back
//! - [`error`] — Error types for coercion failures

pub mod element;
pub mod error;
pub mod json;
pub mod object;
pub mod root;
pub mod units;
pub mod value;

pub use element::HoconElement;
pub use error::HoconError;
pub use object::HoconObject;
pub use root::HoconRoot;
pub use units::{infinite_duration, is_infinite};
pub use value::HoconValue;
