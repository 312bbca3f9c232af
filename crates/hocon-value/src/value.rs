//! `HoconValue` — one logical configuration value built from an ordered list
//! of fragments.
//!
//! A parser appends fragments to a value as it meets them:
//!
//! - several string-like fragments denote **concatenation** (`foo bar` is the
//!   three literals `foo`, ` `, `bar`)
//! - a leading object fragment makes the value an **object**
//! - array fragments are **flattened** into one sequence (`[1,2] [3]`)
//!
//! All typed accessors work on the concatenated text and parse lazily, so a
//! value can keep growing until the document is complete.
//!
//! # Kind checks
//!
//! The three kind checks are not exclusive. Callers test them in the order
//! string, object, array, as [`HoconValue::render`] does:
//!
//! - [`is_string`](HoconValue::is_string): at least one fragment, and every fragment is a literal
//! - [`is_object`](HoconValue::is_object): the **first** fragment is an object
//! - [`is_array`](HoconValue::is_array): **any** fragment is an array

use crate::element::HoconElement;
use crate::error::Result;
use crate::object::HoconObject;
use crate::root::HoconRoot;
use crate::units;
use chrono::Duration;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoconValue {
    elements: Vec<HoconElement>,
}

impl HoconValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragments in the order they were appended.
    pub fn elements(&self) -> &[HoconElement] {
        &self.elements
    }

    // ── construction ────────────────────────────────────────────────────

    /// Add one more fragment at the end.
    pub fn append_value(&mut self, element: HoconElement) {
        self.elements.push(element);
    }

    /// Drop every fragment and start over with exactly `element`.
    pub fn new_value(&mut self, element: HoconElement) {
        self.elements.clear();
        self.elements.push(element);
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Wrap this value as the only entry of a new object under `key`, and
    /// that object as a document root.
    ///
    /// ```
    /// use hocon_value::{HoconElement, HoconValue};
    ///
    /// let port = HoconValue::from(HoconElement::literal("8080"));
    /// let root = port.at_key("port");
    /// assert_eq!(root.get("port").unwrap().get_i32().unwrap(), 8080);
    /// ```
    pub fn at_key(self, key: impl Into<String>) -> HoconRoot {
        let mut obj = HoconObject::new();
        *obj.get_or_create_key(key) = self;
        HoconRoot::new(HoconValue::from(HoconElement::Object(obj)))
    }

    /// Fold every object fragment of a concatenated object value
    /// (`{a: 1} {b: 2}`) into one object, later fragments taking precedence,
    /// and rebuild the value around it. Non-object fragments in between are
    /// dropped. Values whose first fragment is not an object are untouched.
    pub fn collapse_objects(&mut self) {
        if self.elements.len() < 2 || !self.is_object() {
            return;
        }
        let fragments = std::mem::take(&mut self.elements);
        tracing::trace!(fragments = fragments.len(), "collapsing object fragments");
        if let Some(merged) = (HoconValue { elements: fragments }).into_object() {
            self.new_value(HoconElement::Object(merged));
        }
    }

    // ── kind checks ─────────────────────────────────────────────────────

    /// True for no fragments at all, or a leading object without keys.
    pub fn is_empty(&self) -> bool {
        match self.elements.first() {
            None => true,
            Some(HoconElement::Object(obj)) => obj.is_empty(),
            Some(_) => false,
        }
    }

    pub fn is_string(&self) -> bool {
        !self.elements.is_empty() && self.elements.iter().all(HoconElement::is_string)
    }

    pub fn is_object(&self) -> bool {
        self.get_object().is_some()
    }

    pub fn is_array(&self) -> bool {
        self.elements.iter().any(HoconElement::is_array)
    }

    // ── structural access ───────────────────────────────────────────────

    /// The object held by the first fragment, if it is one.
    pub fn get_object(&self) -> Option<&HoconObject> {
        self.elements.first().and_then(HoconElement::as_object)
    }

    pub fn get_object_mut(&mut self) -> Option<&mut HoconObject> {
        self.elements.first_mut().and_then(HoconElement::as_object_mut)
    }

    pub fn get_child_object(&self, key: &str) -> Option<&HoconValue> {
        self.get_object()?.get_key(key)
    }

    /// Consume the value and return its object, with any further object
    /// fragments merged in. `None` unless the first fragment is an object.
    pub fn into_object(self) -> Option<HoconObject> {
        if !self.is_object() {
            return None;
        }
        let mut objects = self.elements.into_iter().filter_map(|e| match e {
            HoconElement::Object(obj) => Some(obj),
            _ => None,
        });
        let mut merged = objects.next()?;
        for obj in objects {
            merged.merge(obj);
        }
        Some(merged)
    }

    /// Every array fragment's items, concatenated in fragment order.
    ///
    /// Non-array fragments are skipped. Returns `None` only when the value has
    /// no fragments at all; a value with fragments but no arrays yields an
    /// empty list.
    pub fn get_array(&self) -> Option<Vec<&HoconValue>> {
        if self.elements.is_empty() {
            return None;
        }
        Some(
            self.elements
                .iter()
                .filter_map(HoconElement::as_array)
                .flatten()
                .collect(),
        )
    }

    // ── scalar coercion ─────────────────────────────────────────────────

    /// Concatenated, trimmed text of a string value.
    ///
    /// The bare concatenation `null` reads as the empty string. Objects,
    /// arrays and mixed values also read as the empty string.
    pub fn get_string(&self) -> String {
        if !self.is_string() {
            return String::new();
        }
        let concat: String = self
            .elements
            .iter()
            .map(HoconElement::get_string)
            .collect();
        if concat == "null" {
            return String::new();
        }
        concat.trim().to_string()
    }

    pub fn get_bool(&self) -> Result<bool> {
        units::parse_bool(&self.get_string())
    }

    pub fn get_i8(&self) -> Result<i8> {
        units::parse_integer(&self.get_string())
    }

    pub fn get_i32(&self) -> Result<i32> {
        units::parse_integer(&self.get_string())
    }

    pub fn get_i64(&self) -> Result<i64> {
        units::parse_integer(&self.get_string())
    }

    pub fn get_u8(&self) -> Result<u8> {
        units::parse_integer(&self.get_string())
    }

    pub fn get_f32(&self) -> Result<f32> {
        units::parse_f32(&self.get_string())
    }

    pub fn get_f64(&self) -> Result<f64> {
        units::parse_f64(&self.get_string())
    }

    /// Byte count, with an optional trailing `b`.
    pub fn get_byte_size(&self) -> Result<i64> {
        units::parse_byte_size(&self.get_string())
    }

    /// Duration literal such as `500ms`, `2 s` or `1d`. A bare number is
    /// read as milliseconds.
    ///
    /// With `allow_infinite`, the word `infinite` yields
    /// [`units::infinite_duration`]; without it, `infinite` is an error.
    pub fn get_duration(&self, allow_infinite: bool) -> Result<Duration> {
        units::parse_duration(&self.get_string(), allow_infinite)
    }

    // ── list coercion ───────────────────────────────────────────────────

    fn map_array<T>(&self, coerce: impl Fn(&HoconValue) -> Result<T>) -> Result<Vec<T>> {
        self.get_array()
            .unwrap_or_default()
            .into_iter()
            .map(coerce)
            .collect()
    }

    pub fn get_string_list(&self) -> Vec<String> {
        self.get_array()
            .unwrap_or_default()
            .into_iter()
            .map(HoconValue::get_string)
            .collect()
    }

    pub fn get_bool_list(&self) -> Result<Vec<bool>> {
        self.map_array(HoconValue::get_bool)
    }

    pub fn get_i8_list(&self) -> Result<Vec<i8>> {
        self.map_array(HoconValue::get_i8)
    }

    pub fn get_i32_list(&self) -> Result<Vec<i32>> {
        self.map_array(HoconValue::get_i32)
    }

    pub fn get_i64_list(&self) -> Result<Vec<i64>> {
        self.map_array(HoconValue::get_i64)
    }

    pub fn get_u8_list(&self) -> Result<Vec<u8>> {
        self.map_array(HoconValue::get_u8)
    }

    pub fn get_f32_list(&self) -> Result<Vec<f32>> {
        self.map_array(HoconValue::get_f32)
    }

    pub fn get_f64_list(&self) -> Result<Vec<f64>> {
        self.map_array(HoconValue::get_f64)
    }

    pub fn get_byte_size_list(&self) -> Result<Vec<i64>> {
        self.map_array(HoconValue::get_byte_size)
    }

    pub fn get_duration_list(&self, allow_infinite: bool) -> Result<Vec<Duration>> {
        self.map_array(|item| item.get_duration(allow_infinite))
    }

    // ── serialization ───────────────────────────────────────────────────

    /// Text form of the value at the given nesting depth.
    ///
    /// Strings are double-quoted only when they contain a space or a tab (and
    /// empty text renders as `""`); no escaping is applied. Objects render as
    /// a braced block of `key : value` lines, arrays as a comma-joined
    /// bracketed list.
    pub fn render(&self, indent: usize) -> String {
        if self.is_string() {
            return quote_if_needed(&self.get_string());
        }

        if let Some(obj) = self.get_object() {
            return format!("{{\r\n{}{}}}", obj.render(indent + 1), "  ".repeat(indent));
        }

        if self.is_array() {
            let items: Vec<String> = self
                .get_array()
                .unwrap_or_default()
                .into_iter()
                .map(|item| item.render(indent + 1))
                .collect();
            return format!("[{}]", items.join(","));
        }

        "<<unknown value>>".to_string()
    }
}

impl fmt::Display for HoconValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl From<HoconElement> for HoconValue {
    fn from(element: HoconElement) -> Self {
        Self {
            elements: vec![element],
        }
    }
}

impl FromIterator<HoconElement> for HoconValue {
    fn from_iter<I: IntoIterator<Item = HoconElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

pub(crate) fn quote_if_needed(text: &str) -> String {
    if text.is_empty() {
        return "\"\"".to_string();
    }
    if text.contains(' ') || text.contains('\t') {
        return format!("\"{text}\"");
    }
    text.to_string()
}
