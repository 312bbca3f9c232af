//! Bridge between `serde_json::Value` and the HOCON value model.
//!
//! Every JSON document is a valid HOCON document, so JSON input can be lifted
//! straight into [`HoconValue`]s. Scalars keep their literal text
//! (`null`, `true`, `42`, `3.5`) and are coerced lazily like any other
//! fragment. Object key order is preserved through serde_json's
//! `preserve_order` feature.

use crate::element::HoconElement;
use crate::error::Result;
use crate::object::HoconObject;
use crate::value::HoconValue;
use serde_json::{Map, Value};

impl HoconValue {
    /// Parse a JSON document into a value tree.
    ///
    /// ```
    /// use hocon_value::HoconValue;
    ///
    /// let v = HoconValue::from_json_str(r#"{"timeout": "500ms", "ports": [80, 443]}"#).unwrap();
    /// assert_eq!(v.get_child_object("timeout").unwrap().get_duration(false).unwrap().num_milliseconds(), 500);
    /// assert_eq!(v.get_child_object("ports").unwrap().get_i32_list().unwrap(), vec![80, 443]);
    /// ```
    pub fn from_json_str(json: &str) -> Result<HoconValue> {
        let value: Value = serde_json::from_str(json)?;
        Ok(HoconValue::from(value))
    }

    /// Map the value back to JSON.
    ///
    /// String values become JSON strings holding their concatenated text (no
    /// type inference), objects become maps, arrays become arrays. A value of
    /// no recognised kind becomes `null`.
    pub fn to_json(&self) -> Value {
        if self.is_string() {
            return Value::String(self.get_string());
        }

        if let Some(obj) = self.get_object() {
            let map: Map<String, Value> = obj
                .iter()
                .map(|(key, child)| (key.to_string(), child.to_json()))
                .collect();
            return Value::Object(map);
        }

        if self.is_array() {
            let items = self
                .get_array()
                .unwrap_or_default()
                .into_iter()
                .map(HoconValue::to_json)
                .collect();
            return Value::Array(items);
        }

        Value::Null
    }
}

impl From<Value> for HoconValue {
    fn from(value: Value) -> Self {
        let element = match value {
            Value::Null => HoconElement::literal("null"),
            Value::Bool(b) => HoconElement::literal(b.to_string()),
            Value::Number(n) => HoconElement::literal(n.to_string()),
            Value::String(s) => HoconElement::Literal(s),
            Value::Array(items) => {
                HoconElement::Array(items.into_iter().map(HoconValue::from).collect())
            }
            Value::Object(map) => HoconElement::Object(
                map.into_iter()
                    .map(|(key, child)| (key, HoconValue::from(child)))
                    .collect::<HoconObject>(),
            ),
        };
        HoconValue::from(element)
    }
}
