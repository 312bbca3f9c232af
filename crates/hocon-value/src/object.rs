//! Ordered key → value mapping with HOCON's fallback merge.
//!
//! When a key is assigned more than once, the later assignment wins, except
//! when both the earlier and the later value are objects: then the two objects
//! are merged key by key, recursively. Keys only the earlier object defines
//! survive; keys both define take the later value.
//!
//! ```
//! use hocon_value::{HoconObject, HoconValue};
//!
//! let mut conf = HoconValue::from_json_str(r#"{"db": {"host": "a", "port": 1}}"#).unwrap();
//! let patch = HoconValue::from_json_str(r#"{"db": {"port": 2}}"#).unwrap();
//!
//! let target = conf.get_object_mut().unwrap();
//! target.merge(patch.into_object().unwrap());
//!
//! let db = conf.get_child_object("db").unwrap();
//! assert_eq!(db.get_child_object("host").unwrap().get_string(), "a");
//! assert_eq!(db.get_child_object("port").unwrap().get_i32().unwrap(), 2);
//! ```

use crate::value::{quote_if_needed, HoconValue};
use indexmap::IndexMap;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoconObject {
    items: IndexMap<String, HoconValue>,
}

impl HoconObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Keys in first-assignment order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HoconValue)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_key(&self, key: &str) -> Option<&HoconValue> {
        self.items.get(key)
    }

    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut HoconValue> {
        self.items.get_mut(key)
    }

    /// Slot for `key`, created empty if the key has not been seen yet.
    ///
    /// This is where a parser appends further fragments for a key.
    pub fn get_or_create_key(&mut self, key: impl Into<String>) -> &mut HoconValue {
        self.items.entry(key.into()).or_default()
    }

    /// Assign `value` to `key` following the fallback rule.
    ///
    /// - new key: inserted at the end
    /// - existing key, both sides objects: merged recursively
    /// - otherwise: the new value replaces the old one in place (the key keeps
    ///   its original position)
    pub fn assign(&mut self, key: impl Into<String>, value: HoconValue) {
        let key = key.into();

        if let Some(existing) = self.items.get_mut(&key) {
            if existing.is_object() && value.is_object() {
                trace!(key = %key, "merging object into existing object");
                if let (Some(target), Some(incoming)) =
                    (existing.get_object_mut(), value.into_object())
                {
                    target.merge(incoming);
                }
            } else {
                trace!(key = %key, "replacing earlier value");
                *existing = value;
            }
            return;
        }

        self.items.insert(key, value);
    }

    /// Merge `other` into `self`, `other` taking precedence per key.
    pub fn merge(&mut self, other: HoconObject) {
        for (key, value) in other.items {
            self.assign(key, value);
        }
    }

    /// Multi-line form: one `key : value` line per entry, indented two spaces
    /// per level, each line ending in CRLF.
    pub fn render(&self, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        let mut out = String::new();
        for (key, value) in &self.items {
            out.push_str(&pad);
            out.push_str(&quote_if_needed(key));
            out.push_str(" : ");
            out.push_str(&value.render(indent));
            out.push_str("\r\n");
        }
        out
    }
}

/// Collecting applies [`HoconObject::assign`] per pair, so duplicate keys
/// merge exactly as repeated assignments in a document would.
impl FromIterator<(String, HoconValue)> for HoconObject {
    fn from_iter<I: IntoIterator<Item = (String, HoconValue)>>(iter: I) -> Self {
        let mut obj = HoconObject::new();
        for (key, value) in iter {
            obj.assign(key, value);
        }
        obj
    }
}

