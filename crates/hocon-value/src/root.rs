//! Minimal document root.

use crate::value::HoconValue;

/// A finished document: the top-level value plus path lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoconRoot {
    value: HoconValue,
}

impl HoconRoot {
    pub fn new(value: HoconValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &HoconValue {
        &self.value
    }

    pub fn into_value(self) -> HoconValue {
        self.value
    }

    /// Look up a dot-separated path such as `akka.actor.timeout`.
    ///
    /// Each segment is resolved with
    /// [`get_child_object`](HoconValue::get_child_object); a missing key or a
    /// non-object on the way yields `None`. The empty path is the root value.
    pub fn get(&self, path: &str) -> Option<&HoconValue> {
        if path.is_empty() {
            return Some(&self.value);
        }
        path.split('.')
            .try_fold(&self.value, |value, key| value.get_child_object(key))
    }
}
