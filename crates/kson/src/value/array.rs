use core::{fmt, slice};
use std::sync::Arc;

use super::JsValue;

/// An immutable JSON array.
#[derive(Clone, PartialEq)]
pub struct JsArray(Arc<[JsValue]>);

impl JsArray {
    #[must_use]
    pub fn new() -> Self {
        JsArray(Arc::from(Vec::new()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&JsValue> {
        self.0.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[JsValue] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, JsValue> {
        self.0.iter()
    }

    /// A new array with `value` appended. Existing elements are shared.
    #[must_use]
    pub fn with(&self, value: impl Into<JsValue>) -> JsArray {
        self.0
            .iter()
            .cloned()
            .chain(std::iter::once(value.into()))
            .collect()
    }
}

impl Default for JsArray {
    fn default() -> Self {
        JsArray::new()
    }
}

impl fmt::Debug for JsArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<V: Into<JsValue>> FromIterator<V> for JsArray {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        JsArray(iter.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<JsValue>> From<Vec<V>> for JsArray {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V: Into<JsValue>, const N: usize> From<[V; N]> for JsArray {
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a JsArray {
    type Item = &'a JsValue;
    type IntoIter = slice::Iter<'a, JsValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
