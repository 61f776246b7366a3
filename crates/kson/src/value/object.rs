use core::{fmt, iter::FusedIterator, slice};
use std::sync::Arc;

use ahash::AHashMap;

use super::{JsString, JsValue};

/// An immutable JSON object.
///
/// Entries keep insertion order. When a key occurs more than once during
/// construction, the last value wins and the key keeps its first position.
#[derive(Clone, Default)]
pub struct JsObject(Arc<ObjectRepr>);

#[derive(Default)]
struct ObjectRepr {
    entries: Vec<(JsString, JsValue)>,
    positions: AHashMap<JsString, usize>,
}

impl JsObject {
    #[must_use]
    pub fn new() -> Self {
        JsObject::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsValue> {
        self.0
            .positions
            .get(key)
            .map(|&position| &self.0.entries[position].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.positions.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.entries.iter())
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &JsValue> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// A new object with `key` set to `value`.
    ///
    /// An existing key keeps its position; a new key is appended. Children are
    /// shared with `self`.
    #[must_use]
    pub fn with(&self, key: impl Into<JsString>, value: impl Into<JsValue>) -> JsObject {
        self.0
            .entries
            .iter()
            .cloned()
            .chain(std::iter::once((key.into(), value.into())))
            .collect()
    }

    /// A new object without `key`.
    #[must_use]
    pub fn without(&self, key: &str) -> JsObject {
        self.0
            .entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .cloned()
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for JsObject
where
    K: Into<JsString>,
    V: Into<JsValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut repr = ObjectRepr {
            entries: Vec::with_capacity(lower),
            positions: AHashMap::with_capacity(lower),
        };
        for (key, value) in iter {
            let key = key.into();
            let value = value.into();
            if let Some(&position) = repr.positions.get(key.as_str()) {
                tracing::trace!(key = key.as_str(), "Replacing duplicate object key");
                repr.entries[position].1 = value;
            } else {
                repr.positions.insert(key.clone(), repr.entries.len());
                repr.entries.push((key, value));
            }
        }
        JsObject(Arc::new(repr))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for JsObject
where
    K: Into<JsString>,
    V: Into<JsValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for JsObject
where
    K: Into<JsString>,
    V: Into<JsValue>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl PartialEq for JsObject {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|other| value == other))
    }
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a JsObject {
    type Item = (&'a str, &'a JsValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`JsObject`] in insertion order.
#[derive(Clone)]
pub struct Iter<'a>(slice::Iter<'a, (JsString, JsValue)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a JsValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(key, value)| (key.as_str(), value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_js_value;

    fn person() -> JsObject {
        JsObject::from([
            ("firstName", to_js_value("Andrew")),
            ("lastName", to_js_value("O'Malley")),
            ("age", to_js_value(21)),
        ])
    }

    #[test]
    fn read_back_keys() {
        let object = person();
        assert_eq!(object.len(), 3);
        assert_eq!(object.get("firstName"), Some(&to_js_value("Andrew")));
        assert_eq!(object.get("lastName"), Some(&to_js_value("O'Malley")));
        assert_eq!(object.get("age"), Some(&JsValue::Int(21)));
        assert_eq!(object.get("adult"), None);
        assert!(object.contains_key("age"));
    }

    #[test]
    fn insertion_order() {
        let object = person();
        assert_eq!(
            object.keys().collect::<Vec<_>>(),
            ["firstName", "lastName", "age"]
        );
    }

    #[test]
    fn last_duplicate_wins_in_first_position() {
        let object = JsObject::from([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(object.len(), 2);
        let entries: Vec<_> = object.iter().collect();
        assert_eq!(
            entries,
            [("a", &JsValue::Int(3)), ("b", &JsValue::Int(2))]
        );
    }

    #[test]
    fn with_replaces_in_place() {
        let object = person();
        let updated = object.with("age", 22);
        assert_eq!(updated.get("age"), Some(&JsValue::Int(22)));
        assert_eq!(
            updated.keys().collect::<Vec<_>>(),
            ["firstName", "lastName", "age"]
        );
        // The original is untouched
        assert_eq!(object.get("age"), Some(&JsValue::Int(21)));
    }

    #[test]
    fn with_appends_new_key() {
        let updated = person().with("adult", true);
        assert_eq!(updated.keys().last(), Some("adult"));
        assert_eq!(updated.len(), 4);
    }

    #[test]
    fn without_removes_key() {
        let updated = person().without("lastName");
        assert_eq!(updated.keys().collect::<Vec<_>>(), ["firstName", "age"]);
        assert_eq!(person().without("missing"), person());
    }

    #[test]
    fn equality_ignores_order() {
        let left = JsObject::from([("a", 1), ("b", 2)]);
        let right = JsObject::from([("b", 2), ("a", 1)]);
        assert_eq!(left, right);
        assert_ne!(left, JsObject::from([("a", 1), ("b", 3)]));
        assert_ne!(left, JsObject::from([("a", 1)]));
    }

    #[test]
    fn empty() {
        let object = JsObject::new();
        assert!(object.is_empty());
        assert_eq!(object.iter().next(), None);
    }
}
