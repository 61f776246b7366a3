use std::{borrow::Cow, ops};

use super::{JsValue, Kind};
use crate::AccessError;

/// A type that can look up an entry of a [`JsValue`]: `&str`/`String` keys
/// for objects and `usize` indices for arrays.
///
/// This trait is sealed.
pub trait JsIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v JsValue) -> Result<&'v JsValue, AccessError>;
}

impl JsIndex for usize {
    fn index_into<'v>(&self, value: &'v JsValue) -> Result<&'v JsValue, AccessError> {
        match value {
            JsValue::Array(array) => array
                .get(*self)
                .ok_or_else(|| AccessError::index_out_of_range(*self, array.len())),
            other => Err(AccessError::type_mismatch(Kind::Array, other.kind())),
        }
    }
}

impl JsIndex for str {
    fn index_into<'v>(&self, value: &'v JsValue) -> Result<&'v JsValue, AccessError> {
        match value {
            JsValue::Object(object) => object
                .get(self)
                .ok_or_else(|| AccessError::key_not_found(self)),
            other => Err(AccessError::type_mismatch(Kind::Object, other.kind())),
        }
    }
}

impl JsIndex for String {
    fn index_into<'v>(&self, value: &'v JsValue) -> Result<&'v JsValue, AccessError> {
        self.as_str().index_into(value)
    }
}

impl<T: JsIndex + ?Sized> JsIndex for &T {
    fn index_into<'v>(&self, value: &'v JsValue) -> Result<&'v JsValue, AccessError> {
        (**self).index_into(value)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

impl<I: JsIndex> ops::Index<I> for JsValue {
    type Output = JsValue;

    /// # Panics
    ///
    /// Panics when the lookup fails, like indexing a slice out of bounds.
    /// Use [`JsValue::get`] to handle a missing entry.
    fn index(&self, index: I) -> &JsValue {
        match index.index_into(self) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

pub(super) fn pointer<'a>(
    document: &'a JsValue,
    pointer: &str,
) -> Result<&'a JsValue, AccessError> {
    if pointer.is_empty() {
        return Ok(document);
    }
    if !pointer.starts_with('/') {
        return Err(AccessError::InvalidPointer {
            pointer: pointer.into(),
        });
    }
    pointer
        .split('/')
        .skip(1)
        .map(unescape_segment)
        .try_fold(document, |target, token| match target {
            JsValue::Array(_) => match parse_index(&token) {
                Some(index) => index.index_into(target),
                None => Err(AccessError::InvalidIndex {
                    segment: token.into(),
                }),
            },
            _ => (*token).index_into(target),
        })
}

/// Decode `~1` and `~0` escapes of a JSON pointer segment.
fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Canonical decimal array index: no sign and no leading zeros.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.starts_with('+') || (segment.starts_with('0') && segment.len() != 1) {
        return None;
    }
    segment.parse().ok()
}
