mod array;
mod index;
mod iter;
mod object;
mod string;

use core::fmt;

pub use array::JsArray;
pub use index::JsIndex;
pub use iter::AsList;
pub use object::{Iter as ObjectIter, JsObject};
pub use string::JsString;

use crate::AccessError;

/// An immutable JSON value.
///
/// Containers and strings are reference counted, so cloning a value is cheap
/// and the clone shares its children with the original. Numeric variants keep
/// the width they were built with: `Int(21)` and `Long(21)` are different
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Object(JsObject),
    Array(JsArray),
    String(JsString),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Null,
}

const _: () = const {
    assert!(std::mem::size_of::<JsValue>() <= 24);
};

const _: fn() = || {
    fn shareable<T: Send + Sync>() {}
    shareable::<JsValue>();
};

/// The variant tag of a [`JsValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Null,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsValue {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            JsValue::Object(_) => Kind::Object,
            JsValue::Array(_) => Kind::Array,
            JsValue::String(_) => Kind::String,
            JsValue::Int(_) => Kind::Int,
            JsValue::Long(_) => Kind::Long,
            JsValue::Float(_) => Kind::Float,
            JsValue::Double(_) => Kind::Double,
            JsValue::Boolean(_) => Kind::Boolean,
            JsValue::Null => Kind::Null,
        }
    }

    /// Look up an object key or an array index.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::KeyNotFound`] or [`AccessError::IndexOutOfRange`]
    /// when the entry is absent, and [`AccessError::TypeMismatch`] when a key
    /// is used on a non-object or an index on a non-array.
    ///
    /// ```
    /// use kson::{js_array, js_object};
    ///
    /// let value = kson::to_js_value(js_object! { "tags" => js_array!["a", "b"] });
    /// assert_eq!(value.get("tags")?.get(1)?.as_str(), Some("b"));
    /// assert!(value.get("missing").is_err());
    /// # Ok::<(), kson::AccessError>(())
    /// ```
    pub fn get<I: JsIndex>(&self, index: I) -> Result<&JsValue, AccessError> {
        index.index_into(self)
    }

    /// Resolve a JSON pointer (RFC 6901) against this value.
    ///
    /// # Errors
    ///
    /// Fails at the first segment that cannot be resolved.
    pub fn pointer(&self, pointer: &str) -> Result<&JsValue, AccessError> {
        index::pointer(self, pointer)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            JsValue::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&JsArray> {
        match self {
            JsValue::Array(array) => Some(array),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(string) => Some(string.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            JsValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            JsValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            JsValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            JsValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Iterate the value as a sequence.
    ///
    /// An array yields its elements; any other value yields itself once, so
    /// "one or many" fields can be consumed by the same loop.
    pub fn as_list(&self) -> AsList<'_> {
        match self {
            JsValue::Array(array) => AsList::many(array.as_slice()),
            other => AsList::one(other),
        }
    }

    /// Owned counterpart of [`JsValue::as_list`].
    #[must_use]
    pub fn to_list(&self) -> Vec<JsValue> {
        self.as_list().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a JsValue {
    type Item = &'a JsValue;
    type IntoIter = AsList<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_list()
    }
}

impl fmt::Display for JsValue {
    /// Compact JSON text; the alternate flag (`{:#}`) pretty-prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
