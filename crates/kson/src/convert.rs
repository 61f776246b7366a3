//! Conversions between native scalars and [`JsValue`] nodes.
use std::sync::Arc;

use crate::{JsArray, JsObject, JsString, JsValue};

/// Convert a native value into a [`JsValue`].
///
/// Supported inputs are `&str`, `String`, `bool`, `i32`, `i64`, `f32`, `f64`,
/// the node types, `Vec<T>` and `Option<T>`. Numeric inputs keep their width.
/// Other types do not implement `Into<JsValue>` and are rejected at compile
/// time.
///
/// ```
/// use kson::{to_js_value, JsValue};
///
/// assert_eq!(to_js_value(21), JsValue::Int(21));
/// assert_eq!(to_js_value(21_i64), JsValue::Long(21));
/// assert_eq!(to_js_value(None::<bool>), JsValue::Null);
/// ```
pub fn to_js_value(value: impl Into<JsValue>) -> JsValue {
    value.into()
}

/// Extract a native value of the exact matching variant.
pub fn from_js_value<T: FromJsValue>(value: &JsValue) -> Option<T> {
    T::from_js_value(value)
}

/// `.js()` construction shorthand, equivalent to [`to_js_value`].
///
/// ```
/// use kson::{JsValue, ToJs};
///
/// assert_eq!(true.js(), JsValue::Boolean(true));
/// assert_eq!("Andrew".js().as_str(), Some("Andrew"));
/// ```
pub trait ToJs {
    fn js(self) -> JsValue;
}

impl<T: Into<JsValue>> ToJs for T {
    fn js(self) -> JsValue {
        self.into()
    }
}

/// Native types that can be read back from a [`JsValue`] of their own width.
pub trait FromJsValue: Sized {
    fn from_js_value(value: &JsValue) -> Option<Self>;
}

impl FromJsValue for String {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJsValue for JsString {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        match value {
            JsValue::String(string) => Some(string.clone()),
            _ => None,
        }
    }
}

impl FromJsValue for bool {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJsValue for i32 {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_int()
    }
}

impl FromJsValue for i64 {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_long()
    }
}

impl FromJsValue for f32 {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromJsValue for f64 {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_double()
    }
}

impl FromJsValue for JsObject {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromJsValue for JsArray {
    fn from_js_value(value: &JsValue) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl JsValue {
    /// Extract a native value, see [`from_js_value`].
    #[must_use]
    pub fn extract<T: FromJsValue>(&self) -> Option<T> {
        T::from_js_value(self)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for JsValue {
                fn from(value: $ty) -> Self {
                    JsValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    JsString => String,
    JsObject => Object,
    JsArray => Array,
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        JsValue::String(value.into())
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        JsValue::String(value.into())
    }
}

impl From<&String> for JsValue {
    fn from(value: &String) -> Self {
        JsValue::String(value.as_str().into())
    }
}

impl From<Arc<str>> for JsValue {
    fn from(value: Arc<str>) -> Self {
        JsValue::String(value.into())
    }
}

impl<T: Into<JsValue>> From<Vec<T>> for JsValue {
    fn from(values: Vec<T>) -> Self {
        JsValue::Array(values.into())
    }
}

impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsValue::Null, Into::into)
    }
}

impl From<()> for JsValue {
    fn from((): ()) -> Self {
        JsValue::Null
    }
}

impl From<&JsValue> for JsValue {
    fn from(value: &JsValue) -> Self {
        value.clone()
    }
}

/// Build a [`JsObject`] from `key => value` pairs.
///
/// Each value goes through [`to_js_value`](crate::to_js_value).
///
/// ```
/// use kson::{js_object, JsValue};
///
/// let pet = js_object! { "kind" => "dog", "age" => 3 };
/// assert_eq!(pet.get("age"), Some(&JsValue::Int(3)));
/// ```
#[macro_export]
macro_rules! js_object {
    () => {
        $crate::JsObject::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::JsObject::from([
            $(($crate::JsString::from($key), $crate::to_js_value($value))),+
        ])
    };
}

/// Build a [`JsArray`] from a list of values.
///
/// Elements may be of different native types.
#[macro_export]
macro_rules! js_array {
    () => {
        $crate::JsArray::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::JsArray::from([$($crate::to_js_value($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Debug;
    use test_case::test_case;

    fn assert_round_trip<T>(value: T)
    where
        T: Into<JsValue> + FromJsValue + PartialEq + Debug + Clone,
    {
        assert_eq!(from_js_value::<T>(&to_js_value(value.clone())), Some(value));
    }

    #[test]
    fn scalars_round_trip() {
        assert_round_trip(String::from("A"));
        assert_round_trip(true);
        assert_round_trip(21_i32);
        assert_round_trip(21_i64);
        assert_round_trip(21.3_f32);
        assert_round_trip(21.3_f64);
        assert_round_trip(i32::MIN);
        assert_round_trip(i64::MAX);
        assert_round_trip(f32::MAX);
        assert_round_trip(f64::MIN_POSITIVE);
    }

    #[test]
    fn containers_round_trip() {
        let object = js_object! { "a" => 1 };
        assert_eq!(from_js_value::<JsObject>(&JsValue::from(object.clone())), Some(object));
        let array = js_array![1, "b"];
        assert_eq!(from_js_value::<JsArray>(&JsValue::from(array.clone())), Some(array));
    }

    #[test]
    fn width_is_preserved() {
        let int = to_js_value(21);
        assert_eq!(int.as_int(), Some(21));
        assert_eq!(int.as_long(), None);
        assert_eq!(int.as_double(), None);

        let long = to_js_value(21_i64);
        assert_eq!(long.as_long(), Some(21));
        assert_eq!(long.as_int(), None);

        let float = to_js_value(21.3_f32);
        assert_eq!(float.as_float(), Some(21.3));
        assert_eq!(float.as_double(), None);

        let double = to_js_value(21.3);
        assert_eq!(double.as_double(), Some(21.3));
        assert_eq!(double.as_float(), None);
    }

    #[test_case(to_js_value("A"), "A".js())]
    #[test_case(to_js_value(true), true.js())]
    #[test_case(to_js_value(21), 21_i32.js())]
    #[test_case(to_js_value(21_i64), 21_i64.js())]
    #[test_case(to_js_value(1.5_f32), 1.5_f32.js())]
    #[test_case(to_js_value(1.5), 1.5_f64.js())]
    fn js_shorthand_matches_function(expected: JsValue, actual: JsValue) {
        assert_eq!(actual, expected);
    }

    #[test_case(to_js_value(None::<i32>), JsValue::Null)]
    #[test_case(to_js_value(Some(5)), JsValue::Int(5))]
    #[test_case(to_js_value(()), JsValue::Null)]
    #[test_case(to_js_value(vec![1, 2]), JsValue::Array(JsArray::from([1, 2])))]
    #[test_case(to_js_value(String::from("x")), JsValue::String("x".into()))]
    fn container_shapes(actual: JsValue, expected: JsValue) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn extract_mismatch_is_absent() {
        let value = to_js_value("Andrew");
        assert_eq!(value.extract::<String>().as_deref(), Some("Andrew"));
        assert_eq!(value.extract::<i32>(), None);
        assert_eq!(value.extract::<JsObject>(), None);
    }

    #[test]
    fn macros_accept_mixed_values() {
        let object = js_object! {
            "name" => "Rover",
            "age" => 3,
            "weight" => 12.5,
            "tags" => js_array!["good", "boy"],
            "owner" => None::<&str>,
        };
        assert_eq!(object.len(), 5);
        assert_eq!(object.get("owner"), Some(&JsValue::Null));
        assert_eq!(object.get("weight"), Some(&JsValue::Double(12.5)));
        assert_eq!(js_object! {}, JsObject::new());
        assert_eq!(js_array![], JsArray::new());
    }
}
