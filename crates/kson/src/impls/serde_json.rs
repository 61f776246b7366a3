use serde_json::{Map, Value};

use crate::JsValue;

impl From<Value> for JsValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsValue::Null,
            Value::Bool(b) => JsValue::Boolean(b),
            Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    i32::try_from(i).map_or(JsValue::Long(i), JsValue::Int)
                } else {
                    // Floats and integers above `i64::MAX`
                    JsValue::Double(num.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => JsValue::from(s),
            Value::Array(old) => JsValue::Array(old.into_iter().map(JsValue::from).collect()),
            Value::Object(old) => JsValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, JsValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Numeric widths collapse into `serde_json::Number`. Key order follows the
/// `Map` implementation selected by `serde_json` features.
impl From<&JsValue> for Value {
    fn from(value: &JsValue) -> Self {
        match value {
            JsValue::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(k, v)| (k.to_owned(), Value::from(v)))
                    .collect::<Map<_, _>>(),
            ),
            JsValue::Array(array) => Value::Array(array.iter().map(Value::from).collect()),
            JsValue::String(s) => Value::String(s.as_str().to_owned()),
            JsValue::Int(i) => Value::from(*i),
            JsValue::Long(i) => Value::from(*i),
            JsValue::Float(f) => Value::from(widen(*f)),
            JsValue::Double(f) => Value::from(*f),
            JsValue::Boolean(b) => Value::Bool(*b),
            JsValue::Null => Value::Null,
        }
    }
}

/// Widen through the shortest decimal form, so `21.3_f32` becomes `21.3`
/// rather than `21.299999237060547`.
fn widen(value: f32) -> f64 {
    value
        .to_string()
        .parse()
        .unwrap_or_else(|_| f64::from(value))
}

impl From<JsValue> for Value {
    fn from(value: JsValue) -> Self {
        Value::from(&value)
    }
}

impl PartialEq<Value> for JsValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsValue> for Value {
    fn eq(&self, other: &JsValue) -> bool {
        eq(self, other)
    }
}

/// Width-insensitive comparison: `serde_json` numbers carry no width.
fn eq(lhs: &Value, rhs: &JsValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsValue::Null) => true,
        (Value::Bool(l), JsValue::Boolean(r)) => l == r,
        (Value::Number(l), JsValue::Int(r)) => l.as_i64() == Some(i64::from(*r)),
        (Value::Number(l), JsValue::Long(r)) => l.as_i64() == Some(*r),
        (Value::Number(l), JsValue::Float(r)) => l.as_f64() == Some(widen(*r)),
        (Value::Number(l), JsValue::Double(r)) => l.as_f64() == Some(*r),
        (Value::String(l), JsValue::String(r)) => l.as_str() == r.as_str(),
        (Value::Array(l), JsValue::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                if !eq(l, r) {
                    return false;
                }
            }
            true
        }
        (Value::Object(l), JsValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key.as_str()) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{js_array, js_object, JsObject};
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), JsValue::Null; "null")]
    #[test_case(json!(true), JsValue::Boolean(true); "bool")]
    #[test_case(json!(42), JsValue::Int(42); "positive int")]
    #[test_case(json!(-42), JsValue::Int(-42); "negative int")]
    #[test_case(json!(5_000_000_000_i64), JsValue::Long(5_000_000_000); "long")]
    #[test_case(json!(u64::MAX), JsValue::Double(1.844_674_407_370_955_2e19); "beyond long")]
    #[test_case(json!(3.25), JsValue::Double(3.25); "float")]
    #[test_case(json!("hello"), JsValue::from("hello"); "string")]
    #[test_case(json!([1, 2, 3]), JsValue::from(js_array![1, 2, 3]); "array")]
    fn from_serde_json(input: Value, expected: JsValue) {
        assert_eq!(JsValue::from(input), expected);
    }

    #[test]
    fn object() {
        let custom_value = JsValue::from(json!({
            "a": 1,
            "b": "test",
            "c": true
        }));
        let expected = JsObject::from([
            ("a", JsValue::Int(1)),
            ("b", JsValue::from("test")),
            ("c", JsValue::Boolean(true)),
        ]);
        assert_eq!(custom_value, JsValue::Object(expected));
    }

    #[test]
    fn into_serde_json() {
        let value = JsValue::from(js_object! {
            "name" => "Rover",
            "age" => 3_i64,
            "weight" => 12.5_f32,
            "tags" => js_array!["good", ()],
        });
        assert_eq!(
            Value::from(&value),
            json!({"name": "Rover", "age": 3, "weight": 12.5, "tags": ["good", null]})
        );
    }

    #[test]
    fn cross_type_equality() {
        let value = JsValue::from(js_object! { "a" => js_array![1, 2.5] });
        assert_eq!(value, json!({"a": [1, 2.5]}));
        assert_eq!(json!({"a": [1, 2.5]}), value);
        assert_ne!(value, json!({"a": [1, 2.5, 3]}));
        assert_ne!(value, json!({"b": [1, 2.5]}));
        assert_ne!(JsValue::Int(1), json!("1"));
    }

    #[test]
    fn float_exports_as_printed() {
        let value = JsValue::Float(21.3);
        assert_eq!(Value::from(&value), json!(21.3));
        assert_eq!(value, json!(21.3));
        assert_eq!(
            Value::from(&value).to_string(),
            crate::json::to_string(&value).expect("Failed to serialize JSON")
        );
    }
}
