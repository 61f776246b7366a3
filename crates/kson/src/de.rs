use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::{JsArray, JsObject, JsString, JsValue};

/// Upper bound on preallocation from a length reported by the input.
const MAX_PREALLOCATION: usize = 4096;

fn cautious(hint: Option<usize>) -> usize {
    hint.unwrap_or(0).min(MAX_PREALLOCATION)
}

/// Integers take the narrowest of `Int` and `Long` that holds them; anything
/// with a fraction or an exponent is a `Double`.
fn integer(value: i64) -> JsValue {
    i32::try_from(value).map_or(JsValue::Long(value), JsValue::Int)
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = JsValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<JsValue, E> {
        Ok(JsValue::Boolean(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<JsValue, E> {
        Ok(integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<JsValue, E> {
        if let Ok(value) = i64::try_from(value) {
            Ok(integer(value))
        } else {
            tracing::debug!(
                value,
                "Integer exceeds the 64-bit signed range, storing as double"
            );
            #[allow(clippy::cast_precision_loss)]
            let widened = value as f64;
            Ok(JsValue::Double(widened))
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<JsValue, E> {
        Ok(JsValue::Double(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<JsValue, E> {
        Ok(JsValue::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<JsValue, E> {
        Ok(JsValue::from(value))
    }

    fn visit_none<E: de::Error>(self) -> Result<JsValue, E> {
        Ok(JsValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<JsValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsValue, E> {
        Ok(JsValue::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<JsValue, A::Error> {
        let mut values = Vec::with_capacity(cautious(seq.size_hint()));
        while let Some(value) = seq.next_element::<JsValue>()? {
            values.push(value);
        }
        Ok(JsValue::Array(JsArray::from(values)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JsValue, A::Error> {
        let mut entries: Vec<(JsString, JsValue)> = Vec::with_capacity(cautious(map.size_hint()));
        while let Some((key, value)) = map.next_entry::<String, JsValue>()? {
            entries.push((key.into(), value));
        }
        Ok(JsValue::Object(entries.into_iter().collect::<JsObject>()))
    }
}

impl<'de> Deserialize<'de> for JsValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<JsValue, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
