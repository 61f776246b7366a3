use serde::ser::{self, Serialize, Serializer};

use crate::{Error, JsArray, JsObject, JsString, JsValue};

impl Serialize for JsValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsValue::Object(object) => object.serialize(serializer),
            JsValue::Array(array) => array.serialize(serializer),
            JsValue::String(string) => serializer.serialize_str(string),
            JsValue::Int(value) => serializer.serialize_i32(*value),
            JsValue::Long(value) => serializer.serialize_i64(*value),
            JsValue::Float(value) => serializer.serialize_f32(*value),
            JsValue::Double(value) => serializer.serialize_f64(*value),
            JsValue::Boolean(value) => serializer.serialize_bool(*value),
            JsValue::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for JsObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for JsArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl Serialize for JsString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Convert any `Serialize` value into a [`JsValue`], keeping numeric widths.
///
/// `i8`, `i16`, `u8`, `u16` and `i32` become `Int`; `u32` and `i64` become
/// `Long`; `u64` becomes `Long` when it fits. Structs and maps become objects
/// and enum variants are externally tagged.
///
/// # Errors
///
/// [`Error::UnsupportedType`] for byte arrays, 128-bit integers, `u64` values
/// above `i64::MAX` and maps with non-string keys. Errors raised by the
/// `Serialize` implementation itself are reported as [`Error::Custom`].
///
/// ```
/// use kson::JsValue;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Pet {
///     kind: &'static str,
///     age: u8,
/// }
///
/// let pet = kson::to_value(&Pet { kind: "dog", age: 3 })?;
/// assert_eq!(pet["age"], JsValue::Int(3));
/// # Ok::<(), kson::Error>(())
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, Error> {
    value.serialize(ValueSerializer)
}

struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = JsValue;
    type Error = Error;

    type SerializeSeq = ArrayBuilder;
    type SerializeTuple = ArrayBuilder;
    type SerializeTupleStruct = ArrayBuilder;
    type SerializeTupleVariant = TupleVariantBuilder;
    type SerializeMap = ObjectBuilder;
    type SerializeStruct = ObjectBuilder;
    type SerializeStructVariant = StructVariantBuilder;

    fn serialize_bool(self, v: bool) -> Result<JsValue, Error> {
        Ok(JsValue::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsValue, Error> {
        Ok(JsValue::Int(i32::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<JsValue, Error> {
        Ok(JsValue::Int(i32::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<JsValue, Error> {
        Ok(JsValue::Int(v))
    }

    fn serialize_i64(self, v: i64) -> Result<JsValue, Error> {
        Ok(JsValue::Long(v))
    }

    fn serialize_i128(self, _: i128) -> Result<JsValue, Error> {
        Err(Error::unsupported("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<JsValue, Error> {
        Ok(JsValue::Int(i32::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<JsValue, Error> {
        Ok(JsValue::Int(i32::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<JsValue, Error> {
        Ok(JsValue::Long(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<JsValue, Error> {
        i64::try_from(v)
            .map(JsValue::Long)
            .map_err(|_| Error::unsupported("u64 above i64::MAX"))
    }

    fn serialize_u128(self, _: u128) -> Result<JsValue, Error> {
        Err(Error::unsupported("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<JsValue, Error> {
        Ok(JsValue::Float(v))
    }

    fn serialize_f64(self, v: f64) -> Result<JsValue, Error> {
        Ok(JsValue::Double(v))
    }

    fn serialize_char(self, v: char) -> Result<JsValue, Error> {
        let mut buffer = [0; 4];
        Ok(JsValue::from(&*v.encode_utf8(&mut buffer)))
    }

    fn serialize_str(self, v: &str) -> Result<JsValue, Error> {
        Ok(JsValue::from(v))
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<JsValue, Error> {
        Err(Error::unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<JsValue, Error> {
        Ok(JsValue::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<JsValue, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsValue, Error> {
        Ok(JsValue::Null)
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<JsValue, Error> {
        Ok(JsValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> Result<JsValue, Error> {
        Ok(JsValue::from(variant))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<JsValue, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<JsValue, Error> {
        let object = JsObject::from([(variant, to_value(value)?)]);
        Ok(JsValue::Object(object))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ArrayBuilder, Error> {
        Ok(ArrayBuilder {
            values: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<ArrayBuilder, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _: &'static str, len: usize) -> Result<ArrayBuilder, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantBuilder, Error> {
        Ok(TupleVariantBuilder {
            variant,
            values: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<ObjectBuilder, Error> {
        Ok(ObjectBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, _: &'static str, len: usize) -> Result<ObjectBuilder, Error> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructVariantBuilder, Error> {
        Ok(StructVariantBuilder {
            variant,
            entries: Vec::with_capacity(len),
        })
    }
}

struct ArrayBuilder {
    values: Vec<JsValue>,
}

impl ser::SerializeSeq for ArrayBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.values.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue, Error> {
        Ok(JsValue::Array(self.values.into()))
    }
}

impl ser::SerializeTuple for ArrayBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<JsValue, Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for ArrayBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<JsValue, Error> {
        ser::SerializeSeq::end(self)
    }
}

struct TupleVariantBuilder {
    variant: &'static str,
    values: Vec<JsValue>,
}

impl ser::SerializeTupleVariant for TupleVariantBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.values.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue, Error> {
        let values = JsValue::Array(self.values.into());
        Ok(JsValue::Object(JsObject::from([(self.variant, values)])))
    }
}

struct ObjectBuilder {
    entries: Vec<(JsString, JsValue)>,
    next_key: Option<JsString>,
}

/// Object keys must serialize to strings; unit enum variants qualify.
fn object_key<T: Serialize + ?Sized>(key: &T) -> Result<JsString, Error> {
    match to_value(key)? {
        JsValue::String(key) => Ok(key),
        _ => Err(Error::unsupported("non-string object key")),
    }
}

impl ser::SerializeMap for ObjectBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Error> {
        self.next_key = Some(object_key(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::Custom("Map value serialized before its key".to_string()))?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<JsValue, Error> {
        Ok(JsValue::Object(self.entries.into_iter().collect()))
    }
}

impl ser::SerializeStruct for ObjectBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        self.entries.push((key.into(), to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<JsValue, Error> {
        ser::SerializeMap::end(self)
    }
}

struct StructVariantBuilder {
    variant: &'static str,
    entries: Vec<(JsString, JsValue)>,
}

impl ser::SerializeStructVariant for StructVariantBuilder {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        self.entries.push((key.into(), to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<JsValue, Error> {
        let fields: JsObject = self.entries.into_iter().collect();
        Ok(JsValue::Object(JsObject::from([(self.variant, fields)])))
    }
}
