use std::collections::BTreeMap;

use crate::error::CodecError;

use super::{enum_names::WireEnum, registry::CodecRegistry};

/// The parsed, untyped shape of a MAPI payload.
pub type WireValue = serde_json::Value;

/// An ordered wire object.
pub type WireMap = serde_json::Map<String, WireValue>;

/// One present, non-null entry of a wire map, handed to a field's decode rule.
pub struct FieldValue<'a> {
    key: &'a str,
    value: &'a WireValue,
    registry: &'a CodecRegistry,
}

impl<'a> FieldValue<'a> {
    pub fn new(key: &'a str, value: &'a WireValue, registry: &'a CodecRegistry) -> Self {
        Self {
            key,
            value,
            registry,
        }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn raw(&self) -> &'a WireValue {
        self.value
    }

    pub fn registry(&self) -> &'a CodecRegistry {
        self.registry
    }

    fn mismatch(&self, expected: &'static str) -> CodecError {
        CodecError::mismatch(self.key, expected)
    }

    pub fn i64(&self) -> Result<i64, CodecError> {
        to_i64(self.value).ok_or_else(|| self.mismatch("integer"))
    }

    pub fn i32(&self) -> Result<i32, CodecError> {
        to_i64(self.value)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.mismatch("32-bit integer"))
    }

    pub fn f64(&self) -> Result<f64, CodecError> {
        match self.value {
            WireValue::Number(n) => n.as_f64(),
            WireValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| self.mismatch("number"))
    }

    pub fn bool(&self) -> Result<bool, CodecError> {
        match self.value {
            WireValue::Bool(b) => Some(*b),
            WireValue::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            WireValue::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
        .ok_or_else(|| self.mismatch("boolean"))
    }

    pub fn string(&self) -> Result<String, CodecError> {
        self.value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch("string"))
    }

    /// Epoch milliseconds. MAPI sends dates as numeric strings.
    pub fn millis(&self) -> Result<i64, CodecError> {
        to_i64(self.value).ok_or_else(|| self.mismatch("epoch milliseconds"))
    }

    pub fn strings(&self) -> Result<Vec<String>, CodecError> {
        self.elements("list of strings")?
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mismatch("list of strings"))
            })
            .collect()
    }

    pub fn i64s(&self) -> Result<Vec<i64>, CodecError> {
        self.elements("list of integers")?
            .iter()
            .map(|v| to_i64(v).ok_or_else(|| self.mismatch("list of integers")))
            .collect()
    }

    pub fn string_map(&self) -> Result<BTreeMap<String, String>, CodecError> {
        let map = self
            .value
            .as_object()
            .ok_or_else(|| self.mismatch("map of strings"))?;
        map.iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| match v {
                WireValue::String(s) => Ok((k.clone(), s.clone())),
                WireValue::Number(n) => Ok((k.clone(), n.to_string())),
                WireValue::Bool(b) => Ok((k.clone(), b.to_string())),
                _ => Err(self.mismatch("map of strings")),
            })
            .collect()
    }

    pub fn wire_enum<E: WireEnum>(&self) -> Result<E, CodecError> {
        let token = self
            .value
            .as_str()
            .ok_or_else(|| self.mismatch(E::NAMES.name()))?;
        E::from_wire_name(token)
    }

    pub fn entity<T: 'static>(&self) -> Result<T, CodecError> {
        self.registry.decode(self.value)
    }

    /// Decodes a wire list element-wise through the codec registered for `T`.
    pub fn entities<T: 'static>(&self) -> Result<Vec<T>, CodecError> {
        let codec = self.registry.resolve::<T>()?;
        self.elements("list")?
            .iter()
            .map(|v| codec.decode(v, self.registry))
            .collect()
    }

    fn elements(&self, expected: &'static str) -> Result<&'a Vec<WireValue>, CodecError> {
        self.value.as_array().ok_or_else(|| self.mismatch(expected))
    }
}

fn to_i64(value: &WireValue) -> Option<i64> {
    match value {
        WireValue::Number(n) => n.as_i64().or_else(|| {
            // `i64::MAX as f64` is 2^63, already out of range.
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        WireValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Encodes a slice element-wise through the codec registered for `T`.
pub fn encode_list<T: 'static>(
    items: &[T],
    registry: &CodecRegistry,
) -> Result<WireValue, CodecError> {
    let codec = registry.resolve::<T>()?;
    items
        .iter()
        .map(|item| codec.encode(item, registry))
        .collect::<Result<Vec<_>, _>>()
        .map(WireValue::Array)
}

/// An optional string that is left out of the map when unset.
pub fn text(value: &Option<String>) -> Option<WireValue> {
    value.as_deref().map(WireValue::from)
}

/// A value for a key that is always sent, as `null` when unset.
pub fn nullable<T: Clone + Into<WireValue>>(value: &Option<T>) -> WireValue {
    value.clone().map_or(WireValue::Null, Into::into)
}

/// Encodes an enum field, omitting the key for the enum's unset value.
pub fn encode_enum<E: WireEnum>(value: E) -> Result<Option<WireValue>, CodecError> {
    if E::NAMES.is_unset(value) {
        return Ok(None);
    }
    Ok(Some(WireValue::from(value.to_wire_name()?)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::enums::PlaylistType;

    fn with_field<R>(value: WireValue, f: impl FnOnce(FieldValue<'_>) -> R) -> R {
        let registry = CodecRegistry::builder().build().unwrap();
        f(FieldValue::new("field", &value, &registry))
    }

    #[test]
    fn test_i64_accepts_numeric_strings() {
        assert_eq!(with_field(json!(42), |v| v.i64().unwrap()), 42);
        assert_eq!(with_field(json!("1316455623640"), |v| v.millis().unwrap()), 1316455623640);
        assert_eq!(with_field(json!(7.0), |v| v.i64().unwrap()), 7);
    }

    #[test]
    fn test_i64_rejects_text() {
        let err = with_field(json!("abc"), |v| v.i64().unwrap_err());
        match err {
            CodecError::DecodeTypeMismatch { key, expected } => {
                assert_eq!(key, "field");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_numbers_fail() {
        for value in [json!(1e30), json!(-1e30), json!(9223372036854775808u64)] {
            let err = with_field(value.clone(), |v| v.i64().unwrap_err());
            assert!(
                matches!(err, CodecError::DecodeTypeMismatch { .. }),
                "{value} decoded as an integer"
            );
            assert!(with_field(value.clone(), |v| v.millis().is_err()));
            assert!(with_field(json!([1, value]), |v| v.i64s().is_err()));
        }
        assert_eq!(with_field(json!(i64::MAX), |v| v.i64().unwrap()), i64::MAX);
        assert_eq!(with_field(json!(-9.0e15), |v| v.i64().unwrap()), -9_000_000_000_000_000);
    }

    #[test]
    fn test_i32_out_of_range() {
        assert!(with_field(json!(5_000_000_000i64), |v| v.i32().is_err()));
    }

    #[test]
    fn test_string_rejects_number() {
        assert!(with_field(json!(12), |v| v.string().is_err()));
    }

    #[test]
    fn test_lists_preserve_order() {
        let ids = with_field(json!([3, 1, 2]), |v| v.i64s().unwrap());
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(with_field(json!(["a", 1]), |v| v.strings().is_err()));
    }

    #[test]
    fn test_wire_enum_field() {
        let kind = with_field(json!("ALPHABETICAL"), |v| v.wire_enum::<PlaylistType>().unwrap());
        assert_eq!(kind, PlaylistType::Alphabetical);
        assert!(with_field(json!(3), |v| v.wire_enum::<PlaylistType>().is_err()));
    }

    #[test]
    fn test_entity_without_codec() {
        let err = with_field(json!({}), |v| v.entity::<PlaylistType>().unwrap_err());
        assert!(matches!(err, CodecError::CodecNotFound { .. }));
    }
}
