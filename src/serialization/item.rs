use std::marker::PhantomData;

use log::trace;

use crate::error::CodecError;

use super::{
    error_detector,
    registry::CodecRegistry,
    wire::{FieldValue, WireMap, WireValue},
    Codec,
};

pub type DecodeRule<T> = fn(&mut T, &FieldValue<'_>) -> Result<(), CodecError>;
pub type EncodeRule<T> = fn(&T, &CodecRegistry) -> Result<Option<WireValue>, CodecError>;

/// How one wire key maps onto a field of `T`.
///
/// An encode rule returning `None` leaves the key out of the encoded map.
pub struct Field<T> {
    pub key: &'static str,
    pub decode: DecodeRule<T>,
    pub encode: EncodeRule<T>,
}

impl<T> Field<T> {
    pub const fn new(key: &'static str, decode: DecodeRule<T>, encode: EncodeRule<T>) -> Self {
        Self {
            key,
            decode,
            encode,
        }
    }

    /// A server-assigned field that is never sent back.
    pub const fn read_only(key: &'static str, decode: DecodeRule<T>) -> Self {
        Self {
            key,
            decode,
            encode: skip::<T>,
        }
    }
}

fn skip<T>(_: &T, _: &CodecRegistry) -> Result<Option<WireValue>, CodecError> {
    Ok(None)
}

/// A domain type described by a field-rule table.
pub trait Entity: Default + Send + Sync + 'static {
    const TYPE_NAME: &'static str;

    /// Encode order is table order.
    const FIELDS: &'static [Field<Self>];

    /// Whether the reserved error key aborts decoding of this type.
    const DETECTS_ERRORS: bool = true;
}

/// Generic codec driving an [`Entity`]'s field table.
pub struct ItemCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> ItemCodec<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> Default for ItemCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Codec<T> for ItemCodec<T> {
    fn decode(&self, value: &WireValue, registry: &CodecRegistry) -> Result<T, CodecError> {
        let map = value
            .as_object()
            .ok_or_else(|| CodecError::mismatch(T::TYPE_NAME, "object"))?;
        if T::DETECTS_ERRORS {
            error_detector::raise_if_error(map, registry)?;
        }

        let mut item = T::default();
        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            match T::FIELDS.iter().find(|field| field.key == key.as_str()) {
                Some(field) => (field.decode)(&mut item, &FieldValue::new(key, value, registry))?,
                None => trace!("ignoring unrecognized key `{}` on {}", key, T::TYPE_NAME),
            }
        }
        Ok(item)
    }

    fn encode(&self, item: &T, registry: &CodecRegistry) -> Result<WireValue, CodecError> {
        let mut map = WireMap::new();
        for field in T::FIELDS {
            if let Some(value) = (field.encode)(item, registry)? {
                map.insert(field.key.to_string(), value);
            }
        }
        Ok(WireValue::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Probe {
        count: i64,
        label: Option<String>,
        secret: i64,
    }

    impl Entity for Probe {
        const TYPE_NAME: &'static str = "Probe";
        const FIELDS: &'static [Field<Self>] = &[
            Field::new(
                "label",
                |p, v| {
                    p.label = Some(v.string()?);
                    Ok(())
                },
                |p, _| Ok(p.label.as_ref().map(|l| WireValue::from(l.as_str()))),
            ),
            Field::new(
                "count",
                |p, v| {
                    p.count = v.i64()?;
                    Ok(())
                },
                |p, _| Ok(Some(WireValue::from(p.count))),
            ),
            Field::read_only("secret", |p, v| {
                p.secret = v.i64()?;
                Ok(())
            }),
        ];
    }

    fn registry() -> CodecRegistry {
        let mut builder = CodecRegistry::builder();
        builder.entity::<Probe>().entity::<crate::models::error::ApiError>();
        builder.build().unwrap()
    }

    #[test]
    fn test_decode_fields() {
        let probe: Probe = registry()
            .decode(&json!({ "count": 3, "label": "x", "secret": 9 }))
            .unwrap();
        assert_eq!(
            probe,
            Probe {
                count: 3,
                label: Some("x".to_string()),
                secret: 9
            }
        );
    }

    #[test]
    fn test_missing_and_null_keep_defaults() {
        let probe: Probe = registry().decode(&json!({ "label": null })).unwrap();
        assert_eq!(probe, Probe::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let registry = registry();
        let plain: Probe = registry.decode(&json!({ "count": 1 })).unwrap();
        let extra: Probe = registry
            .decode(&json!({ "count": 1, "brandNewField": [1, 2] }))
            .unwrap();
        assert_eq!(plain, extra);
    }

    #[test]
    fn test_encode_order_and_omission() {
        let registry = registry();
        let encoded = registry
            .encode(&Probe {
                count: 2,
                label: None,
                secret: 5,
            })
            .unwrap();
        assert_eq!(encoded, json!({ "count": 2 }));

        let encoded = registry
            .encode(&Probe {
                count: 2,
                label: Some("a".to_string()),
                secret: 0,
            })
            .unwrap();
        let keys: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["label", "count"]);
    }

    #[test]
    fn test_type_mismatch_names_key() {
        let err = registry()
            .decode::<Probe>(&json!({ "count": "many" }))
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::DecodeTypeMismatch { ref key, expected: "integer" } if key == "count"
        ));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = registry().decode::<Probe>(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, CodecError::DecodeTypeMismatch { .. }));
    }

    #[test]
    fn test_error_takes_precedence() {
        let err = registry()
            .decode::<Probe>(&json!({
                "count": 4,
                "label": "looks valid",
                "error": { "name": "UnknownServerError", "message": "oops", "code": 100 }
            }))
            .unwrap_err();
        assert_eq!(err.remote_fault().map(|f| f.code), Some(100));
    }
}
