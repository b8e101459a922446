use std::marker::PhantomData;

use crate::error::CodecError;
use crate::models::containers::{ItemCollection, ResultContainer};

use super::{
    enum_names::WireEnum,
    error_detector,
    registry::CodecRegistry,
    wire::{encode_list, FieldValue, WireMap, WireValue},
    Codec, RESULT_KEY,
};

const ITEMS_KEY: &str = "items";
const PAGE_NUMBER_KEY: &str = "page_number";
const PAGE_SIZE_KEY: &str = "page_size";
const TOTAL_COUNT_KEY: &str = "total_count";

/// Codec for `ItemCollection<T>`, the paged list returned by read calls.
pub struct CollectionCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> CollectionCodec<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: 'static> Default for CollectionCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> Codec<ItemCollection<T>> for CollectionCodec<T> {
    fn decode(
        &self,
        value: &WireValue,
        registry: &CodecRegistry,
    ) -> Result<ItemCollection<T>, CodecError> {
        let mut collection = ItemCollection::default();

        // A bare list is a collection without paging data.
        let map = match value {
            WireValue::Array(_) => {
                collection.items = FieldValue::new(ITEMS_KEY, value, registry).entities()?;
                return Ok(collection);
            }
            WireValue::Object(map) => map,
            _ => return Err(CodecError::mismatch("ItemCollection", "object or list")),
        };
        error_detector::raise_if_error(map, registry)?;

        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let field = FieldValue::new(key, value, registry);
            match key.as_str() {
                ITEMS_KEY => collection.items = field.entities()?,
                PAGE_NUMBER_KEY => collection.page_number = field.i64()?,
                PAGE_SIZE_KEY => collection.page_size = field.i64()?,
                TOTAL_COUNT_KEY => collection.total_count = field.i64()?,
                _ => log::trace!("ignoring unrecognized key `{}` on ItemCollection", key),
            }
        }
        Ok(collection)
    }

    fn encode(
        &self,
        collection: &ItemCollection<T>,
        registry: &CodecRegistry,
    ) -> Result<WireValue, CodecError> {
        let mut map = WireMap::new();
        map.insert(ITEMS_KEY.to_string(), encode_list(&collection.items, registry)?);
        map.insert(PAGE_NUMBER_KEY.to_string(), collection.page_number.into());
        map.insert(PAGE_SIZE_KEY.to_string(), collection.page_size.into());
        map.insert(TOTAL_COUNT_KEY.to_string(), collection.total_count.into());
        Ok(WireValue::Object(map))
    }
}

/// Codec for `ResultContainer<T>`, the envelope around write responses.
pub struct EnvelopeCodec<T> {
    payload_key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> EnvelopeCodec<T> {
    pub fn new(payload_key: &'static str) -> Self {
        Self {
            payload_key,
            _marker: PhantomData,
        }
    }

    pub fn payload_key(&self) -> &'static str {
        self.payload_key
    }
}

impl<T: Default + Send + Sync + 'static> Codec<ResultContainer<T>> for EnvelopeCodec<T> {
    fn decode(
        &self,
        value: &WireValue,
        registry: &CodecRegistry,
    ) -> Result<ResultContainer<T>, CodecError> {
        let map = value
            .as_object()
            .ok_or_else(|| CodecError::mismatch("ResultContainer", "object"))?;
        error_detector::raise_if_error(map, registry)?;

        let result = match map.get(self.payload_key) {
            None => {
                log::trace!(
                    "envelope has no `{}` key, using the default payload",
                    self.payload_key
                );
                T::default()
            }
            Some(WireValue::Null) => T::default(),
            Some(payload) => registry.decode(payload)?,
        };
        Ok(ResultContainer { result })
    }

    fn encode(
        &self,
        envelope: &ResultContainer<T>,
        registry: &CodecRegistry,
    ) -> Result<WireValue, CodecError> {
        let mut map = WireMap::new();
        map.insert(self.payload_key.to_string(), registry.encode(&envelope.result)?);
        Ok(WireValue::Object(map))
    }
}

/// A plain value that can stand alone as an envelope payload.
pub trait WireScalar: Sized + Send + Sync + 'static {
    fn from_wire(field: &FieldValue<'_>) -> Result<Self, CodecError>;

    fn to_wire(&self) -> WireValue;
}

impl WireScalar for i64 {
    fn from_wire(field: &FieldValue<'_>) -> Result<Self, CodecError> {
        field.i64()
    }

    fn to_wire(&self) -> WireValue {
        WireValue::from(*self)
    }
}

impl WireScalar for Vec<i64> {
    fn from_wire(field: &FieldValue<'_>) -> Result<Self, CodecError> {
        field.i64s()
    }

    fn to_wire(&self) -> WireValue {
        WireValue::from(self.clone())
    }
}

impl WireScalar for String {
    fn from_wire(field: &FieldValue<'_>) -> Result<Self, CodecError> {
        field.string()
    }

    fn to_wire(&self) -> WireValue {
        WireValue::from(self.as_str())
    }
}

impl WireScalar for bool {
    fn from_wire(field: &FieldValue<'_>) -> Result<Self, CodecError> {
        field.bool()
    }

    fn to_wire(&self) -> WireValue {
        WireValue::from(*self)
    }
}

pub struct ScalarCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: WireScalar> ScalarCodec<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: WireScalar> Default for ScalarCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WireScalar> Codec<T> for ScalarCodec<T> {
    fn decode(&self, value: &WireValue, registry: &CodecRegistry) -> Result<T, CodecError> {
        T::from_wire(&FieldValue::new(RESULT_KEY, value, registry))
    }

    fn encode(&self, item: &T, _registry: &CodecRegistry) -> Result<WireValue, CodecError> {
        Ok(item.to_wire())
    }
}

pub struct EnumCodec<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E: WireEnum> EnumCodec<E> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E: WireEnum> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum> Codec<E> for EnumCodec<E> {
    fn decode(&self, value: &WireValue, registry: &CodecRegistry) -> Result<E, CodecError> {
        FieldValue::new(RESULT_KEY, value, registry).wire_enum()
    }

    fn encode(&self, item: &E, _registry: &CodecRegistry) -> Result<WireValue, CodecError> {
        Ok(WireValue::from(item.to_wire_name()?))
    }
}
