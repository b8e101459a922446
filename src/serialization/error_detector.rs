use crate::error::CodecError;
use crate::models::error::ApiError;

use super::{registry::CodecRegistry, wire::WireMap, wire::WireValue, ERROR_KEY};

/// Looks for the reserved error key and decodes its fault, cause chain included.
pub fn check(map: &WireMap, registry: &CodecRegistry) -> Result<Option<ApiError>, CodecError> {
    match map.get(ERROR_KEY) {
        None | Some(WireValue::Null) => Ok(None),
        Some(WireValue::String(message)) => Ok(Some(ApiError::from_message(message.clone()))),
        Some(value) => registry.decode::<ApiError>(value).map(Some),
    }
}

/// Fails with [`CodecError::RemoteFault`] when the map carries an error.
pub fn raise_if_error(map: &WireMap, registry: &CodecRegistry) -> Result<(), CodecError> {
    match check(map, registry)? {
        Some(fault) => {
            log::debug!("remote fault detected: {}", fault);
            Err(fault.into())
        }
        None => Ok(()),
    }
}
