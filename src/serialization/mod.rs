use crate::error::CodecError;

pub mod containers;
pub mod enum_names;
pub mod error_detector;
pub mod item;
pub mod registry;
pub mod wire;

use registry::CodecRegistry;
use wire::WireValue;

/// Reserved key carrying a remote fault in any response object.
pub const ERROR_KEY: &str = "error";

/// Payload key of the write response envelope.
pub const RESULT_KEY: &str = "result";

/// Decode/encode pair for one Rust type.
///
/// Codecs receive the registry so nested values can be resolved by type.
pub trait Codec<T>: Send + Sync {
    fn decode(&self, value: &WireValue, registry: &CodecRegistry) -> Result<T, CodecError>;

    fn encode(&self, item: &T, registry: &CodecRegistry) -> Result<WireValue, CodecError>;
}
