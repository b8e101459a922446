//! Typed object model for the Brightcove Media API.
//!
//! Responses are parsed into untyped [`WireValue`](serialization::wire::WireValue)
//! trees and turned into domain types through a closed
//! [`CodecRegistry`](serialization::registry::CodecRegistry). The wire format
//! carries no type tags, so callers always name the type they expect:
//!
//! ```no_run
//! use mapi_codec::models::{ItemCollection, Video};
//!
//! let registry = mapi_codec::init()?;
//! let page: ItemCollection<Video> = registry.from_str(r#"{"items": []}"#)?;
//! # Ok::<(), mapi_codec::CodecError>(())
//! ```

pub mod error;
pub mod models;
pub mod serialization;

pub use error::CodecError;
pub use serialization::registry::{init, CodecRegistry};
