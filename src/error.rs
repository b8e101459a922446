use thiserror::Error;

use crate::models::error::ApiError;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The server answered with an error payload instead of data.
    #[error("remote fault: {0}")]
    RemoteFault(#[source] Box<ApiError>),

    #[error("field `{key}` cannot be read as {expected}")]
    DecodeTypeMismatch { key: String, expected: &'static str },

    #[error("`{token}` is not a known {enum_name} token")]
    UnknownEnumToken {
        enum_name: &'static str,
        token: String,
    },

    #[error("no codec registered for {type_name}")]
    CodecNotFound { type_name: &'static str },

    #[error("codec for {type_name} registered more than once")]
    DuplicateCodec { type_name: &'static str },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CodecError {
    pub(crate) fn mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::DecodeTypeMismatch {
            key: key.into(),
            expected,
        }
    }

    /// The remote fault carried by this error, if any.
    pub fn remote_fault(&self) -> Option<&ApiError> {
        match self {
            Self::RemoteFault(fault) => Some(fault),
            _ => None,
        }
    }
}

impl From<ApiError> for CodecError {
    fn from(fault: ApiError) -> Self {
        Self::RemoteFault(Box::new(fault))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_mismatch() {
        let err = CodecError::mismatch("id", "integer");
        assert_eq!(err.to_string(), "field `id` cannot be read as integer");
    }

    #[test]
    fn test_error_display_unknown_token() {
        let err = CodecError::UnknownEnumToken {
            enum_name: "PlaylistType",
            token: "RANDOM".to_string(),
        };
        assert_eq!(err.to_string(), "`RANDOM` is not a known PlaylistType token");
    }

    #[test]
    fn test_remote_fault_accessor() {
        let err: CodecError = ApiError::from_message("boom").into();
        assert_eq!(err.remote_fault().map(|f| f.message.as_str()), Some("boom"));
        assert!(CodecError::CodecNotFound { type_name: "x" }
            .remote_fault()
            .is_none());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CodecError = json_err.into();
        assert!(matches!(err, CodecError::Parse(_)));
    }
}
