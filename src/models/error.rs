use std::fmt;

use crate::serialization::{
    item::{Entity, Field},
    wire::WireValue,
    ERROR_KEY,
};

/// A fault reported by the media API, possibly caused by a nested fault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    pub name: String,
    pub message: String,
    pub code: i64,
    pub cause: Option<Box<ApiError>>,
}

impl ApiError {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// This fault followed by each nested cause.
    pub fn chain(&self) -> impl Iterator<Item = &ApiError> {
        std::iter::successors(Some(self), |fault| fault.cause.as_deref())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} (code {})", self.message, self.code)
        } else {
            write!(f, "{}: {} (code {})", self.name, self.message, self.code)
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl Entity for ApiError {
    const TYPE_NAME: &'static str = "ApiError";

    // The error key of a fault is its cause, not a fault of its own.
    const DETECTS_ERRORS: bool = false;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new(
            "name",
            |e, v| {
                e.name = v.string()?;
                Ok(())
            },
            |e, _| Ok(Some(WireValue::from(e.name.as_str()))),
        ),
        Field::new(
            "message",
            |e, v| {
                e.message = v.string()?;
                Ok(())
            },
            |e, _| Ok(Some(WireValue::from(e.message.as_str()))),
        ),
        Field::new(
            "code",
            |e, v| {
                e.code = v.i64()?;
                Ok(())
            },
            |e, _| Ok(Some(WireValue::from(e.code))),
        ),
        Field::new(
            ERROR_KEY,
            |e, v| {
                let cause = match v.raw().as_str() {
                    Some(message) => ApiError::from_message(message),
                    None => v.entity::<ApiError>()?,
                };
                e.cause = Some(Box::new(cause));
                Ok(())
            },
            |e, registry| match &e.cause {
                Some(cause) => Ok(Some(registry.encode::<ApiError>(cause)?)),
                None => Ok(None),
            },
        ),
    ];
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use serde_json::json;

    use super::*;
    use crate::serialization::registry::CodecRegistry;

    #[test]
    fn test_decode_chain() {
        let registry = CodecRegistry::standard().unwrap();
        let fault: ApiError = registry
            .decode(&json!({
                "name": "UploadFailed",
                "message": "could not transcode",
                "code": 400,
                "error": {
                    "name": "Transcoder",
                    "message": "bad codec",
                    "code": 12,
                    "error": "disk full"
                }
            }))
            .unwrap();
        let codes: Vec<i64> = fault.chain().map(|f| f.code).collect();
        assert_eq!(codes, vec![400, 12, 0]);
        assert_eq!(fault.chain().last().unwrap().message, "disk full");
        assert!(fault.source().is_some());
    }

    #[test]
    fn test_display() {
        let fault = ApiError {
            name: "UnknownServerError".to_string(),
            message: "try later".to_string(),
            code: 100,
            cause: None,
        };
        assert_eq!(fault.to_string(), "UnknownServerError: try later (code 100)");
        assert_eq!(ApiError::from_message("x").to_string(), "x (code 0)");
    }

    #[test]
    fn test_encode_round_trip() {
        let registry = CodecRegistry::standard().unwrap();
        let fault = ApiError {
            name: "Outer".to_string(),
            message: "m".to_string(),
            code: 1,
            cause: Some(Box::new(ApiError {
                name: "Inner".to_string(),
                message: "n".to_string(),
                code: 2,
                cause: None,
            })),
        };
        let wire = registry.encode(&fault).unwrap();
        assert_eq!(wire["error"]["name"], "Inner");
        assert_eq!(registry.decode::<ApiError>(&wire).unwrap(), fault);
    }
}
