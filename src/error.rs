use thiserror::Error;

use crate::codec::{Tag, Value};

/// Result alias used throughout the codec.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while decoding attribute values.
///
/// Encoding never fails: every native value has a tagged form. Decoding only
/// fails on the defensive path, when a recognized tag carries a payload whose
/// shape makes the dispatched decode impossible (for example an `L` tag whose
/// payload is not a list).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("invalid payload for attribute tag '{tag}': expected {expected}, found {found}")]
    InvalidPayload {
        tag: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl CodecError {
    pub(crate) fn invalid_payload(tag: Tag, expected: &'static str, found: &Value) -> Self {
        Self::InvalidPayload {
            tag: tag.as_str(),
            expected,
            found: found.kind(),
        }
    }
}
