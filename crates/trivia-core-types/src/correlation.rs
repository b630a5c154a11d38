//! Request correlation
//!
//! A `RequestId` is minted at the HTTP boundary (or taken from an incoming
//! `x-request-id` header) and recorded on the request's tracing span so that
//! engine `start`/`end` events can be tied back to one call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on a caller-supplied request id.
const MAX_EXTERNAL_ID_LEN: usize = 128;

/// Unique identifier for a single request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Adopt an id supplied by the caller, falling back to a fresh one when
    /// the value is blank, too long, or contains non-printable characters.
    pub fn from_external(value: &str) -> Self {
        let value = value.trim();
        let acceptable = !value.is_empty()
            && value.len() <= MAX_EXTERNAL_ID_LEN
            && value.chars().all(|c| c.is_ascii_graphic());
        if acceptable {
            Self(value.to_string())
        } else {
            Self::new()
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
