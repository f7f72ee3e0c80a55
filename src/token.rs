//! Session token generation and plausibility checks.
//!
//! Tokens are drawn from the operating system CSPRNG and encoded URL-safe
//! base64 without padding, so they are valid cookie values as-is.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore as _;
use rand::rngs::OsRng;
use thiserror::Error;

/// Tokens shorter than this are rejected as implausible.
pub(crate) const MIN_TOKEN_CHARS: usize = 6;

/// Generators never draw fewer random bytes than this.
const MIN_TOKEN_BYTES: usize = 16;

const DEFAULT_TOKEN_BYTES: usize = 32;

/// The supplied session token cannot be used as a cookie value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTokenError {
    #[error("session token is empty")]
    Empty,
    #[error("session token is too short ({0} characters, minimum {MIN_TOKEN_CHARS})")]
    TooShort(usize),
    #[error("session token contains a character outside [A-Za-z0-9_-]: {0:?}")]
    InvalidChar(char),
}

pub(crate) fn validate(value: &str) -> Result<(), InvalidTokenError> {
    if value.is_empty() {
        return Err(InvalidTokenError::Empty);
    }

    if value.len() < MIN_TOKEN_CHARS {
        return Err(InvalidTokenError::TooShort(value.len()));
    }

    if let Some(ch) = value
        .chars()
        .find(|ch| !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_'))
    {
        return Err(InvalidTokenError::InvalidChar(ch));
    }

    Ok(())
}

/// Generates cryptographically random session tokens.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    bytes: usize,
}

impl TokenGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: DEFAULT_TOKEN_BYTES,
        }
    }

    /// Set how many random bytes back each token. Values below 16 are clamped
    /// up to 16.
    #[must_use]
    pub fn with_bytes(mut self, bytes: usize) -> Self {
        self.bytes = bytes.max(MIN_TOKEN_BYTES);
        self
    }

    pub fn generate(&self) -> String {
        let mut buf = vec![0u8; self.bytes];
        OsRng.fill_bytes(&mut buf);
        URL_SAFE_NO_PAD.encode(buf)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
