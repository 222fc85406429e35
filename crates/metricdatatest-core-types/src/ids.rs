//! Trace correlation identifiers carried by exemplars
//!
//! Both identifiers are fixed-length byte arrays. An all-zero identifier means
//! the exemplar was recorded outside of a sampled span.

use serde::{Deserialize, Serialize};

/// 16-byte trace identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TraceId([u8; 16]);

impl TraceId {
    /// The all-zero (invalid) trace id
    pub const INVALID: TraceId = TraceId([0; 16]);

    /// Wrap raw bytes
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Parse a 32-character hex string
    ///
    /// # Errors
    ///
    /// Returns the hex decoding error when the input is not exactly 16 bytes of hex.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// True unless every byte is zero
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// 8-byte span identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpanId([u8; 8]);

impl SpanId {
    /// The all-zero (invalid) span id
    pub const INVALID: SpanId = SpanId([0; 8]);

    /// Wrap raw bytes
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Parse a 16-character hex string
    ///
    /// # Errors
    ///
    /// Returns the hex decoding error when the input is not exactly 8 bytes of hex.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 8];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// True unless every byte is zero
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl std::fmt::Display for SpanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
