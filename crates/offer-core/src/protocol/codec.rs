//! The payload codec contract.
//!
//! Every structured value that crosses the bridge boundary travels as an
//! opaque, length-delimited byte buffer: a [`Payload`]. The host runtime and
//! the bridge agree only on the two operations defined here:
//!
//! ```text
//! encode: &T       -> Payload        (fresh buffer per call)
//! decode: &Payload -> Result<T, CodecError>
//! ```
//!
//! The bridge never interprets payload contents; it decodes a payload into a
//! typed value immediately before a driver call, and encodes values into
//! fresh payloads immediately before delivering an event record. Everything
//! in between treats the bytes as a black box.
//!
//! The concrete wire form is bincode over serde, which satisfies the
//! round-trip law `decode(encode(x)) == x` for every protocol value type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors produced by the codec contract.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value could not be serialized. Does not happen for well-formed
    /// protocol values; kept so callers never panic on the encode path.
    #[error("value could not be encoded: {0}")]
    Encode(String),

    /// A payload's bytes did not parse as the expected structured value.
    #[error("payload did not decode as the expected value: {0}")]
    Decode(String),
}

/// An opaque serialized protocol value.
///
/// Ownership follows the boundary contract: payloads supplied by the caller
/// are borrowed for the duration of a command; payloads produced by the
/// bridge (inside event records) are freshly allocated per event and owned by
/// whoever consumes the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Wraps raw bytes that are already in the codec's wire form.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Payload(bytes)
    }

    /// Serializes `value` into a fresh buffer.
    ///
    /// Each call allocates a new buffer, so payloads produced for different
    /// (possibly concurrent) events never alias or share mutable state.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if serialization fails.
    pub fn encode<T: Serialize>(value: &T) -> Result<Payload, CodecError> {
        bincode::serialize(value)
            .map(Payload)
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Deserializes this payload as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the bytes are not a valid encoding
    /// of `T`. This is the `DecodeFailure` of the codec contract.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, CodecError> {
        bincode::deserialize(&self.0).map_err(|e| CodecError::Decode(e.to_string()))
    }

    /// The serialized bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the payload, returning the underlying buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the serialized form in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer is empty. An empty buffer is never a valid
    /// encoding of any protocol value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Decodes a collection of payloads independently and in input order.
///
/// All-or-nothing: the first payload that fails to decode aborts the whole
/// collection, so a caller can guarantee it never acts on a partial decode.
/// An empty slice is valid and decodes to an empty `Vec`.
///
/// # Errors
///
/// Returns the [`CodecError`] of the first payload that fails.
pub fn decode_all<T: DeserializeOwned>(payloads: &[Payload]) -> Result<Vec<T>, CodecError> {
    payloads.iter().map(Payload::decode).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
