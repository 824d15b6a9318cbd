//! Core traits and types for vecwire.
//!
//! Every PostgreSQL vector type handled by vecwire (`vector`, `halfvec`,
//! `sparsevec`, `bit`) implements [`PgVectorCodec`], which covers both wire
//! encodings a driver needs: the text literal and the compact binary form
//! used by the extended query protocol. The helpers in [`wire`] and [`text`]
//! are shared by the concrete codecs; [`nullable`] lifts the codec operations
//! over `Option` so an absent value is never confused with an empty one.

pub mod nullable;
pub mod text;
pub mod wire;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Unified error type for every codec operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VecwireError {
    /// Malformed text literal: bad delimiters, unparseable numbers, malformed
    /// `index:value` pairs.
    #[error("parse error: {0}")]
    Parse(String),
    /// Binary input that does not match the wire layout (nonzero reserved
    /// field, truncated payload, out-of-range header values).
    #[error("protocol error: {0}")]
    Protocol(String),
    /// A length or dimension that does not fit the wire header field.
    #[error("value too large: {len} exceeds wire limit {max}")]
    ValueTooLarge { len: usize, max: usize },
    /// Destination buffer cannot hold the encoded value.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    /// Constructor input that violates a value invariant.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

// ---------------------------------------------------------------------------
// Codec trait
// ---------------------------------------------------------------------------

/// Text and binary encoding for a PostgreSQL vector type.
///
/// Implementations are plain immutable values; decoding always produces a
/// fresh value and never mutates an existing one on failure.
pub trait PgVectorCodec: Sized {
    /// PostgreSQL type name, e.g. `"vector"`.
    const TYPE_NAME: &'static str;

    /// Render the text literal accepted by the server's input function.
    fn encode_text(&self) -> String;

    /// Parse a text literal as produced by the server's output function.
    fn decode_text(s: &str) -> Result<Self, VecwireError>;

    /// Number of bytes [`encode_binary`](PgVectorCodec::encode_binary) writes.
    fn binary_size(&self) -> usize;

    /// Write the binary form into `buf` starting at `offset`.
    ///
    /// Nothing is written unless the whole value fits: size limits and buffer
    /// capacity are checked first. Returns the number of bytes written.
    fn encode_binary(&self, buf: &mut [u8], offset: usize) -> Result<usize, VecwireError>;

    /// Read a binary value starting at `offset`.
    fn decode_binary(buf: &[u8], offset: usize) -> Result<Self, VecwireError>;

    /// Replace this value with one parsed from `s`.
    ///
    /// On error `self` is left untouched.
    fn set_text(&mut self, s: &str) -> Result<(), VecwireError> {
        *self = Self::decode_text(s)?;
        Ok(())
    }

    /// Encode into a freshly allocated buffer of exactly
    /// [`binary_size`](PgVectorCodec::binary_size) bytes.
    fn to_binary(&self) -> Result<Vec<u8>, VecwireError> {
        let mut buf = vec![0u8; self.binary_size()];
        self.encode_binary(&mut buf, 0)?;
        Ok(buf)
    }

    /// Decode a binary value that starts at the beginning of `buf`.
    fn from_binary(buf: &[u8]) -> Result<Self, VecwireError> {
        Self::decode_binary(buf, 0)
    }
}
