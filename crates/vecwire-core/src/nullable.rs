//! Codec operations lifted over `Option`.
//!
//! `None` is SQL `NULL`: it has no text form, occupies zero bytes and writes
//! nothing. The protocol layer signals NULL separately (a `-1` length), so
//! these helpers never emit a sentinel of their own.

use crate::{PgVectorCodec, VecwireError};

/// Text form of a possibly absent value.
pub fn encode_text<T: PgVectorCodec>(value: Option<&T>) -> Option<String> {
    value.map(PgVectorCodec::encode_text)
}

/// Parse a possibly absent text literal.
pub fn decode_text<T: PgVectorCodec>(s: Option<&str>) -> Result<Option<T>, VecwireError> {
    s.map(T::decode_text).transpose()
}

/// Binary size of a possibly absent value; `0` for `None`.
pub fn binary_size<T: PgVectorCodec>(value: Option<&T>) -> usize {
    value.map_or(0, PgVectorCodec::binary_size)
}

/// Write a possibly absent value; a no-op returning `0` for `None`.
pub fn encode_binary<T: PgVectorCodec>(
    value: Option<&T>,
    buf: &mut [u8],
    offset: usize,
) -> Result<usize, VecwireError> {
    match value {
        Some(v) => v.encode_binary(buf, offset),
        None => Ok(0),
    }
}

/// Read a possibly absent binary value.
pub fn decode_binary<T: PgVectorCodec>(
    buf: Option<&[u8]>,
    offset: usize,
) -> Result<Option<T>, VecwireError> {
    buf.map(|b| T::decode_binary(b, offset)).transpose()
}
