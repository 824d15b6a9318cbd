//! Byte-level helpers shared by the binary codecs.
//!
//! All multi-byte fields are big-endian, which is what [`bytes::Buf`] and
//! [`bytes::BufMut`] read and write by default.

use bytes::Buf;

use crate::VecwireError;

/// Largest element count a `vector`/`halfvec` header can carry.
pub const MAX_U16_LEN: usize = u16::MAX as usize;

/// Largest dimension or bit length an `int4` header field can carry.
pub const MAX_I32_LEN: usize = i32::MAX as usize;

/// Borrow exactly `needed` bytes of `buf` starting at `offset` for writing.
pub fn output(buf: &mut [u8], offset: usize, needed: usize) -> Result<&mut [u8], VecwireError> {
    let available = buf.len().saturating_sub(offset);
    if available < needed {
        return Err(VecwireError::BufferTooSmall { needed, available });
    }
    Ok(&mut buf[offset..offset + needed])
}

/// Borrow the readable tail of `buf` starting at `offset`.
pub fn input(buf: &[u8], offset: usize) -> Result<&[u8], VecwireError> {
    buf.get(offset..).ok_or_else(|| {
        VecwireError::Protocol(format!(
            "offset {offset} is past the end of a {}-byte buffer",
            buf.len()
        ))
    })
}

/// Fail unless at least `needed` bytes remain in `input`.
pub fn require<B: Buf>(input: &B, needed: usize, type_name: &str) -> Result<(), VecwireError> {
    let available = input.remaining();
    if available < needed {
        tracing::debug!(type_name, needed, available, "rejecting truncated binary value");
        return Err(VecwireError::Protocol(format!(
            "truncated {type_name} value: need {needed} bytes, have {available}"
        )));
    }
    Ok(())
}

/// Fail unless a decoded reserved header field is zero.
pub fn check_reserved(reserved: i32, type_name: &str) -> Result<(), VecwireError> {
    if reserved != 0 {
        tracing::debug!(type_name, reserved, "rejecting binary value with nonzero reserved field");
        return Err(VecwireError::Protocol(format!(
            "unexpected nonzero reserved field in {type_name} value"
        )));
    }
    Ok(())
}

/// Fail if `len` does not fit a header field whose maximum is `max`.
pub fn check_len(len: usize, max: usize) -> Result<(), VecwireError> {
    if len > max {
        return Err(VecwireError::ValueTooLarge { len, max });
    }
    Ok(())
}

/// Decode an `int4` header field that must not be negative.
pub fn non_negative(value: i32, field: &str, type_name: &str) -> Result<usize, VecwireError> {
    usize::try_from(value).map_err(|_| {
        tracing::debug!(type_name, field, value, "rejecting negative header field");
        VecwireError::Protocol(format!("negative {field} {value} in {type_name} value"))
    })
}
