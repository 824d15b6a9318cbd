use std::fmt;
use std::str::FromStr;

use bytes::{Buf, BufMut};
use vecwire_core::wire::{self, MAX_I32_LEN};
use vecwire_core::{PgVectorCodec, VecwireError};

const HEADER_SIZE: usize = 4;

/// How [`BitVector::parse_with`] treats characters other than `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitParseMode {
    /// Reject anything but `0` and `1`.
    #[default]
    Strict,
    /// Any character other than `0` is a set bit.
    Lenient,
}

/// A fixed-length bit string (`bit`).
///
/// Bits are packed eight per byte, most significant bit first; unused bits
/// of the last byte are always zero.
///
/// Binary layout: `[i32 len][ceil(len / 8) packed bytes]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BitVectorRepr"))]
pub struct BitVector {
    len: usize,
    data: Vec<u8>,
}

fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

fn mask(i: usize) -> u8 {
    0x80 >> (i % 8)
}

impl BitVector {
    /// Wrap already packed bytes holding `len` bits.
    pub fn from_bytes(data: &[u8], len: usize) -> Result<Self, VecwireError> {
        if data.len() != byte_len(len) {
            return Err(VecwireError::InvalidValue(format!(
                "{len} bits need {} bytes, got {}",
                byte_len(len),
                data.len()
            )));
        }
        if has_padding_bits(data, len) {
            return Err(VecwireError::InvalidValue(
                "unused trailing bits must be zero".to_string(),
            ));
        }
        Ok(Self {
            len,
            data: data.to_vec(),
        })
    }

    /// Parse a string of `0`/`1` characters using `mode`.
    pub fn parse_with(s: &str, mode: BitParseMode) -> Result<Self, VecwireError> {
        let bits = s
            .chars()
            .map(|c| match (c, mode) {
                ('0', _) => Ok(false),
                ('1', _) | (_, BitParseMode::Lenient) => Ok(true),
                (other, BitParseMode::Strict) => Err(VecwireError::Parse(format!(
                    "invalid bit character '{other}' in '{s}'"
                ))),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        Ok(Self::from(bits.as_slice()))
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, i: usize) -> Option<bool> {
        (i < self.len).then(|| self.data[i / 8] & mask(i) != 0)
    }

    /// Unpack into one `bool` per bit.
    pub fn to_vec(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.data[i / 8] & mask(i) != 0).collect()
    }
}

fn has_padding_bits(data: &[u8], len: usize) -> bool {
    let used = len % 8;
    match data.last() {
        Some(&last) if used != 0 => last & (0xFF >> used) != 0,
        _ => false,
    }
}

impl From<&[bool]> for BitVector {
    fn from(bits: &[bool]) -> Self {
        let mut data = vec![0u8; byte_len(bits.len())];
        for (i, _) in bits.iter().enumerate().filter(|&(_, &b)| b) {
            data[i / 8] |= mask(i);
        }
        Self {
            len: bits.len(),
            data,
        }
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self::from(bits.as_slice())
    }
}

impl PgVectorCodec for BitVector {
    const TYPE_NAME: &'static str = "bit";

    fn encode_text(&self) -> String {
        (0..self.len)
            .map(|i| if self.data[i / 8] & mask(i) != 0 { '1' } else { '0' })
            .collect()
    }

    fn decode_text(s: &str) -> Result<Self, VecwireError> {
        Self::parse_with(s, BitParseMode::Strict)
    }

    fn binary_size(&self) -> usize {
        HEADER_SIZE + self.data.len()
    }

    fn encode_binary(&self, buf: &mut [u8], offset: usize) -> Result<usize, VecwireError> {
        wire::check_len(self.len, MAX_I32_LEN)?;
        let size = self.binary_size();
        let mut out = wire::output(buf, offset, size)?;
        out.put_i32(self.len as i32);
        out.put_slice(&self.data);
        Ok(size)
    }

    fn decode_binary(buf: &[u8], offset: usize) -> Result<Self, VecwireError> {
        let mut input = wire::input(buf, offset)?;
        wire::require(&input, HEADER_SIZE, Self::TYPE_NAME)?;
        let len = wire::non_negative(input.get_i32(), "length", Self::TYPE_NAME)?;
        let n = byte_len(len);
        wire::require(&input, n, Self::TYPE_NAME)?;
        let data = input[..n].to_vec();
        if has_padding_bits(&data, len) {
            tracing::debug!(len, "rejecting bit value with nonzero padding");
            return Err(VecwireError::Protocol(
                "nonzero padding bits in bit value".to_string(),
            ));
        }
        Ok(Self { len, data })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BitVectorRepr {
    len: usize,
    data: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<BitVectorRepr> for BitVector {
    type Error = VecwireError;

    fn try_from(repr: BitVectorRepr) -> Result<Self, Self::Error> {
        Self::from_bytes(&repr.data, repr.len)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl FromStr for BitVector {
    type Err = VecwireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_text(s)
    }
}
