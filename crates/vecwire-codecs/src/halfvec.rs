use std::fmt;
use std::str::FromStr;

use bytes::{Buf, BufMut};
use half::f16;
use vecwire_core::text::{format_float_list, parse_float_list};
use vecwire_core::wire::{self, MAX_U16_LEN};
use vecwire_core::{PgVectorCodec, VecwireError};

const HEADER_SIZE: usize = 4;

/// A half-precision vector (`halfvec`).
///
/// Elements are held as true IEEE 754 binary16 values, the same thing the
/// server stores, so the text form always shows what a round trip through
/// the database returns. Narrowing from `f32` rounds to nearest; magnitudes
/// beyond `f16::MAX` become infinite.
///
/// Binary layout: `[u16 dim][u16 reserved = 0][dim x f16]`, big-endian.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HalfVector {
    vec: Vec<f16>,
}

impl HalfVector {
    /// Narrow `f32` values to half precision.
    pub fn from_f32_slice(values: &[f32]) -> Self {
        values.iter().copied().collect()
    }

    pub fn dimensions(&self) -> usize {
        self.vec.len()
    }

    pub fn as_slice(&self) -> &[f16] {
        &self.vec
    }

    /// Widen every element back to `f32`.
    pub fn to_vec(&self) -> Vec<f32> {
        self.vec.iter().map(|h| h.to_f32()).collect()
    }
}

impl From<Vec<f16>> for HalfVector {
    fn from(vec: Vec<f16>) -> Self {
        Self { vec }
    }
}

impl From<Vec<f32>> for HalfVector {
    fn from(values: Vec<f32>) -> Self {
        Self::from_f32_slice(&values)
    }
}

impl From<&[f32]> for HalfVector {
    fn from(values: &[f32]) -> Self {
        Self::from_f32_slice(values)
    }
}

impl FromIterator<f32> for HalfVector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self {
            vec: iter.into_iter().map(f16::from_f32).collect(),
        }
    }
}

impl PgVectorCodec for HalfVector {
    const TYPE_NAME: &'static str = "halfvec";

    fn encode_text(&self) -> String {
        format_float_list(self.vec.iter().map(|h| h.to_f32()))
    }

    fn decode_text(s: &str) -> Result<Self, VecwireError> {
        parse_float_list(s, Self::TYPE_NAME).map(Self::from)
    }

    fn binary_size(&self) -> usize {
        HEADER_SIZE + 2 * self.vec.len()
    }

    fn encode_binary(&self, buf: &mut [u8], offset: usize) -> Result<usize, VecwireError> {
        wire::check_len(self.vec.len(), MAX_U16_LEN)?;
        let size = self.binary_size();
        let mut out = wire::output(buf, offset, size)?;
        out.put_u16(self.vec.len() as u16);
        out.put_u16(0);
        for h in &self.vec {
            out.put_u16(h.to_bits());
        }
        Ok(size)
    }

    fn decode_binary(buf: &[u8], offset: usize) -> Result<Self, VecwireError> {
        let mut input = wire::input(buf, offset)?;
        wire::require(&input, HEADER_SIZE, Self::TYPE_NAME)?;
        let dim = input.get_u16() as usize;
        wire::check_reserved(i32::from(input.get_u16()), Self::TYPE_NAME)?;
        wire::require(&input, 2 * dim, Self::TYPE_NAME)?;
        let vec = (0..dim).map(|_| f16::from_bits(input.get_u16())).collect();
        Ok(Self { vec })
    }
}

impl fmt::Display for HalfVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl FromStr for HalfVector {
    type Err = VecwireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_text(s)
    }
}
