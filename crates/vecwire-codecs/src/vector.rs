use std::fmt;
use std::str::FromStr;

use bytes::{Buf, BufMut};
use vecwire_core::text::{format_float_list, parse_float_list};
use vecwire_core::wire::{self, MAX_U16_LEN};
use vecwire_core::{PgVectorCodec, VecwireError};

const HEADER_SIZE: usize = 4;

/// A dense single-precision vector (`vector`).
///
/// Binary layout: `[u16 dim][u16 reserved = 0][dim x f32]`, big-endian.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    vec: Vec<f32>,
}

impl Vector {
    /// Number of elements.
    pub fn dimensions(&self) -> usize {
        self.vec.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.vec
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.vec.clone()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.vec
    }
}

impl From<Vec<f32>> for Vector {
    fn from(vec: Vec<f32>) -> Self {
        Self { vec }
    }
}

impl From<&[f32]> for Vector {
    fn from(values: &[f32]) -> Self {
        Self {
            vec: values.to_vec(),
        }
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self {
            vec: iter.into_iter().collect(),
        }
    }
}

impl From<Vector> for Vec<f32> {
    fn from(v: Vector) -> Self {
        v.vec
    }
}

impl PartialEq<[f32]> for Vector {
    fn eq(&self, other: &[f32]) -> bool {
        self.vec == other
    }
}

impl PgVectorCodec for Vector {
    const TYPE_NAME: &'static str = "vector";

    fn encode_text(&self) -> String {
        format_float_list(self.vec.iter().copied())
    }

    fn decode_text(s: &str) -> Result<Self, VecwireError> {
        parse_float_list(s, Self::TYPE_NAME).map(Self::from)
    }

    fn binary_size(&self) -> usize {
        HEADER_SIZE + 4 * self.vec.len()
    }

    fn encode_binary(&self, buf: &mut [u8], offset: usize) -> Result<usize, VecwireError> {
        wire::check_len(self.vec.len(), MAX_U16_LEN)?;
        let size = self.binary_size();
        let mut out = wire::output(buf, offset, size)?;
        out.put_u16(self.vec.len() as u16);
        out.put_u16(0);
        for &v in &self.vec {
            out.put_f32(v);
        }
        Ok(size)
    }

    fn decode_binary(buf: &[u8], offset: usize) -> Result<Self, VecwireError> {
        let mut input = wire::input(buf, offset)?;
        wire::require(&input, HEADER_SIZE, Self::TYPE_NAME)?;
        let dim = input.get_u16() as usize;
        wire::check_reserved(i32::from(input.get_u16()), Self::TYPE_NAME)?;
        wire::require(&input, 4 * dim, Self::TYPE_NAME)?;
        let vec = (0..dim).map(|_| input.get_f32()).collect();
        Ok(Self { vec })
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl FromStr for Vector {
    type Err = VecwireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_text(s)
    }
}
