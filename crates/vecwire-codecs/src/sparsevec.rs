use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use bytes::{Buf, BufMut};
use vecwire_core::text::{parse_f32, push_f32, strip_delimiters};
use vecwire_core::wire::{self, MAX_I32_LEN};
use vecwire_core::{PgVectorCodec, VecwireError};

const HEADER_SIZE: usize = 12;

/// A sparse vector (`sparsevec`).
///
/// Only non-zero elements are stored, as two parallel arrays: zero-based
/// `indices` in strictly ascending order and their `values`. Both encoders
/// rely on that ordering and never re-sort.
///
/// Text form: `{i:v,...}/dim` with one-based indices.
/// Binary layout: `[i32 dim][i32 nnz][i32 reserved = 0][nnz x i32 index][nnz x f32 value]`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SparseVectorRepr"))]
pub struct SparseVector {
    dim: usize,
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build from a dense slice, keeping the non-zero elements.
    pub fn from_dense(dense: &[f32]) -> Self {
        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, &v)| (i as u32, v))
            .unzip();
        Self {
            dim: dense.len(),
            indices,
            values,
        }
    }

    /// Build from a map of zero-based index to value.
    ///
    /// Zero values are dropped and the rest sorted by index.
    pub fn from_map(map: &HashMap<u32, f32>, dim: usize) -> Result<Self, VecwireError> {
        Self::from_entries(map.iter().map(|(&i, &v)| (i, v)), dim)
    }

    /// Build from `(index, value)` pairs with map semantics: a repeated
    /// index keeps the last value seen.
    pub fn from_entries<I>(entries: I, dim: usize) -> Result<Self, VecwireError>
    where
        I: IntoIterator<Item = (u32, f32)>,
    {
        let sorted: BTreeMap<u32, f32> = entries.into_iter().collect();
        let mut indices = Vec::with_capacity(sorted.len());
        let mut values = Vec::with_capacity(sorted.len());
        for (index, value) in sorted {
            if value == 0.0 {
                continue;
            }
            if index as usize >= dim {
                return Err(VecwireError::InvalidValue(format!(
                    "index {index} out of bounds for sparsevec of dimension {dim}"
                )));
            }
            indices.push(index);
            values.push(value);
        }
        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    /// Build from already sorted parallel arrays.
    ///
    /// `indices` must be strictly ascending, below `dim` and as long as
    /// `values`; `dim` must fit the `int4` header field.
    pub fn from_parts(
        dim: usize,
        indices: Vec<u32>,
        values: Vec<f32>,
    ) -> Result<Self, VecwireError> {
        wire::check_len(dim, MAX_I32_LEN)?;
        if indices.len() != values.len() {
            return Err(VecwireError::InvalidValue(format!(
                "{} indices but {} values",
                indices.len(),
                values.len()
            )));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= dim) {
            return Err(VecwireError::InvalidValue(format!(
                "index {index} out of bounds for sparsevec of dimension {dim}"
            )));
        }
        if indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(VecwireError::InvalidValue(
                "sparsevec indices must be strictly ascending".to_string(),
            ));
        }
        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    /// Total number of dimensions, zeros included.
    pub fn dimensions(&self) -> usize {
        self.dim
    }

    /// Zero-based positions of the non-zero elements.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The non-zero elements, parallel to [`indices`](SparseVector::indices).
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of stored (non-zero) elements.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Materialize the dense form.
    pub fn to_vec(&self) -> Vec<f32> {
        let mut vec = vec![0.0; self.dim];
        for (&i, &v) in self.indices.iter().zip(&self.values) {
            vec[i as usize] = v;
        }
        vec
    }
}

impl From<Vec<f32>> for SparseVector {
    fn from(values: Vec<f32>) -> Self {
        Self::from_dense(&values)
    }
}

impl From<&[f32]> for SparseVector {
    fn from(values: &[f32]) -> Self {
        Self::from_dense(values)
    }
}

impl PgVectorCodec for SparseVector {
    const TYPE_NAME: &'static str = "sparsevec";

    fn encode_text(&self) -> String {
        let mut out = String::with_capacity(13 + 27 * self.indices.len());
        out.push('{');
        for (n, (&i, &v)) in self.indices.iter().zip(&self.values).enumerate() {
            if n > 0 {
                out.push(',');
            }
            out.push_str(&(u64::from(i) + 1).to_string());
            out.push(':');
            push_f32(&mut out, v);
        }
        out.push_str("}/");
        out.push_str(&self.dim.to_string());
        out
    }

    fn decode_text(s: &str) -> Result<Self, VecwireError> {
        let (elements, dim) = s.trim().split_once('/').ok_or_else(|| {
            VecwireError::Parse(format!("malformed sparsevec literal '{s}': missing /dim"))
        })?;
        let dim: usize = dim
            .trim()
            .parse()
            .map_err(|e| VecwireError::Parse(format!("invalid sparsevec dimension '{dim}': {e}")))?;
        if dim > MAX_I32_LEN {
            return Err(VecwireError::Parse(format!(
                "sparsevec dimension {dim} exceeds {MAX_I32_LEN}"
            )));
        }
        let body = strip_delimiters(elements, '{', '}', Self::TYPE_NAME)?;

        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut last: Option<u32> = None;
        if !body.trim().is_empty() {
            for pair in body.split(',') {
                let (index, value) = pair.split_once(':').ok_or_else(|| {
                    VecwireError::Parse(format!("malformed sparsevec element '{pair}'"))
                })?;
                let index: u32 = index.trim().parse().map_err(|e| {
                    VecwireError::Parse(format!("invalid sparsevec index '{index}': {e}"))
                })?;
                if index == 0 || index as usize > dim {
                    return Err(VecwireError::Parse(format!(
                        "sparsevec index {index} out of range 1..={dim}"
                    )));
                }
                let index = index - 1;
                if last.is_some_and(|last| index <= last) {
                    return Err(VecwireError::Parse(
                        "sparsevec indices must be strictly ascending".to_string(),
                    ));
                }
                last = Some(index);
                let value = parse_f32(value)?;
                if value != 0.0 {
                    indices.push(index);
                    values.push(value);
                }
            }
        }
        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    fn binary_size(&self) -> usize {
        HEADER_SIZE + 4 * self.indices.len() + 4 * self.values.len()
    }

    fn encode_binary(&self, buf: &mut [u8], offset: usize) -> Result<usize, VecwireError> {
        wire::check_len(self.dim, MAX_I32_LEN)?;
        let size = self.binary_size();
        let mut out = wire::output(buf, offset, size)?;
        out.put_i32(self.dim as i32);
        out.put_i32(self.indices.len() as i32);
        out.put_i32(0);
        for &i in &self.indices {
            out.put_i32(i as i32);
        }
        for &v in &self.values {
            out.put_f32(v);
        }
        Ok(size)
    }

    fn decode_binary(buf: &[u8], offset: usize) -> Result<Self, VecwireError> {
        let mut input = wire::input(buf, offset)?;
        wire::require(&input, HEADER_SIZE, Self::TYPE_NAME)?;
        let dim = wire::non_negative(input.get_i32(), "dimension", Self::TYPE_NAME)?;
        let nnz = wire::non_negative(input.get_i32(), "nnz", Self::TYPE_NAME)?;
        wire::check_reserved(input.get_i32(), Self::TYPE_NAME)?;
        if nnz > dim {
            return Err(protocol(format!("nnz {nnz} exceeds dimension {dim}")));
        }
        wire::require(&input, nnz.saturating_mul(8), Self::TYPE_NAME)?;

        let mut indices = Vec::with_capacity(nnz);
        for _ in 0..nnz {
            let index = input.get_i32();
            let in_range = usize::try_from(index).is_ok_and(|i| i < dim);
            if !in_range {
                return Err(protocol(format!(
                    "index {index} out of bounds for dimension {dim}"
                )));
            }
            let index = index as u32;
            if indices.last().is_some_and(|&last| index <= last) {
                return Err(protocol("indices not strictly ascending".to_string()));
            }
            indices.push(index);
        }
        let values = (0..nnz).map(|_| input.get_f32()).collect();
        Ok(Self {
            dim,
            indices,
            values,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SparseVectorRepr {
    dim: usize,
    indices: Vec<u32>,
    values: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<SparseVectorRepr> for SparseVector {
    type Error = VecwireError;

    fn try_from(repr: SparseVectorRepr) -> Result<Self, Self::Error> {
        Self::from_parts(repr.dim, repr.indices, repr.values)
    }
}

fn protocol(message: String) -> VecwireError {
    tracing::debug!(%message, "rejecting sparsevec binary value");
    VecwireError::Protocol(format!("sparsevec: {message}"))
}

impl fmt::Display for SparseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl FromStr for SparseVector {
    type Err = VecwireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_text(s)
    }
}
