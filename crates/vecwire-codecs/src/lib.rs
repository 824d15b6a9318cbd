//! PostgreSQL vector value types with text and binary codecs.
//!
//! | Type | PostgreSQL | Text form | Binary layout |
//! |------|------------|-----------|---------------|
//! | [`Vector`] | `vector` | `[1.0,2.0]` | `u16 dim, u16 0, f32...` |
//! | [`HalfVector`] | `halfvec` | `[1.0,2.0]` | `u16 dim, u16 0, f16...` |
//! | [`SparseVector`] | `sparsevec` | `{1:1.0,3:2.0}/4` | `i32 dim, i32 nnz, i32 0, i32..., f32...` |
//! | [`BitVector`] | `bit` | `0101` | `i32 len, packed bytes` |
//!
//! All binary fields are big-endian. SQL `NULL` is `Option::None`; see
//! [`vecwire_core::nullable`].
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for every value type |
//! | `sqlx` | `sqlx::Type`, `Encode` and `Decode` for PostgreSQL |
//!
//! ```rust
//! use vecwire_codecs::{PgVectorCodec, SparseVector};
//!
//! let v = SparseVector::from_dense(&[1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
//! assert_eq!(v.encode_text(), "{1:1.0,3:2.0,5:3.0}/6");
//! assert_eq!(SparseVector::from_binary(&v.to_binary()?)?, v);
//! # Ok::<(), vecwire_codecs::VecwireError>(())
//! ```

mod bit;
mod halfvec;
mod sparsevec;
#[cfg(feature = "sqlx")]
mod sqlx_ext;
mod vector;

pub use bit::{BitParseMode, BitVector};
pub use halfvec::HalfVector;
pub use sparsevec::SparseVector;
pub use vector::Vector;

// Re-export core types for convenience.
pub use vecwire_core::{nullable, PgVectorCodec, VecwireError};
