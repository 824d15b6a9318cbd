//! vecwire — client-side codecs for the PostgreSQL pgvector types.
//!
//! This crate re-exports the vecwire sub-crates for convenient single-import
//! usage.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for `Vector`, `HalfVector`, `SparseVector`, `BitVector` |
//! | `sqlx` | Bind and decode the value types with `sqlx` on PostgreSQL |
//! | `full` | All features enabled |
//!
//! # Quick Start
//!
//! ```rust
//! use vecwire::{BitVector, PgVectorCodec, Vector};
//!
//! let v = Vector::from(vec![1.0, 2.0, 3.0]);
//! assert_eq!(v.encode_text(), "[1.0,2.0,3.0]");
//! assert_eq!(v.binary_size(), 16);
//!
//! let bits: BitVector = "010100001".parse()?;
//! assert_eq!(bits.as_bytes(), &[0b0101_0000, 0b1000_0000]);
//! # Ok::<(), vecwire::VecwireError>(())
//! ```

/// Core traits and helpers: PgVectorCodec, VecwireError, nullable, wire, text.
/// Always available.
pub use vecwire_core as codec_core;

pub use vecwire_codecs::{
    BitParseMode, BitVector, HalfVector, SparseVector, Vector,
};
pub use vecwire_core::{nullable, PgVectorCodec, VecwireError};
