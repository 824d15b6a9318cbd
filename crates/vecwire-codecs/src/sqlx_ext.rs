//! `sqlx` integration: the value types bind and decode as PostgreSQL
//! parameters and columns. Parameters are always sent in binary form;
//! columns are decoded from whichever format the server returned.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{
    PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat, PgValueRef, Postgres,
};
use sqlx::{Decode, Encode, Type};
use vecwire_core::PgVectorCodec;

use crate::{BitVector, HalfVector, SparseVector, Vector};

macro_rules! impl_sqlx {
    ($ty:ty, $array:literal) => {
        impl Type<Postgres> for $ty {
            fn type_info() -> PgTypeInfo {
                PgTypeInfo::with_name(<$ty as PgVectorCodec>::TYPE_NAME)
            }
        }

        impl PgHasArrayType for $ty {
            fn array_type_info() -> PgTypeInfo {
                PgTypeInfo::with_name($array)
            }
        }

        impl Encode<'_, Postgres> for $ty {
            fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
                buf.extend_from_slice(&self.to_binary()?);
                Ok(IsNull::No)
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                let format = value.format();
                tracing::trace!(
                    type_name = <$ty as PgVectorCodec>::TYPE_NAME,
                    binary = matches!(format, PgValueFormat::Binary),
                    "decoding column"
                );
                let decoded = match format {
                    PgValueFormat::Binary => <$ty>::decode_binary(value.as_bytes()?, 0)?,
                    PgValueFormat::Text => <$ty>::decode_text(value.as_str()?)?,
                };
                Ok(decoded)
            }
        }
    };
}

impl_sqlx!(Vector, "_vector");
impl_sqlx!(HalfVector, "_halfvec");
impl_sqlx!(SparseVector, "_sparsevec");
impl_sqlx!(BitVector, "_bit");
