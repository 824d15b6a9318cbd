use vecwire_codecs::nullable;
use vecwire_codecs::{BitVector, HalfVector, PgVectorCodec, SparseVector, Vector};

#[test]
fn absent_vector_has_no_encoding() {
    let value: Option<&Vector> = None;
    assert_eq!(nullable::binary_size(value), 0);
    assert_eq!(nullable::encode_text(value), None);

    let mut buf = [0xaau8; 4];
    assert_eq!(nullable::encode_binary(value, &mut buf, 0).unwrap(), 0);
    assert_eq!(buf, [0xaa; 4]);
}

#[test]
fn absent_is_distinct_from_empty() {
    let empty = Vector::default();
    assert_eq!(nullable::binary_size(Some(&empty)), 4);
    assert_eq!(nullable::encode_text(Some(&empty)).as_deref(), Some("[]"));

    let decoded: Option<Vector> = nullable::decode_text(Some("[]")).unwrap();
    assert_eq!(decoded, Some(Vector::default()));
    let decoded: Option<Vector> = nullable::decode_text(None).unwrap();
    assert_eq!(decoded, None);
}

#[test]
fn absent_binary_decodes_to_none() {
    let decoded: Option<SparseVector> = nullable::decode_binary(None, 0).unwrap();
    assert!(decoded.is_none());

    let bytes = SparseVector::from_dense(&[0.0, 2.0]).to_binary().unwrap();
    let decoded: Option<SparseVector> = nullable::decode_binary(Some(bytes.as_slice()), 0).unwrap();
    assert_eq!(decoded.unwrap().to_vec(), vec![0.0, 2.0]);
}

#[test]
fn every_type_reports_zero_size_when_absent() {
    assert_eq!(nullable::binary_size::<HalfVector>(None), 0);
    assert_eq!(nullable::binary_size::<SparseVector>(None), 0);
    assert_eq!(nullable::binary_size::<BitVector>(None), 0);
}

#[test]
fn decode_errors_propagate() {
    let result: Result<Option<BitVector>, _> = nullable::decode_text(Some("012"));
    assert!(result.is_err());
}

#[test]
fn type_names() {
    assert_eq!(Vector::TYPE_NAME, "vector");
    assert_eq!(HalfVector::TYPE_NAME, "halfvec");
    assert_eq!(SparseVector::TYPE_NAME, "sparsevec");
    assert_eq!(BitVector::TYPE_NAME, "bit");
}
