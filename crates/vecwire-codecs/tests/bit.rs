use vecwire_codecs::{BitParseMode, BitVector, PgVectorCodec, VecwireError};

const BITS: [bool; 9] = [false, true, false, true, false, false, false, false, true];

#[test]
fn array_constructor() {
    let vec = BitVector::from(BITS.as_slice());
    assert_eq!(vec.len(), 9);
    assert_eq!(vec.as_bytes(), &[0b0101_0000, 0b1000_0000]);
    assert_eq!(vec.to_vec(), BITS.to_vec());
}

#[test]
fn empty_array_constructor() {
    let vec = BitVector::from(Vec::<bool>::new());
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert!(vec.as_bytes().is_empty());
    assert!(vec.to_vec().is_empty());
    assert_eq!(vec.encode_text(), "");
}

#[test]
fn string_constructor() {
    let vec: BitVector = "010100001".parse().unwrap();
    assert_eq!(vec.len(), 9);
    assert_eq!(vec.as_bytes(), &[0b0101_0000, 0b1000_0000]);
    assert_eq!(vec.to_vec(), BITS.to_vec());
}

#[test]
fn text_value() {
    assert_eq!(BitVector::from(BITS.to_vec()).encode_text(), "010100001");
}

#[test]
fn get_bit() {
    let vec = BitVector::from(BITS.as_slice());
    assert_eq!(vec.get(1), Some(true));
    assert_eq!(vec.get(2), Some(false));
    assert_eq!(vec.get(8), Some(true));
    assert_eq!(vec.get(9), None);
}

#[test]
fn strict_parse_rejects_other_characters() {
    let err = BitVector::decode_text("0120").unwrap_err();
    assert!(matches!(err, VecwireError::Parse(_)));
}

#[test]
fn lenient_parse_treats_non_zero_as_set() {
    let vec = BitVector::parse_with("0120x", BitParseMode::Lenient).unwrap();
    assert_eq!(vec.encode_text(), "01101");
    assert_eq!(BitParseMode::default(), BitParseMode::Strict);
}

#[test]
fn from_bytes_validates() {
    let vec = BitVector::from_bytes(&[0b0101_0000, 0b1000_0000], 9).unwrap();
    assert_eq!(vec.to_vec(), BITS.to_vec());
    assert!(matches!(BitVector::from_bytes(&[0xff], 9), Err(VecwireError::InvalidValue(_))));
    assert!(matches!(BitVector::from_bytes(&[0xff], 4), Err(VecwireError::InvalidValue(_))));
    assert!(BitVector::from_bytes(&[0xf0], 4).is_ok());
}

#[test]
fn binary_layout() {
    let vec = BitVector::from(BITS.as_slice());
    assert_eq!(vec.binary_size(), 6);
    assert_eq!(vec.to_binary().unwrap(), vec![0, 0, 0, 9, 0x50, 0x80]);
}

#[test]
fn binary_round_trip_at_offset() {
    let vec: BitVector = "1111000011110".parse().unwrap();
    let mut buf = vec![0u8; 12];
    assert_eq!(vec.encode_binary(&mut buf, 4).unwrap(), 6);
    assert_eq!(BitVector::decode_binary(&buf, 4).unwrap(), vec);
}

#[test]
fn empty_binary_round_trip() {
    let vec = BitVector::default();
    assert_eq!(vec.to_binary().unwrap(), vec![0, 0, 0, 0]);
    assert_eq!(BitVector::from_binary(&[0, 0, 0, 0]).unwrap(), vec);
}

#[test]
fn nonzero_padding_rejected() {
    let err = BitVector::from_binary(&[0, 0, 0, 9, 0x50, 0x81]).unwrap_err();
    assert!(matches!(err, VecwireError::Protocol(_)));
}

#[test]
fn truncated_binary_rejected() {
    assert!(matches!(BitVector::from_binary(&[0, 0, 0, 9, 0x50]), Err(VecwireError::Protocol(_))));
    assert!(BitVector::from_binary(&[0, 0]).is_err());
}

#[test]
fn negative_length_rejected() {
    let bytes = (-8i32).to_be_bytes();
    assert!(matches!(BitVector::from_binary(&bytes), Err(VecwireError::Protocol(_))));
}

#[test]
fn small_buffer_rejected() {
    let vec = BitVector::from(BITS.as_slice());
    let mut buf = [0u8; 5];
    assert_eq!(
        vec.encode_binary(&mut buf, 0).unwrap_err(),
        VecwireError::BufferTooSmall { needed: 6, available: 5 }
    );
}
