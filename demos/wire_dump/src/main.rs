use vecwire::{BitParseMode, BitVector, HalfVector, PgVectorCodec, SparseVector, Vector, VecwireError};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn dump<T: PgVectorCodec>(value: &T) -> Result<(), VecwireError> {
    let bytes = value.to_binary()?;
    println!("{:<10} text:   {}", T::TYPE_NAME, value.encode_text());
    println!("{:<10} binary: {} ({} bytes)", "", hex(&bytes), bytes.len());
    Ok(())
}

fn main() -> Result<(), VecwireError> {
    // Debug level so the decoder rejections below are logged.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Encodings ===");
    dump(&Vector::from(vec![1.0, 2.0, 3.0]))?;
    dump(&HalfVector::from(vec![1.0f32, -2.0, 0.5]))?;
    dump(&SparseVector::from_dense(&[1.0, 0.0, 2.0, 0.0, 3.0, 0.0]))?;
    dump(&BitVector::from(vec![false, true, false, true, false, false, false, false, true]))?;

    println!();
    println!("=== Text parsing ===");
    let sparse: SparseVector = "{1:1,3:2,5:3}/6".parse()?;
    println!("{sparse} -> {:?}", sparse.to_vec());
    let lenient = BitVector::parse_with("01x1", BitParseMode::Lenient)?;
    println!("lenient '01x1' -> {lenient}");

    println!();
    println!("=== Rejected input ===");
    match Vector::from_binary(&[0, 1, 0, 1, 0x3f, 0x80, 0, 0]) {
        Ok(v) => println!("unexpectedly decoded {v}"),
        Err(e) => println!("vector with reserved=1: {e}"),
    }
    match Vector::from(vec![0.0; 70_000]).to_binary() {
        Ok(_) => println!("unexpectedly encoded 70000 dimensions"),
        Err(e) => println!("vector with 70000 dimensions: {e}"),
    }

    Ok(())
}
