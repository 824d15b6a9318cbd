use vecwire::codec_core::wire::{MAX_I32_LEN, MAX_U16_LEN};
use vecwire::{PgVectorCodec, Vector};

#[test]
fn core_helpers_reachable_through_facade() {
    assert_eq!(MAX_U16_LEN, 65535);
    assert_eq!(MAX_I32_LEN, 2_147_483_647);
    assert_eq!(vecwire::codec_core::text::format_float_list([1.0, 2.0]), "[1.0,2.0]");
}

#[test]
fn std_core_not_shadowed() {
    let vec = Vector::from(vec![1.0, 2.0]);
    assert_eq!(core::mem::size_of_val(vec.as_slice()), 8);
    assert_eq!(vec.binary_size(), 12);
}
