use vecwire_core::text::{format_float_list, parse_f32, parse_float_list, strip_delimiters};
use vecwire_core::VecwireError;

#[test]
fn integral_floats_keep_fraction() {
    assert_eq!(format_float_list([1.0, 2.0, 3.0]), "[1.0,2.0,3.0]");
}

#[test]
fn fractional_floats_render_shortest() {
    assert_eq!(format_float_list([0.1, -2.5]), "[0.1,-2.5]");
}

#[test]
fn empty_list() {
    assert_eq!(format_float_list(std::iter::empty()), "[]");
    assert!(parse_float_list("[]", "vector").unwrap().is_empty());
}

#[test]
fn parse_list_accepts_whitespace() {
    assert_eq!(parse_float_list(" [1, 2.5,3] ", "vector").unwrap(), vec![1.0, 2.5, 3.0]);
}

#[test]
fn parse_list_rejects_missing_brackets() {
    assert!(matches!(parse_float_list("1,2,3", "vector"), Err(VecwireError::Parse(_))));
    assert!(matches!(parse_float_list("[1,2,3", "vector"), Err(VecwireError::Parse(_))));
    assert!(matches!(parse_float_list("", "vector"), Err(VecwireError::Parse(_))));
}

#[test]
fn parse_list_rejects_bad_number() {
    let err = parse_float_list("[1,abc]", "vector").unwrap_err();
    assert!(err.to_string().contains("invalid float 'abc'"));
    assert!(parse_float_list("[1,,2]", "vector").is_err());
}

#[test]
fn parse_single_field() {
    assert_eq!(parse_f32(" 4.25 ").unwrap(), 4.25);
    assert_eq!(parse_f32("1e3").unwrap(), 1000.0);
}

#[test]
fn strip_braces() {
    assert_eq!(strip_delimiters("{1:2}", '{', '}', "sparsevec").unwrap(), "1:2");
    assert!(strip_delimiters("{1:2", '{', '}', "sparsevec").is_err());
}
