//! Text literal helpers shared by the codecs.

use std::fmt::Write;

use crate::VecwireError;

/// Append the canonical text form of `v`.
///
/// Uses the shortest representation that parses back to the same `f32`;
/// integral values keep a trailing `.0` (`1.0`, not `1`).
pub fn push_f32(out: &mut String, v: f32) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{v:?}");
}

/// Parse one numeric field of a text literal.
pub fn parse_f32(field: &str) -> Result<f32, VecwireError> {
    let field = field.trim();
    field
        .parse::<f32>()
        .map_err(|e| VecwireError::Parse(format!("invalid float '{field}': {e}")))
}

/// Strip the surrounding `open`/`close` delimiters from `s`.
pub fn strip_delimiters<'a>(
    s: &'a str,
    open: char,
    close: char,
    type_name: &str,
) -> Result<&'a str, VecwireError> {
    s.trim()
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(|| {
            VecwireError::Parse(format!(
                "malformed {type_name} literal '{s}': expected {open}...{close}"
            ))
        })
}

/// Render `[v0,v1,...]`.
pub fn format_float_list(values: impl IntoIterator<Item = f32>) -> String {
    let mut out = String::from("[");
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_f32(&mut out, v);
    }
    out.push(']');
    out
}

/// Parse `[v0,v1,...]`. `[]` yields an empty list.
pub fn parse_float_list(s: &str, type_name: &str) -> Result<Vec<f32>, VecwireError> {
    let body = strip_delimiters(s, '[', ']', type_name)?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    body.split(',').map(parse_f32).collect()
}
