//! Bit-string decode entry point.
//!
//! Accepts 8-character binary literals (`01111110`, `0b0111_1110`) and
//! decodes them under a named format for diagnostic output.

use crate::error::{Error, Result};
use crate::formats::{Category, Fp8Format};

/// Parse an 8-bit binary literal. An optional `0b` prefix and underscore
/// separators are allowed; after stripping those, the literal must be
/// exactly 8 binary digits.
pub fn parse_bit_literal(literal: &str) -> Result<u8> {
    let mut s = literal.trim().to_ascii_lowercase().replace('_', "");
    if let Some(stripped) = s.strip_prefix("0b") {
        s = stripped.to_string();
    }
    if s.len() != 8 || !s.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(Error::MalformedLiteral {
            literal: literal.to_string(),
        });
    }
    // unwrap is safe: the literal was just validated
    Ok(u8::from_str_radix(&s, 2).unwrap())
}

/// Decode a binary literal under a named format, returning the code's
/// category alongside its value.
pub fn decode_from_bits(literal: &str, format: Fp8Format) -> Result<(Category, f64)> {
    let code = parse_bit_literal(literal)?;
    Ok(format.decode(code))
}
