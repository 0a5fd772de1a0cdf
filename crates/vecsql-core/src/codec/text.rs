//! Literal codec: `[e1, e2, ..., en]`.
//!
//! Parsing works on raw bytes (SQLite text is not guaranteed UTF-8) and
//! accumulates each element in a fixed stack buffer, so decoding into a
//! capacity-first vector allocates nothing.

use std::fmt::Write;

use crate::constants::{MAX_DIMENSIONS, MAX_ELEMENT_CHARS};
use crate::errors::CodecError;
use crate::types::{Vector, VectorType};

/// Bytes of an over-long element echoed back in the error message.
const ERROR_PREFIX_CHARS: usize = 32;

/// Parse a literal into a freshly allocated, owned vector.
///
/// Input ends at the first NUL byte, if any. Anything after the closing
/// `]` is ignored.
pub fn parse_literal(vector_type: VectorType, input: &[u8]) -> Result<Vector<'static>, CodecError> {
    let mut v = Vector::with_max_capacity(vector_type)?;
    parse_into(&mut v, input)?;
    Ok(v)
}

fn parse_into(v: &mut Vector<'_>, input: &[u8]) -> Result<(), CodecError> {
    let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
    let input = &input[..end];

    let start = input
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(input.len());
    if input.get(start) != Some(&b'[') {
        return Err(CodecError::MalformedLiteral);
    }

    let mut scratch = [0u8; MAX_ELEMENT_CHARS];
    let mut len = 0usize;
    let mut closed = false;

    for &b in &input[start + 1..] {
        match b {
            b']' => {
                closed = true;
                break;
            }
            b',' => {
                push_parsed(v, &scratch[..len])?;
                len = 0;
            }
            b if is_space(b) => {}
            b => {
                if len >= MAX_ELEMENT_CHARS {
                    return Err(CodecError::ElementTooLong {
                        prefix: String::from_utf8_lossy(&scratch[..ERROR_PREFIX_CHARS])
                            .into_owned(),
                        max: MAX_ELEMENT_CHARS,
                    });
                }
                scratch[len] = b;
                len += 1;
            }
        }
    }

    // A pending element is parsed before the terminator is checked, so
    // `[1,x` reports the bad number rather than the missing bracket.
    if len != 0 {
        push_parsed(v, &scratch[..len])?;
    }
    if !closed {
        return Err(CodecError::UnterminatedLiteral);
    }
    Ok(())
}

fn push_parsed(v: &mut Vector<'_>, element: &[u8]) -> Result<(), CodecError> {
    let value = parse_number(element)?;
    v.push_element(value);
    if v.dims() >= MAX_DIMENSIONS {
        return Err(CodecError::TooManyDimensions { max: MAX_DIMENSIONS });
    }
    Ok(())
}

/// Locale-independent decimal/scientific float parsing.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, with either side of the
/// point optional but not both. `inf`, `nan` and hex forms are rejected.
fn parse_number(element: &[u8]) -> Result<f64, CodecError> {
    let invalid = || CodecError::InvalidNumber {
        literal: String::from_utf8_lossy(element).into_owned(),
    };
    if !is_decimal_literal(element) {
        return Err(invalid());
    }
    // The grammar check guarantees ASCII.
    let s = std::str::from_utf8(element).map_err(|_| invalid())?;
    s.parse::<f64>().map_err(|_| invalid())
}

fn is_decimal_literal(s: &[u8]) -> bool {
    let mut i = 0;
    let digits = |i: &mut usize| {
        let from = *i;
        while *i < s.len() && s[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - from
    };

    if matches!(s.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let mut mantissa = digits(&mut i);
    if s.get(i) == Some(&b'.') {
        i += 1;
        mantissa += digits(&mut i);
    }
    if mantissa == 0 {
        return false;
    }
    if matches!(s.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(s.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == s.len()
}

/// Matches the C library `isspace` set in the "C" locale.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Format a vector as `[e1,e2,...]`.
///
/// Integral values print as integers; everything else prints like C's
/// `%.6e` (`1.500000e+00`).
pub fn format_literal(v: &Vector<'_>) -> String {
    let mut out = String::with_capacity(2 + v.dims() * 14);
    out.push('[');
    for (i, x) in v.elements().enumerate() {
        if i > 0 {
            out.push(',');
        }
        format_element(&mut out, x as f32);
    }
    out.push(']');
    out
}

fn format_element(out: &mut String, x: f32) {
    if let Some(n) = as_exact_i64(x) {
        let _ = write!(out, "{n}");
    } else if x.is_nan() {
        out.push_str("nan");
    } else if x.is_infinite() {
        out.push_str(if x > 0.0 { "inf" } else { "-inf" });
    } else {
        let sci = format!("{:.6e}", f64::from(x));
        // Rust writes `1.500000e0`; rewrite the exponent as `e+00`.
        match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                let _ = write!(out, "{mantissa}e{sign}{:02}", exp.unsigned_abs());
            }
            None => out.push_str(&sci),
        }
    }
}

fn as_exact_i64(x: f32) -> Option<i64> {
    let in_range = x >= i64::MIN as f32 && x < i64::MAX as f32;
    (x.is_finite() && x.fract() == 0.0 && in_range).then_some(x as i64)
}
