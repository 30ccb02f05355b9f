//! Scalar Values
//!
//! The value types the facade accepts, how they are encoded for the store,
//! and how a call's arguments are rendered into the history lists.

use std::fmt::Write;

// == Scalar ==
/// A storable scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl Scalar {
    // == Encoding ==
    /// Bytes written to the store.
    ///
    /// Strings are UTF-8, bytes are verbatim, numbers are their decimal text.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Scalar::Str(s) => s.as_bytes().to_vec(),
            Scalar::Bytes(b) => b.clone(),
            Scalar::Int(i) => i.to_string().into_bytes(),
            Scalar::Float(f) => float_repr(*f).into_bytes(),
        }
    }

    // == Representation ==
    /// Literal rendering of the value: quoted strings, `b'..'` bytes, bare numbers.
    pub fn repr(&self) -> String {
        match self {
            Scalar::Str(s) => str_repr(s),
            Scalar::Bytes(b) => bytes_repr(b),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => float_repr(*f),
        }
    }

    /// Rendering of a single-argument call tuple, e.g. `('hello',)`.
    pub fn args_repr(&self) -> String {
        format!("({},)", self.repr())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&[u8]> for Scalar {
    fn from(value: &[u8]) -> Self {
        Scalar::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(value: Vec<u8>) -> Self {
        Scalar::Bytes(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

// == Rendering Helpers ==

/// Single quotes unless the text contains a single quote and no double quote.
fn pick_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

fn str_repr(s: &str) -> String {
    let quote = pick_quote(s.contains('\''), s.contains('"'));
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => {
                let code = c as u32;
                let _ = match code {
                    0..=0xff => write!(out, "\\x{:02x}", code),
                    0x100..=0xffff => write!(out, "\\u{:04x}", code),
                    _ => write!(out, "\\U{:08x}", code),
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Control, format and separator code points other than the plain space.
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{a0}'
                | '\u{ad}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200f}'
                | '\u{2028}'..='\u{202f}'
                | '\u{205f}'..='\u{2064}'
                | '\u{3000}'
                | '\u{feff}'
                | '\u{e000}'..='\u{f8ff}'
        )
}

fn bytes_repr(bytes: &[u8]) -> String {
    let quote = pick_quote(bytes.contains(&b'\''), bytes.contains(&b'"'));
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b as char == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out.push(quote);
    out
}

/// Shortest round-trip decimal, always with a fractional part or a signed
/// two-digit exponent (`3.0`, `1e+16`, `1e-05`).
fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = f.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let formatted = format!("{:e}", f);
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }

    let formatted = format!("{}", f);
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
