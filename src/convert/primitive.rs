use crate::*;
use std::path::PathBuf;

macro_rules! impl_int {
    ($($ty:ident),+ $(,)?) => {
        $(impl FromNode for $ty {
            fn from_node(node: &Node) -> ConvertResult<Self> {
                let text = scalar(node)?;
                let (negative, magnitude) = parse_integer(text, stringify!($ty))?;
                let value = if negative {
                    0i128
                        .checked_sub_unsigned(magnitude)
                        .and_then(|n| Self::try_from(n).ok())
                } else {
                    Self::try_from(magnitude).ok()
                };
                value.ok_or_else(|| range(stringify!($ty), text))
            }
        })+
    };
}

macro_rules! impl_float {
    ($($ty:ident),+ $(,)?) => {
        $(impl FromNode for $ty {
            fn from_node(node: &Node) -> ConvertResult<Self> {
                let text = scalar(node)?;
                let (body, negative) = match text.as_bytes().first() {
                    Some(b'-') => (&text[1..], true),
                    Some(b'+') => (&text[1..], false),
                    _ => (text, false),
                };
                let value = match body {
                    ".inf" | ".Inf" | ".INF" => Self::INFINITY,
                    ".nan" | ".NaN" | ".NAN" if body.len() == text.len() => return Ok(Self::NAN),
                    _ if is_float_literal(body) => match body.parse::<Self>() {
                        Ok(v) if v.is_infinite() => return Err(range(stringify!($ty), text)),
                        Ok(v) => v,
                        Err(_) => return Err(parse(stringify!($ty), text)),
                    },
                    _ => return Err(parse(stringify!($ty), text)),
                };
                Ok(if negative { -value } else { value })
            }
        })+
    };
}

fn scalar(node: &Node) -> ConvertResult<&str> {
    node.as_scalar()
        .ok_or_else(|| ConvertError::kind_mismatch(NodeKind::Scalar, node))
}

fn parse(ty: &'static str, text: &str) -> ConvertError {
    ConvertError::new(ErrorKind::Parse {
        ty,
        text: text.to_string(),
    })
}

fn range(ty: &'static str, text: &str) -> ConvertError {
    ConvertError::new(ErrorKind::Range {
        ty,
        text: text.to_string(),
    })
}

/// Split an integer literal into its sign and magnitude.
///
/// Accepts an optional sign followed by decimal digits, or by `0x`, `0o` and `0b` prefixed digits.
pub(crate) fn parse_integer(text: &str, ty: &'static str) -> ConvertResult<(bool, u128)> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match body.get(..2) {
        Some("0x") => (16, &body[2..]),
        Some("0o") => (8, &body[2..]),
        Some("0b") => (2, &body[2..]),
        _ => (10, body),
    };
    // `from_str_radix` would accept a second sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(parse(ty, text));
    }
    match u128::from_str_radix(digits, radix) {
        Ok(n) => Ok((negative, n)),
        Err(_) => Err(range(ty, text)),
    }
}

/// Digits, dots and exponents, a sign is only allowed right after the exponent marker.
fn is_float_literal(body: &str) -> bool {
    let bytes = body.as_bytes();
    bytes.iter().any(u8::is_ascii_digit)
        && bytes.iter().enumerate().all(|(i, &b)| match b {
            b'+' | b'-' => i > 0 && matches!(bytes[i - 1], b'e' | b'E'),
            _ => b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E'),
        })
}

impl_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

impl FromNode for bool {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        match scalar(node)? {
            "y" | "Y" | "yes" | "Yes" | "YES" | "true" | "True" | "TRUE" | "on" | "On" | "ON" => {
                Ok(true)
            }
            "n" | "N" | "no" | "No" | "NO" | "false" | "False" | "FALSE" | "off" | "Off"
            | "OFF" => Ok(false),
            text => Err(parse("bool", text)),
        }
    }
}

impl FromNode for char {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        let text = scalar(node)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(parse("char", text)),
        }
    }
}

impl FromNode for String {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        scalar(node).map(str::to_string)
    }
}

impl FromNode for PathBuf {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        scalar(node).map(PathBuf::from)
    }
}

impl FromNode for Node {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        Ok(node.clone())
    }
}
