// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{NodeError, Result};

static INT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sign>[-+]?)(?:0x(?P<hex>[0-9a-fA-F]+)|0o(?P<oct>[0-7]+)|(?P<dec>[0-9]+))$")
        .expect("integer pattern is valid")
});

static FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?$")
        .expect("float pattern is valid")
});

static INF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sign>[-+]?)\.(?:inf|Inf|INF)$").expect("infinity pattern is valid")
});

static NAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(?:nan|NaN|NAN)$").expect("nan pattern is valid"));

/// Conversion from a scalar's text into a native value.
pub trait FromScalar: Sized {
    /// Name of the target type, used in error messages.
    const TARGET: &'static str;

    fn from_scalar(value: &str) -> Result<Self>;
}

fn conversion_error(value: &str, target: &'static str, hint: &str, code: u32) -> NodeError {
    NodeError::Conversion {
        value: value.to_string(),
        target,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

/// Why an integer literal was rejected.
enum IntegerError {
    Format,
    Range,
}

/// Decimal, `0x` hexadecimal and `0o` octal integers with an optional sign.
fn parse_integer(value: &str) -> std::result::Result<i128, IntegerError> {
    let caps = INT_PATTERN.captures(value).ok_or(IntegerError::Format)?;
    let (digits, radix) = if let Some(hex) = caps.name("hex") {
        (hex.as_str(), 16)
    } else if let Some(oct) = caps.name("oct") {
        (oct.as_str(), 8)
    } else {
        (caps.name("dec").ok_or(IntegerError::Format)?.as_str(), 10)
    };

    // the pattern already checked the digits, so only overflow is left
    let magnitude = i128::from_str_radix(digits, radix).map_err(|_| IntegerError::Range)?;
    if &caps["sign"] == "-" {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

macro_rules! integer_from_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromScalar for $ty {
                const TARGET: &'static str = $name;

                fn from_scalar(value: &str) -> Result<Self> {
                    let out_of_range = || {
                        conversion_error(
                            value,
                            $name,
                            concat!("Value is out of range for ", $name),
                            403,
                        )
                    };
                    let n = parse_integer(value.trim()).map_err(|e| match e {
                        IntegerError::Format => {
                            conversion_error(value, $name, "Use a decimal, 0x or 0o integer", 402)
                        }
                        IntegerError::Range => out_of_range(),
                    })?;
                    <$ty>::try_from(n).map_err(|_| out_of_range())
                }
            }
        )*
    };
}

integer_from_scalar! {
    i32 => "i32",
    u32 => "u32",
    i64 => "i64",
    u64 => "u64",
}

macro_rules! float_from_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromScalar for $ty {
                const TARGET: &'static str = $name;

                fn from_scalar(value: &str) -> Result<Self> {
                    let text = value.trim();
                    if let Some(caps) = INF_PATTERN.captures(text) {
                        return Ok(if &caps["sign"] == "-" {
                            <$ty>::NEG_INFINITY
                        } else {
                            <$ty>::INFINITY
                        });
                    }
                    if NAN_PATTERN.is_match(text) {
                        return Ok(<$ty>::NAN);
                    }
                    if !FLOAT_PATTERN.is_match(text) {
                        return Err(conversion_error(
                            value,
                            $name,
                            "Use a decimal number, .inf or .nan",
                            404,
                        ));
                    }
                    text.parse::<$ty>().map_err(|_| {
                        conversion_error(value, $name, "Use a decimal number, .inf or .nan", 404)
                    })
                }
            }
        )*
    };
}

float_from_scalar! {
    f32 => "f32",
    f64 => "f64",
}

impl FromScalar for String {
    const TARGET: &'static str = "string";

    fn from_scalar(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }
}

impl FromScalar for char {
    const TARGET: &'static str = "char";

    fn from_scalar(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(conversion_error(value, "char", "Use a single character", 405)),
        }
    }
}

impl FromScalar for bool {
    const TARGET: &'static str = "bool";

    fn from_scalar(value: &str) -> Result<Self> {
        match value.trim() {
            "true" | "True" | "TRUE" => Ok(true),
            "false" | "False" | "FALSE" => Ok(false),
            _ => Err(conversion_error(value, "bool", "Use true or false", 406)),
        }
    }
}
