//! Like-count values and the coercion of loosely typed stored fields.
//!
//! The item store does not guarantee a representation for the like-count field: it may be a
//! JSON number, a numeric string, or missing altogether. [`RawLikeCount`] names those cases
//! explicitly and [`RawLikeCount::coerce`] maps every one of them to a [`LikeCount`].

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// A non-negative like count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikeCount(u64);

impl LikeCount {
    pub const ZERO: LikeCount = LikeCount(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The count after one more like. Saturates instead of wrapping.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for LikeCount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LikeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How strictly stored values are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoercionMode {
    /// Fractional numbers truncate and strings parse their leading digits (`"42abc"` is 42).
    #[default]
    Lenient,
    /// Only integral numbers and strings that are entirely a base-10 integer count.
    Strict,
}

impl FromStr for CoercionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown coercion mode '{}', expected 'lenient' or 'strict'",
                other
            )),
        }
    }
}

impl fmt::Display for CoercionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// The like-count field exactly as the store returned it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawLikeCount {
    Number(Number),
    Text(String),
    /// Field missing or `null`.
    Absent,
    /// Booleans, arrays and objects.
    Other,
}

impl RawLikeCount {
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Number(n)) => Self::Number(n.clone()),
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(_) => Self::Other,
        }
    }

    /// Total conversion to a like count. Anything unusable becomes zero.
    pub fn coerce(&self, mode: CoercionMode) -> LikeCount {
        match self {
            Self::Number(n) => LikeCount(coerce_number(n, mode)),
            Self::Text(s) => LikeCount(match mode {
                CoercionMode::Lenient => parse_leading_integer(s),
                CoercionMode::Strict => parse_whole_integer(s),
            }),
            Self::Absent | Self::Other => LikeCount::ZERO,
        }
    }
}

fn coerce_number(n: &Number, mode: CoercionMode) -> u64 {
    if let Some(v) = n.as_u64() {
        return v;
    }
    if n.is_i64() {
        return 0;
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => {
            if mode == CoercionMode::Strict && f.fract() != 0.0 {
                0
            } else {
                // `as` saturates at u64::MAX
                f.trunc() as u64
            }
        }
        _ => 0,
    }
}

/// `parseInt(s, 10)`-style: optional sign, then as many digits as are present.
fn parse_leading_integer(s: &str) -> u64 {
    let trimmed = s.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 0;
    }

    rest[..digits_len]
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}

fn parse_whole_integer(s: &str) -> u64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<i128>() {
        Ok(v) if v <= 0 => 0,
        Ok(v) => u64::try_from(v).unwrap_or(u64::MAX),
        Err(_) => 0,
    }
}
