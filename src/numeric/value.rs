// ============================================================================
// Report Value
// Tagged cell value: missing, binary float, exact decimal, or raw text
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell of report data.
///
/// `Number(NaN)` is treated exactly like `Missing`; the `From<f64>`
/// conversion normalises it on the way in.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// No value (the NaN / null sentinel)
    #[default]
    Missing,
    /// Binary floating-point number as produced by upstream statistics
    Number(f64),
    /// Exact decimal, usually the output of rounding
    Decimal(Decimal),
    /// Text, possibly numeric, possibly annotated (`"0.03(a)"`, `"4.5**"`)
    Text(String),
}

impl Value {
    /// True for `Missing` and for `Number(NaN)`.
    #[inline]
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Strict exact-decimal view.
    ///
    /// `Ok(None)` means the value is missing. Floats go through their
    /// shortest text form, so `2.675` is seen as exactly `2.675`.
    ///
    /// # Errors
    /// - `InvalidInput` for text that is not a number
    /// - `NonFinite` for infinities
    /// - `Overflow` for magnitudes outside the decimal range
    pub fn to_exact(&self) -> NumericResult<Option<Decimal>> {
        match self {
            Value::Missing => Ok(None),
            Value::Number(n) => decimal_from_f64(*n),
            Value::Decimal(d) => Ok(Some(*d)),
            Value::Text(text) => decimal_from_text(text),
        }
    }

    /// Lenient numeric view: anything that is not a finite number is `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.to_exact().ok().flatten()
    }

    /// Binary float view, following the usual `float(x)` conversion for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Missing => None,
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => Some(*n),
            Value::Decimal(d) => d.to_f64(),
            Value::Text(text) => text.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        }
    }

    /// Borrow the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Number(n) if n.is_nan() => Ok(()),
            Value::Number(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Value::Missing
        } else {
            Value::Number(value)
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Decimal(Decimal::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Decimal(Decimal::from(value))
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Convert a float through its shortest round-trip text.
///
/// Rust's `Display` for `f64` prints the shortest digits that read back to
/// the same float and never uses an exponent, so the text parses directly.
pub(crate) fn decimal_from_f64(value: f64) -> NumericResult<Option<Decimal>> {
    if value.is_nan() {
        return Ok(None);
    }
    if value.is_infinite() {
        return Err(NumericError::NonFinite);
    }
    Decimal::from_str(&value.to_string())
        .map(Some)
        .map_err(|_| NumericError::Overflow)
}

/// Parse decimal text, accepting surrounding whitespace and exponents.
pub(crate) fn decimal_from_text(text: &str) -> NumericResult<Option<Decimal>> {
    let trimmed = text.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);

    if unsigned.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
        return Err(NumericError::NonFinite);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(Some)
        .map_err(|_| NumericError::InvalidInput(text.to_string()))
}
