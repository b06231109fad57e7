// ============================================================================
// Exact-Decimal Rounding
// Quantize numbers to a fixed count of decimal places with a chosen mode
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::value::Value;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest place count the decimal type can carry.
pub const MAX_PLACES: u32 = 28;

/// Rounding policy applied when discarding digits.
///
/// The names follow the conventional decimal-arithmetic vocabulary, so
/// `HalfUp` rounds ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Ties away from zero
    #[default]
    HalfUp,
    /// Ties toward zero
    HalfDown,
    /// Ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Always away from zero
    Up,
    /// Always toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Toward zero, unless the kept last digit would be 0 or 5
    ZeroFiveUp,
}

impl RoundingMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::ZeroFiveUp,
    ];

    /// Conventional constant name (`ROUND_HALF_UP`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "ROUND_HALF_UP",
            RoundingMode::HalfDown => "ROUND_HALF_DOWN",
            RoundingMode::HalfEven => "ROUND_HALF_EVEN",
            RoundingMode::Up => "ROUND_UP",
            RoundingMode::Down => "ROUND_DOWN",
            RoundingMode::Ceiling => "ROUND_CEILING",
            RoundingMode::Floor => "ROUND_FLOOR",
            RoundingMode::ZeroFiveUp => "ROUND_05UP",
        }
    }

    /// Native strategy, or `None` for the 05-up rule which is composed by hand.
    const fn strategy(self) -> Option<RoundingStrategy> {
        match self {
            RoundingMode::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            RoundingMode::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            RoundingMode::HalfEven => Some(RoundingStrategy::MidpointNearestEven),
            RoundingMode::Up => Some(RoundingStrategy::AwayFromZero),
            RoundingMode::Down => Some(RoundingStrategy::ToZero),
            RoundingMode::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            RoundingMode::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            RoundingMode::ZeroFiveUp => None,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Accepts `ROUND_HALF_UP`, `half_up`, `HalfUp`, `half-up` and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_prefix("round").unwrap_or(&key);

        match key {
            "halfup" => Ok(RoundingMode::HalfUp),
            "halfdown" => Ok(RoundingMode::HalfDown),
            "halfeven" => Ok(RoundingMode::HalfEven),
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            "ceiling" => Ok(RoundingMode::Ceiling),
            "floor" => Ok(RoundingMode::Floor),
            "05up" | "zerofiveup" => Ok(RoundingMode::ZeroFiveUp),
            _ => Err(NumericError::InvalidConfig(format!(
                "unknown rounding mode {:?}",
                s
            ))),
        }
    }
}

// ============================================================================
// Core Rounding
// ============================================================================

/// Quantize an exact decimal to exactly `places` fractional digits.
///
/// The result always carries scale `places`, so `round_decimal(1.5, 2)`
/// displays as `1.50` and `places == 0` still yields a `Decimal`.
///
/// # Errors
/// - `PlacesOutOfRange` if `places > MAX_PLACES`
/// - `Overflow` if the integer digits leave no room for `places` digits
pub fn round_decimal(value: Decimal, places: u32, mode: RoundingMode) -> NumericResult<Decimal> {
    if places > MAX_PLACES {
        return Err(NumericError::PlacesOutOfRange(places));
    }

    let mut rounded = match mode.strategy() {
        Some(strategy) => value.round_dp_with_strategy(places, strategy),
        None => round_zero_five_up(value, places),
    };

    // Pads short values out to the requested scale; a capped scale means
    // the value has too many integer digits to be quantized.
    rounded.rescale(places);
    if rounded.scale() != places {
        return Err(NumericError::Overflow);
    }

    Ok(rounded)
}

fn round_zero_five_up(value: Decimal, places: u32) -> Decimal {
    let truncated = value.round_dp_with_strategy(places, RoundingStrategy::ToZero);
    if truncated == value {
        return truncated;
    }

    match truncated.mantissa().unsigned_abs() % 10 {
        0 | 5 => value.round_dp_with_strategy(places, RoundingStrategy::AwayFromZero),
        _ => truncated,
    }
}

/// Round a number or numeric text exactly.
///
/// Floats are read through their shortest decimal text, so `2.675`
/// rounds to `2.68` under `HalfUp` even though the stored binary value is
/// slightly below it. Missing input comes back as `Value::Missing`; every
/// other success is a `Value::Decimal`.
///
/// # Errors
/// `InvalidInput` for non-numeric text, plus whatever `round_decimal` reports.
///
/// # Example
/// ```
/// use report_format::numeric::{round_exact, RoundingMode, Value};
///
/// let v = round_exact(2.675, 2, RoundingMode::HalfUp).unwrap();
/// assert_eq!(v.to_string(), "2.68");
///
/// let v = round_exact("2.5", 0, RoundingMode::Down).unwrap();
/// assert_eq!(v.to_string(), "2");
///
/// assert_eq!(round_exact(f64::NAN, 2, RoundingMode::HalfUp).unwrap(), Value::Missing);
/// ```
pub fn round_exact(
    value: impl Into<Value>,
    places: u32,
    mode: RoundingMode,
) -> NumericResult<Value> {
    match value.into().to_exact()? {
        None => Ok(Value::Missing),
        Some(d) => round_decimal(d, places, mode).map(Value::Decimal),
    }
}

/// Half-away-from-zero rounding on binary floats.
///
/// Fast but inherits binary representation error: `2.675` becomes `2.67`.
/// Use `round_exact` when the typed digits must be honoured.
pub fn round_half_away(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let shifted = value * factor;
    let rounded = if shifted >= 0.0 {
        (shifted + 0.5).trunc()
    } else {
        (shifted - 0.5).trunc()
    };
    rounded / factor
}
