// ============================================================================
// Percentage Formatting
// Scale, round, clamp at 100 and tidy the 0 / 100 boundaries
// ============================================================================

use super::precision::Cell;
use crate::domain::{PercentFormat, Series};
use crate::numeric::{round_decimal, NumericError, NumericResult, Value};
use rust_decimal::Decimal;

/// Cap a percentage at exactly 100.
#[inline]
pub fn max_100(value: Decimal) -> Decimal {
    if value > Decimal::ONE_HUNDRED {
        Decimal::ONE_HUNDRED
    } else {
        value
    }
}

/// Print exact 0 and 100 without fractional digits (`100.0` -> `100`).
#[inline]
pub fn filter_0_100(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else if value == Decimal::ONE_HUNDRED {
        Decimal::ONE_HUNDRED
    } else {
        value
    }
}

/// Numeric cells of an already-formatted series; text stays text.
fn numeric_cell(value: &Value) -> Option<Decimal> {
    match value {
        Value::Decimal(_) | Value::Number(_) => value.as_decimal(),
        _ => None,
    }
}

/// `max_100` over a series; non-numeric entries are left alone.
pub fn max_100_series(series: &Series) -> Series {
    series.map(|value| match numeric_cell(value) {
        Some(d) => Value::Decimal(max_100(d)),
        None => value.clone(),
    })
}

/// `filter_0_100` over a series, also capping anything above 100.
pub fn filter_0_100_series(series: &Series) -> Series {
    series.map(|value| match numeric_cell(value) {
        Some(d) => Value::Decimal(filter_0_100(max_100(d))),
        None => value.clone(),
    })
}

fn format_decimal(value: Decimal, format: &PercentFormat) -> NumericResult<Decimal> {
    let scaled = value
        .checked_mul(format.scale)
        .ok_or(NumericError::Overflow)?;
    let mut rounded = round_decimal(scaled, format.places, format.mode)?;

    if format.clamp_max_100 && rounded > Decimal::ONE_HUNDRED {
        tracing::debug!("Clamping percentage {} to 100", rounded);
        rounded = Decimal::ONE_HUNDRED;
    }
    if format.force_integer_boundaries {
        rounded = filter_0_100(rounded);
    }

    Ok(rounded)
}

/// Format a fraction as a percentage.
///
/// The value is multiplied by `format.scale`, rounded exactly, clamped at
/// 100 and, when enabled, exact 0 and 100 lose their fractional digits.
///
/// # Errors
/// `InvalidConfig` for a bad format, `InvalidInput` for non-numeric text.
///
/// # Example
/// ```
/// use report_format::prelude::*;
///
/// let fmt = PercentFormat::default();
/// assert_eq!(format_percent(0.555, &fmt).unwrap().to_string(), "55.5");
/// assert_eq!(format_percent(1.0, &fmt).unwrap().to_string(), "100");
/// assert_eq!(format_percent(1.2, &fmt).unwrap().to_string(), "100");
/// ```
pub fn format_percent(value: impl Into<Value>, format: &PercentFormat) -> NumericResult<Value> {
    format.validate()?;
    match value.into().to_exact()? {
        None => Ok(Value::Missing),
        Some(d) => format_decimal(d, format).map(Value::Decimal),
    }
}

/// Format every element of a series as a percentage.
///
/// Element handling follows `round_exact_series`: missing and blank
/// entries become `Missing`, unparseable text passes through unchanged.
///
/// # Errors
/// `InvalidConfig` only; element problems never fail the call.
pub fn format_percent_series(series: &Series, format: &PercentFormat) -> NumericResult<Series> {
    format.validate()?;
    Ok(series.map(|value| match Cell::of(value) {
        Cell::Missing => Value::Missing,
        Cell::Opaque => value.clone(),
        Cell::Exact(d) => match format_decimal(d, format) {
            Ok(formatted) => Value::Decimal(formatted),
            Err(err) => {
                tracing::trace!("Passing through {:?}: {}", value, err);
                value.clone()
            }
        },
    }))
}

/// Percentage at `label`, or exact `0` when the label is absent.
pub fn get_percent(series: &Series, label: &str) -> Value {
    series
        .get(label)
        .cloned()
        .unwrap_or(Value::Decimal(Decimal::ZERO))
}
