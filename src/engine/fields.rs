// ============================================================================
// Field Comparison
// Select series labels by comparing values against a threshold
// ============================================================================

use crate::domain::Series;
use crate::numeric::{NumericError, NumericResult, Value};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// What each element is compared against.
#[derive(Debug, Clone, Copy)]
pub enum Comparand<'a> {
    /// One threshold for every element
    Scalar(Decimal),
    /// The element with the same label in another series
    Series(&'a Series),
}

impl From<Decimal> for Comparand<'_> {
    fn from(value: Decimal) -> Self {
        Comparand::Scalar(value)
    }
}

impl From<i64> for Comparand<'_> {
    fn from(value: i64) -> Self {
        Comparand::Scalar(Decimal::from(value))
    }
}

impl<'a> From<&'a Series> for Comparand<'a> {
    fn from(series: &'a Series) -> Self {
        Comparand::Series(series)
    }
}

impl Comparand<'_> {
    fn for_label(&self, label: &str) -> Option<Decimal> {
        match self {
            Comparand::Scalar(d) => Some(*d),
            Comparand::Series(series) => series.get(label).and_then(Value::as_decimal),
        }
    }
}

fn fields_where<'a>(
    series: &Series,
    other: impl Into<Comparand<'a>>,
    wanted: Ordering,
) -> Vec<String> {
    let other = other.into();
    series
        .iter()
        .filter_map(|(label, value)| {
            let lhs = value.as_decimal()?;
            let rhs = other.for_label(&label)?;
            (lhs.cmp(&rhs) == wanted).then_some(label)
        })
        .collect()
}

/// Labels whose value equals the comparand.
///
/// Missing or non-numeric elements, and labels absent from a comparand
/// series, never match.
pub fn eq_fields<'a>(series: &Series, other: impl Into<Comparand<'a>>) -> Vec<String> {
    fields_where(series, other, Ordering::Equal)
}

/// Labels whose value is below the comparand.
pub fn lt_fields<'a>(series: &Series, other: impl Into<Comparand<'a>>) -> Vec<String> {
    fields_where(series, other, Ordering::Less)
}

/// Labels whose value is above the comparand.
pub fn gt_fields<'a>(series: &Series, other: impl Into<Comparand<'a>>) -> Vec<String> {
    fields_where(series, other, Ordering::Greater)
}

/// `"min~max"` over the numeric elements of a series.
///
/// # Errors
/// `EmptyRange` unless the maximum is strictly greater than the minimum
/// (which includes series with fewer than two numbers).
pub fn min_max(series: &Series, separator: &str) -> NumericResult<String> {
    let numbers: Vec<Decimal> = series.values().iter().filter_map(Value::as_decimal).collect();
    let min = numbers.iter().min().ok_or(NumericError::EmptyRange)?;
    let max = numbers.iter().max().ok_or(NumericError::EmptyRange)?;

    if max <= min {
        return Err(NumericError::EmptyRange);
    }
    Ok(format!("{}{}{}", min, separator, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> Series {
        Series::from_pairs([
            ("a", Value::from(1.0)),
            ("b", Value::from(2.5)),
            ("c", Value::from("3")),
            ("d", Value::Missing),
            ("e", Value::from("n/a")),
        ])
    }

    #[test]
    fn test_scalar_comparisons() {
        let s = scores();
        assert_eq!(eq_fields(&s, 3i64), vec!["c"]);
        assert_eq!(lt_fields(&s, 3i64), vec!["a", "b"]);
        assert_eq!(gt_fields(&s, Decimal::new(15, 1)), vec!["b", "c"]);
    }

    #[test]
    fn test_series_comparisons_align_by_label() {
        let s = scores();
        let other = Series::from_pairs([("c", 3.0), ("b", 2.0), ("a", 1.0)]);
        assert_eq!(eq_fields(&s, &other), vec!["a", "c"]);
        assert_eq!(gt_fields(&s, &other), vec!["b"]);
        assert!(lt_fields(&s, &other).is_empty());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&scores(), "~").unwrap(), "1~3");
        assert_eq!(min_max(&scores(), "-").unwrap(), "1-3");

        let flat = Series::from_values([2.0, 2.0]);
        assert_eq!(min_max(&flat, "~"), Err(NumericError::EmptyRange));
        assert_eq!(
            min_max(&Series::from_values([Value::Missing]), "~"),
            Err(NumericError::EmptyRange)
        );
    }
}
