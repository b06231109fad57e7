// ============================================================================
// Element-wise Precision
// Tolerant rounding over series and table columns
// ============================================================================

use crate::domain::{Places, Series, Table};
use crate::numeric::{
    decimal_from_f64, decimal_from_text, round_decimal, NumericError, NumericResult, RoundingMode,
    Value, MAX_PLACES,
};
use rust_decimal::Decimal;

/// How a single cell takes part in element-wise arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Cell {
    /// Missing, blank text, or NaN
    Missing,
    /// A finite number
    Exact(Decimal),
    /// Text or a value that is not a usable number; passed through untouched
    Opaque,
}

impl Cell {
    pub(crate) fn of(value: &Value) -> Cell {
        match value {
            Value::Missing => Cell::Missing,
            Value::Decimal(d) => Cell::Exact(*d),
            Value::Number(n) => match decimal_from_f64(*n) {
                Ok(Some(d)) => Cell::Exact(d),
                Ok(None) => Cell::Missing,
                Err(_) => Cell::Opaque,
            },
            Value::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Cell::Missing;
                }
                match decimal_from_text(trimmed) {
                    Ok(Some(d)) => Cell::Exact(d),
                    Ok(None) => Cell::Missing,
                    Err(_) => Cell::Opaque,
                }
            }
        }
    }
}

fn check_places(places: u32) -> NumericResult<()> {
    if places > MAX_PLACES {
        return Err(NumericError::PlacesOutOfRange(places));
    }
    Ok(())
}

/// Round one cell, never failing: anything that cannot be rounded is
/// returned as it came in.
pub(crate) fn round_cell(value: &Value, places: u32, mode: RoundingMode) -> Value {
    match Cell::of(value) {
        Cell::Missing => Value::Missing,
        Cell::Opaque => {
            tracing::trace!("Passing through non-numeric value {:?}", value);
            value.clone()
        }
        Cell::Exact(d) => match round_decimal(d, places, mode) {
            Ok(rounded) => Value::Decimal(rounded),
            Err(err) => {
                tracing::trace!("Passing through {:?}: {}", value, err);
                value.clone()
            }
        },
    }
}

fn round_values(values: &[Value], places: u32, mode: RoundingMode) -> Vec<Value> {
    values
        .iter()
        .map(|value| round_cell(value, places, mode))
        .collect()
}

/// Round every element of a series independently.
///
/// Missing values and blank text become `Missing`; text that does not
/// parse as a number is returned unchanged so annotated entries such as
/// `"0.03(a)"` survive. Labels and order are preserved.
///
/// # Errors
/// Only `PlacesOutOfRange`, checked once before any element is touched.
pub fn round_exact_series(
    series: &Series,
    places: u32,
    mode: RoundingMode,
) -> NumericResult<Series> {
    check_places(places)?;
    Ok(series.map(|value| round_cell(value, places, mode)))
}

/// Round table columns, returning a new table.
///
/// `places` selects the columns: one count for all columns, a list
/// applied by column position, or a name-to-count mapping. Columns that
/// are not selected are copied unchanged.
///
/// # Errors
/// `ColumnOutOfRange`, `UnknownColumn` or `PlacesOutOfRange`.
pub fn round_table(
    table: &Table,
    places: impl Into<Places>,
    mode: RoundingMode,
) -> NumericResult<Table> {
    let mut rounded = table.clone();
    round_table_in_place(&mut rounded, places, mode)?;
    Ok(rounded)
}

/// Round table columns in place.
///
/// This mutates the caller's table. Every column selection is validated
/// first, so on error the table is left untouched.
///
/// # Errors
/// `ColumnOutOfRange`, `UnknownColumn` or `PlacesOutOfRange`.
pub fn round_table_in_place(
    table: &mut Table,
    places: impl Into<Places>,
    mode: RoundingMode,
) -> NumericResult<()> {
    let places: Places = places.into();
    let targets = places.resolve(table)?;
    for (_, places) in &targets {
        check_places(*places)?;
    }

    for (position, places) in targets {
        tracing::debug!(
            "Rounding column {:?} to {} places ({})",
            table.columns()[position],
            places,
            mode
        );
        if let Some(column) = table.column_at_mut(position) {
            *column = round_values(column, places, mode);
        }
    }

    Ok(())
}
