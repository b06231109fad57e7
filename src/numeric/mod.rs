// ============================================================================
// Numeric Module
// Exact-decimal rounding for report values
// ============================================================================
//
// This module provides:
// - Value: tagged cell value (Missing | Number | Decimal | Text)
// - RoundingMode: the closed set of decimal rounding policies
// - round_exact / round_decimal: quantize to a fixed number of places
// - NumericError: error types shared by the whole crate
//
// Design principles:
// - Floats are read through their shortest text, never scaled in binary
// - All fallible operations return Result (no panics)
// - Missing values propagate instead of failing

mod errors;
mod rounding;
mod value;

pub use errors::{NumericError, NumericResult};
pub use rounding::{round_decimal, round_exact, round_half_away, RoundingMode, MAX_PLACES};
pub use value::Value;

pub(crate) use value::{decimal_from_f64, decimal_from_text};
