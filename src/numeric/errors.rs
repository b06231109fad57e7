// ============================================================================
// Numeric Errors
// Error types for exact-decimal rounding and report formatting
// ============================================================================

use std::fmt;

/// Errors that can occur while rounding or formatting report values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text could not be interpreted as a number
    InvalidInput(String),
    /// Infinite value where a finite number is required
    NonFinite,
    /// Value is outside the range of the exact-decimal type
    Overflow,
    /// Requested more decimal places than the decimal type can hold
    PlacesOutOfRange(u32),
    /// Table rounding named a column that does not exist
    UnknownColumn(String),
    /// Table rounding addressed a column position past the last column
    ColumnOutOfRange(usize),
    /// Two sequences that must line up have different lengths
    LengthMismatch { expected: usize, found: usize },
    /// Joining requires at least one item
    EmptyList,
    /// A range needs a maximum strictly greater than its minimum
    EmptyRange,
    /// Configuration failed validation
    InvalidConfig(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput(text) => {
                write!(f, "invalid input: could not parse {:?} as a number", text)
            },
            NumericError::NonFinite => write!(f, "non-finite value cannot be rounded"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds the decimal range")
            },
            NumericError::PlacesOutOfRange(places) => write!(
                f,
                "place count {} exceeds the maximum of {}",
                places,
                super::MAX_PLACES
            ),
            NumericError::UnknownColumn(name) => write!(f, "unknown column {:?}", name),
            NumericError::ColumnOutOfRange(position) => {
                write!(f, "column position {} is out of range", position)
            },
            NumericError::LengthMismatch { expected, found } => write!(
                f,
                "length mismatch: expected {} elements, found {}",
                expected, found
            ),
            NumericError::EmptyList => write!(f, "cannot join an empty list"),
            NumericError::EmptyRange => {
                write!(f, "range requires a maximum greater than the minimum")
            },
            NumericError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput("abc".to_string()).to_string(),
            "invalid input: could not parse \"abc\" as a number"
        );
        assert_eq!(
            NumericError::PlacesOutOfRange(40).to_string(),
            "place count 40 exceeds the maximum of 28"
        );
        assert_eq!(NumericError::EmptyList.to_string(), "cannot join an empty list");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::NonFinite);
        assert_ne!(
            NumericError::UnknownColumn("a".to_string()),
            NumericError::UnknownColumn("b".to_string())
        );
    }
}
