// ============================================================================
// Significance Annotation
// p-value labels and stars
// ============================================================================

use crate::numeric::{NumericError, NumericResult, Value};

const THRESHOLDS: [f64; 3] = [0.001, 0.01, 0.05];
const LABELS: [&str; 4] = ["P<.001", "p<.01", "p<.05", "p>.05"];
const STARS: [&str; 4] = ["***", "**", "*", ""];

/// Strip footnote marks from a reported value.
///
/// Removes parenthesised letters `(a)` to `(f)` and asterisks from both
/// ends, repeatedly, so `"0.03(b)**"` becomes `"0.03"`.
pub fn clean_value(text: &str) -> &str {
    let mut current = text.trim();
    loop {
        let mut next = current;
        for letter in 'a'..='f' {
            next = next.trim_matches(|c: char| c == '(' || c == ')' || c == letter);
        }
        next = next.trim_matches('*').trim();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn p_value(value: Value) -> NumericResult<f64> {
    match value {
        Value::Text(text) => {
            let cleaned = clean_value(&text);
            cleaned
                .parse::<f64>()
                .ok()
                .filter(|p| !p.is_nan())
                .ok_or(NumericError::InvalidInput(text))
        }
        other => other
            .as_f64()
            .ok_or_else(|| NumericError::InvalidInput(other.to_string())),
    }
}

fn bucket(p: f64) -> usize {
    THRESHOLDS
        .iter()
        .position(|threshold| p < *threshold)
        .unwrap_or(THRESHOLDS.len())
}

/// Describe a p-value as `P<.001`, `p<.01`, `p<.05` or `p>.05`.
///
/// Thresholds are strict, so exactly `0.01` reads `p<.05`.
///
/// # Errors
/// `InvalidInput` if the value, after footnote marks are stripped, is not
/// a number, or if it is missing.
pub fn significance_label(p: impl Into<Value>) -> NumericResult<&'static str> {
    p_value(p.into()).map(|p| LABELS[bucket(p)])
}

/// Stars for a p-value: `***` below .001, `**` below .01, `*` below .05.
///
/// # Errors
/// Same as `significance_label`.
pub fn significance_stars(p: impl Into<Value>) -> NumericResult<&'static str> {
    p_value(p.into()).map(|p| STARS[bucket(p)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_labels() {
        assert_eq!(significance_label(0.0005), Ok("P<.001"));
        assert_eq!(significance_label(0.005), Ok("p<.01"));
        assert_eq!(significance_label(0.03), Ok("p<.05"));
        assert_eq!(significance_label(0.2), Ok("p>.05"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(significance_label(0.001), Ok("p<.01"));
        assert_eq!(significance_label(0.01), Ok("p<.05"));
        assert_eq!(significance_label(0.05), Ok("p>.05"));
        assert_eq!(significance_label(Decimal::new(1, 2)), Ok("p<.05"));
    }

    #[test]
    fn test_annotated_text() {
        assert_eq!(significance_label("0.03(a)"), Ok("p<.05"));
        assert_eq!(significance_label("(c)0.0001"), Ok("P<.001"));
        assert_eq!(significance_label(" .004** "), Ok("p<.01"));
        assert_eq!(significance_label("0.2(b)*"), Ok("p>.05"));
    }

    #[test]
    fn test_invalid_p() {
        assert_eq!(
            significance_label("n.s."),
            Err(NumericError::InvalidInput("n.s.".to_string()))
        );
        assert!(significance_label(Value::Missing).is_err());
        assert!(significance_stars("(g)0.01").is_err());
    }

    #[test]
    fn test_stars() {
        assert_eq!(significance_stars(0.0001), Ok("***"));
        assert_eq!(significance_stars(0.009), Ok("**"));
        assert_eq!(significance_stars(0.049), Ok("*"));
        assert_eq!(significance_stars(0.05), Ok(""));
        assert_eq!(significance_stars("0.02(a)"), Ok("*"));
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("0.03(a)"), "0.03");
        assert_eq!(clean_value("4.5**"), "4.5");
        assert_eq!(clean_value("0.03(b)**"), "0.03");
        assert_eq!(clean_value("0.5"), "0.5");
    }
}
