// ============================================================================
// Statistics Text
// Compose report strings from already-computed statistics
// ============================================================================

use super::precision::round_cell;
use super::significance::{significance_label, significance_stars};
use crate::domain::{MeanSdFormat, Series};
use crate::numeric::{round_exact, NumericError, NumericResult, RoundingMode, Value};
use std::fmt::Display;

/// Fixed-point text of a number or numeric text, e.g. `fixed(2.0, 3)` is
/// `"2.000"`.
///
/// Formats the binary float value; use `round_exact` when the typed
/// digits must decide ties. Missing values render as empty text.
///
/// # Errors
/// `InvalidInput` for text that is not a number.
pub fn fixed(value: impl Into<Value>, places: u32) -> NumericResult<String> {
    let value = value.into();
    if value.is_missing() {
        return Ok(String::new());
    }
    let number = value
        .as_f64()
        .ok_or_else(|| NumericError::InvalidInput(value.to_string()))?;
    Ok(format!("{:.*}", places as usize, number))
}

/// `mean(sd)` text, e.g. `"12.346(0.100)"`.
pub fn mean_sd(
    mean: impl Into<Value>,
    sd: impl Into<Value>,
    format: &MeanSdFormat,
) -> NumericResult<String> {
    mean_sd_with_template(mean, sd, format, "{mean}({sd})")
}

/// Like `mean_sd`, filling `{mean}` and `{sd}` in `template`.
pub fn mean_sd_with_template(
    mean: impl Into<Value>,
    sd: impl Into<Value>,
    format: &MeanSdFormat,
    template: &str,
) -> NumericResult<String> {
    format.validate()?;
    let mean = fixed(mean, format.mean_places)?;
    let sd = fixed(sd, format.sd_places)?;
    Ok(template.replace("{mean}", &mean).replace("{sd}", &sd))
}

/// Combine a column of means and a column of standard deviations into one
/// `mean(sd)` column, rounding each exactly.
///
/// Rows are paired by position and labelled like `means`. A row where
/// either side is missing is missing.
///
/// # Errors
/// `LengthMismatch` if the series differ in length, or an invalid format.
pub fn mean_sd_series(
    means: &Series,
    sds: &Series,
    format: &MeanSdFormat,
) -> NumericResult<Series> {
    format.validate()?;
    if means.len() != sds.len() {
        return Err(NumericError::LengthMismatch {
            expected: means.len(),
            found: sds.len(),
        });
    }

    let mut sd_values = sds.values().iter();
    Ok(means.map(|mean| {
        let mean = round_cell(mean, format.mean_places, RoundingMode::HalfUp);
        let sd = sd_values
            .next()
            .map(|sd| round_cell(sd, format.sd_places, RoundingMode::HalfUp))
            .unwrap_or_default();

        if mean.is_missing() || sd.is_missing() {
            Value::Missing
        } else {
            Value::Text(format!("{}({})", mean, sd))
        }
    }))
}

/// Parse numeric text, optionally rounding it exactly to `places`.
///
/// # Errors
/// `InvalidInput` if the text is not a number.
pub fn str_to_decimal(text: &str, places: Option<u32>) -> NumericResult<Value> {
    let number: f64 = text
        .trim()
        .parse()
        .map_err(|_| NumericError::InvalidInput(text.to_string()))?;
    match places {
        Some(places) => round_exact(number, places, RoundingMode::HalfUp),
        None => Ok(Value::from(number)),
    }
}

/// `F(df1,df2) = f, p<.05`; degrees of freedom are truncated to integers.
pub fn f_description(
    df1: f64,
    df2: f64,
    f: impl Display,
    p: impl Into<Value>,
) -> NumericResult<String> {
    Ok(format!(
        "F({},{}) = {}, {}",
        df1.trunc() as i64,
        df2.trunc() as i64,
        f,
        significance_label(p)?
    ))
}

/// `t=2.1,df=30,p<.05`
pub fn t_description(
    t: impl Display,
    df: impl Display,
    p: impl Into<Value>,
) -> NumericResult<String> {
    Ok(format!("t={},df={},{}", t, df, significance_label(p)?))
}

/// `chi2=3.2,df=1,p>.05`
pub fn chi_description(
    chi: impl Display,
    df: impl Display,
    p: impl Into<Value>,
) -> NumericResult<String> {
    Ok(format!("chi2={},df={},{}", chi, df, significance_label(p)?))
}

/// Value with significance stars appended, e.g. `"4.5**"`.
pub fn value_star(
    value: impl Into<Value>,
    p: impl Into<Value>,
    places: u32,
) -> NumericResult<String> {
    Ok(format!("{}{}", fixed(value, places)?, significance_stars(p)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(2.0, 3).unwrap(), "2.000");
        assert_eq!(fixed("3.14159", 2).unwrap(), "3.14");
        assert_eq!(fixed(Value::Missing, 2).unwrap(), "");
        assert!(fixed("abc", 2).is_err());
    }

    #[test]
    fn test_mean_sd() {
        let fmt = MeanSdFormat::default();
        assert_eq!(mean_sd(12.3456, 0.1, &fmt).unwrap(), "12.346(0.100)");

        let fmt = MeanSdFormat::new(1, 2);
        assert_eq!(
            mean_sd_with_template(3.0, 0.5, &fmt, "{mean} ± {sd}").unwrap(),
            "3.0 ± 0.50"
        );
    }

    #[test]
    fn test_mean_sd_series() {
        let means = Series::from_pairs([("a", 1.2345), ("b", 2.0), ("c", f64::NAN)]);
        let sds = Series::from_values([0.05, 0.125, 0.3]);
        let out = mean_sd_series(&means, &sds, &MeanSdFormat::new(2, 2)).unwrap();

        assert_eq!(out.get("a"), Some(&Value::from("1.23(0.05)")));
        assert_eq!(out.get("b"), Some(&Value::from("2.00(0.13)")));
        assert_eq!(out.get("c"), Some(&Value::Missing));
    }

    #[test]
    fn test_mean_sd_series_length_mismatch() {
        let means = Series::from_values([1.0, 2.0]);
        let sds = Series::from_values([1.0]);
        assert_eq!(
            mean_sd_series(&means, &sds, &MeanSdFormat::default()),
            Err(NumericError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_str_to_decimal() {
        assert_eq!(str_to_decimal(" 1.5 ", None).unwrap(), Value::Number(1.5));
        assert_eq!(
            str_to_decimal("2.675", Some(2)).unwrap().to_string(),
            "2.68"
        );
        assert!(str_to_decimal("x", None).is_err());
    }

    #[test]
    fn test_statistic_descriptions() {
        assert_eq!(
            f_description(2.0, 30.0, 4.5, 0.02).unwrap(),
            "F(2,30) = 4.5, p<.05"
        );
        assert_eq!(t_description(2.1, 30, 0.03).unwrap(), "t=2.1,df=30,p<.05");
        assert_eq!(
            chi_description(3.2, 1, "0.07").unwrap(),
            "chi2=3.2,df=1,p>.05"
        );
        assert!(t_description(2.1, 30, "bad").is_err());
    }

    #[test]
    fn test_value_star() {
        assert_eq!(value_star(4.5, 0.005, 1).unwrap(), "4.5**");
        assert_eq!(value_star(4.5, 0.5, 2).unwrap(), "4.50");
    }
}
