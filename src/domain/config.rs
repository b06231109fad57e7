// ============================================================================
// Report Formatting Configuration
// Options for percentages, list joining and mean/sd composition
// ============================================================================

use crate::numeric::{NumericError, NumericResult, RoundingMode, MAX_PLACES};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Enumeration comma used between list items in Chinese text
pub const DUNHAO: &str = "、";

/// Full-width comma
pub const DOUHAO: &str = "，";

/// "and" placed before the final list item
pub const HE: &str = "和";

fn check_places(places: u32, what: &str) -> NumericResult<()> {
    if places > MAX_PLACES {
        return Err(NumericError::InvalidConfig(format!(
            "{} places must be at most {}, got {}",
            what, MAX_PLACES, places
        )));
    }
    Ok(())
}

// ============================================================================
// Percent Format
// ============================================================================

/// How fractions are turned into percentages.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PercentFormat {
    /// Decimal places kept for interior values
    pub places: u32,

    /// Rounding policy
    pub mode: RoundingMode,

    /// Replace anything above 100 with exactly 100
    pub clamp_max_100: bool,

    /// Print exact 0 and 100 without decimals
    pub force_integer_boundaries: bool,

    /// Multiplier applied before rounding (100 for fractions in [0, 1])
    pub scale: Decimal,
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self {
            places: 1,
            mode: RoundingMode::HalfUp,
            clamp_max_100: true,
            force_integer_boundaries: true,
            scale: Decimal::ONE_HUNDRED,
        }
    }
}

impl PercentFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set decimal places
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: Enable or disable clamping at 100
    pub fn with_clamp_max_100(mut self, clamp: bool) -> Self {
        self.clamp_max_100 = clamp;
        self
    }

    /// Builder method: Enable or disable integer 0/100
    pub fn with_force_integer_boundaries(mut self, force: bool) -> Self {
        self.force_integer_boundaries = force;
        self
    }

    /// Builder method: Set the scaling multiplier
    pub fn with_scale(mut self, scale: Decimal) -> Self {
        self.scale = scale;
        self
    }

    /// Input is already a percentage: no scaling, same rounding rules.
    pub fn already_scaled() -> Self {
        Self::default().with_scale(Decimal::ONE)
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        check_places(self.places, "percent")?;
        if self.scale <= Decimal::ZERO {
            return Err(NumericError::InvalidConfig(
                "percent scale must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// List Joining
// ============================================================================

/// Separators for natural-language lists: `a、b和c`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoinStyle {
    /// Between all items except the last pair
    pub mid: String,
    /// Between the last two items
    pub last: String,
}

impl Default for JoinStyle {
    fn default() -> Self {
        Self::chinese()
    }
}

impl JoinStyle {
    pub fn new(mid: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            mid: mid.into(),
            last: last.into(),
        }
    }

    /// `a、b和c`
    pub fn chinese() -> Self {
        Self::new(DUNHAO, HE)
    }

    /// `a，b和c`
    pub fn chinese_comma() -> Self {
        Self::new(DOUHAO, HE)
    }

    /// `a, b and c`
    pub fn english() -> Self {
        Self::new(", ", " and ")
    }
}

// ============================================================================
// Mean / SD Format
// ============================================================================

/// Places used when composing `mean(sd)` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeanSdFormat {
    pub mean_places: u32,
    pub sd_places: u32,
}

impl Default for MeanSdFormat {
    fn default() -> Self {
        Self {
            mean_places: 3,
            sd_places: 3,
        }
    }
}

impl MeanSdFormat {
    pub fn new(mean_places: u32, sd_places: u32) -> Self {
        Self {
            mean_places,
            sd_places,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        check_places(self.mean_places, "mean")?;
        check_places(self.sd_places, "sd")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_defaults() {
        let fmt = PercentFormat::default();
        assert_eq!(fmt.places, 1);
        assert_eq!(fmt.mode, RoundingMode::HalfUp);
        assert!(fmt.clamp_max_100);
        assert!(fmt.force_integer_boundaries);
        assert_eq!(fmt.scale, Decimal::ONE_HUNDRED);
        assert!(fmt.validate().is_ok());
    }

    #[test]
    fn test_percent_builder() {
        let fmt = PercentFormat::new()
            .with_places(2)
            .with_mode(RoundingMode::HalfEven)
            .with_clamp_max_100(false);

        assert_eq!(fmt.places, 2);
        assert_eq!(fmt.mode, RoundingMode::HalfEven);
        assert!(!fmt.clamp_max_100);
        assert_eq!(PercentFormat::already_scaled().scale, Decimal::ONE);
    }

    #[test]
    fn test_percent_validation() {
        assert!(PercentFormat::new().with_places(29).validate().is_err());
        assert!(PercentFormat::new()
            .with_scale(Decimal::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_join_presets() {
        assert_eq!(JoinStyle::default(), JoinStyle::new("、", "和"));
        assert_eq!(JoinStyle::chinese_comma().mid, DOUHAO);
        assert_eq!(JoinStyle::english().last, " and ");
    }

    #[test]
    fn test_mean_sd_validation() {
        assert!(MeanSdFormat::default().validate().is_ok());
        assert!(MeanSdFormat::new(2, 40).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_percent_from_json() {
        let fmt: PercentFormat =
            serde_json::from_str(r#"{"places": 2, "mode": "HalfEven"}"#).unwrap();
        assert_eq!(fmt.places, 2);
        assert_eq!(fmt.mode, RoundingMode::HalfEven);
        assert!(fmt.clamp_max_100);
    }
}
