// ============================================================================
// Report Format Library
// Exact-decimal rounding and text helpers for statistical reports
// ============================================================================

//! # Report Format
//!
//! Formatting helpers for statistical report tables.
//!
//! ## Features
//!
//! - **Exact-decimal rounding** with eight rounding modes; floats are read
//!   through their shortest text so `2.675` rounds like the digits you see
//! - **Tolerant element-wise rounding** over labeled series and tables
//! - **Percentages** with clamping at 100 and clean `0` / `100` boundaries
//! - **Significance labels and stars** for p-values, including annotated text
//! - **Label and list helpers**: hierarchical label compression,
//!   natural-language list joining
//!
//! ## Example
//!
//! ```rust
//! use report_format::prelude::*;
//!
//! // Round a labeled series; bad text passes through untouched.
//! let scores = Series::from_pairs([
//!     ("q1", Value::from(2.675)),
//!     ("q2", Value::from("0.03(a)")),
//!     ("q3", Value::from("")),
//! ]);
//! let rounded = round_exact_series(&scores, 2, RoundingMode::HalfUp).unwrap();
//! assert_eq!(rounded.get("q1").unwrap().to_string(), "2.68");
//! assert_eq!(rounded.get("q2").unwrap().to_string(), "0.03(a)");
//! assert!(rounded.get("q3").unwrap().is_missing());
//!
//! // Percentages and significance.
//! let pct = format_percent(0.555, &PercentFormat::default()).unwrap();
//! assert_eq!(pct.to_string(), "55.5");
//! assert_eq!(significance_label(0.03).unwrap(), "p<.05");
//!
//! // Natural-language lists.
//! let groups = join_list(&["A", "B", "C"], &JoinStyle::default()).unwrap();
//! assert_eq!(groups, "A、B和C");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        compress_labels, Index, JoinStyle, MeanSdFormat, PercentFormat, Places, Series, Table,
    };
    pub use crate::engine::{
        format_percent, format_percent_series, mean_sd, mean_sd_series, round_exact_series,
        round_table, round_table_in_place, significance_label, significance_stars, value_star,
    };
    pub use crate::numeric::{round_exact, NumericError, NumericResult, RoundingMode, Value};
    pub use crate::utils::{join_list, strip_lines, valid_fpath};
}
