// ============================================================================
// Formatting Engine Module
// Report formatting operations layered on exact-decimal rounding
// ============================================================================

pub mod describe;
pub mod fields;
pub mod naming;
pub mod percent;
pub mod precision;
pub mod significance;

pub use describe::{
    chi_description, f_description, fixed, mean_sd, mean_sd_series, mean_sd_with_template,
    str_to_decimal, t_description, value_star,
};
pub use fields::{eq_fields, gt_fields, lt_fields, min_max, Comparand};
pub use naming::{error_varname, latent_varname, strip_latent, ERROR_PREFIX, LATENT_PREFIX};
pub use percent::{
    filter_0_100, filter_0_100_series, format_percent, format_percent_series, get_percent,
    max_100, max_100_series,
};
pub use precision::{round_exact_series, round_table, round_table_in_place};
pub use significance::{clean_value, significance_label, significance_stars};
