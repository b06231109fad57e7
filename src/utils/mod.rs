// ============================================================================
// Utilities Module
// Text helpers for report assembly
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;
mod text;

pub use text::{join_list, strip_lines, valid_fpath};
