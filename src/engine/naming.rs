// ============================================================================
// Variable Naming
// Prefix conventions for latent and error variables in model output
// ============================================================================

/// Prefix marking a latent variable
pub const LATENT_PREFIX: &str = "L_";

/// Prefix marking an error term
pub const ERROR_PREFIX: &str = "e_";

/// `"anxiety"` -> `"L_anxiety"`; already-prefixed names are unchanged.
pub fn latent_varname(name: &str) -> String {
    if name.starts_with(LATENT_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", LATENT_PREFIX, name)
    }
}

/// `"L_anxiety"` -> `"anxiety"`.
pub fn strip_latent(name: &str) -> &str {
    name.strip_prefix(LATENT_PREFIX).unwrap_or(name)
}

/// `"x1"` -> `"e_x1"`; already-prefixed names are unchanged.
pub fn error_varname(name: &str) -> String {
    if name.starts_with(ERROR_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", ERROR_PREFIX, name)
    }
}
