//! Validation with explicit rule values, no constraint parsing.

use super::error::ValidationError;
use super::rules::{contains_forbidden, exceeds_max_len};

/// Rules for one string field, passed alongside the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrRules {
    /// Maximum length in bytes.
    pub max_len: i64,
    /// Whether forbidden symbols are allowed.
    pub allow_symbol: bool,
}

/// Check one string field: length first, then symbols.
#[inline]
pub fn check_str(field: &'static str, value: &str, rules: &StrRules) -> Result<(), ValidationError> {
    if exceeds_max_len(value, rules.max_len) {
        return Err(ValidationError::too_long(field, rules.max_len));
    }
    if !rules.allow_symbol && contains_forbidden(value) {
        return Err(ValidationError::symbol_not_allowed(field));
    }
    Ok(())
}
