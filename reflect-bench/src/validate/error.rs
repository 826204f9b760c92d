//! Validation failures.

/// The specific rule a field broke, or why its constraint could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation {
    /// String is longer than `max-len` bytes.
    #[error("length greater than {max}")]
    TooLong {
        /// The configured bound.
        max: i64,
    },
    /// `allow-symbol=false` and the string contains a forbidden character.
    #[error("symbols are not allowed")]
    SymbolNotAllowed,
    /// A constraint token is not a single `key=value` pair.
    #[error("invalid rule format")]
    InvalidRuleFormat,
    /// The `max-len` value is not a 64-bit integer.
    #[error("invalid max-len value")]
    InvalidMaxLen,
    /// The `allow-symbol` value is not a boolean.
    #[error("invalid symbol value")]
    InvalidAllowSymbol,
}

impl Violation {
    /// `true` when the constraint itself is malformed, as opposed to the
    /// value breaking a well-formed rule.
    pub const fn is_malformed_constraint(&self) -> bool {
        matches!(
            self,
            Self::InvalidRuleFormat | Self::InvalidMaxLen | Self::InvalidAllowSymbol
        )
    }
}

/// A field that failed validation.
///
/// Displays as `"<field>: <violation>"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {violation}")]
pub struct ValidationError {
    /// Reflected name of the failing field.
    pub field: &'static str,
    /// What went wrong.
    pub violation: Violation,
}

impl ValidationError {
    /// Pair a violation with the field it occurred on.
    pub const fn new(field: &'static str, violation: Violation) -> Self {
        Self { field, violation }
    }

    /// Length bound exceeded.
    pub const fn too_long(field: &'static str, max: i64) -> Self {
        Self::new(field, Violation::TooLong { max })
    }

    /// Forbidden symbol present.
    pub const fn symbol_not_allowed(field: &'static str) -> Self {
        Self::new(field, Violation::SymbolNotAllowed)
    }
}
