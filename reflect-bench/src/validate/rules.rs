//! Constraint string parsing and rule evaluation.
//!
//! A constraint is a comma-separated list of `key=value` tokens, e.g.
//! `max-len=5,allow-symbol=false`. Known keys are [`MAX_LEN_KEY`] and
//! [`ALLOW_SYMBOL_KEY`]; unknown keys are ignored.

use crate::constants::{
    ALLOW_SYMBOL_KEY, FORBIDDEN_SYMBOLS, KEY_VALUE_SEPARATOR, MAX_LEN_KEY, RULE_SEPARATOR,
};
use crate::field::Value;

use super::direct::StrRules;
use super::error::Violation;

/// One parsed constraint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rule {
    /// `max-len=N`: string length in bytes must not exceed `N`. A negative
    /// bound rejects every string.
    MaxLen(i64),
    /// `allow-symbol=B`: when `false`, strings must not contain any of
    /// [`FORBIDDEN_SYMBOLS`].
    AllowSymbol(bool),
}

impl Rule {
    /// Parse a single `key=value` token.
    ///
    /// Returns `Ok(None)` for well-formed tokens with an unknown key.
    pub fn parse_token(token: &str) -> Result<Option<Self>, Violation> {
        let mut parts = token.split(KEY_VALUE_SEPARATOR);
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Violation::InvalidRuleFormat);
        };

        match key {
            MAX_LEN_KEY => value
                .parse::<i64>()
                .map(|max| Some(Self::MaxLen(max)))
                .map_err(|_| Violation::InvalidMaxLen),
            ALLOW_SYMBOL_KEY => parse_bool(value)
                .map(|allow| Some(Self::AllowSymbol(allow)))
                .ok_or(Violation::InvalidAllowSymbol),
            _ => Ok(None),
        }
    }

    /// Check `value` against this rule. Non-string values always pass.
    #[inline]
    pub fn check(&self, value: Value<'_>) -> Result<(), Violation> {
        let Value::Str(s) = value else {
            return Ok(());
        };
        match *self {
            Self::MaxLen(max) if exceeds_max_len(s, max) => Err(Violation::TooLong { max }),
            Self::AllowSymbol(false) if contains_forbidden(s) => Err(Violation::SymbolNotAllowed),
            _ => Ok(()),
        }
    }
}

/// Lazily parse a constraint string, yielding known rules in order.
///
/// Malformed tokens surface as `Err` at their position, so a caller that
/// checks as it goes stops at whichever comes first: a failing rule or a bad
/// token.
pub fn parse_rules(constraint: &str) -> impl Iterator<Item = Result<Rule, Violation>> + '_ {
    constraint
        .split(RULE_SEPARATOR)
        .filter_map(|token| Rule::parse_token(token).transpose())
}

/// Parse and check in one pass, stopping at the first failure.
pub fn check_constraint(constraint: &str, value: Value<'_>) -> Result<(), Violation> {
    for rule in parse_rules(constraint) {
        rule?.check(value)?;
    }
    Ok(())
}

/// Whether `s` contains any of [`FORBIDDEN_SYMBOLS`].
#[inline]
pub fn contains_forbidden(s: &str) -> bool {
    s.bytes().any(|b| FORBIDDEN_SYMBOLS.as_bytes().contains(&b))
}

/// Whether the byte length of `s` is greater than `max`.
#[inline]
pub(super) fn exceeds_max_len(s: &str, max: i64) -> bool {
    match i64::try_from(s.len()) {
        Ok(len) => len > max,
        Err(_) => true,
    }
}

/// Boolean spellings accepted for `allow-symbol`.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// A constraint parsed ahead of time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse every token of `constraint`, failing on the first malformed one.
    pub fn parse(constraint: &str) -> Result<Self, Violation> {
        let rules = parse_rules(constraint).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Rules in constraint order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// `true` when the constraint had no known keys.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check `value` against every rule in order.
    #[inline]
    pub fn check(&self, value: Value<'_>) -> Result<(), Violation> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

impl From<StrRules> for RuleSet {
    fn from(rules: StrRules) -> Self {
        Self {
            rules: vec![
                Rule::MaxLen(rules.max_len),
                Rule::AllowSymbol(rules.allow_symbol),
            ],
        }
    }
}
