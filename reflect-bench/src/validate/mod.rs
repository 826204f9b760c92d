//! Constraint-driven validation of reflected records.
//!
//! Three ways to run the same two checks (maximum length, symbol exclusion):
//!
//! - [`validate_tagged`] reads each field's `#[validate("...")]` constraint
//!   from the descriptor table and parses it on every call
//! - [`TagValidator`] parses the constraints once and reuses the rule sets
//! - [`check_str`] takes a [`StrRules`] value directly
//!
//! All three stop at the first failing rule of the first failing field and
//! produce the same [`ValidationError`] for the same input.
//!
//! # Example
//!
//! ```
//! use reflect_bench::{Reflect, validate_tagged, Violation};
//!
//! #[derive(Reflect)]
//! struct Signup {
//!     #[validate("max-len=8,allow-symbol=false")]
//!     handle: String,
//! }
//!
//! let err = validate_tagged(&Signup { handle: "ab#".into() }).unwrap_err();
//! assert_eq!(err.field, "handle");
//! assert_eq!(err.violation, Violation::SymbolNotAllowed);
//! assert_eq!(err.to_string(), "handle: symbols are not allowed");
//! ```

mod direct;
mod error;
mod rules;

use std::marker::PhantomData;

use log::{debug, trace};

use crate::reflect::{DynReflect, Reflect};

pub use direct::{StrRules, check_str};
pub use error::{ValidationError, Violation};
pub use rules::{Rule, RuleSet, check_constraint, contains_forbidden, parse_rules};

/// Validate every constrained field of `record`, parsing constraints as it
/// goes.
///
/// Fields without a constraint, or with an empty one, are not checked.
pub fn validate_tagged(record: &dyn DynReflect) -> Result<(), ValidationError> {
    for (index, descriptor) in record.field_descriptors().iter().enumerate() {
        let Some(constraint) = descriptor.constraint.filter(|c| !c.is_empty()) else {
            continue;
        };
        let Some(value) = record.field_value_at(index) else {
            continue;
        };
        if let Err(violation) = check_constraint(constraint, value) {
            trace!(
                "{}.{} failed {constraint:?}: {violation}",
                record.type_name(),
                descriptor.name
            );
            return Err(ValidationError::new(descriptor.name, violation));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct CompiledField {
    index: usize,
    name: &'static str,
    rules: RuleSet,
}

/// Pre-parsed constraints for one record shape.
///
/// Construction fails on the first malformed constraint, so a validator that
/// exists only ever reports rule violations.
#[derive(Debug, Clone)]
pub struct TagValidator<T> {
    fields: Vec<CompiledField>,
    _shape: PhantomData<fn(&T)>,
}

impl<T: Reflect> TagValidator<T> {
    /// Parse the constraints declared on `T`.
    pub fn new() -> Result<Self, ValidationError> {
        let mut fields = Vec::new();
        for (index, descriptor) in T::descriptors().iter().enumerate() {
            let Some(constraint) = descriptor.constraint.filter(|c| !c.is_empty()) else {
                continue;
            };
            let rules = RuleSet::parse(constraint)
                .map_err(|violation| ValidationError::new(descriptor.name, violation))?;
            if !rules.is_empty() {
                fields.push(CompiledField {
                    index,
                    name: descriptor.name,
                    rules,
                });
            }
        }
        debug!(
            "compiled {} constrained field(s) for {}",
            fields.len(),
            T::TYPE_NAME
        );
        Ok(Self {
            fields,
            _shape: PhantomData,
        })
    }

    /// Validate `record` against the pre-parsed rules.
    #[inline]
    pub fn validate(&self, record: &T) -> Result<(), ValidationError> {
        for field in &self.fields {
            if let Some(value) = record.field_at(field.index) {
                field
                    .rules
                    .check(value)
                    .map_err(|violation| ValidationError::new(field.name, violation))?;
            }
        }
        Ok(())
    }

    /// Rule set for a field, if it has any known rules.
    pub fn rules_for(&self, name: &str) -> Option<&RuleSet> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.rules)
    }
}
