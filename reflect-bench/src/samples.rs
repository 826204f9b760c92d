//! The fixed record shapes the benchmarks run against, with their
//! hand-written counterparts of the reflective operations.

use crate::Reflect;
use crate::validate::{StrRules, ValidationError, check_str};

/// Copy source: `age` and `balance` are narrower than in [`Target`].
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Source {
    /// Account holder.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Balance, double precision.
    pub balance: f64,
}

impl Source {
    /// The instance every copy benchmark uses.
    pub fn sample() -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 30,
            balance: 100.5,
        }
    }
}

/// Copy destination.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct Target {
    /// Account holder.
    pub name: String,
    /// Age in years, widened.
    pub age: i64,
    /// Balance, single precision.
    pub balance: f32,
}

/// Hand-written equivalent of `copy_fields(src, dst)` for this shape pair.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn copy_direct(src: &Source, dst: &mut Target) {
    dst.name.clone_from(&src.name);
    dst.age = i64::from(src.age);
    dst.balance = src.balance as f32;
}

/// A user-supplied record with a constrained name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Reflect)]
pub struct UserDto {
    /// Display name.
    #[validate("max-len=5,allow-symbol=false")]
    pub name: String,
}

impl UserDto {
    /// The instance every validation benchmark uses. Exactly at the length
    /// limit, with one forbidden symbol.
    pub fn sample() -> Self {
        Self {
            name: "John#".to_string(),
        }
    }

    /// Rules equivalent to the constraint declared on `name`.
    pub const fn rules() -> StrRules {
        StrRules {
            max_len: 5,
            allow_symbol: false,
        }
    }
}

/// Hand-written equivalent of `validate_tagged(user)` with the rules passed
/// explicitly.
#[inline]
pub fn validate_direct(user: &UserDto, rules: &StrRules) -> Result<(), ValidationError> {
    check_str("name", &user.name, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{TagValidator, validate_tagged};
    use crate::{Violation, copy_fields};

    #[test]
    fn test_direct_copy_matches_reflective_copy() {
        let src = Source::sample();
        let (mut reflective, mut direct) = (Target::default(), Target::default());
        copy_fields(&src, &mut reflective);
        copy_direct(&src, &mut direct);
        assert_eq!(reflective, direct);
        assert_eq!(direct.name, "John Doe");
        assert_eq!(direct.age, 30);
        assert!((direct.balance - 100.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sample_user_fails_on_symbol() {
        let user = UserDto::sample();
        let tagged = validate_tagged(&user).unwrap_err();
        assert_eq!(tagged.violation, Violation::SymbolNotAllowed);
        assert_eq!(validate_direct(&user, &UserDto::rules()), Err(tagged.clone()));
        assert_eq!(TagValidator::<UserDto>::new().unwrap().validate(&user), Err(tagged));
    }
}
