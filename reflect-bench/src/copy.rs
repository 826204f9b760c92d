//! Name-matched field copying between two reflected record shapes.
//!
//! For every source field, in declaration order, the destination field with
//! the same (case-sensitive) name receives the value when it exists, is
//! writable, and has either the same kind or a supported narrow conversion:
//!
//! - integer to a wider integer (any lossless widening)
//! - `f64` to `f32`
//!
//! [`copy_fields`] skips everything else silently. [`copy_fields_reported`]
//! runs the same walk and returns what happened to each source field.

use std::fmt;

use log::debug;

use crate::field::{FieldKind, Value, ValueMut};
use crate::reflect::DynReflect;

// ============================================================================
// REPORTING
// ============================================================================

/// Why a source field was not copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkipReason {
    /// The destination has no field with that name.
    Missing,
    /// The destination field is readonly.
    ReadOnly,
    /// Kinds differ and no narrow conversion exists.
    Unsupported {
        /// Source field kind.
        from: FieldKind,
        /// Destination field kind.
        to: FieldKind,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("no destination field"),
            Self::ReadOnly => f.write_str("destination field is readonly"),
            Self::Unsupported { from, to } => write!(f, "no conversion from {from} to {to}"),
        }
    }
}

/// A source field that was not copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    /// Source field name.
    pub field: &'static str,
    /// What prevented the copy.
    pub reason: SkipReason,
}

/// Outcome of [`copy_fields_reported`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Source fields whose value reached the destination.
    pub copied: Vec<&'static str>,
    /// Source fields that were skipped, with the reason.
    pub skipped: Vec<Skipped>,
}

impl CopyReport {
    /// `true` when every source field was copied.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Skip reason for a source field, if it was skipped.
    pub fn reason(&self, field: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.reason)
    }
}

// ============================================================================
// COPY
// ============================================================================

/// Copy same-named fields from `src` into `dst`.
///
/// Mismatches are skipped without any indication. Destination fields that
/// have no source counterpart keep their current value.
///
/// ```
/// use reflect_bench::copy_fields;
/// use reflect_bench::samples::{Source, Target};
///
/// let src = Source { name: "John Doe".into(), age: 30, balance: 100.5 };
/// let mut dst = Target::default();
/// copy_fields(&src, &mut dst);
/// assert_eq!(dst.age, 30i64);
/// assert_eq!(dst.balance, 100.5f32);
/// ```
#[inline]
pub fn copy_fields(src: &dyn DynReflect, dst: &mut dyn DynReflect) {
    walk(src, dst, |_| {}, |_| {});
}

/// Copy same-named fields from `src` into `dst`, reporting every skip.
pub fn copy_fields_reported(src: &dyn DynReflect, dst: &mut dyn DynReflect) -> CopyReport {
    let mut report = CopyReport::default();
    let (src_type, dst_type) = (src.type_name(), dst.type_name());
    walk(
        src,
        dst,
        |field| report.copied.push(field),
        |skipped| {
            debug!(
                "{src_type}.{} not copied into {dst_type}: {}",
                skipped.field, skipped.reason
            );
            report.skipped.push(skipped);
        },
    );
    report
}

fn walk(
    src: &dyn DynReflect,
    dst: &mut dyn DynReflect,
    mut on_copy: impl FnMut(&'static str),
    mut on_skip: impl FnMut(Skipped),
) {
    for (index, source) in src.field_descriptors().iter().enumerate() {
        let Some(value) = src.field_value_at(index) else {
            continue;
        };
        let skip = |reason| Skipped {
            field: source.name,
            reason,
        };

        let Some(target) = dst.field_descriptor(source.name) else {
            on_skip(skip(SkipReason::Missing));
            continue;
        };
        let slot = match dst.field_value_mut(source.name) {
            Some(slot) if target.writable => slot,
            _ => {
                on_skip(skip(SkipReason::ReadOnly));
                continue;
            },
        };

        if assign(slot, value) {
            on_copy(source.name);
        } else {
            on_skip(skip(SkipReason::Unsupported {
                from: source.kind,
                to: target.kind,
            }));
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Build the assignment `match`: same-kind arms copy, widening arms go
/// through `From`, and anything unlisted falls through to `false`.
macro_rules! assign_match {
    (
        $dst:expr, $src:expr;
        same: [$($same:ident),* $(,)?];
        widen: [$($to:ident <- [$($from:ident),+]),* $(,)?];
    ) => {
        match ($dst, $src) {
            (ValueMut::Str(slot), Value::Str(value)) => {
                slot.clear();
                slot.push_str(value);
            },
            $(
                (ValueMut::$same(slot), Value::$same(value)) => *slot = value,
            )*
            $($(
                (ValueMut::$to(slot), Value::$from(value)) => *slot = value.into(),
            )+)*
            (ValueMut::F32(slot), Value::F64(value)) => *slot = value as f32,
            _ => return false,
        }
    };
}

/// Write `value` into `slot`, converting when supported.
///
/// Returns `false` without touching the slot when the kinds are
/// incompatible.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn assign(slot: ValueMut<'_>, value: Value<'_>) -> bool {
    assign_match! {
        slot, value;
        same: [Bool, I8, I16, I32, I64, U8, U16, U32, U64, F32, F64];
        widen: [
            I16 <- [I8, U8],
            I32 <- [I8, I16, U8, U16],
            I64 <- [I8, I16, I32, U8, U16, U32],
            U16 <- [U8],
            U32 <- [U8, U16],
            U64 <- [U8, U16, U32],
        ];
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reflect;
    use crate::field::Field;

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Narrow {
        id: u8,
        score: i16,
        ratio: f64,
        label: String,
        flag: bool,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Wide {
        id: u64,
        score: i64,
        ratio: f32,
        label: String,
        #[reflect(readonly)]
        flag: bool,
        extra: i32,
    }

    /// The conversion table `assign` implements, stated as a predicate.
    fn is_convertible(from: FieldKind, to: FieldKind) -> bool {
        use FieldKind::{F32, F64, I8, I16, I32, I64, U8, U16, U32, U64};

        from == to
            || matches!(
                (from, to),
                (I8 | U8, I16)
                    | (I8 | I16 | U8 | U16, I32)
                    | (I8 | I16 | I32 | U8 | U16 | U32, I64)
                    | (U8, U16)
                    | (U8 | U16, U32)
                    | (U8 | U16 | U32, U64)
                    | (F64, F32)
            )
    }

    #[test]
    fn test_assign_same_kind_copies_unchanged() {
        let mut dst = String::from("old value");
        assert!(assign(dst.as_value_mut(), Value::Str("new")));
        assert_eq!(dst, "new");

        let mut dst = 0.0f64;
        assert!(assign(dst.as_value_mut(), Value::F64(2.25)));
        assert!((dst - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_assign_rejects_narrowing_integers() {
        let mut dst = 5i8;
        assert!(!assign(dst.as_value_mut(), Value::I64(1)));
        assert_eq!(dst, 5);

        // Signed never widens into unsigned
        let mut dst = 5u64;
        assert!(!assign(dst.as_value_mut(), Value::I8(1)));
        assert_eq!(dst, 5);
    }

    #[test]
    fn test_assign_rejects_float_widening_and_cross_family() {
        let mut dst = 1.0f64;
        assert!(!assign(dst.as_value_mut(), Value::F32(2.0)));

        let mut dst = 0i64;
        assert!(!assign(dst.as_value_mut(), Value::F64(2.0)));
        assert!(!assign(dst.as_value_mut(), Value::Str("2")));
        assert_eq!(dst, 0);
    }

    #[test]
    fn test_is_convertible_agrees_with_assign() {
        let samples: [(Value<'_>, FieldKind); 6] = [
            (Value::U8(1), FieldKind::I16),
            (Value::U32(1), FieldKind::I32),
            (Value::I32(1), FieldKind::I64),
            (Value::F64(1.0), FieldKind::F32),
            (Value::F32(1.0), FieldKind::F64),
            (Value::Bool(true), FieldKind::U8),
        ];
        for (value, to) in samples {
            let assigned = match to {
                FieldKind::I16 => assign(0i16.as_value_mut(), value),
                FieldKind::I32 => assign(0i32.as_value_mut(), value),
                FieldKind::I64 => assign(0i64.as_value_mut(), value),
                FieldKind::F32 => assign(0f32.as_value_mut(), value),
                FieldKind::F64 => assign(0f64.as_value_mut(), value),
                FieldKind::U8 => assign(0u8.as_value_mut(), value),
                _ => unreachable!(),
            };
            assert_eq!(assigned, is_convertible(value.kind(), to), "{value:?} -> {to}");
        }
    }

    #[test]
    fn test_copy_widens_and_narrows_floats() {
        let src = Narrow {
            id: 200,
            score: -300,
            ratio: 0.1,
            label: "x".into(),
            flag: true,
        };
        let mut dst = Wide::default();
        copy_fields(&src, &mut dst);

        assert_eq!(dst.id, 200);
        assert_eq!(dst.score, -300);
        #[allow(clippy::cast_possible_truncation)]
        let expected = 0.1f64 as f32;
        assert_eq!(dst.ratio.to_bits(), expected.to_bits());
        assert_eq!(dst.label, "x");
    }

    #[test]
    fn test_copy_leaves_readonly_and_unmatched_fields() {
        let src = Narrow {
            flag: true,
            ..Narrow::default()
        };
        let mut dst = Wide {
            extra: 77,
            ..Wide::default()
        };
        copy_fields(&src, &mut dst);
        assert!(!dst.flag);
        assert_eq!(dst.extra, 77);
    }

    #[test]
    fn test_reported_copy_lists_skips() {
        let mut back = Narrow {
            id: 4,
            ..Narrow::default()
        };
        let report = copy_fields_reported(&Wide::default(), &mut back);

        assert_eq!(report.copied, ["label", "flag"]);
        assert_eq!(
            report.reason("id"),
            Some(SkipReason::Unsupported {
                from: FieldKind::U64,
                to: FieldKind::U8
            })
        );
        assert_eq!(
            report.reason("ratio"),
            Some(SkipReason::Unsupported {
                from: FieldKind::F32,
                to: FieldKind::F64
            })
        );
        assert_eq!(report.reason("extra"), Some(SkipReason::Missing));
        assert!(!report.is_complete());
        // Skipped fields were not written
        assert_eq!(back.id, 4);
    }

    #[test]
    fn test_reported_copy_flags_readonly_destination() {
        let report = copy_fields_reported(&Narrow::default(), &mut Wide::default());
        assert_eq!(report.reason("flag"), Some(SkipReason::ReadOnly));
        assert_eq!(report.copied, ["id", "score", "ratio", "label"]);
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::Unsupported {
            from: FieldKind::F32,
            to: FieldKind::F64,
        };
        assert_eq!(reason.to_string(), "no conversion from f32 to f64");
        assert_eq!(SkipReason::Missing.to_string(), "no destination field");
    }
}
