//! Leaf field types: kinds, descriptors, and borrowed value views.
//!
//! Every field a `#[derive(Reflect)]` struct exposes must implement [`Field`].
//! The derive reads [`Field::KIND`] into the struct's descriptor table and
//! calls [`Field::as_value`] / [`Field::as_value_mut`] from the generated
//! accessors, so generic code never needs to name the concrete field type.

use std::any::Any;
use std::fmt;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The declared type of a reflected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldKind {
    /// `String`
    Str,
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl FieldKind {
    /// Rust spelling of the type, as written at the declaration site.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Str => "String",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Whether this is one of the integer kinds.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Static metadata for one reflected field.
///
/// Descriptor tables are generated as `const` data by the derive, so a
/// descriptor always lives for `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Reflected name (the Rust identifier unless renamed).
    pub name: &'static str,
    /// Declared type.
    pub kind: FieldKind,
    /// Constraint string from `#[validate("...")]`, if any.
    pub constraint: Option<&'static str>,
    /// `false` for `#[reflect(readonly)]` fields.
    pub writable: bool,
}

impl FieldDescriptor {
    /// Build a descriptor. Used by generated code.
    pub const fn new(
        name: &'static str,
        kind: FieldKind,
        constraint: Option<&'static str>,
        writable: bool,
    ) -> Self {
        Self {
            name,
            kind,
            constraint,
            writable,
        }
    }
}

// ============================================================================
// VALUE VIEWS
// ============================================================================

/// A read-only view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Value<'a> {
    /// String contents.
    Str(&'a str),
    /// Boolean.
    Bool(bool),
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
}

impl Value<'_> {
    /// The kind of the field this value was read from.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Str(_) => FieldKind::Str,
            Self::Bool(_) => FieldKind::Bool,
            Self::I8(_) => FieldKind::I8,
            Self::I16(_) => FieldKind::I16,
            Self::I32(_) => FieldKind::I32,
            Self::I64(_) => FieldKind::I64,
            Self::U8(_) => FieldKind::U8,
            Self::U16(_) => FieldKind::U16,
            Self::U32(_) => FieldKind::U32,
            Self::U64(_) => FieldKind::U64,
            Self::F32(_) => FieldKind::F32,
            Self::F64(_) => FieldKind::F64,
        }
    }

    /// The string contents, if this is a string field.
    pub const fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(*s),
            _ => None,
        }
    }
}

/// A mutable view of a field, used to write through reflection.
#[derive(Debug)]
#[non_exhaustive]
pub enum ValueMut<'a> {
    /// String slot.
    Str(&'a mut String),
    /// Boolean slot.
    Bool(&'a mut bool),
    /// `i8` slot.
    I8(&'a mut i8),
    /// `i16` slot.
    I16(&'a mut i16),
    /// `i32` slot.
    I32(&'a mut i32),
    /// `i64` slot.
    I64(&'a mut i64),
    /// `u8` slot.
    U8(&'a mut u8),
    /// `u16` slot.
    U16(&'a mut u16),
    /// `u32` slot.
    U32(&'a mut u32),
    /// `u64` slot.
    U64(&'a mut u64),
    /// `f32` slot.
    F32(&'a mut f32),
    /// `f64` slot.
    F64(&'a mut f64),
}

/// Expand `$body` once per integer variant of `ValueMut`, binding the slot
/// to `$slot` and its primitive type to `$ty`.
macro_rules! for_each_int_slot {
    ($value:expr, $slot:ident: $ty:ident => $body:expr, $other:ident => $fallback:expr) => {
        match $value {
            ValueMut::I8($slot) => { type $ty = i8; $body }
            ValueMut::I16($slot) => { type $ty = i16; $body }
            ValueMut::I32($slot) => { type $ty = i32; $body }
            ValueMut::I64($slot) => { type $ty = i64; $body }
            ValueMut::U8($slot) => { type $ty = u8; $body }
            ValueMut::U16($slot) => { type $ty = u16; $body }
            ValueMut::U32($slot) => { type $ty = u32; $body }
            ValueMut::U64($slot) => { type $ty = u64; $body }
            $other => $fallback,
        }
    };
}

impl<'a> ValueMut<'a> {
    /// The kind of the field behind this slot.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Str(_) => FieldKind::Str,
            Self::Bool(_) => FieldKind::Bool,
            Self::I8(_) => FieldKind::I8,
            Self::I16(_) => FieldKind::I16,
            Self::I32(_) => FieldKind::I32,
            Self::I64(_) => FieldKind::I64,
            Self::U8(_) => FieldKind::U8,
            Self::U16(_) => FieldKind::U16,
            Self::U32(_) => FieldKind::U32,
            Self::U64(_) => FieldKind::U64,
            Self::F32(_) => FieldKind::F32,
            Self::F64(_) => FieldKind::F64,
        }
    }

    /// Store an integer into any integer slot.
    ///
    /// Fails with [`ReflectError::Overflow`] when `value` does not fit the
    /// slot's type, and [`ReflectError::NotInteger`] for non-integer slots.
    /// The slot is left untouched on failure.
    pub fn set_int(self, value: i64) -> Result<(), ReflectError> {
        let kind = self.kind();
        for_each_int_slot!(self,
            slot: Int => {
                *slot = Int::try_from(value).map_err(|_| ReflectError::Overflow { value, kind })?;
                Ok(())
            },
            other => Err(ReflectError::NotInteger { found: other.kind() })
        )
    }

    /// View a type-erased value as a slot, if its concrete type is one of
    /// the supported field types.
    pub fn from_any(value: &'a mut dyn Any) -> Option<Self> {
        // Downcast checks are sequential; the common integer types go first.
        if value.is::<i64>() {
            return value.downcast_mut::<i64>().map(Self::I64);
        }
        if value.is::<i32>() {
            return value.downcast_mut::<i32>().map(Self::I32);
        }
        if value.is::<String>() {
            return value.downcast_mut::<String>().map(Self::Str);
        }
        if value.is::<f64>() {
            return value.downcast_mut::<f64>().map(Self::F64);
        }
        if value.is::<f32>() {
            return value.downcast_mut::<f32>().map(Self::F32);
        }
        if value.is::<bool>() {
            return value.downcast_mut::<bool>().map(Self::Bool);
        }
        if value.is::<i8>() {
            return value.downcast_mut::<i8>().map(Self::I8);
        }
        if value.is::<i16>() {
            return value.downcast_mut::<i16>().map(Self::I16);
        }
        if value.is::<u8>() {
            return value.downcast_mut::<u8>().map(Self::U8);
        }
        if value.is::<u16>() {
            return value.downcast_mut::<u16>().map(Self::U16);
        }
        if value.is::<u32>() {
            return value.downcast_mut::<u32>().map(Self::U32);
        }
        value.downcast_mut::<u64>().map(Self::U64)
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failure writing a value through a [`ValueMut`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ReflectError {
    /// The integer does not fit the target type.
    #[error("value {value} overflows {kind}")]
    Overflow {
        /// Rejected value.
        value: i64,
        /// Target kind.
        kind: FieldKind,
    },
    /// The slot is not an integer.
    #[error("cannot set {found} field from an integer")]
    NotInteger {
        /// Actual kind of the slot.
        found: FieldKind,
    },
    /// The erased value is not a supported field type.
    #[error("unsupported field type")]
    UnsupportedType,
}

// ============================================================================
// FIELD TRAIT
// ============================================================================

/// A type that can appear as a field of a `#[derive(Reflect)]` struct.
pub trait Field {
    /// Kind recorded in the descriptor table.
    const KIND: FieldKind;

    /// Read-only view of the current value.
    fn as_value(&self) -> Value<'_>;

    /// Mutable view for writes.
    fn as_value_mut(&mut self) -> ValueMut<'_>;
}

impl Field for String {
    const KIND: FieldKind = FieldKind::Str;

    #[inline]
    fn as_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }

    #[inline]
    fn as_value_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Str(self)
    }
}

macro_rules! impl_scalar_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Field for $ty {
                const KIND: FieldKind = FieldKind::$variant;

                #[inline]
                fn as_value(&self) -> Value<'_> {
                    Value::$variant(*self)
                }

                #[inline]
                fn as_value_mut(&mut self) -> ValueMut<'_> {
                    ValueMut::$variant(self)
                }
            }
        )*
    };
}

impl_scalar_field! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_matches_field_kind() {
        let name = String::from("John");
        assert_eq!(name.as_value().kind(), <String as Field>::KIND);
        assert_eq!(7u16.as_value().kind(), FieldKind::U16);
        assert_eq!(1.5f64.as_value().kind(), FieldKind::F64);
        assert_eq!(name.as_value().as_str(), Some("John"));
        assert_eq!(true.as_value().as_str(), None);
    }

    #[test]
    fn test_set_int_converts_into_slot_type() {
        let mut small = 0i8;
        assert_eq!(small.as_value_mut().set_int(-12), Ok(()));
        assert_eq!(small, -12);

        let mut wide = 0u64;
        assert_eq!(wide.as_value_mut().set_int(1 << 40), Ok(()));
        assert_eq!(wide, 1 << 40);
    }

    #[test]
    fn test_set_int_overflow_leaves_slot_untouched() {
        let mut small = 3u8;
        let err = small.as_value_mut().set_int(300).unwrap_err();
        assert_eq!(
            err,
            ReflectError::Overflow {
                value: 300,
                kind: FieldKind::U8
            }
        );
        assert_eq!(small, 3);

        let mut unsigned = 1u32;
        assert!(unsigned.as_value_mut().set_int(-1).is_err());
        assert_eq!(unsigned, 1);
    }

    #[test]
    fn test_set_int_rejects_non_integer_slots() {
        let mut text = String::new();
        assert_eq!(
            text.as_value_mut().set_int(1),
            Err(ReflectError::NotInteger {
                found: FieldKind::Str
            })
        );
        let mut ratio = 0.0f32;
        assert!(ratio.as_value_mut().set_int(1).is_err());
    }

    #[test]
    fn test_from_any_downcasts_supported_types() {
        let mut x = 0i64;
        let slot = ValueMut::from_any(&mut x).unwrap();
        assert_eq!(slot.kind(), FieldKind::I64);
        slot.set_int(42).unwrap();
        assert_eq!(x, 42);

        let mut flag = false;
        assert_eq!(
            ValueMut::from_any(&mut flag).map(|s| s.kind()),
            Some(FieldKind::Bool)
        );

        let mut unsupported = vec![1u8];
        assert!(ValueMut::from_any(&mut unsupported).is_none());
    }

    #[test]
    fn test_kind_display_uses_rust_spelling() {
        assert_eq!(FieldKind::Str.to_string(), "String");
        assert_eq!(FieldKind::F32.to_string(), "f32");
        assert!(FieldKind::U32.is_integer());
        assert!(!FieldKind::F64.is_integer());
    }
}
