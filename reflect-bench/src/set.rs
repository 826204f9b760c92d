//! Setting an integer directly vs. through a reflected slot.

use std::any::Any;

use crate::field::{ReflectError, ValueMut};

/// Plain assignment.
#[inline]
pub fn set_int_direct(target: &mut i64, value: i64) {
    *target = value;
}

/// Assignment through a [`ValueMut`] slot, with range checking.
#[inline]
pub fn set_int_reflective(target: ValueMut<'_>, value: i64) -> Result<(), ReflectError> {
    target.set_int(value)
}

/// Assignment through a type-erased reference: downcast, then set.
pub fn set_int_erased(target: &mut dyn Any, value: i64) -> Result<(), ReflectError> {
    ValueMut::from_any(target)
        .ok_or(ReflectError::UnsupportedType)?
        .set_int(value)
}
