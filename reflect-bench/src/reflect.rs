//! The `Reflect` trait and its object-safe `DynReflect` view.

use crate::field::{FieldDescriptor, Value, ValueMut};

/// A record shape whose fields can be enumerated and accessed by name.
///
/// Implement with `#[derive(Reflect)]`:
///
/// ```
/// use reflect_bench::{Reflect, Value};
///
/// #[derive(Reflect, Default)]
/// struct Account {
///     owner: String,
///     #[reflect(readonly)]
///     id: u64,
/// }
///
/// let account = Account { owner: "Ada".into(), id: 7 };
/// assert_eq!(Account::descriptors().len(), 2);
/// assert_eq!(account.field("owner"), Some(Value::Str("Ada")));
///
/// let mut account = account;
/// assert!(account.field_mut("id").is_none());
/// ```
pub trait Reflect {
    /// Name of the struct.
    const TYPE_NAME: &'static str;

    /// Descriptors for every reflected field, in declaration order.
    fn descriptors() -> &'static [FieldDescriptor];

    /// Value of the field at `index` in [`Reflect::descriptors`].
    fn field_at(&self, index: usize) -> Option<Value<'_>>;

    /// Value of the field called `name`.
    fn field(&self, name: &str) -> Option<Value<'_>>;

    /// Writable slot for the field called `name`.
    ///
    /// Returns `None` both for unknown names and for readonly fields; use
    /// [`Reflect::descriptor`] to tell the two apart.
    fn field_mut(&mut self, name: &str) -> Option<ValueMut<'_>>;

    /// Descriptor of the field called `name`.
    fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
        Self::descriptors().iter().find(|d| d.name == name)
    }
}

/// Object-safe counterpart of [`Reflect`], implemented for every `Reflect`
/// type. Copy and validation take `&dyn DynReflect` so they work on erased
/// records.
pub trait DynReflect {
    /// See [`Reflect::TYPE_NAME`].
    fn type_name(&self) -> &'static str;

    /// See [`Reflect::descriptors`].
    fn field_descriptors(&self) -> &'static [FieldDescriptor];

    /// See [`Reflect::descriptor`].
    fn field_descriptor(&self, name: &str) -> Option<&'static FieldDescriptor>;

    /// See [`Reflect::field_at`].
    fn field_value_at(&self, index: usize) -> Option<Value<'_>>;

    /// See [`Reflect::field`].
    fn field_value(&self, name: &str) -> Option<Value<'_>>;

    /// See [`Reflect::field_mut`].
    fn field_value_mut(&mut self, name: &str) -> Option<ValueMut<'_>>;
}

impl<T: Reflect> DynReflect for T {
    #[inline]
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    #[inline]
    fn field_descriptors(&self) -> &'static [FieldDescriptor] {
        T::descriptors()
    }

    #[inline]
    fn field_descriptor(&self, name: &str) -> Option<&'static FieldDescriptor> {
        T::descriptor(name)
    }

    #[inline]
    fn field_value_at(&self, index: usize) -> Option<Value<'_>> {
        self.field_at(index)
    }

    #[inline]
    fn field_value(&self, name: &str) -> Option<Value<'_>> {
        self.field(name)
    }

    #[inline]
    fn field_value_mut(&mut self, name: &str) -> Option<ValueMut<'_>> {
        self.field_mut(name)
    }
}
