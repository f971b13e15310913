//! Field descriptor table shared by the derive macro and the walker.
//!
//! `#[derive(EnvFill)]` emits a `'static` slice of [`FieldDescriptor`] per
//! struct plus a typed accessor returning a [`FieldSlot`] for each field.
//! Nothing here inspects types at run time; which slot a field gets is fixed
//! when the generated code is compiled.

use crate::error::EnvError;

/// The closed set of field kinds the walker knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `String`, used verbatim
    Text,
    /// `i32`, base-10
    Integer,
    /// `bool`
    Boolean,
    /// `f32`
    Float,
    /// A struct that itself implements [`EnvStruct`]
    Nested,
    /// Any other type
    Unsupported,
}

/// Static description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name
    pub name: &'static str,
    /// Environment variable to read (`#[env(name = "...")]`, prefix applied)
    pub env: Option<&'static str>,
    /// Fallback literal (`#[env(default = "...")]`)
    pub env_default: Option<&'static str>,
    /// `true` only for `pub` fields
    pub assignable: bool,
    /// Declared type as written on the field (e.g. `std::path::PathBuf`)
    pub type_name: &'static str,
}

/// Typed mutable handle to a single field.
pub enum FieldSlot<'a> {
    Text(&'a mut String),
    Integer(&'a mut i32),
    Boolean(&'a mut bool),
    Float(&'a mut f32),
    Nested(&'a mut dyn EnvStruct),
    Unsupported,
}

impl FieldSlot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldSlot::Text(_) => FieldKind::Text,
            FieldSlot::Integer(_) => FieldKind::Integer,
            FieldSlot::Boolean(_) => FieldKind::Boolean,
            FieldSlot::Float(_) => FieldKind::Float,
            FieldSlot::Nested(_) => FieldKind::Nested,
            FieldSlot::Unsupported => FieldKind::Unsupported,
        }
    }
}

/// A struct whose fields can be filled from the environment.
///
/// Normally implemented with `#[derive(EnvFill)]`. A hand-written
/// implementation must keep `fields()` and `field_mut()` index-aligned.
pub trait EnvStruct {
    /// Descriptors of every field, in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Mutable handle to the field at `index`, or `None` when out of range.
    fn field_mut(&mut self, index: usize) -> Option<FieldSlot<'_>>;

    /// Build `Self::default()` and fill it from the environment.
    ///
    /// # Errors
    ///
    /// Same as [`crate::parse()`].
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Sized + Default,
    {
        let mut value = Self::default();
        crate::parse::fill(&mut value)?;
        Ok(value)
    }
}

/// Anything that may be handed to [`crate::parse()`].
///
/// Only handles that lead to an [`EnvStruct`] yield `Some`; everything else
/// makes `parse` fail with [`EnvError::InvalidInterface`].
pub trait Target {
    fn as_struct_mut(&mut self) -> Option<&mut dyn EnvStruct> {
        None
    }
}

impl<T: Target> Target for Option<T> {
    fn as_struct_mut(&mut self) -> Option<&mut dyn EnvStruct> {
        self.as_mut().and_then(Target::as_struct_mut)
    }
}

impl<T: Target + ?Sized> Target for Box<T> {
    fn as_struct_mut(&mut self) -> Option<&mut dyn EnvStruct> {
        (**self).as_struct_mut()
    }
}

impl Target for dyn EnvStruct + '_ {
    fn as_struct_mut(&mut self) -> Option<&mut dyn EnvStruct> {
        Some(self)
    }
}

// A reference to a reference is double indirection and never a struct.
impl<T: ?Sized> Target for &T {}
impl<T: ?Sized> Target for &mut T {}

impl<T> Target for Vec<T> {}
impl<T> Target for [T] {}
impl<T, const N: usize> Target for [T; N] {}
impl<K, V, S> Target for std::collections::HashMap<K, V, S> {}
impl<K, V> Target for std::collections::BTreeMap<K, V> {}

macro_rules! impl_scalar_target {
    ($($ty:ty),* $(,)?) => {
        $(impl Target for $ty {})*
    };
}

impl_scalar_target!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);
