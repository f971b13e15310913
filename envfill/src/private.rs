//! Support items for code generated by `#[derive(EnvFill)]`.
//!
//! The derive cannot tell from a type's name whether it is a struct deriving
//! `EnvFill` or something like `PathBuf`, so the slot is picked by method
//! resolution instead. Generated code calls
//! `(&&&&&&Dispatch::<FieldType>::new()).slot(&mut self.field)` with all
//! `Via*` traits in scope. Each trait is implemented one reference level
//! below the previous one, so the first level whose impl applies wins:
//!
//! | Level | Trait | Applies to |
//! |---|---|---|
//! | `&&&&&Dispatch<T>` | [`ViaText`] | `String` |
//! | `&&&&Dispatch<T>` | [`ViaInteger`] | `i32` |
//! | `&&&Dispatch<T>` | [`ViaBoolean`] | `bool` |
//! | `&&Dispatch<T>` | [`ViaFloat`] | `f32` |
//! | `&Dispatch<T>` | [`ViaNested`] | `T: EnvStruct` |
//! | `Dispatch<T>` | [`ViaOther`] | anything |

use crate::field::{EnvStruct, FieldSlot};
use std::marker::PhantomData;

pub struct Dispatch<T>(PhantomData<fn() -> T>);

impl<T> Dispatch<T> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Dispatch(PhantomData)
    }
}

pub trait ViaText<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a>;
}

impl ViaText<String> for &&&&&Dispatch<String> {
    fn slot<'a>(&self, field: &'a mut String) -> FieldSlot<'a> {
        FieldSlot::Text(field)
    }
}

pub trait ViaInteger<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a>;
}

impl ViaInteger<i32> for &&&&Dispatch<i32> {
    fn slot<'a>(&self, field: &'a mut i32) -> FieldSlot<'a> {
        FieldSlot::Integer(field)
    }
}

pub trait ViaBoolean<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a>;
}

impl ViaBoolean<bool> for &&&Dispatch<bool> {
    fn slot<'a>(&self, field: &'a mut bool) -> FieldSlot<'a> {
        FieldSlot::Boolean(field)
    }
}

pub trait ViaFloat<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a>;
}

impl ViaFloat<f32> for &&Dispatch<f32> {
    fn slot<'a>(&self, field: &'a mut f32) -> FieldSlot<'a> {
        FieldSlot::Float(field)
    }
}

pub trait ViaNested<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a>;
}

impl<T: EnvStruct> ViaNested<T> for &Dispatch<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a> {
        FieldSlot::Nested(field)
    }
}

pub trait ViaOther<T> {
    fn slot<'a>(&self, field: &'a mut T) -> FieldSlot<'a>;
}

impl<T> ViaOther<T> for Dispatch<T> {
    fn slot<'a>(&self, _field: &'a mut T) -> FieldSlot<'a> {
        FieldSlot::Unsupported
    }
}
