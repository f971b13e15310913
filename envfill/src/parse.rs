//! Field walker and recursion driver

use crate::de::{coerce, resolve_value, Source};
use crate::error::EnvError;
use crate::field::{EnvStruct, FieldSlot, Target};
use tracing::{debug, trace};

/// Fill `target` in place from the environment.
///
/// Fields are visited in declaration order. A field whose resolved value is
/// empty keeps whatever value it already had. Nested structs are filled
/// recursively using their own annotations.
///
/// # Errors
///
/// - [`EnvError::InvalidInterface`] if `target` does not lead to a struct
/// - [`EnvError::FieldMustBeAssignable`] if a non-`pub` field would be written
/// - [`EnvError::UnsupportedFieldKind`] if a field's type has no conversion
/// - the parser's own error if a value cannot be converted
///
/// The first error stops the walk; earlier fields are not rolled back.
pub fn parse<T: Target + ?Sized>(target: &mut T) -> Result<(), EnvError> {
    let target = target
        .as_struct_mut()
        .ok_or(EnvError::InvalidInterface)?;
    debug!(fields = target.fields().len(), "filling struct from environment");
    fill(target)
}

pub(crate) fn fill(target: &mut dyn EnvStruct) -> Result<(), EnvError> {
    let fields = target.fields();

    for (index, field) in fields.iter().enumerate() {
        let Some(slot) = target.field_mut(index) else {
            return Err(EnvError::unsupported(field.name, field.type_name));
        };

        if let FieldSlot::Nested(inner) = slot {
            if !field.assignable {
                return Err(EnvError::must_be_assignable(field.name));
            }
            trace!(field = field.name, "descending into nested struct");
            fill(inner)?;
            continue;
        }

        let Some((value, source)) = resolve_value(field) else {
            trace!(field = field.name, "no value resolved, leaving field untouched");
            continue;
        };

        if !field.assignable {
            return Err(EnvError::must_be_assignable(field.name));
        }

        trace!(
            field = field.name,
            var = field.env.unwrap_or_default(),
            from_env = source == Source::Env,
            "setting field"
        );
        coerce(field, slot, &value)?;
    }

    Ok(())
}
