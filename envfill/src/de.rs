//! Value resolution and string-to-field conversion

use crate::error::EnvError;
use crate::field::{FieldDescriptor, FieldSlot};
use std::env;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Env,
    Default,
}

/// Resolve the string to apply to a field.
///
/// Priority order:
/// 1. The environment variable named by `env`, if set and non-empty
/// 2. The `env_default` literal
///
/// Returns `None` when both are empty or absent; the field must then be
/// left untouched. Values that are not valid Unicode count as unset.
pub fn resolve_value(field: &FieldDescriptor) -> Option<(String, Source)> {
    let from_env = field
        .env
        .and_then(env::var_os)
        .and_then(|value| value.into_string().ok())
        .filter(|value| !value.is_empty());

    if let Some(value) = from_env {
        return Some((value, Source::Env));
    }

    field
        .env_default
        .filter(|value| !value.is_empty())
        .map(|value| (value.to_string(), Source::Default))
}

/// Write `value` into `slot`, converting it to the slot's type.
///
/// Parse failures are returned as the underlying parser error.
pub fn coerce(field: &FieldDescriptor, slot: FieldSlot<'_>, value: &str) -> Result<(), EnvError> {
    match slot {
        FieldSlot::Text(target) => *target = value.to_string(),
        FieldSlot::Integer(target) => *target = value.parse::<i32>()?,
        FieldSlot::Boolean(target) => *target = parse_bool(value)?,
        FieldSlot::Float(target) => *target = parse_f32(value)?,
        FieldSlot::Nested(_) | FieldSlot::Unsupported => {
            return Err(EnvError::unsupported(field.name, field.type_name))
        }
    }
    Ok(())
}

/// Parse an `f32`, rejecting finite input that overflows to infinity.
///
/// `inf`, `infinity` and `nan` (any case, optional sign) are accepted as
/// written.
pub fn parse_f32(value: &str) -> Result<f32, EnvError> {
    let parsed = value.parse::<f32>()?;
    if parsed.is_infinite() && !names_infinity(value) {
        return Err(EnvError::FloatOutOfRange {
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

fn names_infinity(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse the usual boolean spellings.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Result<bool, std::str::ParseBoolError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        // Anything left is rejected by std, which also builds the error.
        other => other.parse::<bool>(),
    }
}
