//! Error types for filling structs from environment variables

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

/// Errors that can occur while filling a struct from environment variables.
///
/// The first error aborts the whole traversal. Fields written before the
/// failing field keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The target is not a writable handle to a struct.
    ///
    /// Returned for `None`, scalars, collections and references to
    /// references.
    #[error("env: struct parsing: expected mutable reference to struct")]
    InvalidInterface,

    /// A non-`pub` field would have been written.
    #[error("env: set value '{name}': cannot set value to non-public field")]
    FieldMustBeAssignable {
        /// Declared name of the field
        name: String,
    },

    /// The field's type has no string conversion.
    #[error("env: set value '{name}': unsupported field kind '{kind}'")]
    UnsupportedFieldKind {
        /// Declared name of the field
        name: String,
        /// Rendering of the field's declared type (e.g. `Vec<i32>`)
        kind: String,
    },

    /// The resolved value is not a valid `i32`.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// The resolved value is not a recognised boolean token.
    #[error(transparent)]
    ParseBool(#[from] ParseBoolError),

    /// The resolved value is not a valid `f32`.
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    /// The resolved value is a well-formed number too large for `f32`.
    #[error("env: parsing {value:?}: value out of range for f32")]
    FloatOutOfRange {
        /// The value as resolved
        value: String,
    },
}

impl EnvError {
    pub(crate) fn must_be_assignable(name: impl Into<String>) -> Self {
        Self::FieldMustBeAssignable { name: name.into() }
    }

    pub(crate) fn unsupported(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedFieldKind {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
