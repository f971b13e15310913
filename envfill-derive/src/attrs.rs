//! Attribute parsing for `#[env(...)]` annotations.
//!
//! Field-level attributes select the environment variable and the fallback
//! literal; the struct-level attribute carries the variable name prefix.

use syn::{Attribute, Field, LitStr};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable name (`#[env(name = "...")]`), before prefixing.
    pub name: Option<String>,

    /// Fallback literal (`#[env(default = "...")]`).
    ///
    /// Kept as a string: it goes through the same conversion as a value read
    /// from the environment.
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract and validate `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes with other paths are ignored so other derives can use them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "VAR"
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    if value.value().is_empty() {
                        return Err(syn::Error::new_spanned(value, "env name must not be empty"));
                    }
                    if attrs.name.replace(value.value()).is_some() {
                        return Err(meta.error("duplicate `name` in env attribute"));
                    }
                    return Ok(());
                }

                // default = "literal"
                if meta.path.is_ident("default") {
                    let value: LitStr = meta.value()?.parse()?;
                    if attrs.default.replace(value.value()).is_some() {
                        return Err(meta.error("duplicate `default` in env attribute"));
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name` or `default`"))
            })?;
        }

        Ok(attrs)
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every field's `name`.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.prefix = value.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(parsed)
    }
}
