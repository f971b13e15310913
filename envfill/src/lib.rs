//! Fill annotated structs in place from environment variables
//!
//! `envfill` walks the fields of a struct, picks a string for each one from
//! the environment (or from a literal default), converts it to the field's
//! type and writes it through a mutable reference. Fields without a value
//! keep whatever they held before the call.
//!
//! # Features
//!
//! - **In place**: fills an existing value, preserving anything not configured
//! - **Declarative**: field table generated with `#[derive(EnvFill)]`
//! - **No runtime reflection**: every field's kind is fixed at compile time
//! - **Nested structs**: filled recursively with their own annotations
//! - **Typed errors**: a closed [`EnvError`] enum to match on
//!
//! # Value Resolution
//!
//! For each field:
//! 1. If `name` is set and that variable holds a non-empty value, use it
//! 2. Otherwise use `default` (if any)
//! 3. If the result is empty, leave the field untouched
//!
//! An environment variable set to the empty string behaves exactly like an
//! unset one.
//!
//! # Supported Field Types
//!
//! - `String`: used verbatim
//! - `i32`: base-10, e.g. `MAX_CONNECTIONS=42`
//! - `bool`: `1 t T TRUE true True` / `0 f F FALSE false False`
//! - `f32`: e.g. `RATIO=0.75`
//! - any struct deriving `EnvFill`: filled recursively
//!
//! Any other type (`i64`, `PathBuf`, `Vec<T>`, ...) is allowed on a struct
//! and left alone while no value resolves for it; once one does, the walk
//! fails with [`EnvError::UnsupportedFieldKind`] naming the declared type.
//!
//! # Example
//!
//! ```rust
//! use envfill::EnvFill;
//!
//! #[derive(Debug, Default, EnvFill)]
//! pub struct Config {
//!     #[env(name = "HOST", default = "127.0.0.1")]
//!     pub host: String,
//!
//!     #[env(name = "PORT", default = "8080")]
//!     pub port: i32,
//!
//!     pub database: Database,
//! }
//!
//! #[derive(Debug, Default, EnvFill)]
//! pub struct Database {
//!     #[env(name = "DB_POOL", default = "10")]
//!     pub pool: i32,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("PORT", "3000");
//! #     std::env::remove_var("HOST");
//! #     std::env::remove_var("DB_POOL");
//! let mut config = Config::default();
//! envfill::parse(&mut config)?;
//! #     assert_eq!(config.host, "127.0.0.1");
//! #     assert_eq!(config.port, 3000);
//! #     assert_eq!(config.database.pool, 10);
//! #     std::env::remove_var("PORT");
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "VAR")]`
//!
//! Read the field from the environment variable `VAR`. Without `name` the
//! environment is never consulted for that field.
//!
//! ## `#[env(default = "literal")]`
//!
//! Fallback string used when `VAR` is unset or empty. It is converted
//! exactly like an environment value, so `default = "1234"` on an `i32`
//! yields `1234`.
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! Struct-level. Prepended to every `name` of that struct. Nested structs use
//! their own prefix.
//!
//! ```rust
//! # use envfill::{EnvFill, EnvStruct};
//! #[derive(Default, EnvFill)]
//! #[env(prefix = "MYAPP_")]
//! pub struct Config {
//!     // Reads MYAPP_DEBUG
//!     #[env(name = "DEBUG", default = "false")]
//!     pub debug: bool,
//! }
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::remove_var("MYAPP_DEBUG");
//! let config = Config::from_env()?;
//! #     assert!(!config.debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Field Visibility
//!
//! Only `pub` fields may be written. A non-`pub` field that resolves a value,
//! or a non-`pub` nested struct, fails with
//! [`EnvError::FieldMustBeAssignable`].

mod de;
mod error;
mod field;
mod parse;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use envfill_derive::EnvFill;
pub use error::EnvError;
pub use field::{EnvStruct, FieldDescriptor, FieldKind, FieldSlot, Target};
pub use parse::parse;
