//! Populate struct fields from environment variables with typed fallbacks
//!
//! `envtag` fills the fields of an existing value from the process environment. Every
//! environment-driven field names a variable and, optionally, a fallback literal used when
//! the variable is unset or does not parse as the field's type.
//!
//! # Features
//!
//! - **Declarative**: Field table generated with `#[derive(Record)]`
//! - **Never fails per field**: Unset or malformed values fall back, unwritable or
//!   unsupported fields are skipped
//! - **Two metadata forms**: Structured options or a free-text `env:"X" fallback:"5"` tag
//! - **Injectable**: Environment source and diagnostic sink can be swapped for testing
//! - **Reporting**: Optional per-field account of where each value came from
//!
//! # Supported Types
//!
//! - `String`: raw variable value
//! - `bool`: `1 t T TRUE true True` / `0 f F FALSE false False`; an unparsable fallback
//!   literal becomes `false`
//! - `i64`: base-10 signed integer; an unparsable fallback literal becomes `-1`
//!
//! Fields of any other type are left untouched.
//!
//! # Example
//!
//! ```rust
//! use envtag::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct Config {
//!     #[envtag(env = "DOC_HOST", fallback = "127.0.0.1")]
//!     pub host: String,
//!
//!     #[envtag(env = "DOC_PORT", fallback = 8080)]
//!     pub port: i64,
//!
//!     #[envtag(tag = r#"env:"DOC_DEBUG" fallback:"false""#)]
//!     pub debug: bool,
//! }
//!
//! # fn main() -> Result<(), envtag::Error> {
//! #     std::env::set_var("DOC_PORT", "3000");
//! let mut config = Config::default();
//! envtag::parse(&mut config)?;
//! #     assert_eq!(config.host, "127.0.0.1");
//! #     assert_eq!(config.port, 3000);
//! #     assert!(!config.debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[envtag(env = "NAME", fallback = literal)]`
//!
//! Read the field from `NAME`. The fallback may be a string, integer or boolean literal
//! and defaults to an empty string.
//!
//! ## `#[envtag(tag = "...")]`
//!
//! Free-text tag of space-separated `keyword:value` pairs. Recognized keywords are `env`
//! and `fallback`; surrounding double quotes are stripped from values. A tag without an
//! `env` keyword leaves the field alone.
//!
//! ## `#[envtag(prefix = "APP_")]` (struct level)
//!
//! Prepend a prefix to every variable name of the record.
//!
//! # Custom sources and sinks
//!
//! ```rust
//! use std::collections::HashMap;
//! use envtag::{Populator, Record};
//!
//! #[derive(Default, Record)]
//! struct Limits {
//!     #[envtag(env = "MAX", fallback = "many")]
//!     pub max: i64,
//! }
//!
//! let env = HashMap::from([("MAX".to_string(), "ten".to_string())]);
//! let mut populator = Populator::new().with_env(env).with_sink(Vec::<String>::new());
//!
//! let mut limits = Limits::default();
//! populator.populate(&mut limits).unwrap();
//! assert_eq!(limits.max, -1);
//! assert_eq!(populator.sink().len(), 1);
//! ```

mod diagnostic;
mod error;
mod populate;
mod record;
mod report;
mod resolve;
pub mod tag;

pub use diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
pub use envtag_derive::Record;
pub use error::Error;
pub use populate::{parse, Populator, INVALID_INT_FALLBACK};
pub use record::{Field, Metadata, Options, Record, Shape, Slot};
pub use report::{FieldReport, Outcome, Report, SkipReason};
pub use resolve::{
    parse_bool, parse_int, resolve_bool, resolve_int, resolve_string, Environment, ProcessEnv,
};
