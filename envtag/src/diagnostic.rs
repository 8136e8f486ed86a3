//! Soft-failure diagnostics emitted while populating a record

use std::fmt;

/// A problem the populator worked around instead of failing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    /// The field cannot be written through the record
    Unsettable { field: &'a str },
    /// The integer fallback literal did not parse; `-1` was used instead
    InvalidFallback {
        field: &'a str,
        env: &'a str,
        fallback: &'a str,
    },
    /// The field is environment-driven but its type is not supported; left untouched
    UnsupportedType {
        field: &'a str,
        env: &'a str,
        type_name: &'a str,
    },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unsettable { field } => write!(f, "field {field} is unsettable"),
            Diagnostic::InvalidFallback {
                field, fallback, ..
            } => write!(
                f,
                "failed to parse fallback '{fallback}' of field {field}, setting to -1"
            ),
            Diagnostic::UnsupportedType {
                field, type_name, ..
            } => write!(
                f,
                "field {field} has unsupported type {type_name}, skipping"
            ),
        }
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic<'_>),
{
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Collects the rendered message of every diagnostic
impl DiagnosticSink for Vec<String> {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        self.push(diagnostic.to_string());
    }
}

/// Forwards diagnostics to `tracing` at `warn` level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::Unsettable { field } => {
                tracing::warn!(field = %field, "{}", diagnostic);
            }
            Diagnostic::InvalidFallback { field, env, .. }
            | Diagnostic::UnsupportedType { field, env, .. } => {
                tracing::warn!(field = %field, env = %env, "{}", diagnostic);
            }
        }
    }
}
