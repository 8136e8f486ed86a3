//! Field population engine

use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::Error;
use crate::record::{Field, Record, Shape, Slot};
use crate::report::{Outcome, Report, SkipReason};
use crate::resolve::{
    parse_bool, parse_int, parse_string, resolve_with, Environment, ProcessEnv, Source,
};

/// Integer fallback used when the fallback literal does not parse
pub const INVALID_INT_FALLBACK: i64 = -1;

/// Populate `record` from the process environment.
///
/// Soft failures are logged through `tracing`.
///
/// # Errors
///
/// - [`Error::NotAStruct`] when `record` is not a struct with named fields
pub fn parse<R: Record + ?Sized>(record: &mut R) -> Result<(), Error> {
    Populator::new().populate(record)
}

/// Fills records from an [`Environment`], reporting soft failures to a [`DiagnosticSink`].
#[derive(Debug, Clone, Default)]
pub struct Populator<E = ProcessEnv, S = TracingSink> {
    env: E,
    sink: S,
}

impl Populator {
    /// Populator reading the process environment and logging through `tracing`
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, S> Populator<E, S>
where
    E: Environment,
    S: DiagnosticSink,
{
    /// Replace the environment source.
    pub fn with_env<E2: Environment>(self, env: E2) -> Populator<E2, S> {
        Populator {
            env,
            sink: self.sink,
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink<S2: DiagnosticSink>(self, sink: S2) -> Populator<E, S2> {
        Populator {
            env: self.env,
            sink,
        }
    }

    /// Diagnostic sink in use
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the populator, returning its diagnostic sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Populate every environment-driven field of `record`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAStruct`] when `record` is not a struct with named fields
    pub fn populate<R: Record + ?Sized>(&mut self, record: &mut R) -> Result<(), Error> {
        self.populate_with_report(record).map(|_| ())
    }

    /// Same as [`populate`](Self::populate), returning what happened to each field.
    pub fn populate_with_report<R: Record + ?Sized>(
        &mut self,
        record: &mut R,
    ) -> Result<Report, Error> {
        let (prefix, fields) = match record.shape() {
            Shape::Struct { prefix, fields } => (prefix, fields),
            Shape::Opaque => return Err(Error::not_a_struct::<R>()),
        };

        let mut report = Report::default();
        for field in fields {
            self.populate_field(prefix, field, &mut report);
        }
        Ok(report)
    }

    fn populate_field(&mut self, prefix: &str, field: Field<'_>, report: &mut Report) {
        let Field {
            name,
            metadata,
            slot,
        } = field;

        let target = match slot {
            Slot::Str(value) => Target::Str(value),
            Slot::Bool(value) => Target::Bool(value),
            Slot::Int(value) => Target::Int(value),
            Slot::Unsupported(type_name) => Target::Unsupported(type_name),
            Slot::ReadOnly => {
                self.sink.report(&Diagnostic::Unsettable { field: name });
                report.push(name, None, Outcome::Skipped(SkipReason::Unsettable));
                return;
            }
        };

        let Some(metadata) = metadata else {
            report.push(name, None, Outcome::Skipped(SkipReason::NoMetadata));
            return;
        };

        let Some(options) = metadata.options() else {
            report.push(name, None, Outcome::Skipped(SkipReason::NoEnvKey));
            return;
        };

        let env = format!("{}{}", prefix, options.env);
        let fallback = options.fallback.as_str();

        let source = match target {
            Target::Str(value) => {
                let fallback = fallback.to_string();
                let resolved = resolve_with(&self.env, &env, fallback, parse_string);
                *value = resolved.value;
                resolved.source
            }
            Target::Bool(value) => {
                let fallback = parse_bool(fallback).unwrap_or(false);
                let resolved = resolve_with(&self.env, &env, fallback, parse_bool);
                *value = resolved.value;
                resolved.source
            }
            Target::Int(value) => {
                let fallback = parse_int(fallback).unwrap_or_else(|| {
                    self.sink.report(&Diagnostic::InvalidFallback {
                        field: name,
                        env: &env,
                        fallback,
                    });
                    INVALID_INT_FALLBACK
                });
                let resolved = resolve_with(&self.env, &env, fallback, parse_int);
                *value = resolved.value;
                resolved.source
            }
            Target::Unsupported(type_name) => {
                self.sink.report(&Diagnostic::UnsupportedType {
                    field: name,
                    env: &env,
                    type_name,
                });
                let outcome = Outcome::Skipped(SkipReason::UnsupportedType);
                report.push(name, Some(env), outcome);
                return;
            }
        };

        let outcome = match source {
            Source::Environment => Outcome::Environment,
            Source::Fallback => Outcome::Fallback,
        };
        tracing::debug!(field = name, env = %env, ?outcome, "resolved field");
        report.push(name, Some(env), outcome);
    }
}

/// Writable slot of a field
enum Target<'a> {
    Str(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut i64),
    Unsupported(&'static str),
}
