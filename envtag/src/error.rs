//! Error types for populating records from environment variables

/// Errors that can occur when populating a record.
///
/// Per-field problems (missing variables, unparsable values or fallbacks, unsupported
/// types, unwritable fields) never surface here; they fall back to a default or skip the
/// field and are reported through a [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The value handed to the populator is not a struct with named fields.
    #[error("value must be a struct, got {type_name}")]
    NotAStruct {
        /// Fully qualified type name of the rejected value
        type_name: String,
    },
}

impl Error {
    pub(crate) fn not_a_struct<T: ?Sized>() -> Self {
        Self::NotAStruct {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}
