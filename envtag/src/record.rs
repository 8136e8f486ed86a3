//! Field-descriptor table describing a record to the populator

use crate::tag;

/// A value whose fields can be filled from the environment.
///
/// Usually implemented with `#[derive(Record)]`. Hand-written impls list every field
/// in declaration order.
pub trait Record {
    /// Describe the record's fields, lending out mutable access to the writable ones.
    fn shape(&mut self) -> Shape<'_>;
}

/// Layout of a record as seen by the populator
#[derive(Debug)]
pub enum Shape<'a> {
    /// Composite of named fields
    Struct {
        /// Prepended to every environment variable name
        prefix: &'static str,
        /// Fields in declaration order
        fields: Vec<Field<'a>>,
    },
    /// Anything that is not a struct with named fields
    Opaque,
}

/// One field of a record
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub metadata: Option<Metadata>,
    pub slot: Slot<'a>,
}

/// Write target of a field, by declared type
#[derive(Debug)]
pub enum Slot<'a> {
    Str(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut i64),
    /// Declared type is not supported; carries the type as written
    Unsupported(&'static str),
    /// Field cannot be written through the record (e.g. a shared reference)
    ReadOnly,
}

/// Metadata attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    /// Free-text tag such as `env:"PORT" fallback:"8080"`
    Tag(&'static str),
    /// Structured options
    Options {
        env: &'static str,
        fallback: Option<&'static str>,
    },
}

/// Resolved metadata of an environment-driven field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Variable name, quotes stripped, without prefix
    pub env: String,
    /// Fallback literal, quotes stripped; empty when not given
    pub fallback: String,
}

impl Metadata {
    /// Resolve into options, or `None` when no `env` keyword is present.
    pub fn options(&self) -> Option<Options> {
        match self {
            Metadata::Tag(raw) => {
                let mut map = tag::tokenize(raw);
                let env = map.remove(tag::ENV)?;
                let fallback = map.remove(tag::FALLBACK).unwrap_or_default();
                Some(Options {
                    env: tag::strip_quotes(&env).to_string(),
                    fallback: tag::strip_quotes(&fallback).to_string(),
                })
            }
            Metadata::Options { env, fallback } => Some(Options {
                env: tag::strip_quotes(env).to_string(),
                fallback: tag::strip_quotes(fallback.unwrap_or_default()).to_string(),
            }),
        }
    }
}

macro_rules! opaque_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Opaque
                }
            }
        )*
    };
}

opaque_record!(String, str, bool, char, ());
opaque_record!(i8, i16, i32, i64, i128, isize);
opaque_record!(u8, u16, u32, u64, u128, usize);
opaque_record!(f32, f64);
