//! Typed lookups with fallback
//!
//! Every resolver looks the variable up afresh, parses it, and folds both absence and
//! parse failure into the fallback. None of them can fail.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only source of environment variables.
pub trait Environment {
    /// Value bound to `name`, or `None` when unset.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The host process environment.
///
/// Values that are not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Environment,
    Fallback,
}

#[derive(Debug)]
pub(crate) struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

pub(crate) fn resolve_with<E, T, F>(env: &E, name: &str, fallback: T, parse: F) -> Resolved<T>
where
    E: Environment + ?Sized,
    F: FnOnce(&str) -> Option<T>,
{
    match env.lookup(name).and_then(|raw| parse(&raw)) {
        Some(value) => Resolved {
            value,
            source: Source::Environment,
        },
        None => Resolved {
            value: fallback,
            source: Source::Fallback,
        },
    }
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_string(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

/// Parse a base-10 signed 64-bit integer with an optional leading sign.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Raw value of `name`, or `fallback` when unset
pub fn resolve_string<E>(env: &E, name: &str, fallback: &str) -> String
where
    E: Environment + ?Sized,
{
    resolve_with(env, name, fallback.to_string(), parse_string).value
}

/// Boolean value of `name`, or `fallback` when unset or unparsable
pub fn resolve_bool<E>(env: &E, name: &str, fallback: bool) -> bool
where
    E: Environment + ?Sized,
{
    resolve_with(env, name, fallback, parse_bool).value
}

/// Integer value of `name`, or `fallback` when unset or unparsable
pub fn resolve_int<E>(env: &E, name: &str, fallback: i64) -> i64
where
    E: Environment + ?Sized,
{
    resolve_with(env, name, fallback, parse_int).value
}
