//! Per-field account of a populate call

use serde::Serialize;

/// What happened to every field of a record during one populate call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// Field name as declared
    pub field: String,
    /// Environment variable consulted, prefix included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum Outcome {
    /// Value parsed from the environment variable
    Environment,
    /// Variable unset or unparsable; fallback written
    Fallback,
    /// Field left untouched
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Unsettable,
    NoMetadata,
    NoEnvKey,
    UnsupportedType,
}

impl Report {
    /// Report for the field named `field`
    pub fn get(&self, field: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|r| r.field == field)
    }

    /// Fields whose value came from the environment
    pub fn from_environment(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields
            .iter()
            .filter(|r| r.outcome == Outcome::Environment)
    }

    pub(crate) fn push(&mut self, field: &str, env: Option<String>, outcome: Outcome) {
        self.fields.push(FieldReport {
            field: field.to_string(),
            env,
            outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_snake_case() {
        let mut report = Report::default();
        report.push("port", Some("PORT".to_string()), Outcome::Environment);
        report.push("label", None, Outcome::Skipped(SkipReason::NoMetadata));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fields": [
                    { "field": "port", "env": "PORT", "outcome": { "kind": "environment" } },
                    {
                        "field": "label",
                        "outcome": { "kind": "skipped", "reason": "no_metadata" }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let mut report = Report::default();
        report.push("a", Some("A".to_string()), Outcome::Fallback);
        report.push("b", Some("B".to_string()), Outcome::Environment);

        assert_eq!(report.get("a").unwrap().outcome, Outcome::Fallback);
        assert!(report.get("c").is_none());
        let names: Vec<_> = report
            .from_environment()
            .map(|r| r.field.as_str())
            .collect();
        assert_eq!(names, ["b"]);
    }
}
