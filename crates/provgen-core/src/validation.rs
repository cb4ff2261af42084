use std::collections::BTreeSet;

use jsonschema::JSONSchema;
use schemars::schema_for;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ids::parse_edge_id;
use crate::model::ProvDocument;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with a JSON pointer location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            IssueSeverity::Error => self.errors.push(issue),
            IssueSeverity::Warning => self.warnings.push(issue),
        }
    }
}

/// JSON Schema of the provenance document format.
pub fn document_json_schema() -> Result<Value> {
    let schema = schema_for!(ProvDocument);
    Ok(serde_json::to_value(&schema)?)
}

/// Validate a raw JSON value against the document JSON Schema.
pub fn validate_document_json(document_json: &Value) -> Result<ValidationReport> {
    let schema = document_json_schema()?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| Error::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();
    if let Err(errors) = compiled.validate(document_json) {
        for error in errors {
            let path = match error.instance_path.to_string() {
                path if path.is_empty() => "/".to_string(),
                path => path,
            };
            report.push(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
            ));
        }
    }

    Ok(report)
}

/// Validate internal consistency of a decoded document.
///
/// This checks:
/// - every relation references a declared entity and a declared activity
/// - edge identifiers are well formed `_:id<k>` tokens
/// - edge identifiers are unique across all relation collections
pub fn validate_document(document: &ProvDocument) -> Result<()> {
    let mut seen = BTreeSet::new();

    for (id, entity, activity) in document.edges() {
        check_edge_id(id, &mut seen)?;
        if !document.contains_entity(entity) {
            return Err(Error::InvalidDocument(format!(
                "relation {id} references undeclared entity: {entity}"
            )));
        }
        if !document.contains_activity(activity) {
            return Err(Error::InvalidDocument(format!(
                "relation {id} references undeclared activity: {activity}"
            )));
        }
    }

    for (id, derivation) in &document.was_derived_from {
        check_edge_id(id, &mut seen)?;
        for entity in [&derivation.generated_entity, &derivation.used_entity] {
            if !document.contains_entity(entity) {
                return Err(Error::InvalidDocument(format!(
                    "relation {id} references undeclared entity: {entity}"
                )));
            }
        }
    }

    Ok(())
}

fn check_edge_id(id: &str, seen: &mut BTreeSet<u64>) -> Result<()> {
    let number = parse_edge_id(id)
        .ok_or_else(|| Error::InvalidDocument(format!("malformed edge id: {id}")))?;
    if !seen.insert(number) {
        return Err(Error::InvalidDocument(format!("duplicate edge id: {id}")));
    }
    Ok(())
}
