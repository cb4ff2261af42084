//! Core contracts and helpers for provgen.
//!
//! This crate defines the typed provenance document, the identifier scheme,
//! input validation for generation requests, and structural checks shared by
//! the generator and the CLI.

pub mod error;
pub mod graph;
pub mod ids;
pub mod input;
pub mod model;
pub mod validation;

pub use error::{Error, Result};
pub use graph::{DocumentSummary, NodeDegree, summarize_document};
pub use ids::{EDGE_ID_PREFIX, EdgeIdSequence, activity_id, entity_id, parse_edge_id};
pub use input::{
    Degree, GenerationInputs, InputRejection, MAX_DEGREE, MAX_TOTAL_NODES, MIN_TOTAL_NODES,
    TotalNodes, parse_degree, parse_total_nodes,
};
pub use model::{
    ActivityKind, ActivityRecord, DerivationRelation, EntityKind, EntityRecord,
    GenerationRelation, ProvDocument, UsageRelation,
};
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, document_json_schema, validate_document,
    validate_document_json,
};
