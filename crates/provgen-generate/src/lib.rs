//! Mock provenance dataset generation.
//!
//! Builds a degree-regular bipartite assignment between entities and
//! activities, encodes it as typed `wasGeneratedBy` / `used` relations and
//! persists the resulting document as JSON.

pub mod bipartite;
pub mod encoder;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;

pub use bipartite::{Assignment, BipartiteGenerator};
pub use encoder::RelationEncoder;
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{DEFAULT_MAX_ATTEMPTS, GenerateOptions, GenerationReport};
pub use output::{OutputError, document_fingerprint, read_document, write_document, write_report};
