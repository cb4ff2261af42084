use serde::{Deserialize, Serialize};

/// Default cap on assignment resampling.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Seed for the random source; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Maximum attempts to draw an acceptable assignment.
    pub max_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    /// Seed of the internal random source; absent when the caller supplied one.
    pub seed: Option<u64>,
    pub total_nodes: u32,
    pub partite_size: usize,
    pub degree: usize,
    pub attempts: u32,
    pub generation_count: usize,
    pub usage_count: usize,
    pub duration_ms: u64,
    pub document_sha256: String,
}

impl GenerationReport {
    pub fn relation_count(&self) -> usize {
        self.generation_count + self.usage_count
    }
}
