use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use provgen_core::{GenerationInputs, ProvDocument};

use crate::bipartite::BipartiteGenerator;
use crate::encoder::RelationEncoder;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::document_fingerprint;

/// Result of a generation run. Nothing has been written yet.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub document: ProvDocument,
    pub report: GenerationReport,
}

/// Entry point for generating provenance documents.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate with a `ChaCha8Rng` seeded from the configured seed, or from
    /// a freshly drawn one that is recorded in the report.
    pub fn run(&self, inputs: &GenerationInputs) -> Result<GenerationResult, GenerationError> {
        let seed = self.options.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(inputs, &mut rng, Some(seed))
    }

    /// Generate drawing every random decision from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        inputs: &GenerationInputs,
        rng: &mut R,
    ) -> Result<GenerationResult, GenerationError> {
        self.generate(inputs, rng, None)
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        inputs: &GenerationInputs,
        rng: &mut R,
        seed: Option<u64>,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let partite_size = inputs.partite_size();
        let degree = inputs.degree.get();

        info!(
            run_id = %run_id,
            total_nodes = inputs.total_nodes.get(),
            degree,
            seed = ?seed,
            max_attempts = self.options.max_attempts,
            "generation started"
        );

        let generator =
            BipartiteGenerator::new(partite_size, degree).with_max_attempts(self.options.max_attempts);
        let assignment = match generator.generate(rng) {
            Ok(assignment) => assignment,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "generation failed");
                return Err(err);
            }
        };

        let document = RelationEncoder::new().encode(&assignment, rng);
        let document_sha256 = document_fingerprint(&document)?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            started_at,
            seed,
            total_nodes: inputs.total_nodes.get(),
            partite_size,
            degree,
            attempts: assignment.attempts(),
            generation_count: document.was_generated_by.len(),
            usage_count: document.used.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            document_sha256,
        };

        info!(
            run_id = %run_id,
            attempts = report.attempts,
            generation = report.generation_count,
            usage = report.usage_count,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { document, report })
    }
}
