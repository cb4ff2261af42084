use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// No degree-regular assignment was found within the attempt budget.
    #[error(
        "construction infeasible: no valid assignment for {partite_size} nodes per side at degree {degree} after {attempts} attempts"
    )]
    Infeasible {
        partite_size: usize,
        degree: usize,
        attempts: u32,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
