//! Error types for feasgen-generator

use thiserror::Error;

use crate::material::Material;

/// Errors the conditional feasibility generator can raise.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Morphology kernel error (propagated from brush/grid construction).
    #[error("morph error: {0}")]
    Morph(#[from] feasgen_morph::MorphError),

    /// A required pixel exists but no valid touch can cover it.
    #[error("infeasible brush: material {material} has a required pixel with no valid touch at step {step}")]
    InfeasibleBrush { material: Material, step: usize },

    /// Brush or grid dimensions are incompatible with the request.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// An internal invariant was violated: the selector found nothing to do
    /// while pixels remain unassigned, or the step cap was exceeded.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}

/// Result type for feasgen-generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
