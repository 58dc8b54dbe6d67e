//! Error type shared by every stage of a tube build.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TubeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TubeError {
    #[error("Sample count must be at least 2, got {0}.")]
    InvalidCount(usize),
    #[error("Facet count must be at least 3, got {0}.")]
    InvalidFacets(usize),
    #[error("Radius must be finite and positive, got {0}.")]
    InvalidRadius(f64),
    #[error("Time step must be finite and positive, got {0}.")]
    InvalidTimeStep(f64),
    #[error("Sub-step count must be at least 1, got {0}.")]
    InvalidSubSteps(usize),
    #[error("Target size must be finite and positive, got {0}.")]
    InvalidTargetSize(f64),
    #[error("Invalid cross-section profile: {0}")]
    InvalidProfile(String),
    #[error("Mesh with {count} samples and {facets} facets exceeds the 32-bit index range.")]
    MeshTooLarge { count: usize, facets: usize },
    #[error("Unknown attractor '{0}'.")]
    UnknownAttractor(String),
    /// Integration diverged; `sample` is the first path index holding a non-finite value.
    #[error("Integration became non-finite at sample {sample}; try a smaller time step.")]
    NumericalInstability { sample: usize },
    #[error("All path samples coincide; the trajectory has no spatial extent.")]
    DegenerateExtent,
    #[error("Build cancelled after {completed} samples.")]
    Cancelled { completed: usize },
}

impl TubeError {
    /// True for errors raised by settings validation, before any integration runs.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TubeError::InvalidCount(_)
                | TubeError::InvalidFacets(_)
                | TubeError::InvalidRadius(_)
                | TubeError::InvalidTimeStep(_)
                | TubeError::InvalidSubSteps(_)
                | TubeError::InvalidTargetSize(_)
                | TubeError::InvalidProfile(_)
                | TubeError::MeshTooLarge { .. }
                | TubeError::UnknownAttractor(_)
        )
    }
}
