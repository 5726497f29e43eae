//! Errors raised by the strategy pipeline.

use defi_yield_domain::DomainError;
use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validation,
    Ranking,
    Allocation,
    Projection,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Ranking => "ranking",
            Self::Allocation => "allocation",
            Self::Projection => "projection",
        };
        f.write_str(name)
    }
}

/// Failure of [`crate::strategy::calculate_optimal_strategy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// A lower-layer calculation failed; the cause is preserved.
    #[error("Calculation failed during {stage}: {source}")]
    Calculation {
        stage: PipelineStage,
        #[source]
        source: DomainError,
    },
}

impl StrategyError {
    #[must_use]
    pub fn at(stage: PipelineStage) -> impl FnOnce(DomainError) -> Self {
        move |source| Self::Calculation { stage, source }
    }

    #[must_use]
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Calculation { stage, .. } => *stage,
        }
    }

    /// The underlying domain error.
    #[must_use]
    pub fn cause(&self) -> &DomainError {
        match self {
            Self::Calculation { source, .. } => source,
        }
    }
}

pub type StrategyResult<T> = Result<T, StrategyError>;
