//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use defi_yield_optimization::prelude::*;
//! ```

// Allocation
pub use crate::allocation::{WeightingPolicy, allocate, selection_width};

// Errors
pub use crate::error::{PipelineStage, StrategyError, StrategyResult};

// Insights
pub use crate::insights::{
    EnglishInsights, InsightContext, InsightWriter, NarrativeTemplate, generate_insights,
};

// Objectives
pub use crate::objective::{ObjectiveFunction, RiskAdjustedYield, ScoringWeights};

// Projection
pub use crate::projection::{expected_return, project, project_with};

// Ranking
pub use crate::ranker::{rank_opportunities, rank_with};

// Pipeline
pub use crate::strategy::calculate_optimal_strategy;
