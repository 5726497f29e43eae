//! Yield opportunity ranking and capital allocation.
//!
//! This crate turns a catalog of yield opportunities into a suggested
//! strategy:
//! - Risk-adjusted scoring and ranking
//! - Selection and weighting under four policies
//! - Compounded projection and narrative insights
//! - A single pipeline entry point with stage-tagged errors

/// Prelude module for convenient imports.
pub mod prelude;

/// Capital allocation policies.
pub mod allocation;
/// Pipeline errors.
pub mod error;
/// Strategy narratives.
pub mod insights;
/// Scoring objectives.
pub mod objective;
/// Strategy projection.
pub mod projection;
/// Opportunity ranking.
pub mod ranker;
/// End-to-end pipeline.
pub mod strategy;

pub use error::{PipelineStage, StrategyError, StrategyResult};
pub use strategy::calculate_optimal_strategy;
