pub mod allocation;
pub mod impermanent_loss;
pub mod scored_opportunity;
pub mod strategy;
pub mod yield_summary;

pub use allocation::Allocation;
pub use impermanent_loss::ImpermanentLossResult;
pub use scored_opportunity::{ConcentratedOpportunity, ScoredOpportunity};
pub use strategy::Strategy;
pub use yield_summary::YieldSummary;
