pub mod historical_yield;
pub mod projected_return;
pub mod protocol;
pub mod yield_opportunity;

// Re-export for easier access
pub use historical_yield::{HistoricalYield, YieldPoint};
pub use projected_return::{ProjectedReturn, Projections};
pub use protocol::Protocol;
pub use yield_opportunity::YieldOpportunity;
