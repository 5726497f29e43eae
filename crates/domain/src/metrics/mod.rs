pub mod impermanent_loss;
pub mod yield_stats;

pub use impermanent_loss::{compute_impermanent_loss, il_from_price_ratio};
pub use yield_stats::summarize;
