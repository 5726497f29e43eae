use crate::entities::HistoricalYield;
use crate::error::{DomainError, DomainResult};
use crate::math::statistics;
use crate::value_objects::YieldSummary;

/// Summarizes a historical yield series.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] if the series has no points.
pub fn summarize(history: &HistoricalYield) -> DomainResult<YieldSummary> {
    let values = history.values();
    let latest = history.latest().ok_or_else(|| {
        DomainError::invalid_input(format!("{} has no yield history", history.protocol_id))
    })?;

    let mut min = values[0];
    let mut max = values[0];
    for v in &values {
        min = min.min(*v);
        max = max.max(*v);
    }

    Ok(YieldSummary {
        mean: statistics::mean(&values)?,
        volatility: statistics::standard_deviation(&values)?,
        min,
        max,
        latest: latest.yield_pct,
        observations: values.len(),
    })
}
