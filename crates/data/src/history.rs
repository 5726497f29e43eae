use crate::error::{DataError, DataResult};
use chrono::{Days, NaiveDate};
use defi_yield_domain::DomainError;
use defi_yield_domain::entities::{HistoricalYield, YieldOpportunity, YieldPoint};
use defi_yield_domain::enums::AssetType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Parameters of one synthetic yield series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySeed {
    pub protocol_id: String,
    pub protocol_name: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    /// Long-run APY the series reverts to, in percent.
    pub base_apy: f64,
    /// Stationary standard deviation of the series, in percentage points.
    pub volatility: f64,
}

impl HistorySeed {
    /// Seed centred on the opportunity's current APY, with a spread that
    /// widens with its risk level (2% of APY per risk step).
    #[must_use]
    pub fn from_opportunity(opportunity: &YieldOpportunity) -> Self {
        let base_apy = opportunity.apy.to_f64().unwrap_or(0.0);
        let volatility = base_apy * 0.02 * f64::from(opportunity.risk_level.ordinal());
        Self {
            protocol_id: opportunity.protocol_id.clone(),
            protocol_name: opportunity.protocol_name.clone(),
            asset_name: opportunity.asset_name.clone(),
            asset_type: opportunity.asset_type,
            base_apy,
            volatility,
        }
    }
}

/// Discrete Ornstein-Uhlenbeck walk around a base yield.
///
/// Each step moves `reversion` of the way back to `base` and adds a normal
/// shock scaled so the stationary deviation equals `volatility`. Values
/// are floored at zero.
#[derive(Debug, Clone, Copy)]
pub struct MeanRevertingWalk {
    pub base: f64,
    pub volatility: f64,
    pub reversion: f64,
}

impl MeanRevertingWalk {
    pub const DEFAULT_REVERSION: f64 = 0.1;

    pub fn new(base: f64, volatility: f64) -> Self {
        Self {
            base,
            volatility,
            reversion: Self::DEFAULT_REVERSION,
        }
    }

    /// Generates `steps` values starting at `base`.
    pub fn generate(&self, rng: &mut StdRng, steps: usize) -> DataResult<Vec<f64>> {
        let keep = 1.0 - self.reversion;
        let shock_std = self.volatility * (1.0 - keep * keep).sqrt();
        let normal = Normal::new(0.0, shock_std).map_err(|e| {
            DataError::InvalidRecord(DomainError::invalid_input(format!(
                "invalid history volatility {}: {e}",
                self.volatility
            )))
        })?;

        let mut values = Vec::with_capacity(steps);
        let mut current = self.base;
        for _ in 0..steps {
            values.push(current);
            let z = normal.sample(rng);
            current = (current + self.reversion * (self.base - current) + z).max(0.0);
        }
        Ok(values)
    }
}

/// Builds a daily series of `days` points ending on `end` (inclusive).
///
/// The random stream is derived from `seed` and the series identity, so a
/// given protocol/asset always yields the same history regardless of which
/// other series are requested alongside it.
pub fn generate_history(
    seed: &HistorySeed,
    end: NaiveDate,
    days: u32,
    rng_seed: u64,
) -> DataResult<HistoricalYield> {
    let mut rng = StdRng::seed_from_u64(series_seed(rng_seed, seed));
    let walk = MeanRevertingWalk::new(seed.base_apy, seed.volatility);
    let values = walk.generate(&mut rng, days as usize)?;

    let data = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let back = u64::from(days) - 1 - i as u64;
            let date = end.checked_sub_days(Days::new(back)).ok_or_else(|| {
                DataError::InvalidQuery(format!("history before {end} is out of range"))
            })?;
            let yield_pct = Decimal::from_f64(value)
                .ok_or_else(|| DomainError::invalid_state("non-finite synthetic yield"))?
                .round_dp(2);
            Ok(YieldPoint {
                date,
                yield_pct,
                asset_name: seed.asset_name.clone(),
                asset_type: seed.asset_type,
            })
        })
        .collect::<DataResult<Vec<_>>>()?;

    Ok(HistoricalYield {
        protocol_id: seed.protocol_id.clone(),
        protocol_name: seed.protocol_name.clone(),
        data,
    })
}

fn series_seed(base: u64, seed: &HistorySeed) -> u64 {
    seed.protocol_id
        .bytes()
        .chain(seed.asset_name.bytes())
        .fold(base ^ 0xcbf2_9ce4_8422_2325, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
        })
}
