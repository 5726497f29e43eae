use crate::error::DataResult;
use crate::fixtures;
use crate::history::{HistorySeed, generate_history};
use crate::query::YieldQuery;
use crate::YieldDataProvider;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use defi_yield_domain::entities::{HistoricalYield, ProjectedReturn, Protocol, YieldOpportunity};
use defi_yield_domain::enums::{AssetType, Scenario};
use tracing::debug;

/// In-memory catalog of protocols, yields, history seeds and projections.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    protocols: Vec<Protocol>,
    yields: Vec<YieldOpportunity>,
    history: Vec<HistorySeed>,
    projections: Vec<ProjectedReturn>,
    anchor_date: NaiveDate,
    seed: u64,
}

impl StaticCatalog {
    pub const DEFAULT_SEED: u64 = 0x5eed;

    /// The built-in dashboard catalog, with history ending today.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            protocols: fixtures::protocols(),
            yields: fixtures::yields(),
            history: fixtures::history_seeds(),
            projections: fixtures::projected_returns(),
            anchor_date: Utc::now().date_naive(),
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Builds a catalog from validated opportunities.
    ///
    /// Protocols missing from `protocols` are derived from the records, and
    /// each opportunity gets a history seed centred on its APY.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidRecord`](crate::DataError::InvalidRecord)
    /// for the first record with a negative APY or TVL.
    pub fn from_opportunities(
        mut protocols: Vec<Protocol>,
        yields: Vec<YieldOpportunity>,
        projections: Vec<ProjectedReturn>,
    ) -> DataResult<Self> {
        for opportunity in &yields {
            opportunity.validate()?;
            if !protocols.iter().any(|p| p.id == opportunity.protocol_id) {
                protocols.push(Protocol::new(
                    opportunity.protocol_id.clone(),
                    opportunity.protocol_name.clone(),
                    String::new(),
                ));
            }
        }
        let history = yields.iter().map(HistorySeed::from_opportunity).collect();

        Ok(Self {
            protocols,
            yields,
            history,
            projections,
            anchor_date: Utc::now().date_naive(),
            seed: Self::DEFAULT_SEED,
        })
    }

    /// Fixes the last date of generated history.
    #[must_use]
    pub fn with_anchor_date(mut self, anchor_date: NaiveDate) -> Self {
        self.anchor_date = anchor_date;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.yields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yields.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl YieldDataProvider for StaticCatalog {
    async fn protocols(&self) -> DataResult<Vec<Protocol>> {
        Ok(self.protocols.clone())
    }

    async fn yields(&self, query: &YieldQuery) -> DataResult<Vec<YieldOpportunity>> {
        query.validate()?;
        let matched: Vec<YieldOpportunity> = self
            .yields
            .iter()
            .filter(|y| query.matches(y))
            .cloned()
            .collect();
        debug!(
            protocols = ?query.protocol_ids,
            asset_type = ?query.asset_type,
            matched = matched.len(),
            "Filtered yield catalog"
        );
        Ok(matched)
    }

    async fn historical_yields(&self, query: &YieldQuery) -> DataResult<Vec<HistoricalYield>> {
        query.validate()?;
        let days = query.timeframe.days();
        let series = self
            .history
            .iter()
            .filter(|s| query.includes_protocol(&s.protocol_id) && query.includes_asset(s.asset_type))
            .map(|s| generate_history(s, self.anchor_date, days, self.seed))
            .collect::<DataResult<Vec<_>>>()?;
        debug!(
            timeframe = query.timeframe.as_str(),
            series = series.len(),
            "Generated historical yields"
        );
        Ok(series)
    }

    async fn projected_returns(
        &self,
        protocol_ids: &[String],
        scenario: Scenario,
        asset_type: Option<AssetType>,
    ) -> DataResult<Vec<ProjectedReturn>> {
        let query = YieldQuery::new(protocol_ids.iter().cloned()).with_asset_type(asset_type);
        query.validate()?;
        Ok(self
            .projections
            .iter()
            .filter(|p| {
                p.scenario == scenario
                    && query.includes_protocol(&p.protocol_id)
                    && query.includes_asset(p.asset_type)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataError;
    use defi_yield_domain::enums::{RiskLevel, Timeframe};
    use rust_decimal_macros::dec;

    fn catalog() -> StaticCatalog {
        StaticCatalog::builtin().with_anchor_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
    }

    #[tokio::test]
    async fn test_builtin_protocols() {
        let protocols = catalog().protocols().await.unwrap();
        assert_eq!(protocols.len(), 8);
        assert_eq!(protocols[4].name, "Yearn Finance");
    }

    #[tokio::test]
    async fn test_yields_filtered_by_protocol_and_asset() {
        let query = YieldQuery::from_csv("aave,compound")
            .with_asset_type(Some(AssetType::Stablecoin));
        let yields = catalog().yields(&query).await.unwrap();
        assert_eq!(yields.len(), 4);
        assert!(yields.iter().all(|y| y.asset_type == AssetType::Stablecoin));
        assert_eq!(yields[0].apy, dec!(4.2));
    }

    #[tokio::test]
    async fn test_unknown_protocols_are_ignored() {
        let query = YieldQuery::from_csv("maker,curve");
        let yields = catalog().yields(&query).await.unwrap();
        assert_eq!(yields.len(), 3);
        assert!(yields.iter().all(|y| y.protocol_id == "curve"));
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let err = catalog().yields(&YieldQuery::from_csv("")).await.unwrap_err();
        assert!(matches!(err, DataError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn test_history_follows_timeframe() {
        let query = YieldQuery::from_csv("aave,uniswap").with_timeframe(Timeframe::Month);
        let history = catalog().historical_yields(&query).await.unwrap();
        assert_eq!(history.len(), 2);
        for series in &history {
            assert_eq!(series.data.len(), 30);
            assert_eq!(
                series.latest().unwrap().date,
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_history_is_stable_across_queries() {
        let cat = catalog();
        let alone = cat
            .historical_yields(&YieldQuery::from_csv("curve"))
            .await
            .unwrap();
        let together = cat
            .historical_yields(&YieldQuery::from_csv("aave,curve"))
            .await
            .unwrap();
        let curve = together.iter().find(|h| h.protocol_id == "curve").unwrap();
        assert_eq!(&alone[0], curve);
    }

    #[tokio::test]
    async fn test_projected_returns_by_scenario() {
        let ids = vec!["aave".to_string(), "yearn".to_string()];
        let bull = catalog()
            .projected_returns(&ids, Scenario::Bull, None)
            .await
            .unwrap();
        assert_eq!(bull.len(), 2);
        assert!(bull.iter().all(|p| p.scenario == Scenario::Bull));
        assert_eq!(bull[1].projections.month12, dec!(10.0));

        let lp = catalog()
            .projected_returns(&ids, Scenario::Bull, Some(AssetType::LpToken))
            .await
            .unwrap();
        assert!(lp.is_empty());
    }

    #[test]
    fn test_from_opportunities_derives_protocols() {
        let yields = vec![YieldOpportunity::new(
            "pendle",
            "Pendle",
            "PT-stETH",
            AssetType::Ethereum,
            dec!(6.1),
            dec!(50000000),
            RiskLevel::High,
        )];
        let cat = StaticCatalog::from_opportunities(Vec::new(), yields, Vec::new()).unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.protocols[0].id, "pendle");
        assert_eq!(cat.history.len(), 1);
    }

    #[test]
    fn test_from_opportunities_rejects_negative_apy() {
        let yields = vec![YieldOpportunity::new(
            "bad",
            "Bad",
            "X",
            AssetType::Altcoin,
            dec!(-1),
            dec!(1),
            RiskLevel::High,
        )];
        let err = StaticCatalog::from_opportunities(Vec::new(), yields, Vec::new()).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord(_)));
    }
}
