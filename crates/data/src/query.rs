use crate::error::{DataError, DataResult};
use defi_yield_domain::entities::YieldOpportunity;
use defi_yield_domain::enums::{AssetType, Timeframe};

/// Filter applied to catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldQuery {
    pub protocol_ids: Vec<String>,
    /// `None` matches every asset type.
    pub asset_type: Option<AssetType>,
    pub timeframe: Timeframe,
}

impl YieldQuery {
    /// Creates a query over the given protocols, all asset types, last 7 days.
    pub fn new<I, S>(protocol_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protocol_ids: protocol_ids.into_iter().map(Into::into).collect(),
            asset_type: None,
            timeframe: Timeframe::Week,
        }
    }

    /// Parses a comma separated protocol list such as `"aave, curve"`.
    #[must_use]
    pub fn from_csv(protocols: &str) -> Self {
        Self::new(
            protocols
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty()),
        )
    }

    #[must_use]
    pub fn with_asset_type(mut self, asset_type: Option<AssetType>) -> Self {
        self.asset_type = asset_type;
        self
    }

    #[must_use]
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    /// Rejects queries without any protocol.
    pub fn validate(&self) -> DataResult<()> {
        if self.protocol_ids.is_empty() {
            return Err(DataError::InvalidQuery(
                "at least one protocol id is required".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn includes_protocol(&self, protocol_id: &str) -> bool {
        self.protocol_ids
            .iter()
            .any(|id| id.eq_ignore_ascii_case(protocol_id))
    }

    #[must_use]
    pub fn includes_asset(&self, asset_type: AssetType) -> bool {
        self.asset_type.is_none_or(|wanted| wanted == asset_type)
    }

    #[must_use]
    pub fn matches(&self, opportunity: &YieldOpportunity) -> bool {
        self.includes_protocol(&opportunity.protocol_id) && self.includes_asset(opportunity.asset_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_trims_and_skips_blanks() {
        let query = YieldQuery::from_csv(" aave, ,Curve ,");
        assert_eq!(query.protocol_ids, vec!["aave", "Curve"]);
        assert!(query.includes_protocol("curve"));
        assert!(!query.includes_protocol("yearn"));
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            YieldQuery::from_csv("").validate(),
            Err(DataError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_asset_filter() {
        let any = YieldQuery::new(["aave"]);
        assert!(any.includes_asset(AssetType::Bitcoin));
        let stables = any.with_asset_type(Some(AssetType::Stablecoin));
        assert!(stables.includes_asset(AssetType::Stablecoin));
        assert!(!stables.includes_asset(AssetType::LpToken));
    }
}
