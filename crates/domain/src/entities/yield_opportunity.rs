use crate::enums::{AssetType, RiskLevel};
use crate::error::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One investable position at one protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldOpportunity {
    pub protocol_id: String,
    pub protocol_name: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    /// Annual percentage yield, e.g. `4.2` for 4.2%.
    pub apy: Decimal,
    /// Total value locked in USD.
    pub tvl: Decimal,
    pub risk_level: RiskLevel,
}

impl YieldOpportunity {
    pub fn new(
        protocol_id: impl Into<String>,
        protocol_name: impl Into<String>,
        asset_name: impl Into<String>,
        asset_type: AssetType,
        apy: Decimal,
        tvl: Decimal,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            protocol_id: protocol_id.into(),
            protocol_name: protocol_name.into(),
            asset_name: asset_name.into(),
            asset_type,
            apy,
            tvl,
            risk_level,
        }
    }

    /// Checks that `apy` and `tvl` are non-negative.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] naming the offending record.
    pub fn validate(&self) -> DomainResult<()> {
        if self.apy.is_sign_negative() && !self.apy.is_zero() {
            return Err(DomainError::invalid_input(format!(
                "{}/{}: apy must be non-negative, got {}",
                self.protocol_id, self.asset_name, self.apy
            )));
        }
        if self.tvl.is_sign_negative() && !self.tvl.is_zero() {
            return Err(DomainError::invalid_input(format!(
                "{}/{}: tvl must be non-negative, got {}",
                self.protocol_id, self.asset_name, self.tvl
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_rejects_negative_apy() {
        let opp = YieldOpportunity::new(
            "aave",
            "Aave",
            "USDC",
            AssetType::Stablecoin,
            dec!(-1),
            dec!(100),
            RiskLevel::Low,
        );
        assert!(opp.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "protocolId": "yearn",
            "protocolName": "Yearn Finance",
            "assetName": "YFI Vault",
            "assetType": "altcoin",
            "apy": 9.3,
            "tvl": 76000000,
            "riskLevel": "Very High"
        }"#;
        let opp: YieldOpportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.risk_level, RiskLevel::VeryHigh);
        assert!((opp.apy - dec!(9.3)).abs() < dec!(0.000001));
        assert!(opp.validate().is_ok());
    }
}
