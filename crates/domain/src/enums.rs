use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    Stablecoin,
    Ethereum,
    Bitcoin,
    Altcoin,
    LpToken,
}

impl AssetType {
    pub const ALL: [AssetType; 5] = [
        Self::Stablecoin,
        Self::Ethereum,
        Self::Bitcoin,
        Self::Altcoin,
        Self::LpToken,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stablecoin => "stablecoin",
            Self::Ethereum => "ethereum",
            Self::Bitcoin => "bitcoin",
            Self::Altcoin => "altcoin",
            Self::LpToken => "lp-token",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown asset type '{s}'")))
    }
}

/// Risk classification attached to a single yield opportunity.
///
/// Deserialization is lenient: labels are matched case-insensitively with
/// space, hyphen or underscore separators, and anything unrecognised maps
/// to [`RiskLevel::Moderate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Ordinal on a 1..=5 scale, very-low = 1.
    #[must_use]
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::VeryLow => 1,
            Self::Low => 2,
            Self::Moderate => 3,
            Self::High => 4,
            Self::VeryHigh => 5,
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "very-low" => Self::VeryLow,
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "very-high" => Self::VeryHigh,
            _ => Self::Moderate,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Caller-supplied preference tier controlling the yield/risk trade-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Moderate,
    High,
    Aggressive,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 4] = [Self::Low, Self::Moderate, Self::High, Self::Aggressive];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTolerance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown risk tolerance '{s}'")))
    }
}

/// Market scenario used for forward-looking APY projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    #[default]
    Base,
    Bull,
    Bear,
    Volatile,
}

impl Scenario {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Bull => "bull",
            Self::Bear => "bear",
            Self::Volatile => "volatile",
        }
    }
}

impl FromStr for Scenario {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "base" => Ok(Self::Base),
            "bull" => Ok(Self::Bull),
            "bear" => Ok(Self::Bear),
            "volatile" => Ok(Self::Volatile),
            _ => Err(DomainError::invalid_input(format!("unknown scenario '{s}'"))),
        }
    }
}

/// Lookback window for yield queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl Timeframe {
    #[must_use]
    pub fn days(&self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }
}

impl FromStr for Timeframe {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            "1y" | "365d" => Ok(Self::Year),
            _ => Err(DomainError::invalid_input(format!("unknown timeframe '{s}'"))),
        }
    }
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace([' ', '_'], "-")
}
