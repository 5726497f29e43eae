//! Built-in catalog used when no external catalog is configured.

use crate::history::HistorySeed;
use defi_yield_domain::entities::{ProjectedReturn, Projections, Protocol, YieldOpportunity};
use defi_yield_domain::enums::{AssetType, RiskLevel, Scenario};
use rust_decimal::Decimal;

/// Decimal from a literal with `scale` fractional digits: `d(42, 1)` is 4.2.
const fn d(num: i64, scale: u32) -> Decimal {
    Decimal::from_parts(num as u32, (num >> 32) as u32, 0, false, scale)
}

#[must_use]
pub fn protocols() -> Vec<Protocol> {
    [
        ("aave", "Aave", "aave-aave"),
        ("compound", "Compound", "compound-comp"),
        ("uniswap", "Uniswap", "uniswap-uni"),
        ("curve", "Curve", "curve-dao-token-crv"),
        ("yearn", "Yearn Finance", "yearn-finance-yfi"),
        ("sushiswap", "SushiSwap", "sushiswap-sushi"),
        ("balancer", "Balancer", "balancer-bal"),
        ("convex", "Convex Finance", "convex-finance-cvx"),
    ]
    .into_iter()
    .map(|(id, name, logo)| {
        Protocol::new(id, name, format!("https://cryptologos.cc/logos/{logo}-logo.png"))
    })
    .collect()
}

#[must_use]
pub fn yields() -> Vec<YieldOpportunity> {
    use AssetType::*;
    use RiskLevel::*;

    let rows: [(&str, &str, &str, AssetType, Decimal, i64, RiskLevel); 25] = [
        ("aave", "Aave", "USDC", Stablecoin, d(42, 1), 532_000_000, Low),
        ("compound", "Compound", "USDC", Stablecoin, d(39, 1), 487_000_000, Low),
        ("aave", "Aave", "DAI", Stablecoin, d(41, 1), 498_000_000, Low),
        ("compound", "Compound", "DAI", Stablecoin, d(38, 1), 423_000_000, Low),
        ("curve", "Curve", "3pool", Stablecoin, d(53, 1), 732_000_000, Low),
        ("yearn", "Yearn Finance", "USDC Vault", Stablecoin, d(72, 1), 356_000_000, Moderate),
        ("convex", "Convex Finance", "3pool", Stablecoin, d(84, 1), 412_000_000, Moderate),
        ("aave", "Aave", "ETH", Ethereum, d(21, 1), 843_000_000, Moderate),
        ("compound", "Compound", "ETH", Ethereum, d(19, 1), 678_000_000, Moderate),
        ("yearn", "Yearn Finance", "ETH Vault", Ethereum, d(57, 1), 289_000_000, High),
        ("curve", "Curve", "stETH/ETH", Ethereum, d(38, 1), 432_000_000, Moderate),
        ("aave", "Aave", "WBTC", Bitcoin, d(18, 1), 321_000_000, Moderate),
        ("compound", "Compound", "WBTC", Bitcoin, d(16, 1), 287_000_000, Moderate),
        ("yearn", "Yearn Finance", "WBTC Vault", Bitcoin, d(49, 1), 198_000_000, High),
        ("curve", "Curve", "renBTC/WBTC", Bitcoin, d(32, 1), 267_000_000, Moderate),
        ("aave", "Aave", "AAVE", Altcoin, d(64, 1), 156_000_000, High),
        ("aave", "Aave", "LINK", Altcoin, d(37, 1), 134_000_000, High),
        ("compound", "Compound", "COMP", Altcoin, d(78, 1), 98_000_000, High),
        ("yearn", "Yearn Finance", "YFI Vault", Altcoin, d(93, 1), 76_000_000, VeryHigh),
        ("uniswap", "Uniswap", "ETH/USDC", LpToken, d(152, 1), 245_000_000, High),
        ("uniswap", "Uniswap", "ETH/WBTC", LpToken, d(127, 1), 187_000_000, High),
        ("sushiswap", "SushiSwap", "ETH/USDT", LpToken, d(178, 1), 156_000_000, High),
        ("sushiswap", "SushiSwap", "WBTC/ETH", LpToken, d(143, 1), 143_000_000, High),
        ("balancer", "Balancer", "BAL/ETH", LpToken, d(215, 1), 87_000_000, VeryHigh),
        ("balancer", "Balancer", "80/20 USDC/WETH", LpToken, d(112, 1), 112_000_000, Moderate),
    ];

    rows.into_iter()
        .map(|(id, name, asset, asset_type, apy, tvl, risk)| {
            YieldOpportunity::new(id, name, asset, asset_type, apy, Decimal::from(tvl), risk)
        })
        .collect()
}

#[must_use]
pub fn history_seeds() -> Vec<HistorySeed> {
    [
        ("aave", "Aave", "USDC", AssetType::Stablecoin, 4.2, 0.3),
        ("compound", "Compound", "USDC", AssetType::Stablecoin, 3.9, 0.25),
        ("curve", "Curve", "3pool", AssetType::Stablecoin, 5.3, 0.4),
        ("yearn", "Yearn Finance", "USDC Vault", AssetType::Stablecoin, 7.2, 0.6),
        ("uniswap", "Uniswap", "ETH/USDC", AssetType::LpToken, 15.2, 1.8),
        ("sushiswap", "SushiSwap", "ETH/USDT", AssetType::LpToken, 17.8, 2.1),
        ("balancer", "Balancer", "BAL/ETH", AssetType::LpToken, 21.5, 3.2),
        ("convex", "Convex Finance", "3pool", AssetType::Stablecoin, 8.4, 0.7),
    ]
    .into_iter()
    .map(|(id, name, asset, asset_type, base_apy, volatility)| HistorySeed {
        protocol_id: id.to_string(),
        protocol_name: name.to_string(),
        asset_name: asset.to_string(),
        asset_type,
        base_apy,
        volatility,
    })
    .collect()
}

#[must_use]
pub fn projected_returns() -> Vec<ProjectedReturn> {
    let rows: [(&str, &str, &str, i64, [i64; 4]); 4] = [
        ("aave", "Aave", "USDC", 42, [43, 44, 45, 47]),
        ("compound", "Compound", "USDC", 39, [40, 41, 42, 44]),
        ("curve", "Curve", "3pool", 53, [54, 55, 56, 58]),
        ("yearn", "Yearn Finance", "USDC Vault", 72, [73, 74, 75, 77]),
    ];
    let bull: [[i64; 4]; 4] = [
        [45, 50, 55, 60],
        [42, 47, 52, 57],
        [58, 65, 72, 80],
        [78, 85, 92, 100],
    ];
    let bear: [[i64; 4]; 4] = [
        [40, 38, 35, 32],
        [37, 35, 32, 29],
        [50, 47, 43, 40],
        [68, 64, 60, 55],
    ];
    let volatile: [[i64; 4]; 4] = [
        [38, 45, 39, 47],
        [35, 42, 36, 43],
        [48, 58, 50, 60],
        [65, 78, 68, 80],
    ];

    let mut out = Vec::with_capacity(rows.len() * 4);
    for (scenario, table) in [
        (Scenario::Base, rows.map(|r| r.4)),
        (Scenario::Bull, bull),
        (Scenario::Bear, bear),
        (Scenario::Volatile, volatile),
    ] {
        for ((id, name, asset, current, _), path) in rows.iter().zip(table) {
            out.push(ProjectedReturn {
                protocol_id: (*id).to_string(),
                protocol_name: (*name).to_string(),
                asset_name: (*asset).to_string(),
                asset_type: AssetType::Stablecoin,
                scenario,
                current_apy: d(*current, 1),
                projections: Projections {
                    month1: d(path[0], 1),
                    month3: d(path[1], 1),
                    month6: d(path[2], 1),
                    month12: d(path[3], 1),
                },
            });
        }
    }
    out
}
