//! Command Line Interface for the DeFi yield optimizer.
use anyhow::Result;
use clap::{Parser, Subcommand};
use defi_yield_api::{ApiServer, ServerConfig};
use defi_yield_data::{StaticCatalog, YieldDataProvider, YieldQuery, load_json_catalog};
use defi_yield_domain::enums::{AssetType, RiskTolerance, Timeframe};
use defi_yield_domain::metrics::{compute_impermanent_loss, summarize};
use defi_yield_optimization::calculate_optimal_strategy;
use dotenv::dotenv;
use prettytable::{Table, row};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "defi-yield")]
#[command(about = "DeFi yield comparison and allocation strategy CLI", long_about = None)]
struct Cli {
    /// JSON catalog to use instead of the built-in one
    #[arg(long, global = true, env = "YIELD_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported protocols
    Protocols,
    /// Show current yields
    Yields {
        /// Comma separated protocol ids (default: all)
        #[arg(short, long)]
        protocols: Option<String>,

        /// Asset type filter (stablecoin, ethereum, bitcoin, altcoin, lp-token)
        #[arg(short, long)]
        asset_type: Option<AssetType>,
    },
    /// Summarize historical yields
    History {
        /// Comma separated protocol ids (default: all)
        #[arg(short, long)]
        protocols: Option<String>,

        /// Lookback window (7d, 30d, 90d, 1y)
        #[arg(short, long, default_value = "90d")]
        timeframe: Timeframe,

        /// Asset type filter
        #[arg(short, long)]
        asset_type: Option<AssetType>,
    },
    /// Impermanent loss of a two-token constant-product position
    Il {
        /// Initial amount of token1
        #[arg(long)]
        token1: Decimal,

        /// Initial amount of token2
        #[arg(long)]
        token2: Decimal,

        /// Relative price move of token1 (e.g. -0.5 for a halving)
        #[arg(long, allow_hyphen_values = true)]
        ratio: Decimal,
    },
    /// Suggest an allocation across protocols
    Strategy {
        /// Comma separated protocol ids (default: all)
        #[arg(short, long)]
        protocols: Option<String>,

        /// Capital to allocate in USD
        #[arg(long)]
        amount: Decimal,

        /// Horizon in months
        #[arg(short, long, default_value_t = 12)]
        months: u32,

        /// Risk tolerance (low, moderate, high, aggressive)
        #[arg(short, long, default_value = "moderate")]
        risk: RiskTolerance,

        /// Asset type filter
        #[arg(short, long)]
        asset_type: Option<AssetType>,
    },
    /// Start the HTTP API
    Serve {
        /// Port to listen on (overrides YIELD_API_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Protocols => {
            let catalog = load_catalog(cli.catalog.as_ref()).await?;
            let mut table = Table::new();
            table.set_titles(row!["ID", "Name", "Logo"]);
            for protocol in catalog.protocols().await? {
                table.add_row(row![protocol.id, protocol.name, protocol.logo_url]);
            }
            table.printstd();
        }
        Commands::Yields {
            protocols,
            asset_type,
        } => {
            let catalog = load_catalog(cli.catalog.as_ref()).await?;
            let query = build_query(&catalog, protocols.as_deref())
                .await?
                .with_asset_type(*asset_type);
            let yields = catalog.yields(&query).await?;

            if yields.is_empty() {
                println!("❌ No yields match the given filters.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_titles(row!["Protocol", "Asset", "Type", "APY", "TVL", "Risk"]);
            for y in &yields {
                table.add_row(row![
                    y.protocol_name,
                    y.asset_name,
                    y.asset_type,
                    format!("{:.2}%", y.apy),
                    format_usd(y.tvl),
                    y.risk_level
                ]);
            }
            table.printstd();
        }
        Commands::History {
            protocols,
            timeframe,
            asset_type,
        } => {
            let catalog = load_catalog(cli.catalog.as_ref()).await?;
            let query = build_query(&catalog, protocols.as_deref())
                .await?
                .with_asset_type(*asset_type)
                .with_timeframe(*timeframe);
            let history = catalog.historical_yields(&query).await?;

            println!("📈 Yield history over {}", timeframe.as_str());
            let mut table = Table::new();
            table.set_titles(row![
                "Protocol", "Asset", "Days", "Mean", "Volatility", "Min", "Max", "Latest"
            ]);
            for series in &history {
                let asset = series.latest().map(|p| p.asset_name.as_str()).unwrap_or("-");
                let s = summarize(series)?;
                table.add_row(row![
                    series.protocol_name,
                    asset,
                    s.observations,
                    format!("{:.2}%", s.mean),
                    format!("{:.2}", s.volatility),
                    format!("{:.2}%", s.min),
                    format!("{:.2}%", s.max),
                    format!("{:.2}%", s.latest)
                ]);
            }
            table.printstd();
        }
        Commands::Il {
            token1,
            token2,
            ratio,
        } => {
            let result = compute_impermanent_loss(*token1, *token2, *ratio)?;

            println!("\n📊 Impermanent Loss");
            println!("════════════════════════════════════");
            println!("Price Change:     {:.2}%", result.price_change_percent);
            println!("Initial Price:    {:.6}", result.initial_price);
            println!("New Price:        {:.6}", result.new_price);
            println!(
                "Pool Amounts:     {:.6} / {:.6}",
                result.token1_new_amount, result.token2_new_amount
            );
            println!("Hold Value:       {:.4}", result.hold_value);
            println!("LP Value:         {:.4}", result.lp_value);
            println!("Impermanent Loss: {:.4}", result.impermanent_loss);
            println!("Loss Percent:     {:.2}%", result.impermanent_loss_percent);
            println!("════════════════════════════════════");
        }
        Commands::Strategy {
            protocols,
            amount,
            months,
            risk,
            asset_type,
        } => {
            let catalog = load_catalog(cli.catalog.as_ref()).await?;
            let query = build_query(&catalog, protocols.as_deref())
                .await?
                .with_asset_type(*asset_type);
            let opportunities = catalog.yields(&query).await?;

            println!(
                "🚀 Optimizing {} opportunities for a {} risk profile...",
                opportunities.len(),
                risk
            );
            let strategy = calculate_optimal_strategy(&opportunities, *amount, *months, *risk)?;

            let mut table = Table::new();
            table.set_titles(row!["Protocol", "Asset", "Allocation", "APY"]);
            for a in &strategy.allocations {
                table.add_row(row![
                    a.protocol_name,
                    a.asset_name,
                    format!("{:.1}%", a.percentage),
                    format!("{:.2}%", a.expected_apy)
                ]);
            }
            table.printstd();

            println!("\n📊 Strategy Summary");
            println!("════════════════════════════════════");
            println!("Investment:       ${:.2}", amount);
            println!("Expected Return:  {:.2}%", strategy.expected_return);
            println!("Projected Value:  ${:.2} after {} months", strategy.projected_value, months);
            println!("════════════════════════════════════");
            println!("\n{}", strategy.insights);
        }
        Commands::Serve { port } => {
            let mut config = ServerConfig::from_env()?.with_catalog_path(cli.catalog.clone());
            if let Some(port) = port {
                config = config.with_port(*port);
            }
            println!("📡 Starting yield API on {}:{}...", config.host, config.port);
            ApiServer::from_config(config).await?.run().await?;
        }
    }

    Ok(())
}

async fn load_catalog(path: Option<&PathBuf>) -> Result<StaticCatalog> {
    Ok(match path {
        Some(path) => load_json_catalog(path).await?,
        None => StaticCatalog::builtin(),
    })
}

/// Query over the given protocols, or every catalog protocol when none given.
async fn build_query(catalog: &StaticCatalog, protocols: Option<&str>) -> Result<YieldQuery> {
    Ok(match protocols {
        Some(csv) => YieldQuery::from_csv(csv),
        None => YieldQuery::new(catalog.protocols().await?.into_iter().map(|p| p.id)),
    })
}

fn format_usd(value: Decimal) -> String {
    let billion = Decimal::from(1_000_000_000);
    let million = Decimal::from(1_000_000);
    if value >= billion {
        format!("${:.2}B", value / billion)
    } else if value >= million {
        format!("${:.1}M", value / million)
    } else {
        format!("${:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_strategy_command() {
        let cli = Cli::try_parse_from([
            "defi-yield",
            "strategy",
            "--protocols",
            "aave,curve",
            "--amount",
            "5000",
            "--risk",
            "aggressive",
        ])
        .unwrap();
        match cli.command {
            Commands::Strategy {
                amount, months, risk, ..
            } => {
                assert_eq!(amount, dec!(5000));
                assert_eq!(months, 12);
                assert_eq!(risk, RiskTolerance::Aggressive);
            }
            _ => panic!("expected strategy command"),
        }
    }

    #[test]
    fn test_parse_negative_ratio() {
        let cli = Cli::try_parse_from([
            "defi-yield", "il", "--token1", "1", "--token2", "2000", "--ratio", "-0.5",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Il { ratio, .. } if ratio == dec!(-0.5)));
    }

    #[test]
    fn test_rejects_unknown_tolerance() {
        assert!(
            Cli::try_parse_from(["defi-yield", "strategy", "--amount", "1", "--risk", "yolo"])
                .is_err()
        );
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(532000000)), "$532.0M");
        assert_eq!(format_usd(dec!(1500000000)), "$1.50B");
        assert_eq!(format_usd(dec!(950)), "$950");
    }
}
