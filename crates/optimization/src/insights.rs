//! Narrative summaries of a generated strategy.
//!
//! Text generation is kept apart from the allocation math so the wording
//! can be replaced or localized by providing another [`InsightWriter`].

use defi_yield_domain::enums::RiskTolerance;
use defi_yield_domain::value_objects::Allocation;

/// Narrative tone of a strategy summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeTemplate {
    Conservative,
    Balanced,
    Growth,
    Aggressive,
    Neutral,
}

impl NarrativeTemplate {
    /// Maps a tolerance label to its template; unknown labels get the
    /// neutral one.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        label
            .parse::<RiskTolerance>()
            .map(Self::from)
            .unwrap_or(Self::Neutral)
    }
}

impl From<RiskTolerance> for NarrativeTemplate {
    fn from(tolerance: RiskTolerance) -> Self {
        match tolerance {
            RiskTolerance::Low => Self::Conservative,
            RiskTolerance::Moderate => Self::Balanced,
            RiskTolerance::High => Self::Growth,
            RiskTolerance::Aggressive => Self::Aggressive,
        }
    }
}

/// What a narrative is allowed to talk about.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub top: &'a Allocation,
    pub allocation_count: usize,
    pub horizon_months: u32,
}

pub trait InsightWriter {
    /// Summary for a non-empty allocation set.
    fn write(&self, template: NarrativeTemplate, context: &InsightContext<'_>) -> String;

    /// Summary when nothing could be allocated.
    fn write_empty(&self, horizon_months: u32) -> String;
}

/// Default English narratives.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInsights;

impl InsightWriter for EnglishInsights {
    fn write(&self, template: NarrativeTemplate, ctx: &InsightContext<'_>) -> String {
        let pct = ctx.top.percentage.round_dp(1);
        let holding = format!("{}'s {}", ctx.top.protocol_name, ctx.top.asset_name);
        let count = ctx.allocation_count;
        let months = ctx.horizon_months;

        match template {
            NarrativeTemplate::Conservative => format!(
                "This conservative strategy prioritizes capital preservation by diversifying across {count} assets. \
                 The largest allocation ({pct:.1}%) is to {holding}, which offers a balance of stability and yield. \
                 This strategy aims to minimize exposure to protocol risk and market volatility over your \
                 {months}-month investment horizon."
            ),
            NarrativeTemplate::Balanced => format!(
                "This balanced strategy allocates capital across {count} assets to provide a mix of yield and stability. \
                 With {pct:.1}% allocated to {holding}, the portfolio aims to capture yield opportunities while \
                 managing overall risk. This approach is well-suited for your {months}-month timeframe, offering \
                 potential for growth while maintaining reasonable security."
            ),
            NarrativeTemplate::Growth => format!(
                "This growth-oriented strategy focuses on higher-yielding opportunities, with a significant {pct:.1}% \
                 allocation to {holding}. By concentrating investments across {count} carefully selected assets, \
                 this approach aims to maximize returns over your {months}-month horizon. While this strategy \
                 entails higher risk, it's structured to capture yield efficiently in the current market conditions."
            ),
            NarrativeTemplate::Aggressive => format!(
                "This aggressive yield-maximizing strategy concentrates {pct:.1}% of capital in {holding}, which \
                 currently offers the most attractive risk-adjusted returns. With allocations to just {count} \
                 high-performing assets, this approach prioritizes capturing the highest possible yields over your \
                 {months}-month timeframe. Note that this concentrated strategy carries higher risk of impermanent \
                 loss and protocol-specific risks."
            ),
            NarrativeTemplate::Neutral => format!(
                "This strategy allocates across {count} assets with {pct:.1}% in {holding}. It aims to balance risk \
                 and reward over your {months}-month investment horizon."
            ),
        }
    }

    fn write_empty(&self, horizon_months: u32) -> String {
        format!(
            "No eligible yield opportunities matched the selected protocols, so no capital was allocated over \
             your {horizon_months}-month horizon."
        )
    }
}

/// Renders the summary for a set of allocations.
#[must_use]
pub fn generate_insights<W: InsightWriter + ?Sized>(
    writer: &W,
    template: NarrativeTemplate,
    allocations: &[Allocation],
    horizon_months: u32,
) -> String {
    match Allocation::top(allocations) {
        Some(top) => writer.write(
            template,
            &InsightContext {
                top,
                allocation_count: allocations.len(),
                horizon_months,
            },
        ),
        None => writer.write_empty(horizon_months),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn alloc(protocol: &str, asset: &str, pct: Decimal) -> Allocation {
        Allocation {
            protocol_id: protocol.to_lowercase(),
            protocol_name: protocol.to_string(),
            asset_name: asset.to_string(),
            percentage: pct,
            expected_apy: dec!(5),
        }
    }

    #[test]
    fn test_template_selection() {
        assert_eq!(NarrativeTemplate::for_label("low"), NarrativeTemplate::Conservative);
        assert_eq!(NarrativeTemplate::for_label("Moderate"), NarrativeTemplate::Balanced);
        assert_eq!(NarrativeTemplate::for_label("high"), NarrativeTemplate::Growth);
        assert_eq!(NarrativeTemplate::for_label("aggressive"), NarrativeTemplate::Aggressive);
        assert_eq!(NarrativeTemplate::for_label("yolo"), NarrativeTemplate::Neutral);
    }

    #[test]
    fn test_mentions_top_allocation_first_on_tie() {
        let allocations = vec![
            alloc("Curve", "3pool", dec!(40)),
            alloc("Aave", "USDC", dec!(40)),
            alloc("Yearn", "USDC Vault", dec!(20)),
        ];
        let text = generate_insights(&EnglishInsights, NarrativeTemplate::Conservative, &allocations, 12);
        assert!(text.starts_with("This conservative strategy"));
        assert!(text.contains("Curve's 3pool"));
        assert!(text.contains("(40.0%)"));
        assert!(text.contains("12-month"));
        assert!(text.contains("across 3 assets"));
    }

    #[test]
    fn test_each_template_is_distinct() {
        let allocations = vec![alloc("Uniswap", "ETH/USDC", dec!(88.527))];
        let texts: Vec<String> = [
            NarrativeTemplate::Conservative,
            NarrativeTemplate::Balanced,
            NarrativeTemplate::Growth,
            NarrativeTemplate::Aggressive,
            NarrativeTemplate::Neutral,
        ]
        .into_iter()
        .map(|t| generate_insights(&EnglishInsights, t, &allocations, 6))
        .collect();
        for (i, a) in texts.iter().enumerate() {
            assert!(a.contains("88.5%"));
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_allocations() {
        let text = generate_insights(&EnglishInsights, NarrativeTemplate::Growth, &[], 24);
        assert!(text.contains("No eligible yield opportunities"));
        assert!(text.contains("24-month"));
    }
}
