//! Rug-pull probability estimation
//!
//! Additive indicator model: every matching indicator contributes a fixed
//! weight toward a 0-100 probability. Independent of the overall launch
//! score so that a pretty launch with pullable liquidity still lights up.

use chrono::Utc;
use tracing::debug;

use serde::{Deserialize, Serialize};

use crate::types::{ContractAudit, TokenLaunchData, TokenMetrics};

/// Indicator weights
pub mod indicator_weights {
    pub const UNVERIFIED_CONTRACT: f64 = 30.0;
    pub const UNLOCKED_LIQUIDITY: f64 = 40.0;
    pub const LOCK_EXPIRING_SOON: f64 = 25.0;
    pub const MINT_FUNCTION: f64 = 20.0;
    pub const WHALE_CONCENTRATION: f64 = 15.0;
    pub const EXTREME_TAX: f64 = 20.0;
    pub const FEW_HOLDERS: f64 = 10.0;
}

/// Thresholds for the indicator checks
pub mod indicator_thresholds {
    /// Days of lock remaining below which the lock barely helps
    pub const LOCK_EXPIRY_DAYS: i64 = 30;
    /// Top-holder share treated as exit-ready (%)
    pub const WHALE_PERCENT: f64 = 60.0;
    /// Tax level treated as a soft honeypot (%)
    pub const EXTREME_TAX_PERCENT: f64 = 15.0;
    pub const FEW_HOLDERS: u64 = 100;
}

/// Single indicator that contributed to the probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RugPullIndicator {
    pub description: String,
    pub weight: f64,
}

/// Rug-pull probability assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RugPullProbability {
    /// Estimated probability (0-100)
    pub probability: f64,
    /// Indicators that fired, in check order
    pub indicators: Vec<RugPullIndicator>,
    /// Rough horizon in which a pull is plausible
    pub timeframe: String,
    /// What a holder can do about it
    pub preventative_measures: Vec<String>,
}

/// Estimate how likely the creators are to pull liquidity or dump
pub fn calculate_rug_pull_probability(
    launch: &TokenLaunchData,
    audit: &ContractAudit,
    metrics: &TokenMetrics,
) -> RugPullProbability {
    let mut probability = 0.0;
    let mut indicators = Vec::new();

    fn add(
        probability: &mut f64,
        indicators: &mut Vec<RugPullIndicator>,
        weight: f64,
        description: String,
    ) {
        *probability += weight;
        indicators.push(RugPullIndicator {
            description,
            weight,
        });
    }

    if !audit.is_verified {
        add(
            &mut probability,
            &mut indicators,
            indicator_weights::UNVERIFIED_CONTRACT,
            "Contract is unverified".into(),
        );
    }

    let lock_date = launch
        .liquidity_pool
        .as_ref()
        .and_then(|p| p.locked_until);
    match lock_date {
        None => add(
            &mut probability,
            &mut indicators,
            indicator_weights::UNLOCKED_LIQUIDITY,
            "Liquidity is not locked".into(),
        ),
        Some(locked_until) => {
            // Remaining lock is measured against wall-clock time: an old
            // launch with a nearly-expired lock is just as pullable
            let days_remaining = (locked_until - Utc::now()).num_days();
            if days_remaining < indicator_thresholds::LOCK_EXPIRY_DAYS {
                add(
                    &mut probability,
                    &mut indicators,
                    indicator_weights::LOCK_EXPIRING_SOON,
                    format!("Liquidity lock expires in {} days", days_remaining.max(0)),
                );
            }
        }
    }

    if audit.has_mint_function {
        add(
            &mut probability,
            &mut indicators,
            indicator_weights::MINT_FUNCTION,
            "Supply can be minted".into(),
        );
    }

    if metrics.top_holders_percent > indicator_thresholds::WHALE_PERCENT {
        add(
            &mut probability,
            &mut indicators,
            indicator_weights::WHALE_CONCENTRATION,
            format!(
                "Top holders control {:.1}% of supply",
                metrics.top_holders_percent
            ),
        );
    }

    if audit.buy_tax > indicator_thresholds::EXTREME_TAX_PERCENT
        || audit.sell_tax > indicator_thresholds::EXTREME_TAX_PERCENT
    {
        add(
            &mut probability,
            &mut indicators,
            indicator_weights::EXTREME_TAX,
            format!(
                "Extreme taxes (buy {:.1}%, sell {:.1}%)",
                audit.buy_tax, audit.sell_tax
            ),
        );
    }

    if metrics.holder_count < indicator_thresholds::FEW_HOLDERS {
        add(
            &mut probability,
            &mut indicators,
            indicator_weights::FEW_HOLDERS,
            format!("Only {} holders", metrics.holder_count),
        );
    }

    let probability = probability.clamp(0.0, 100.0);
    let timeframe = timeframe_for(probability).to_string();

    let mut preventative_measures = vec![
        "Only risk what you can afford to lose completely".to_string(),
        "Set sell alerts on creator and top-holder wallets".to_string(),
        "Verify liquidity depth before every entry".to_string(),
        "Test sell a small amount before sizing up".to_string(),
    ];
    if let Some(locked_until) = lock_date {
        preventative_measures.push(format!(
            "Watch the liquidity lock expiry on {}",
            locked_until.format("%Y-%m-%d")
        ));
    }

    debug!(token = %launch.symbol, probability, "Rug-pull probability computed");

    RugPullProbability {
        probability,
        indicators,
        timeframe,
        preventative_measures,
    }
}

fn timeframe_for(probability: f64) -> &'static str {
    if probability > 80.0 {
        "within 24 hours"
    } else if probability > 60.0 {
        "within 7 days"
    } else if probability > 40.0 {
        "within 30 days"
    } else {
        "low immediate risk"
    }
}
