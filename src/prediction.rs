//! Launch success prediction
//!
//! Projects the analysis score into a success probability, an expected
//! return bucket, and a rough price range / time-to-ATH estimate, adjusted
//! for market conditions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{LaunchAnalysis, TokenLaunchData, TokenMetrics};

/// Broad market direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketTrend {
    Bullish,
    Neutral,
    Bearish,
}

/// Market context supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConditions {
    pub trend: MarketTrend,
    /// Sector sentiment index (0-100)
    pub sector_sentiment: f64,
}

/// Projected price band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

/// Launch success prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchPrediction {
    /// Probability of a successful launch (0-100)
    pub success_probability: f64,
    /// Bucketed expected return; negative means expected loss
    pub expected_return_percent: f64,
    pub price_range: PriceRange,
    /// Estimated hours until all-time-high
    pub time_to_ath_hours: u32,
    /// Adjustments that moved the probability
    pub key_factors: Vec<String>,
}

/// Predict how a launch will perform given the analysis and market context
pub fn predict_launch_success(
    launch: &TokenLaunchData,
    analysis: &LaunchAnalysis,
    metrics: &TokenMetrics,
    market: &MarketConditions,
) -> LaunchPrediction {
    let mut probability = analysis.overall_score * 0.5;
    let mut key_factors = Vec::new();

    match market.trend {
        MarketTrend::Bullish => {
            probability += 15.0;
            key_factors.push("Bullish market trend (+15)".to_string());
        }
        MarketTrend::Bearish => {
            probability -= 15.0;
            key_factors.push("Bearish market trend (-15)".to_string());
        }
        MarketTrend::Neutral => {}
    }

    if market.sector_sentiment > 70.0 {
        probability += 10.0;
        key_factors.push("Strong sector sentiment (+10)".to_string());
    } else if market.sector_sentiment < 30.0 {
        probability -= 10.0;
        key_factors.push("Weak sector sentiment (-10)".to_string());
    }

    if metrics.holder_count > 500 {
        probability += 10.0;
        key_factors.push(format!("{} holders (+10)", metrics.holder_count));
    }

    if metrics.volume_24h > 0.5 * metrics.market_cap {
        probability += 10.0;
        key_factors.push("High volume relative to market cap (+10)".to_string());
    }

    if metrics.liquidity_ratio > 0.3 {
        probability += 10.0;
        key_factors.push("Healthy liquidity ratio (+10)".to_string());
    }

    let probability = probability.clamp(0.0, 100.0);
    let expected_return_percent = expected_return_for(probability);
    let price_range = price_range_for(launch.initial_price, expected_return_percent);
    let time_to_ath_hours = time_to_ath_for(probability);

    debug!(
        token = %launch.symbol,
        probability,
        expected_return_percent,
        "Launch prediction computed"
    );

    LaunchPrediction {
        success_probability: probability,
        expected_return_percent,
        price_range,
        time_to_ath_hours,
        key_factors,
    }
}

fn expected_return_for(probability: f64) -> f64 {
    if probability > 80.0 {
        500.0
    } else if probability > 60.0 {
        200.0
    } else if probability > 40.0 {
        50.0
    } else {
        -50.0
    }
}

/// One end assumes the full bucketed return, the other half of it.
/// Ends are ordered and floored at zero so a projected loss never
/// produces a negative or inverted band.
fn price_range_for(current_price: f64, expected_return_percent: f64) -> PriceRange {
    let full = current_price * (1.0 + expected_return_percent / 100.0);
    let half = current_price * (1.0 + expected_return_percent / 200.0);
    PriceRange {
        low: full.min(half).max(0.0),
        high: full.max(half).max(0.0),
    }
}

fn time_to_ath_for(probability: f64) -> u32 {
    if probability > 80.0 {
        24
    } else if probability > 60.0 {
        48
    } else if probability > 40.0 {
        72
    } else {
        168
    }
}
