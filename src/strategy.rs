//! Trading strategy and monitoring alert generation
//!
//! Bucketed derivations over the analysis, prediction, and rug-pull outputs.
//! Everything here is advisory output records; no orders are placed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prediction::LaunchPrediction;
use crate::rugpull::RugPullProbability;
use crate::types::{LaunchAnalysis, TokenLaunchData};

/// How (and whether) to enter a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPlan {
    /// Enter at launch price
    AtLaunch,
    /// Wait for the usual post-launch dip
    WaitForDip,
    /// Probe with a small test position only
    SmallTestPosition,
    DoNotEnter,
}

/// Derived trading plan for a launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingStrategy {
    pub entry: EntryPlan,
    /// Portfolio share to commit (0-100)
    pub position_size_percent: f64,
    pub stop_loss_percent: f64,
    pub take_profit_percent: f64,
    /// Hard exit deadline regardless of price action
    pub max_hold_hours: u32,
    pub notes: Vec<String>,
}

/// Alert priority for downstream notification pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Info,
    Warning,
    Urgent,
}

/// Single monitoring alert for a launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringAlert {
    pub priority: AlertPriority,
    /// On-chain condition to watch for
    pub trigger: String,
    pub message: String,
}

/// Derive an entry/exit plan from the combined analysis outputs
pub fn generate_trading_strategy(
    analysis: &LaunchAnalysis,
    prediction: &LaunchPrediction,
    rug: &RugPullProbability,
) -> TradingStrategy {
    let score = analysis.overall_score;
    let rug_probability = rug.probability;

    let (entry, position_size_percent, stop_loss_percent) =
        if score >= 80.0 && rug_probability <= 20.0 {
            (EntryPlan::AtLaunch, 5.0, 15.0)
        } else if score >= 60.0 && rug_probability <= 40.0 {
            (EntryPlan::WaitForDip, 2.0, 20.0)
        } else if score >= 40.0 && rug_probability <= 60.0 {
            (EntryPlan::SmallTestPosition, 1.0, 30.0)
        } else {
            (EntryPlan::DoNotEnter, 0.0, 0.0)
        };

    let take_profit_percent = if entry == EntryPlan::DoNotEnter {
        0.0
    } else {
        prediction.expected_return_percent.max(0.0) / 2.0
    };
    let max_hold_hours = if entry == EntryPlan::DoNotEnter {
        0
    } else {
        prediction.time_to_ath_hours
    };

    let mut notes = vec![format!(
        "Launch scored {:.1} with {:.0}% rug-pull probability",
        score, rug_probability
    )];
    match entry {
        EntryPlan::AtLaunch => {
            notes.push("Fundamentals support an entry at launch price".to_string())
        }
        EntryPlan::WaitForDip => {
            notes.push("Solid launch but wait out the initial volatility".to_string())
        }
        EntryPlan::SmallTestPosition => {
            notes.push("Mixed signals, probe with a test position only".to_string())
        }
        EntryPlan::DoNotEnter => {
            notes.push("Risk profile rules out any position".to_string())
        }
    }

    debug!(?entry, position_size_percent, "Trading strategy derived");

    TradingStrategy {
        entry,
        position_size_percent,
        stop_loss_percent,
        take_profit_percent,
        max_hold_hours,
        notes,
    }
}

/// Build the watch-list of on-chain conditions worth alerting on
pub fn generate_monitoring_alerts(
    launch: &TokenLaunchData,
    analysis: &LaunchAnalysis,
    rug: &RugPullProbability,
) -> Vec<MonitoringAlert> {
    let mut alerts = vec![
        MonitoringAlert {
            priority: AlertPriority::Warning,
            trigger: "liquidity_removal".to_string(),
            message: format!(
                "Alert on any liquidity withdrawal from the {} pool",
                launch.symbol
            ),
        },
        MonitoringAlert {
            priority: AlertPriority::Info,
            trigger: "top_holder_movement".to_string(),
            message: "Alert when a top-10 holder moves more than 1% of supply".to_string(),
        },
    ];

    if let Some(locked_until) = launch
        .liquidity_pool
        .as_ref()
        .and_then(|p| p.locked_until)
    {
        alerts.push(MonitoringAlert {
            priority: AlertPriority::Warning,
            trigger: "lock_expiry".to_string(),
            message: format!(
                "Liquidity lock expires on {}, re-assess before then",
                locked_until.format("%Y-%m-%d")
            ),
        });
    }

    if analysis
        .red_flags
        .iter()
        .any(|f| f.description.contains("mint"))
    {
        alerts.push(MonitoringAlert {
            priority: AlertPriority::Urgent,
            trigger: "mint_event".to_string(),
            message: "Contract can mint, alert on any supply increase".to_string(),
        });
    }

    if rug.probability > 60.0 {
        alerts.push(MonitoringAlert {
            priority: AlertPriority::Urgent,
            trigger: "rug_watch".to_string(),
            message: format!(
                "Rug-pull probability {:.0}%, expected {}",
                rug.probability, rug.timeframe
            ),
        });
    }

    if analysis
        .red_flags
        .iter()
        .any(|f| f.description.contains("Top holders"))
    {
        alerts.push(MonitoringAlert {
            priority: AlertPriority::Warning,
            trigger: "whale_dump".to_string(),
            message: "Concentrated supply, alert on large single-wallet sells".to_string(),
        });
    }

    alerts
}
