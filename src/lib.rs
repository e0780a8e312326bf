//! Launch Sentry Library
//!
//! Heuristic token-launch risk analyzer implementing weighted
//! legitimacy/potential scoring for detecting:
//! - Rug-pull setups (unlocked liquidity, whale-heavy supply)
//! - Hostile contracts (mint, blacklist, pause, punitive taxes)
//! - Under-collateralized launches (thin pools, unvested team bags)
//!
//! All entry points are pure, synchronous functions over caller-supplied
//! records; data fetching and presentation live outside this crate.

pub mod analyzer;
pub mod history;
pub mod prediction;
pub mod rugpull;
pub mod strategy;
pub mod types;

pub use analyzer::LaunchAnalyzer;
pub use history::{compare_to_historical_launches, HistoricalComparison, HistoricalLaunch};
pub use prediction::{
    predict_launch_success, LaunchPrediction, MarketConditions, MarketTrend, PriceRange,
};
pub use rugpull::{calculate_rug_pull_probability, RugPullIndicator, RugPullProbability};
pub use strategy::{
    generate_monitoring_alerts, generate_trading_strategy, AlertPriority, EntryPlan,
    MonitoringAlert, TradingStrategy,
};
pub use types::{
    ContractAudit, FlagWeight, GreenFlag, LaunchAnalysis, LiquidityPool, Recommendation, RedFlag,
    RiskLevel, Severity, TeamAllocation, TokenLaunchData, TokenMetrics, VestingEntry,
};
