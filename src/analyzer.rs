//! Core launch scoring module
//!
//! Weighted heuristic analysis of a token launch. Starts from a neutral
//! score card (legitimacy 100, potential 50) and applies an ordered list of
//! independent rule checks, each of which records a red or green flag and
//! adjusts one of the two scores by a fixed weight.
//!
//! Rules evaluated:
//! 1. Contract audit - verification, mint/blacklist/pause, ownership, taxes
//! 2. Liquidity - pool depth relative to valuation, lock duration
//! 3. Holder distribution - concentration and holder count
//! 4. Team allocation - size relative to supply, vesting

use tracing::{debug, info};

use crate::types::{
    ContractAudit, FlagWeight, GreenFlag, LaunchAnalysis, Recommendation, RedFlag, RiskLevel,
    Severity, TokenLaunchData, TokenMetrics,
};

// ============================================
// RULE WEIGHTS
// ============================================

/// Legitimacy score adjustments
pub mod legitimacy_weights {
    pub const UNVERIFIED_CONTRACT: f64 = -30.0;
    pub const MINT_FUNCTION: f64 = -25.0;
    pub const BLACKLIST_FUNCTION: f64 = -20.0;
    pub const PAUSE_FUNCTION: f64 = -15.0;
    pub const OWNERSHIP_RENOUNCED: f64 = 10.0;
    pub const HIGH_TAX: f64 = -20.0;
    pub const THIN_LIQUIDITY: f64 = -30.0;
    pub const LONG_LIQUIDITY_LOCK: f64 = 15.0;
    pub const SHORT_LIQUIDITY_LOCK: f64 = -25.0;
    pub const UNLOCKED_LIQUIDITY: f64 = -40.0;
    pub const WHALE_CONCENTRATION: f64 = -20.0;
    pub const LARGE_TEAM_ALLOCATION: f64 = -15.0;
    pub const TEAM_VESTED: f64 = 10.0;
    pub const TEAM_UNVESTED: f64 = -10.0;
}

/// Potential score adjustments
pub mod potential_weights {
    pub const FAIR_TAX: f64 = 5.0;
    pub const DEEP_LIQUIDITY: f64 = 10.0;
    pub const LONG_LIQUIDITY_LOCK: f64 = 10.0;
    pub const WIDE_DISTRIBUTION: f64 = 10.0;
    pub const MANY_HOLDERS: f64 = 15.0;
    pub const FEW_HOLDERS: f64 = -10.0;
}

/// Rule thresholds
pub mod thresholds {
    /// Buy/sell tax above this is punitive (%)
    pub const HIGH_TAX_PERCENT: f64 = 10.0;
    /// Symmetric taxes at or below this earn a green flag (%)
    pub const FAIR_TAX_PERCENT: f64 = 5.0;
    /// Liquidity ratio below this is dangerously thin
    pub const THIN_LIQUIDITY_RATIO: f64 = 0.1;
    /// Liquidity ratio above this is healthy
    pub const DEEP_LIQUIDITY_RATIO: f64 = 0.3;
    pub const LONG_LOCK_DAYS: i64 = 365;
    pub const SHORT_LOCK_DAYS: i64 = 30;
    /// Top-holder share above this is whale-heavy (%)
    pub const WHALE_CONCENTRATION_PERCENT: f64 = 50.0;
    /// Top-holder share below this is well distributed (%)
    pub const WIDE_DISTRIBUTION_PERCENT: f64 = 20.0;
    pub const MANY_HOLDERS: u64 = 1000;
    pub const FEW_HOLDERS: u64 = 50;
    /// Team allocation above this share of supply is a concern (%)
    pub const LARGE_TEAM_PERCENT: f64 = 20.0;
    /// Unvested allocations above this share are flagged (%)
    pub const UNVESTED_TEAM_PERCENT: f64 = 5.0;
}

/// Mutable accumulator threaded through the rule checks
#[derive(Debug)]
struct ScoreCard {
    legitimacy: f64,
    potential: f64,
    red_flags: Vec<RedFlag>,
    green_flags: Vec<GreenFlag>,
}

impl ScoreCard {
    fn new() -> Self {
        Self {
            legitimacy: 100.0,
            potential: 50.0,
            red_flags: Vec::new(),
            green_flags: Vec::new(),
        }
    }

    fn red_flag(
        &mut self,
        severity: Severity,
        description: impl Into<String>,
        impact: impl Into<String>,
    ) {
        self.red_flags.push(RedFlag {
            severity,
            description: description.into(),
            impact: impact.into(),
        });
    }

    fn green_flag(&mut self, importance: FlagWeight, description: impl Into<String>) {
        self.green_flags.push(GreenFlag {
            importance,
            description: description.into(),
        });
    }

    fn has_critical(&self) -> bool {
        self.red_flags
            .iter()
            .any(|f| f.severity == Severity::Critical)
    }

    fn critical_count(&self) -> usize {
        self.red_flags
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .count()
    }
}

/// Launch analyzer - stateless facade over the scoring pipeline
pub struct LaunchAnalyzer;

impl LaunchAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Run the full rule set over a launch and derive the final analysis
    pub fn analyze_launch(
        &self,
        launch: &TokenLaunchData,
        audit: &ContractAudit,
        metrics: &TokenMetrics,
    ) -> LaunchAnalysis {
        info!(token = %launch.symbol, "Analyzing token launch");

        let mut card = ScoreCard::new();

        check_contract(&mut card, audit);
        check_liquidity(&mut card, launch);
        check_holders(&mut card, metrics);
        check_team(&mut card, launch);

        finalize(card, audit)
    }

    /// Whether the analysis allows entering a position at all
    pub fn is_tradeable(&self, analysis: &LaunchAnalysis) -> bool {
        matches!(
            analysis.recommendation,
            Recommendation::StrongBuy | Recommendation::Buy | Recommendation::Hold
        )
    }
}

impl Default for LaunchAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// RULE CHECKS
// ============================================

fn check_contract(card: &mut ScoreCard, audit: &ContractAudit) {
    if audit.is_verified {
        card.green_flag(FlagWeight::High, "Contract source code is verified");
    } else {
        card.legitimacy += legitimacy_weights::UNVERIFIED_CONTRACT;
        card.red_flag(
            Severity::Critical,
            "Contract source code is not verified",
            "Code cannot be audited, anything could be hidden inside",
        );
    }

    if audit.has_mint_function {
        card.legitimacy += legitimacy_weights::MINT_FUNCTION;
        card.red_flag(
            Severity::High,
            "Contract has an active mint function",
            "Supply can be inflated at will, diluting holders",
        );
    }

    if audit.has_blacklist {
        card.legitimacy += legitimacy_weights::BLACKLIST_FUNCTION;
        card.red_flag(
            Severity::High,
            "Contract can blacklist addresses",
            "Holders can be blocked from selling",
        );
    }

    if audit.has_pause {
        card.legitimacy += legitimacy_weights::PAUSE_FUNCTION;
        card.red_flag(
            Severity::Medium,
            "Contract trading can be paused",
            "Trading can be halted during a dump",
        );
    }

    if audit.ownership_renounced {
        card.legitimacy += legitimacy_weights::OWNERSHIP_RENOUNCED;
        card.green_flag(FlagWeight::High, "Contract ownership is renounced");
    }

    if audit.buy_tax > thresholds::HIGH_TAX_PERCENT
        || audit.sell_tax > thresholds::HIGH_TAX_PERCENT
    {
        card.legitimacy += legitimacy_weights::HIGH_TAX;
        card.red_flag(
            Severity::High,
            format!(
                "Excessive trading tax (buy {:.1}%, sell {:.1}%)",
                audit.buy_tax, audit.sell_tax
            ),
            "A large cut of every trade goes to the deployer",
        );
    } else if audit.buy_tax == audit.sell_tax && audit.buy_tax <= thresholds::FAIR_TAX_PERCENT {
        card.potential += potential_weights::FAIR_TAX;
        card.green_flag(
            FlagWeight::Medium,
            format!("Fair symmetric tax of {:.1}%", audit.buy_tax),
        );
    }
}

fn check_liquidity(card: &mut ScoreCard, launch: &TokenLaunchData) {
    // Ratio rules are skipped when the valuation denominator is degenerate
    if let Some(ratio) = launch.liquidity_ratio() {
        if ratio < thresholds::THIN_LIQUIDITY_RATIO {
            card.legitimacy += legitimacy_weights::THIN_LIQUIDITY;
            card.red_flag(
                Severity::Critical,
                format!("Very thin liquidity ({:.1}% of valuation)", ratio * 100.0),
                "Even small sells will crater the price",
            );
        } else if ratio > thresholds::DEEP_LIQUIDITY_RATIO {
            card.potential += potential_weights::DEEP_LIQUIDITY;
            card.green_flag(
                FlagWeight::Medium,
                format!("Deep initial liquidity ({:.1}% of valuation)", ratio * 100.0),
            );
        }
    }

    match launch.lock_duration_days() {
        Some(days) if days > thresholds::LONG_LOCK_DAYS => {
            card.legitimacy += legitimacy_weights::LONG_LIQUIDITY_LOCK;
            card.potential += potential_weights::LONG_LIQUIDITY_LOCK;
            card.green_flag(
                FlagWeight::High,
                format!("Liquidity locked for {} days", days),
            );
        }
        Some(days) if days < thresholds::SHORT_LOCK_DAYS => {
            card.legitimacy += legitimacy_weights::SHORT_LIQUIDITY_LOCK;
            card.red_flag(
                Severity::High,
                format!("Liquidity lock expires in only {} days", days),
                "Liquidity can be pulled shortly after launch",
            );
        }
        Some(_) => {}
        // No pool at all, or a pool with no lock date
        None => {
            card.legitimacy += legitimacy_weights::UNLOCKED_LIQUIDITY;
            card.red_flag(
                Severity::Critical,
                "Liquidity is not locked",
                "Nothing prevents an immediate rug pull",
            );
        }
    }
}

fn check_holders(card: &mut ScoreCard, metrics: &TokenMetrics) {
    if metrics.top_holders_percent > thresholds::WHALE_CONCENTRATION_PERCENT {
        card.legitimacy += legitimacy_weights::WHALE_CONCENTRATION;
        card.red_flag(
            Severity::High,
            format!(
                "Top holders control {:.1}% of supply",
                metrics.top_holders_percent
            ),
            "A handful of wallets can dump on the market",
        );
    } else if metrics.top_holders_percent < thresholds::WIDE_DISTRIBUTION_PERCENT {
        card.potential += potential_weights::WIDE_DISTRIBUTION;
        card.green_flag(
            FlagWeight::Medium,
            format!(
                "Well distributed supply (top holders {:.1}%)",
                metrics.top_holders_percent
            ),
        );
    }

    if metrics.holder_count > thresholds::MANY_HOLDERS {
        card.potential += potential_weights::MANY_HOLDERS;
        card.green_flag(
            FlagWeight::High,
            format!("{} holders already on board", metrics.holder_count),
        );
    } else if metrics.holder_count < thresholds::FEW_HOLDERS {
        card.potential += potential_weights::FEW_HOLDERS;
        card.red_flag(
            Severity::Medium,
            format!("Only {} holders", metrics.holder_count),
            "Little organic interest so far",
        );
    }
}

fn check_team(card: &mut ScoreCard, launch: &TokenLaunchData) {
    // Skipped entirely on zero supply or no allocation data
    let team_percent = match launch.team_percent() {
        Some(p) => p,
        None => return,
    };
    let vested = launch
        .team_allocation
        .as_ref()
        .map(|t| t.vesting_schedule.is_some())
        .unwrap_or(false);

    if team_percent > thresholds::LARGE_TEAM_PERCENT {
        card.legitimacy += legitimacy_weights::LARGE_TEAM_ALLOCATION;
        card.red_flag(
            Severity::High,
            format!("Team holds {:.1}% of supply", team_percent),
            "Team sells alone can tank the price",
        );
    }

    if vested {
        card.legitimacy += legitimacy_weights::TEAM_VESTED;
        card.green_flag(FlagWeight::High, "Team tokens are on a vesting schedule");
    } else if team_percent > thresholds::UNVESTED_TEAM_PERCENT {
        card.legitimacy += legitimacy_weights::TEAM_UNVESTED;
        card.red_flag(
            Severity::Medium,
            format!("Unvested team allocation of {:.1}%", team_percent),
            "Team can sell its full allocation at any time",
        );
    }
}

// ============================================
// FINALIZATION
// ============================================

fn finalize(card: ScoreCard, audit: &ContractAudit) -> LaunchAnalysis {
    let legitimacy_score = card.legitimacy.clamp(0.0, 100.0);
    let potential_score = card.potential.clamp(0.0, 100.0);
    let overall_score = legitimacy_score * 0.6 + potential_score * 0.4;

    let risk_level = derive_risk_level(overall_score, card.critical_count());
    let recommendation = derive_recommendation(overall_score, card.has_critical());
    let confidence_level = if audit.is_verified { 85.0 } else { 50.0 };

    debug!(
        overall = overall_score,
        legitimacy = legitimacy_score,
        potential = potential_score,
        risk = risk_level.as_str(),
        "Launch analysis complete"
    );

    LaunchAnalysis {
        overall_score,
        risk_level,
        legitimacy_score,
        potential_score,
        red_flags: card.red_flags,
        green_flags: card.green_flags,
        recommendation,
        confidence_level,
    }
}

/// Score thresholds, then adjusted upward by critical red flags:
/// one critical flag means at least High, two or more force Critical
fn derive_risk_level(overall: f64, critical_flags: usize) -> RiskLevel {
    let from_score = if overall >= 80.0 {
        RiskLevel::VeryLow
    } else if overall >= 60.0 {
        RiskLevel::Low
    } else if overall >= 40.0 {
        RiskLevel::Medium
    } else if overall >= 20.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    };

    match critical_flags {
        0 => from_score,
        1 => {
            if from_score == RiskLevel::Critical {
                RiskLevel::Critical
            } else {
                RiskLevel::High
            }
        }
        _ => RiskLevel::Critical,
    }
}

fn derive_recommendation(overall: f64, has_critical: bool) -> Recommendation {
    if overall >= 80.0 && !has_critical {
        Recommendation::StrongBuy
    } else if overall >= 60.0 && !has_critical {
        Recommendation::Buy
    } else if has_critical && overall < 40.0 {
        Recommendation::Scam
    } else if overall >= 40.0 {
        Recommendation::Hold
    } else if overall >= 20.0 {
        Recommendation::Avoid
    } else {
        Recommendation::Scam
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LiquidityPool, TeamAllocation, VestingEntry};
    use chrono::{Duration, TimeZone, Utc};

    fn base_launch() -> TokenLaunchData {
        let launch_ts = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        TokenLaunchData {
            token_address: "0x1111".into(),
            name: "Base".into(),
            symbol: "BASE".into(),
            total_supply: 1_000_000.0,
            initial_price: 0.01,
            launch_timestamp: launch_ts,
            creator_address: "0x2222".into(),
            liquidity_pool: Some(LiquidityPool {
                address: "0xpool".into(),
                initial_liquidity: 2_000.0, // ratio 0.2, neutral
                locked_until: Some(launch_ts + Duration::days(180)),
            }),
            team_allocation: None,
        }
    }

    fn neutral_metrics() -> TokenMetrics {
        TokenMetrics {
            top_holders_percent: 35.0,
            holder_count: 300,
            ..Default::default()
        }
    }

    fn clean_audit() -> ContractAudit {
        ContractAudit {
            is_verified: true,
            buy_tax: 3.0,
            sell_tax: 4.0, // asymmetric, no fair-tax bonus
            ..Default::default()
        }
    }

    #[test]
    fn test_neutral_launch_keeps_base_scores() {
        let analysis = LaunchAnalyzer::new().analyze_launch(
            &base_launch(),
            &clean_audit(),
            &neutral_metrics(),
        );

        assert_eq!(analysis.legitimacy_score, 100.0);
        assert_eq!(analysis.potential_score, 50.0);
        assert!((analysis.overall_score - 80.0).abs() < 1e-9);
        assert_eq!(analysis.risk_level, RiskLevel::VeryLow);
        assert_eq!(analysis.recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_unverified_mint_unlocked_is_scam() {
        let mut launch = base_launch();
        launch.liquidity_pool = None;
        let audit = ContractAudit {
            is_verified: false,
            has_mint_function: true,
            buy_tax: 5.0,
            sell_tax: 5.0,
            ..Default::default()
        };

        let analysis = LaunchAnalyzer::new().analyze_launch(&launch, &audit, &neutral_metrics());

        // 100 - 30 (unverified) - 25 (mint) - 40 (no lock) = 5
        assert!((analysis.legitimacy_score - 5.0).abs() < 1e-9);
        assert_eq!(analysis.risk_level, RiskLevel::Critical);
        assert_eq!(analysis.recommendation, Recommendation::Scam);
        assert_eq!(analysis.confidence_level, 50.0);
    }

    #[test]
    fn test_strong_launch_is_strong_buy() {
        let mut launch = base_launch();
        let launch_ts = launch.launch_timestamp;
        launch.liquidity_pool = Some(LiquidityPool {
            address: "0xpool".into(),
            initial_liquidity: 4_000.0, // ratio 0.4, deep
            locked_until: Some(launch_ts + Duration::days(400)),
        });
        let audit = ContractAudit {
            is_verified: true,
            ownership_renounced: true,
            buy_tax: 2.0,
            sell_tax: 2.0,
            ..Default::default()
        };
        let metrics = TokenMetrics {
            top_holders_percent: 15.0,
            holder_count: 2000,
            ..Default::default()
        };

        let analysis = LaunchAnalyzer::new().analyze_launch(&launch, &audit, &metrics);

        assert_eq!(analysis.legitimacy_score, 100.0); // boosted then clamped
        assert_eq!(analysis.potential_score, 100.0); // 50+5+10+10+10+15
        assert_eq!(analysis.risk_level, RiskLevel::VeryLow);
        assert_eq!(analysis.recommendation, Recommendation::StrongBuy);
        assert!(analysis.red_flags.is_empty());
        assert_eq!(analysis.confidence_level, 85.0);
    }

    #[test]
    fn test_short_lock_penalized() {
        let mut launch = base_launch();
        let launch_ts = launch.launch_timestamp;
        launch.liquidity_pool = Some(LiquidityPool {
            address: "0xpool".into(),
            initial_liquidity: 2_000.0,
            locked_until: Some(launch_ts + Duration::days(10)),
        });

        let analysis =
            LaunchAnalyzer::new().analyze_launch(&launch, &clean_audit(), &neutral_metrics());

        assert!((analysis.legitimacy_score - 75.0).abs() < 1e-9);
        assert!(analysis
            .red_flags
            .iter()
            .any(|f| f.description.contains("expires")));
    }

    #[test]
    fn test_team_rules() {
        // Large unvested allocation: -15 (size) -10 (unvested)
        let mut launch = base_launch();
        launch.team_allocation = Some(TeamAllocation {
            amount: 250_000.0, // 25%
            vesting_schedule: None,
        });
        let analysis =
            LaunchAnalyzer::new().analyze_launch(&launch, &clean_audit(), &neutral_metrics());
        assert!((analysis.legitimacy_score - 75.0).abs() < 1e-9);

        // Same allocation but vested: -15 (size) +10 (vesting)
        launch.team_allocation = Some(TeamAllocation {
            amount: 250_000.0,
            vesting_schedule: Some(vec![VestingEntry {
                unlock_at: launch.launch_timestamp + Duration::days(90),
                amount: 250_000.0,
            }]),
        });
        let analysis =
            LaunchAnalyzer::new().analyze_launch(&launch, &clean_audit(), &neutral_metrics());
        assert!((analysis.legitimacy_score - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_supply_skips_ratio_and_team_rules() {
        let mut launch = base_launch();
        launch.total_supply = 0.0;
        launch.team_allocation = Some(TeamAllocation {
            amount: 250_000.0,
            vesting_schedule: None,
        });

        let analysis =
            LaunchAnalyzer::new().analyze_launch(&launch, &clean_audit(), &neutral_metrics());

        // Lock rule still applies (180 days, neutral); ratio and team rules skip
        assert_eq!(analysis.legitimacy_score, 100.0);
    }

    #[test]
    fn test_scores_always_clamped() {
        let launch = TokenLaunchData {
            liquidity_pool: None,
            ..base_launch()
        };
        let audit = ContractAudit {
            is_verified: false,
            has_mint_function: true,
            has_blacklist: true,
            has_pause: true,
            buy_tax: 25.0,
            sell_tax: 25.0,
            ..Default::default()
        };
        let metrics = TokenMetrics {
            top_holders_percent: 90.0,
            holder_count: 5,
            ..Default::default()
        };

        let analysis = LaunchAnalyzer::new().analyze_launch(&launch, &audit, &metrics);

        assert_eq!(analysis.legitimacy_score, 0.0);
        assert!(analysis.potential_score >= 0.0 && analysis.potential_score <= 100.0);
        assert_eq!(analysis.risk_level, RiskLevel::Critical);
        assert_eq!(analysis.recommendation, Recommendation::Scam);
    }

    #[test]
    fn test_overall_is_weighted_blend() {
        let analysis = LaunchAnalyzer::new().analyze_launch(
            &base_launch(),
            &clean_audit(),
            &neutral_metrics(),
        );
        let expected = analysis.legitimacy_score * 0.6 + analysis.potential_score * 0.4;
        assert!((analysis.overall_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(derive_risk_level(85.0, 0), RiskLevel::VeryLow);
        assert_eq!(derive_risk_level(80.0, 0), RiskLevel::VeryLow);
        assert_eq!(derive_risk_level(79.9, 0), RiskLevel::Low);
        assert_eq!(derive_risk_level(60.0, 0), RiskLevel::Low);
        assert_eq!(derive_risk_level(59.9, 0), RiskLevel::Medium);
        assert_eq!(derive_risk_level(40.0, 0), RiskLevel::Medium);
        assert_eq!(derive_risk_level(20.0, 0), RiskLevel::High);
        assert_eq!(derive_risk_level(19.9, 0), RiskLevel::Critical);
    }

    #[test]
    fn test_critical_flags_elevate_risk_level() {
        assert_eq!(derive_risk_level(85.0, 1), RiskLevel::High);
        assert_eq!(derive_risk_level(45.0, 2), RiskLevel::Critical);
        assert_eq!(derive_risk_level(10.0, 1), RiskLevel::Critical);
    }

    #[test]
    fn test_no_buy_recommendation_with_critical_flags() {
        assert_ne!(derive_recommendation(90.0, true), Recommendation::StrongBuy);
        assert_ne!(derive_recommendation(70.0, true), Recommendation::Buy);
        assert_eq!(derive_recommendation(90.0, false), Recommendation::StrongBuy);
        assert_eq!(derive_recommendation(25.0, true), Recommendation::Scam);
        assert_eq!(derive_recommendation(25.0, false), Recommendation::Avoid);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = LaunchAnalyzer::new();
        let launch = base_launch();
        let audit = clean_audit();
        let metrics = neutral_metrics();

        let first = analyzer.analyze_launch(&launch, &audit, &metrics);
        let second = analyzer.analyze_launch(&launch, &audit, &metrics);

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
