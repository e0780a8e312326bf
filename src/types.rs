//! Type definitions for Launch Sentry
//! Input records supplied by the caller and shared analysis output types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk level classification for a token launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Strong fundamentals, no material concerns
    VeryLow,
    /// Minor concerns only
    Low,
    /// Proceed with caution
    Medium,
    /// Likely to lose funds
    High,
    /// Almost certain loss (unlocked liquidity, unverified code, etc.)
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "VERY_LOW",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "✅",
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🔴",
            RiskLevel::Critical => "💀",
        }
    }
}

/// Trading recommendation derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Avoid,
    Scam,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG_BUY",
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Avoid => "AVOID",
            Recommendation::Scam => "SCAM",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong fundamentals across the board",
            Recommendation::Buy => "Solid launch, standard caution applies",
            Recommendation::Hold => "Mixed signals, wait for more data",
            Recommendation::Avoid => "High probability of loss",
            Recommendation::Scam => "Do not trade this token",
        }
    }
}

/// Severity of a detected red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Importance of a positive signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagWeight {
    Low,
    Medium,
    High,
}

/// Negative signal detected during analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlag {
    pub severity: Severity,
    pub description: String,
    /// What the flag means for holders
    pub impact: String,
}

/// Positive signal detected during analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenFlag {
    pub importance: FlagWeight,
    pub description: String,
}

/// Liquidity pool descriptor attached to a launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPool {
    pub address: String,
    /// Initial liquidity in quote-currency terms
    pub initial_liquidity: f64,
    /// Lock expiry; `None` means the liquidity is not locked at all
    pub locked_until: Option<DateTime<Utc>>,
}

/// Single entry of a team vesting schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VestingEntry {
    pub unlock_at: DateTime<Utc>,
    pub amount: f64,
}

/// Team token allocation descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAllocation {
    pub amount: f64,
    /// `None` means the allocation is fully unlocked from day one
    pub vesting_schedule: Option<Vec<VestingEntry>>,
}

/// Static launch metadata supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLaunchData {
    pub token_address: String,
    pub name: String,
    pub symbol: String,
    pub total_supply: f64,
    pub initial_price: f64,
    pub launch_timestamp: DateTime<Utc>,
    pub creator_address: String,
    pub liquidity_pool: Option<LiquidityPool>,
    pub team_allocation: Option<TeamAllocation>,
}

impl TokenLaunchData {
    /// Initial liquidity as a fraction of the fully-priced supply.
    /// Returns `None` when there is no pool or the denominator is degenerate,
    /// in which case liquidity-ratio rules are skipped.
    pub fn liquidity_ratio(&self) -> Option<f64> {
        let pool = self.liquidity_pool.as_ref()?;
        let valuation = self.total_supply * self.initial_price;
        if valuation <= 0.0 {
            return None;
        }
        Some(pool.initial_liquidity / valuation)
    }

    /// Team allocation as a percentage of total supply.
    /// `None` when there is no allocation or the supply is zero.
    pub fn team_percent(&self) -> Option<f64> {
        let team = self.team_allocation.as_ref()?;
        if self.total_supply <= 0.0 {
            return None;
        }
        Some(team.amount / self.total_supply * 100.0)
    }

    /// Lock duration measured from the launch timestamp
    pub fn lock_duration_days(&self) -> Option<i64> {
        let pool = self.liquidity_pool.as_ref()?;
        let locked_until = pool.locked_until?;
        Some((locked_until - self.launch_timestamp).num_days())
    }
}

/// Contract audit flags supplied by an external audit tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractAudit {
    pub is_verified: bool,
    pub has_proxy: bool,
    pub has_mint_function: bool,
    pub has_blacklist: bool,
    pub has_pause: bool,
    pub ownership_renounced: bool,
    pub max_transaction: Option<f64>,
    /// Buy tax percentage (0-100)
    pub buy_tax: f64,
    /// Sell tax percentage (0-100)
    pub sell_tax: f64,
    pub security_score: f64,
    pub vulnerabilities: Vec<String>,
}

/// On-chain trading metrics supplied by an external data fetcher
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenMetrics {
    pub market_cap: f64,
    pub fully_diluted_valuation: f64,
    /// Pool liquidity relative to market cap
    pub liquidity_ratio: f64,
    pub holder_count: u64,
    /// Share of supply held by the top holders (0-100)
    pub top_holders_percent: f64,
    pub price_volatility: f64,
    pub volume_24h: f64,
    pub tx_count_24h: u64,
}

/// Result of a full launch analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchAnalysis {
    /// Weighted blend of legitimacy and potential (0-100)
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    /// How trustworthy the launch looks (0-100)
    pub legitimacy_score: f64,
    /// Upside indicators (0-100)
    pub potential_score: f64,
    pub red_flags: Vec<RedFlag>,
    pub green_flags: Vec<GreenFlag>,
    pub recommendation: Recommendation,
    /// How sure we are about this assessment (0-100)
    pub confidence_level: f64,
}

impl LaunchAnalysis {
    /// Whether any detected red flag is critical severity
    pub fn has_critical_flags(&self) -> bool {
        self.red_flags
            .iter()
            .any(|f| f.severity == Severity::Critical)
    }

    /// Pretty print the analysis result
    pub fn summary(&self) -> String {
        let mut output = format!(
            "\n{} Risk: {} | Score: {:.1} (legitimacy {:.1} / potential {:.1})\n",
            self.risk_level.emoji(),
            self.risk_level.as_str(),
            self.overall_score,
            self.legitimacy_score,
            self.potential_score,
        );
        output.push_str(&format!(
            "   Recommendation: {} ({:.0}% confidence)\n",
            self.recommendation.as_str(),
            self.confidence_level
        ));

        if !self.red_flags.is_empty() {
            output.push_str("   Red flags:\n");
            for flag in &self.red_flags {
                output.push_str(&format!(
                    "     - [{:?}] {}\n",
                    flag.severity, flag.description
                ));
            }
        }
        if !self.green_flags.is_empty() {
            output.push_str("   Green flags:\n");
            for flag in &self.green_flags {
                output.push_str(&format!("     + {}\n", flag.description));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn launch_with_pool(initial_liquidity: f64, lock_days: Option<i64>) -> TokenLaunchData {
        let launch_ts = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        TokenLaunchData {
            token_address: "0xdead".into(),
            name: "Test Token".into(),
            symbol: "TEST".into(),
            total_supply: 1_000_000.0,
            initial_price: 0.01,
            launch_timestamp: launch_ts,
            creator_address: "0xbeef".into(),
            liquidity_pool: Some(LiquidityPool {
                address: "0xpool".into(),
                initial_liquidity,
                locked_until: lock_days.map(|d| launch_ts + chrono::Duration::days(d)),
            }),
            team_allocation: None,
        }
    }

    #[test]
    fn test_liquidity_ratio() {
        let launch = launch_with_pool(2_000.0, None);
        // 2000 / (1M * 0.01) = 0.2
        assert!((launch.liquidity_ratio().unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_liquidity_ratio_zero_valuation() {
        let mut launch = launch_with_pool(2_000.0, None);
        launch.total_supply = 0.0;
        assert!(launch.liquidity_ratio().is_none());
    }

    #[test]
    fn test_lock_duration_days() {
        let launch = launch_with_pool(2_000.0, Some(400));
        assert_eq!(launch.lock_duration_days(), Some(400));

        let unlocked = launch_with_pool(2_000.0, None);
        assert_eq!(unlocked.lock_duration_days(), None);
    }

    #[test]
    fn test_team_percent() {
        let mut launch = launch_with_pool(2_000.0, None);
        launch.team_allocation = Some(TeamAllocation {
            amount: 150_000.0,
            vesting_schedule: None,
        });
        assert!((launch.team_percent().unwrap() - 15.0).abs() < 1e-12);

        launch.total_supply = 0.0;
        assert!(launch.team_percent().is_none());
    }

    #[test]
    fn test_risk_level_serde_spelling() {
        let json = serde_json::to_string(&RiskLevel::VeryLow).unwrap();
        assert_eq!(json, "\"very_low\"");
        let json = serde_json::to_string(&Recommendation::StrongBuy).unwrap();
        assert_eq!(json, "\"strong_buy\"");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
