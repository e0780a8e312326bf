//! Comparison against historical launch outcomes
//!
//! Plain filter/fold pipelines over caller-supplied record lists. "Similar"
//! means an overall score within ten points of the launch under analysis.

use serde::{Deserialize, Serialize};

use crate::types::LaunchAnalysis;

/// Score distance inside which two launches count as similar
pub const SIMILARITY_WINDOW: f64 = 10.0;

/// Outcome record of a past launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalLaunch {
    pub symbol: String,
    /// Overall score the analyzer gave (or would have given) at launch
    pub score: f64,
    /// Peak return reached after launch, in percent
    pub peak_return_percent: f64,
    pub rugged: bool,
}

/// How the analyzed launch stacks up against past launches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalComparison {
    /// Past launches scoring within [`SIMILARITY_WINDOW`] points
    pub similar_launches: Vec<HistoricalLaunch>,
    /// Share of all historical launches scoring strictly below this one (0-100)
    pub percentile: f64,
    /// Mean peak return across the similar set; 0 when the set is empty
    pub average_peak_return: f64,
    /// Fraction of the similar set that rugged (0-1); 0 when the set is empty
    pub rug_rate: f64,
}

/// Rank the analyzed launch against a list of historical outcomes
pub fn compare_to_historical_launches(
    analysis: &LaunchAnalysis,
    historical: &[HistoricalLaunch],
) -> HistoricalComparison {
    let score = analysis.overall_score;

    let similar_launches: Vec<HistoricalLaunch> = historical
        .iter()
        .filter(|h| (h.score - score).abs() <= SIMILARITY_WINDOW)
        .cloned()
        .collect();

    let percentile = if historical.is_empty() {
        0.0
    } else {
        let below = historical.iter().filter(|h| h.score < score).count();
        below as f64 / historical.len() as f64 * 100.0
    };

    let (average_peak_return, rug_rate) = if similar_launches.is_empty() {
        (0.0, 0.0)
    } else {
        let n = similar_launches.len() as f64;
        let total_return: f64 = similar_launches.iter().map(|h| h.peak_return_percent).sum();
        let rugged = similar_launches.iter().filter(|h| h.rugged).count();
        (total_return / n, rugged as f64 / n)
    };

    HistoricalComparison {
        similar_launches,
        percentile,
        average_peak_return,
        rug_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Recommendation, RiskLevel};

    fn analysis_with_score(overall_score: f64) -> LaunchAnalysis {
        LaunchAnalysis {
            overall_score,
            risk_level: RiskLevel::Medium,
            legitimacy_score: overall_score,
            potential_score: overall_score,
            red_flags: vec![],
            green_flags: vec![],
            recommendation: Recommendation::Hold,
            confidence_level: 85.0,
        }
    }

    fn record(symbol: &str, score: f64, peak: f64, rugged: bool) -> HistoricalLaunch {
        HistoricalLaunch {
            symbol: symbol.into(),
            score,
            peak_return_percent: peak,
            rugged,
        }
    }

    #[test]
    fn test_similarity_window() {
        let historical = vec![
            record("AAA", 50.0, 120.0, false),
            record("BBB", 60.0, 80.0, false),
            record("CCC", 71.0, 300.0, false), // outside the window
            record("DDD", 40.0, -90.0, true),
        ];

        let cmp = compare_to_historical_launches(&analysis_with_score(55.0), &historical);

        let symbols: Vec<&str> = cmp
            .similar_launches
            .iter()
            .map(|h| h.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_percentile_counts_strictly_below() {
        let historical = vec![
            record("AAA", 30.0, 0.0, false),
            record("BBB", 55.0, 0.0, false), // tie, not below
            record("CCC", 70.0, 0.0, false),
            record("DDD", 20.0, 0.0, true),
        ];

        let cmp = compare_to_historical_launches(&analysis_with_score(55.0), &historical);
        assert!((cmp.percentile - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregates_over_similar_set() {
        let historical = vec![
            record("AAA", 50.0, 200.0, false),
            record("BBB", 52.0, -100.0, true),
            record("CCC", 90.0, 1000.0, false), // ignored, dissimilar
        ];

        let cmp = compare_to_historical_launches(&analysis_with_score(50.0), &historical);

        assert!((cmp.average_peak_return - 50.0).abs() < 1e-9);
        assert!((cmp.rug_rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_history() {
        let cmp = compare_to_historical_launches(&analysis_with_score(50.0), &[]);
        assert!(cmp.similar_launches.is_empty());
        assert_eq!(cmp.percentile, 0.0);
        assert_eq!(cmp.average_peak_return, 0.0);
        assert_eq!(cmp.rug_rate, 0.0);
    }
}
