//! Aggregate counts for the risk dashboard

use crate::verdict::VerdictClass;
use crate::CheckResult;

/// Minimum bar height (percent) so empty categories stay visible
pub const MIN_BAR_HEIGHT: u32 = 4;

/// Verdict distribution over the session history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskStats {
    pub total: usize,
    pub safe: usize,
    pub suspect: usize,
    pub fraud: usize,
}

impl RiskStats {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CheckResult>) -> Self {
        results
            .into_iter()
            .fold(RiskStats::default(), |mut stats, result| {
                stats.total += 1;
                match result.verdict_class() {
                    VerdictClass::Safe => stats.safe += 1,
                    VerdictClass::Suspect => stats.suspect += 1,
                    VerdictClass::Fraud => stats.fraud += 1,
                    VerdictClass::Indeterminate => {}
                }
                stats
            })
    }

    pub fn safe_pct(&self) -> u32 {
        self.pct(self.safe)
    }

    pub fn suspect_pct(&self) -> u32 {
        self.pct(self.suspect)
    }

    pub fn fraud_pct(&self) -> u32 {
        self.pct(self.fraud)
    }

    /// Suspect and fraud together, shown as one card
    pub fn risky(&self) -> usize {
        self.suspect + self.fraud
    }

    pub fn risky_pct(&self) -> u32 {
        self.suspect_pct() + self.fraud_pct()
    }

    /// Bar height in percent for a category percentage
    pub fn bar_height(pct: u32) -> u32 {
        if pct == 0 {
            MIN_BAR_HEIGHT
        } else {
            pct
        }
    }

    fn pct(&self, count: usize) -> u32 {
        let total = self.total.max(1) as f64;
        (count as f64 / total * 100.0).round() as u32
    }
}
