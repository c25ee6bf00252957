//! The per-week summary record derived from produced plan days.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plan::BalanceThresholds;

/// Ending balances this far above the warning threshold rate as ahead.
pub const AHEAD_MARGIN: f64 = 100.0;

/// Read-only weekly rollup of a month's plan days, recomputed whenever the
/// displayed month changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub label: String,
    /// 1-based position within the aggregator's Monday-start partition.
    pub week_index: u32,
    pub income: f64,
    pub expenses: f64,
    pub pot_contributions: f64,
    /// Income minus expenses minus pot contributions for the week.
    pub leftover: f64,
    /// Name of the pot a positive leftover routes to, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routed_to: Option<String>,
    /// Balance of the week's final day.
    pub ending_balance: f64,
    pub status: WeekStatus,
    /// Fixed action checklist; presentation text, not derived facts.
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Pace classification of a week's ending balance.
pub enum WeekStatus {
    Behind,
    OnTrack,
    Ahead,
}

impl WeekStatus {
    pub fn classify(ending_balance: f64, thresholds: &BalanceThresholds) -> Self {
        if ending_balance < thresholds.danger {
            WeekStatus::Behind
        } else if ending_balance > thresholds.warning + AHEAD_MARGIN {
            WeekStatus::Ahead
        } else {
            WeekStatus::OnTrack
        }
    }
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeekStatus::Behind => "Behind",
            WeekStatus::OnTrack => "On Track",
            WeekStatus::Ahead => "Ahead",
        };
        f.write_str(label)
    }
}
