//! The per-day projection record and its status classification.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    expense::ExpenseCharge,
    plan::BalanceThresholds,
    pot::PotContribution,
};

/// One calendar day of the projection: everything that moved, and where the
/// balance landed after all of the day's activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDay {
    pub date: NaiveDate,
    pub income: f64,
    pub expenses: Vec<ExpenseCharge>,
    pub pot_contributions: Vec<PotContribution>,
    pub balance_after: f64,
    /// 1-based Monday-anchored week number within this calendar month.
    pub week_of_month: u32,
    pub status: DayStatus,
    pub recommendations: Vec<String>,
}

impl PlanDay {
    /// Sum of every expense charged on the day.
    pub fn expense_total(&self) -> f64 {
        self.expenses.iter().map(|charge| charge.amount).sum()
    }

    /// Sum of every pot contribution recorded on the day, sweeps included.
    pub fn pot_total(&self) -> f64 {
        self.pot_contributions.iter().map(|c| c.amount).sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Health classification of a single day's closing balance.
pub enum DayStatus {
    Good,
    Warning,
    Danger,
}

impl DayStatus {
    /// Classifies a balance with fixed precedence: danger wins over
    /// warning, warning over good.
    pub fn classify(balance: f64, thresholds: &BalanceThresholds) -> Self {
        if balance < thresholds.danger {
            DayStatus::Danger
        } else if balance < thresholds.warning {
            DayStatus::Warning
        } else {
            DayStatus::Good
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::Good => "Good",
            DayStatus::Warning => "Warning",
            DayStatus::Danger => "Danger",
        };
        f.write_str(label)
    }
}
