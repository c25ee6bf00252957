//! Plan configuration: the immutable input the projection engine runs from.

use serde::{Deserialize, Serialize};

use crate::{common::IncomeCadence, expense::Expense, pot::{Pot, PotKind}};

/// Complete input for one projection run. Treated as a value: the engine
/// never mutates it, and any change regenerates the plan from scratch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanConfiguration {
    pub currency: String,
    pub starting_balance: f64,
    pub income: IncomeSchedule,
    pub expenses: Vec<Expense>,
    pub pots: Vec<Pot>,
    #[serde(default)]
    pub rules: PlanRules,
}

impl Default for PlanConfiguration {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            starting_balance: 0.0,
            income: IncomeSchedule::default(),
            expenses: Vec::new(),
            pots: Vec::new(),
            rules: PlanRules::default(),
        }
    }
}

impl PlanConfiguration {
    /// Returns the first pot carrying the given kind tag, in list order.
    pub fn pot_of_kind(&self, kind: PotKind) -> Option<&Pot> {
        self.pots.iter().find(|pot| pot.kind == kind)
    }
}

/// Income magnitude plus the cadence it is smoothed over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeSchedule {
    pub cadence: IncomeCadence,
    pub amount: f64,
}

impl IncomeSchedule {
    pub fn new(cadence: IncomeCadence, amount: f64) -> Self {
        Self { cadence, amount }
    }

    /// Evenly smoothed per-day income. Weekly and monthly cadences spread
    /// over 7 and 30 days rather than simulating paydays.
    pub fn daily_amount(&self) -> f64 {
        self.amount / self.cadence.days() as f64
    }
}

impl Default for IncomeSchedule {
    fn default() -> Self {
        Self {
            cadence: IncomeCadence::Monthly,
            amount: 0.0,
        }
    }
}

/// User-editable knobs that shape the projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRules {
    /// Category names in application order; expenses due on the same day
    /// are charged in this order, unlisted categories after all listed ones.
    #[serde(default)]
    pub essential_order: Vec<String>,
    #[serde(default)]
    pub thresholds: BalanceThresholds,
    #[serde(default)]
    pub leftover_policy: LeftoverPolicy,
}

impl Default for PlanRules {
    fn default() -> Self {
        Self {
            essential_order: Vec::new(),
            thresholds: BalanceThresholds::default(),
            leftover_policy: LeftoverPolicy::default(),
        }
    }
}

impl PlanRules {
    /// Sort rank of a category under the essential order. Unlisted
    /// categories all share the rank just past the end of the list, so they
    /// keep their relative order behind every listed one.
    pub fn category_rank(&self, category: &str) -> usize {
        self.essential_order
            .iter()
            .position(|entry| entry == category)
            .unwrap_or(self.essential_order.len())
    }
}

/// Balance levels at which a day is flagged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BalanceThresholds {
    pub warning: f64,
    pub danger: f64,
}

impl Default for BalanceThresholds {
    fn default() -> Self {
        Self {
            warning: 100.0,
            danger: 0.0,
        }
    }
}

/// Week-of-month routing table for weekly surplus.
///
/// Weeks up to and including `split_week` send leftover to the pot tagged
/// `early_target`; later weeks send it to `late_target`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeftoverPolicy {
    pub early_target: PotKind,
    pub late_target: PotKind,
    pub split_week: u32,
}

impl Default for LeftoverPolicy {
    fn default() -> Self {
        Self {
            early_target: PotKind::NextMonth,
            late_target: PotKind::Buffer,
            split_week: 2,
        }
    }
}

impl LeftoverPolicy {
    /// Resolves the destination pot kind for a 1-based week index.
    pub fn target_for_week(&self, week: u32) -> PotKind {
        if week <= self.split_week {
            self.early_target
        } else {
            self.late_target
        }
    }
}
