//! Weekly leftover computation and policy routing.

use finhub_domain::{ContributionSource, LeftoverPolicy, Pot, PotContribution};

/// Running totals for the days since the last week boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekTotals {
    pub income: f64,
    pub expenses: f64,
    pub pot_contributions: f64,
}

impl WeekTotals {
    /// Unspent income after expenses and scheduled pot contributions.
    pub fn leftover(&self) -> f64 {
        self.income - self.expenses - self.pot_contributions
    }
}

/// Routes a week's surplus into the policy-selected pot.
pub struct LeftoverAllocator;

impl LeftoverAllocator {
    /// Builds the sweep contribution for a closed week, or `None` when the
    /// leftover is non-positive or no pot of the required kind exists. In
    /// the latter case the surplus is simply not allocated anywhere.
    pub fn allocate(
        totals: WeekTotals,
        week_of_month: u32,
        pots: &[Pot],
        policy: &LeftoverPolicy,
    ) -> Option<PotContribution> {
        let leftover = totals.leftover();
        if leftover <= 0.0 {
            return None;
        }
        let kind = policy.target_for_week(week_of_month);
        let pot = pots.iter().find(|pot| pot.kind == kind)?;
        Some(PotContribution::new(
            pot,
            leftover,
            ContributionSource::LeftoverSweep,
        ))
    }
}
