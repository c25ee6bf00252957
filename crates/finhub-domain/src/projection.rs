//! The full multi-month projection produced by one engine run.

use serde::{Deserialize, Serialize};

use crate::day::PlanDay;

/// All plan days of a single calendar month, in date order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthLedger {
    pub year: i32,
    pub month: u32,
    pub days: Vec<PlanDay>,
}

impl MonthLedger {
    /// Display key in `YYYY-MM` form, stable for sorting and lookup.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Ordered months covering the whole projection horizon. Plain vectors
/// throughout: output order never depends on map iteration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanProjection {
    pub months: Vec<MonthLedger>,
}

impl PlanProjection {
    /// Iterates every plan day across all months in date order.
    pub fn days(&self) -> impl Iterator<Item = &PlanDay> {
        self.months.iter().flat_map(|month| month.days.iter())
    }

    /// Looks up a single month's ledger.
    pub fn month(&self, year: i32, month: u32) -> Option<&MonthLedger> {
        self.months
            .iter()
            .find(|ledger| ledger.year == year && ledger.month == month)
    }

    pub fn day_count(&self) -> usize {
        self.months.iter().map(|month| month.days.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
