//! Due-date predicate for scheduled expenses.

use chrono::{Datelike, NaiveDate};

use finhub_domain::{Expense, ExpenseFrequency};

use crate::calendar;

/// Days between biweekly occurrences.
const BIWEEKLY_STRIDE: i64 = 14;

/// Decides whether an expense fires on a given date.
///
/// An expense missing its required anchor never fires; degenerate schedules
/// are inert rather than errors.
pub struct ScheduleMatcher;

impl ScheduleMatcher {
    /// Returns `true` when `expense` is due on `date` under a plan started
    /// at `plan_start` (biweekly parity is anchored to the plan start, not
    /// to the expense).
    pub fn is_due(expense: &Expense, date: NaiveDate, plan_start: NaiveDate) -> bool {
        match expense.frequency {
            ExpenseFrequency::Daily => true,
            ExpenseFrequency::Weekly => expense
                .anchor_weekday
                .map(|weekday| date.weekday() == weekday)
                .unwrap_or(false),
            ExpenseFrequency::Biweekly => expense
                .anchor_weekday
                .map(|weekday| {
                    if date.weekday() != weekday {
                        return false;
                    }
                    let anchor = calendar::first_weekday_on_or_after(plan_start, weekday);
                    (date - anchor).num_days() % BIWEEKLY_STRIDE == 0
                })
                .unwrap_or(false),
            // Monthly anchors past the end of a short month skip that month
            // entirely; there is no rollover to the last day. One-time
            // expenses recur to their anchor day each month by design.
            ExpenseFrequency::Monthly | ExpenseFrequency::OneTime => expense
                .anchor_day
                .map(|day| date.day() == day)
                .unwrap_or(false),
        }
    }
}
