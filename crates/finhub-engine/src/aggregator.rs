//! Second pass over produced plan days: calendar-week summary records.
//!
//! This partition starts weeks on Monday and spans month boundaries; it is
//! intentionally independent of the simulator's per-month week index (see
//! the note on `calendar`).

use chrono::{Datelike, Weekday};

use finhub_domain::{PlanDay, PlanRules, Pot, WeekStatus, WeeklyPlan};

use crate::advice::{Recommender, StandardRecommender};

/// Splits a day sequence into Monday-start calendar weeks. The first slice
/// may be partial when the sequence starts mid-week.
pub fn calendar_weeks(days: &[PlanDay]) -> Vec<&[PlanDay]> {
    let mut weeks = Vec::new();
    let mut week_start = 0;
    for (index, day) in days.iter().enumerate() {
        if index > 0 && day.date.weekday() == Weekday::Mon {
            weeks.push(&days[week_start..index]);
            week_start = index;
        }
    }
    if week_start < days.len() {
        weeks.push(&days[week_start..]);
    }
    weeks
}

/// Derives read-only weekly summaries from a selected month's plan days.
pub struct WeeklyAggregator;

impl WeeklyAggregator {
    /// Summarizes with the default action-checklist texts.
    pub fn summarize(days: &[PlanDay], rules: &PlanRules, pots: &[Pot]) -> Vec<WeeklyPlan> {
        Self::summarize_with(days, rules, pots, &StandardRecommender)
    }

    /// Summarizes the day sequence into one record per calendar week.
    pub fn summarize_with(
        days: &[PlanDay],
        rules: &PlanRules,
        pots: &[Pot],
        recommender: &dyn Recommender,
    ) -> Vec<WeeklyPlan> {
        calendar_weeks(days)
            .into_iter()
            .enumerate()
            .filter_map(|(index, week)| {
                let week_index = index as u32 + 1;
                Self::summarize_week(week, week_index, rules, pots, recommender)
            })
            .collect()
    }

    fn summarize_week(
        week: &[PlanDay],
        week_index: u32,
        rules: &PlanRules,
        pots: &[Pot],
        recommender: &dyn Recommender,
    ) -> Option<WeeklyPlan> {
        let first = week.first()?;
        let last = week.last()?;

        let income: f64 = week.iter().map(|day| day.income).sum();
        let expenses: f64 = week.iter().map(|day| day.expense_total()).sum();
        let pot_contributions: f64 = week.iter().map(|day| day.pot_total()).sum();
        let leftover = income - expenses - pot_contributions;

        let routed_to = if leftover > 0.0 {
            let kind = rules.leftover_policy.target_for_week(week_index);
            pots.iter()
                .find(|pot| pot.kind == kind)
                .map(|pot| pot.name.clone())
        } else {
            None
        };

        let ending_balance = last.balance_after;
        Some(WeeklyPlan {
            label: format!(
                "Week {} ({} to {})",
                week_index,
                first.date.format("%b %d"),
                last.date.format("%b %d")
            ),
            week_index,
            income,
            expenses,
            pot_contributions,
            leftover,
            routed_to,
            ending_balance,
            status: WeekStatus::classify(ending_balance, &rules.thresholds),
            actions: recommender.weekly_actions(week_index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finhub_domain::DayStatus;

    fn day(y: i32, m: u32, d: u32, balance: f64) -> PlanDay {
        PlanDay {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            income: 10.0,
            expenses: Vec::new(),
            pot_contributions: Vec::new(),
            balance_after: balance,
            week_of_month: 1,
            status: DayStatus::Good,
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn weeks_split_on_mondays() {
        // 2025-07-01 is a Tuesday; the first Monday is 07-07.
        let days: Vec<PlanDay> = (1..=14).map(|d| day(2025, 7, d, 100.0)).collect();
        let weeks = calendar_weeks(&days);
        assert_eq!(weeks.len(), 3);
        assert_eq!(weeks[0].len(), 6);
        assert_eq!(weeks[1].len(), 7);
        assert_eq!(weeks[2].len(), 1);
    }

    #[test]
    fn partition_spans_month_boundaries() {
        // 2025-07-28 (Monday) through 2025-08-03 (Sunday) form one week.
        let mut days: Vec<PlanDay> = (28..=31).map(|d| day(2025, 7, d, 100.0)).collect();
        days.extend((1..=3).map(|d| day(2025, 8, d, 100.0)));
        let weeks = calendar_weeks(&days);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].len(), 7);
    }

    #[test]
    fn empty_input_yields_no_weeks() {
        assert!(calendar_weeks(&[]).is_empty());
    }
}
