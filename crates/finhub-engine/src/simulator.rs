//! The daily ledger pass: projects a plan configuration across twelve
//! months, one calendar day at a time.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, trace};
use uuid::Uuid;

use finhub_domain::{
    ContributionSource, DayStatus, Expense, ExpenseCharge, MonthLedger, PlanConfiguration,
    PlanDay, PlanProjection, Pot, PotCadence, PotContribution,
};

use crate::{
    advice::{Recommender, StandardRecommender},
    allocator::{LeftoverAllocator, WeekTotals},
    calendar,
    error::EngineError,
    schedule::ScheduleMatcher,
};

/// Length of the projection horizon.
pub const PROJECTION_MONTHS: u32 = 12;

/// Weekly essential pots receive `goal / 4` per Monday; months with five
/// Mondays get a fifth share with no remainder correction.
const WEEKS_PER_MONTH: f64 = 4.0;

/// Run-local accumulator for essential monthly pots. Owned by a single run
/// and discarded afterwards; the configuration's `Pot.current_balance` is
/// never written back.
#[derive(Debug, Default)]
struct PotLedger {
    accumulated: HashMap<Uuid, f64>,
}

impl PotLedger {
    fn reset(&mut self) {
        self.accumulated.clear();
    }

    fn accumulated(&self, pot_id: Uuid) -> f64 {
        self.accumulated.get(&pot_id).copied().unwrap_or(0.0)
    }

    fn add(&mut self, pot_id: Uuid, amount: f64) {
        *self.accumulated.entry(pot_id).or_insert(0.0) += amount;
    }
}

/// Deterministic daily simulator. Identical configuration and start date
/// always reproduce identical output: no clock reads, no randomness, and
/// every iteration walks explicitly ordered lists.
pub struct PlanSimulator;

impl PlanSimulator {
    /// Projects twelve consecutive months starting at the first day of the
    /// start date's month, with the default recommendation texts.
    pub fn run(
        config: &PlanConfiguration,
        start: NaiveDate,
    ) -> Result<PlanProjection, EngineError> {
        Self::run_with(config, start, &StandardRecommender)
    }

    /// Same projection with a caller-supplied recommendation source.
    pub fn run_with(
        config: &PlanConfiguration,
        start: NaiveDate,
        recommender: &dyn Recommender,
    ) -> Result<PlanProjection, EngineError> {
        let mut balance = config.starting_balance;
        let mut ledger = PotLedger::default();
        let mut months = Vec::with_capacity(PROJECTION_MONTHS as usize);
        let mut cursor = calendar::month_start(start);

        for _ in 0..PROJECTION_MONTHS {
            let month =
                Self::project_month(config, start, cursor, &mut balance, &mut ledger, recommender)?;
            months.push(month);
            cursor = calendar::shift_month(cursor, 1);
        }

        Ok(PlanProjection { months })
    }

    fn project_month(
        config: &PlanConfiguration,
        plan_start: NaiveDate,
        month_first: NaiveDate,
        balance: &mut f64,
        ledger: &mut PotLedger,
        recommender: &dyn Recommender,
    ) -> Result<MonthLedger, EngineError> {
        let year = month_first.year();
        let month = month_first.month();
        let month_days = calendar::days_in_month(year, month);
        let daily_income = config.income.daily_amount();

        // Monthly essential pots restart every month.
        ledger.reset();
        debug!(year, month, balance = *balance, "projecting month");

        let mut days: Vec<PlanDay> = Vec::with_capacity(month_days as usize);
        let mut week = WeekTotals::default();

        for day_number in 1..=month_days {
            let date = NaiveDate::from_ymd_opt(year, month, day_number).ok_or_else(|| {
                EngineError::DateOutOfRange(format!("{:04}-{:02}-{:02}", year, month, day_number))
            })?;

            *balance += daily_income;

            let charges = Self::charge_due_expenses(config, date, plan_start, balance);
            let contributions =
                Self::fund_essential_pots(config, date, month_days, balance, ledger);

            let week_of_month = calendar::week_of_month(date);
            let status = DayStatus::classify(*balance, &config.rules.thresholds);
            let recommendations = recommender.for_day(status, week_of_month);

            week.income += daily_income;
            week.expenses += charges.iter().map(|charge| charge.amount).sum::<f64>();
            week.pot_contributions += contributions.iter().map(|c| c.amount).sum::<f64>();

            days.push(PlanDay {
                date,
                income: daily_income,
                expenses: charges,
                pot_contributions: contributions,
                balance_after: *balance,
                week_of_month,
                status,
                recommendations,
            });

            // Week closes on Sunday, or early when the month runs out.
            if date.weekday() == Weekday::Sun || calendar::is_month_end(date) {
                Self::close_week(config, week, week_of_month, balance, &mut days);
                week = WeekTotals::default();
            }
        }

        Ok(MonthLedger { year, month, days })
    }

    /// Collects the expenses due on `date`, charges them against the
    /// balance in essential-order, and returns the charge records.
    fn charge_due_expenses(
        config: &PlanConfiguration,
        date: NaiveDate,
        plan_start: NaiveDate,
        balance: &mut f64,
    ) -> Vec<ExpenseCharge> {
        let mut due: Vec<&Expense> = config
            .expenses
            .iter()
            .filter(|expense| ScheduleMatcher::is_due(expense, date, plan_start))
            .collect();
        due.sort_by_key(|expense| config.rules.category_rank(&expense.category));

        due.into_iter()
            .map(|expense| {
                let charge = ExpenseCharge::from_expense(expense);
                *balance -= charge.amount;
                charge
            })
            .collect()
    }

    /// Applies the day's engine-driven pot funding: pro-rata slices for
    /// monthly essential pots, plus flat Monday shares for weekly ones.
    fn fund_essential_pots(
        config: &PlanConfiguration,
        date: NaiveDate,
        month_days: u32,
        balance: &mut f64,
        ledger: &mut PotLedger,
    ) -> Vec<PotContribution> {
        let mut contributions = Vec::new();

        for pot in Self::essential_pots(config, PotCadence::Monthly) {
            let daily_target = pot.goal_amount / month_days as f64;
            let remaining_need = (pot.goal_amount - ledger.accumulated(pot.id)).max(0.0);
            if remaining_need <= 0.0 {
                continue;
            }
            let amount = daily_target.min(remaining_need).min(balance.max(0.0));
            if amount <= 0.0 {
                continue;
            }
            *balance -= amount;
            ledger.add(pot.id, amount);
            contributions.push(PotContribution::new(
                pot,
                amount,
                ContributionSource::MonthlyTarget,
            ));
        }

        if date.weekday() == Weekday::Mon {
            for pot in Self::essential_pots(config, PotCadence::Weekly) {
                let share = pot.goal_amount / WEEKS_PER_MONTH;
                // All-or-nothing: a share the balance cannot cover is skipped.
                if share > 0.0 && *balance >= share {
                    *balance -= share;
                    contributions.push(PotContribution::new(
                        pot,
                        share,
                        ContributionSource::WeeklyShare,
                    ));
                }
            }
        }

        contributions
    }

    fn essential_pots(
        config: &PlanConfiguration,
        cadence: PotCadence,
    ) -> impl Iterator<Item = &Pot> {
        config
            .pots
            .iter()
            .filter(move |pot| pot.is_essential() && pot.cadence == cadence)
    }

    /// Sweeps a closed week's leftover into its policy pot, attached to the
    /// week's final day. The sweep is a second withdrawal on top of the
    /// day's own math, so the day's recorded balance moves; its status and
    /// recommendations keep their pre-sweep values.
    fn close_week(
        config: &PlanConfiguration,
        week: WeekTotals,
        week_of_month: u32,
        balance: &mut f64,
        days: &mut [PlanDay],
    ) {
        let sweep = LeftoverAllocator::allocate(
            week,
            week_of_month,
            &config.pots,
            &config.rules.leftover_policy,
        );
        if let (Some(sweep), Some(last_day)) = (sweep, days.last_mut()) {
            trace!(
                date = %last_day.date,
                pot = %sweep.pot_name,
                amount = sweep.amount,
                "weekly leftover sweep"
            );
            *balance -= sweep.amount;
            last_day.balance_after = *balance;
            last_day.pot_contributions.push(sweep);
        }
    }
}
