use chrono::{Datelike, NaiveDate};
use finhub_domain::{
    BalanceThresholds, ContributionSource, DayStatus, Expense, ExpenseFrequency, IncomeCadence,
    IncomeSchedule, PlanConfiguration, PlanProjection, Pot, PotCadence, PotKind,
};
use finhub_engine::{PlanSimulator, PROJECTION_MONTHS};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base_config() -> PlanConfiguration {
    let mut config = PlanConfiguration::default();
    config.currency = "EUR".into();
    config.rules.thresholds = BalanceThresholds {
        warning: 100.0,
        danger: 0.0,
    };
    config
}

fn assert_balance_continuity(projection: &PlanProjection, starting_balance: f64) {
    let mut previous = starting_balance;
    for day in projection.days() {
        let expected = previous + day.income - day.expense_total() - day.pot_total();
        assert!(
            (day.balance_after - expected).abs() < 1e-6,
            "balance discontinuity on {}: expected {}, recorded {}",
            day.date,
            expected,
            day.balance_after
        );
        previous = day.balance_after;
    }
}

#[test]
fn daily_income_and_expense_scenario() {
    let mut config = base_config();
    config.starting_balance = 340.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 180.0);
    config
        .expenses
        .push(Expense::new("Petrol", 20.0, ExpenseFrequency::Daily, "Transport"));

    let projection = PlanSimulator::run(&config, date(2025, 7, 2)).expect("projection");

    let days: Vec<_> = projection.days().collect();
    assert_eq!(projection.months.len(), PROJECTION_MONTHS as usize);
    assert_eq!(projection.months[0].days.len(), 31);
    assert_eq!(days[0].date, date(2025, 7, 1));

    assert!((days[0].balance_after - 500.0).abs() < 1e-9);
    assert_eq!(days[0].status, DayStatus::Good);
    assert!((days[1].balance_after - 660.0).abs() < 1e-9);
    assert_eq!(days[1].status, DayStatus::Good);

    // No pots configured: the balance climbs by a flat 160 every day and no
    // weekly sweep ever fires.
    for pair in days.windows(2) {
        assert!((pair[1].balance_after - pair[0].balance_after - 160.0).abs() < 1e-6);
        assert!(pair[1].pot_contributions.is_empty());
    }

    assert_balance_continuity(&projection, config.starting_balance);
}

#[test]
fn projection_is_idempotent() {
    let mut config = base_config();
    config.starting_balance = 250.0;
    config.income = IncomeSchedule::new(IncomeCadence::Weekly, 700.0);
    config.expenses.push(
        Expense::new("Rent", 450.0, ExpenseFrequency::Monthly, "Housing").anchored_on_day(1),
    );
    config.pots.push(Pot::new(
        "Bills",
        120.0,
        PotCadence::Monthly,
        PotKind::Essential,
    ));
    config.pots.push(Pot::new(
        "Rainy Day",
        500.0,
        PotCadence::Flexible,
        PotKind::Buffer,
    ));

    let start = date(2025, 3, 10);
    let first = PlanSimulator::run(&config, start).expect("first run");
    let second = PlanSimulator::run(&config, start).expect("second run");

    assert_eq!(first, second);
    // Byte-identical output, not merely structurally equal.
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn monthly_essential_pot_resets_and_respects_its_goal() {
    let mut config = base_config();
    config.starting_balance = 1000.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 100.0);
    let pot = Pot::new("Bills", 310.0, PotCadence::Monthly, PotKind::Essential);
    let pot_id = pot.id;
    config.pots.push(pot);

    let projection = PlanSimulator::run(&config, date(2025, 7, 1)).expect("projection");

    for month in &projection.months {
        let mut accumulated = 0.0_f64;
        for day in &month.days {
            for contribution in &day.pot_contributions {
                assert_eq!(contribution.pot_id, pot_id);
                assert_eq!(contribution.source, ContributionSource::MonthlyTarget);
                accumulated += contribution.amount;
            }
            assert!(
                accumulated <= 310.0 + 1e-6,
                "pot exceeded its goal in {}-{}",
                month.year,
                month.month
            );
        }
        // The tracked balance restarts every month, so each month fills the
        // goal again from zero.
        assert!((accumulated - 310.0).abs() < 1e-6);
        // First day of the month carries exactly one flat daily slice.
        let first_day = &month.days[0];
        assert_eq!(first_day.pot_contributions.len(), 1);
        let daily_target = 310.0 / month.days.len() as f64;
        assert!((first_day.pot_contributions[0].amount - daily_target).abs() < 1e-6);
    }

    assert_balance_continuity(&projection, config.starting_balance);
}

#[test]
fn pot_contribution_is_clamped_to_available_balance() {
    let mut config = base_config();
    config.starting_balance = 0.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 5.0);
    config.pots.push(Pot::new(
        "Bills",
        310.0,
        PotCadence::Monthly,
        PotKind::Essential,
    ));

    let projection = PlanSimulator::run(&config, date(2025, 7, 1)).expect("projection");
    let july = &projection.months[0];

    // Daily target is 10 but only 5 of income is ever available, so every
    // contribution is a partial one and the balance never goes negative.
    for day in &july.days {
        assert_eq!(day.pot_contributions.len(), 1);
        assert!((day.pot_contributions[0].amount - 5.0).abs() < 1e-9);
        assert!((day.balance_after - 0.0).abs() < 1e-9);
    }
}

#[test]
fn weekly_leftover_routes_by_week_of_month() {
    // September 2025 opens on a Monday, so its calendar weeks line up with
    // the simulator's week-of-month index.
    let mut config = base_config();
    config.starting_balance = 340.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 10.0);
    config.expenses.push(
        Expense::new("Groceries", 30.0, ExpenseFrequency::Weekly, "Food")
            .anchored_on_weekday(chrono::Weekday::Mon),
    );
    config.pots.push(Pot::new(
        "Carry-over",
        0.0,
        PotCadence::Flexible,
        PotKind::NextMonth,
    ));
    config.pots.push(Pot::new(
        "Rainy Day",
        500.0,
        PotCadence::Flexible,
        PotKind::Buffer,
    ));

    let projection = PlanSimulator::run(&config, date(2025, 9, 1)).expect("projection");
    let september = projection.month(2025, 9).expect("september");

    // Week 1 closes on Sunday the 7th: income 70, expenses 30, leftover 40
    // routed to the next-month pot.
    let sunday = &september.days[6];
    assert_eq!(sunday.date, date(2025, 9, 7));
    let sweep = sunday
        .pot_contributions
        .iter()
        .find(|c| c.source == ContributionSource::LeftoverSweep)
        .expect("week one sweep");
    assert_eq!(sweep.pot_name, "Carry-over");
    assert!((sweep.amount - 40.0).abs() < 1e-9);
    // The sweep pulls the balance 40 below the day's own income/expense math.
    assert!((sunday.balance_after - 340.0).abs() < 1e-9);

    // Week 4 closes on the 28th and routes to the buffer pot instead.
    let fourth_sunday = &september.days[27];
    assert_eq!(fourth_sunday.date, date(2025, 9, 28));
    let sweep = fourth_sunday
        .pot_contributions
        .iter()
        .find(|c| c.source == ContributionSource::LeftoverSweep)
        .expect("week four sweep");
    assert_eq!(sweep.pot_name, "Rainy Day");
    assert!((sweep.amount - 40.0).abs() < 1e-9);

    // The trailing partial week ends in the red for the week (a Monday
    // grocery charge against two days of income), so nothing is swept on
    // the month's final day.
    let month_end = &september.days[29];
    assert_eq!(month_end.date, date(2025, 9, 30));
    assert!(month_end.pot_contributions.is_empty());

    assert_balance_continuity(&projection, config.starting_balance);
}

#[test]
fn sweep_skipped_when_no_pot_matches_the_policy() {
    let mut config = base_config();
    config.starting_balance = 340.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 10.0);
    // Only a buffer pot exists; weeks 1 and 2 find no next-month pot and
    // their leftover silently disappears from the ledger.
    config.pots.push(Pot::new(
        "Rainy Day",
        500.0,
        PotCadence::Flexible,
        PotKind::Buffer,
    ));

    let projection = PlanSimulator::run(&config, date(2025, 9, 1)).expect("projection");
    let september = projection.month(2025, 9).expect("september");

    let first_sunday = &september.days[6];
    assert!(first_sunday.pot_contributions.is_empty());
    assert!((first_sunday.balance_after - (340.0 + 70.0)).abs() < 1e-9);

    // Week 3 has a buffer target, so its sweep still happens.
    let third_sunday = &september.days[20];
    assert_eq!(third_sunday.date, date(2025, 9, 21));
    assert_eq!(third_sunday.pot_contributions.len(), 1);
    assert_eq!(third_sunday.pot_contributions[0].pot_name, "Rainy Day");
}

#[test]
fn weekly_essential_pot_takes_flat_shares_on_mondays() {
    let mut config = base_config();
    config.starting_balance = 500.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 50.0);
    config.pots.push(Pot::new(
        "Groceries",
        200.0,
        PotCadence::Weekly,
        PotKind::Essential,
    ));

    let projection = PlanSimulator::run(&config, date(2025, 9, 1)).expect("projection");
    let september = projection.month(2025, 9).expect("september");

    for day in &september.days {
        let shares: Vec<_> = day
            .pot_contributions
            .iter()
            .filter(|c| c.source == ContributionSource::WeeklyShare)
            .collect();
        if day.date.weekday() == chrono::Weekday::Mon {
            assert_eq!(shares.len(), 1, "missing share on {}", day.date);
            assert!((shares[0].amount - 50.0).abs() < 1e-9);
        } else {
            assert!(shares.is_empty(), "unexpected share on {}", day.date);
        }
    }

    assert_balance_continuity(&projection, config.starting_balance);
}

#[test]
fn underfunded_schedule_goes_negative_without_failing() {
    let mut config = base_config();
    config.starting_balance = 10.0;
    config.income = IncomeSchedule::new(IncomeCadence::Daily, 1.0);
    config
        .expenses
        .push(Expense::new("Petrol", 25.0, ExpenseFrequency::Daily, "Transport"));

    let projection = PlanSimulator::run(&config, date(2025, 7, 1)).expect("projection");
    let last = projection.days().last().expect("days");
    assert!(last.balance_after < 0.0);
    assert_eq!(last.status, DayStatus::Danger);
    assert_balance_continuity(&projection, config.starting_balance);
}
