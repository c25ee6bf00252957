//! Domain models for scheduled expenses and the charges they produce.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A recurring or one-time outgoing item in the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    /// Positive magnitude; the engine subtracts it from the running balance.
    pub amount: f64,
    pub frequency: ExpenseFrequency,
    /// Due weekday for `Weekly` and `Biweekly` items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_weekday: Option<Weekday>,
    /// Due day-of-month for `Monthly` and `OneTime` items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_day: Option<u32>,
    /// Display grouping, also the key for essential-order sorting.
    pub category: String,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: ExpenseFrequency,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            frequency,
            anchor_weekday: None,
            anchor_day: None,
            category: category.into(),
        }
    }

    /// Anchors the expense to a weekday (weekly/biweekly cadences).
    pub fn anchored_on_weekday(mut self, weekday: Weekday) -> Self {
        self.anchor_weekday = Some(weekday);
        self
    }

    /// Anchors the expense to a day-of-month (monthly/one-time cadences).
    pub fn anchored_on_day(mut self, day: u32) -> Self {
        self.anchor_day = Some(day);
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates expense cadences.
///
/// `OneTime` recurs to its anchor day-of-month in every projected month; it
/// is a one-shot-per-month construct rather than a single global occurrence.
pub enum ExpenseFrequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    OneTime,
}

impl fmt::Display for ExpenseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseFrequency::Daily => "Daily",
            ExpenseFrequency::Weekly => "Weekly",
            ExpenseFrequency::Biweekly => "Biweekly",
            ExpenseFrequency::Monthly => "Monthly",
            ExpenseFrequency::OneTime => "One-time",
        };
        f.write_str(label)
    }
}

/// A single expense application recorded on a plan day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseCharge {
    pub expense_id: Uuid,
    pub name: String,
    pub category: String,
    pub amount: f64,
}

impl ExpenseCharge {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            expense_id: expense.id,
            name: expense.name.clone(),
            category: expense.category.clone(),
            amount: expense.amount.max(0.0),
        }
    }
}

impl Amounted for ExpenseCharge {
    fn amount(&self) -> f64 {
        self.amount
    }
}
