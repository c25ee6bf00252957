//! Domain models for savings pots and engine-driven pot contributions.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A named savings bucket with a goal amount and a funding behavior tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pot {
    pub id: Uuid,
    pub name: String,
    pub goal_amount: f64,
    /// Source-of-truth balance supplied by the caller; the engine reads it
    /// for display only and never writes it back.
    pub current_balance: f64,
    pub cadence: PotCadence,
    /// Carried through for display ordering; the engine does not consult it.
    pub priority: u32,
    pub kind: PotKind,
}

impl Pot {
    pub fn new(
        name: impl Into<String>,
        goal_amount: f64,
        cadence: PotCadence,
        kind: PotKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            goal_amount,
            current_balance: 0.0,
            cadence,
            priority: 0,
            kind,
        }
    }

    /// Returns `true` when the day loop funds this pot directly.
    pub fn is_essential(&self) -> bool {
        matches!(self.kind, PotKind::Essential)
    }
}

impl Identifiable for Pot {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Pot {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates how often a pot expects funding.
pub enum PotCadence {
    Weekly,
    Monthly,
    Flexible,
}

impl fmt::Display for PotCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PotCadence::Weekly => "Weekly",
            PotCadence::Monthly => "Monthly",
            PotCadence::Flexible => "Flexible",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Tags a pot with the funding role it plays in the plan.
pub enum PotKind {
    /// Funded directly by the day loop (monthly pro-rata or Monday shares).
    Essential,
    /// Passive record; never touched by the engine.
    Savings,
    /// Receives leftover sweeps in the later weeks of a month.
    Buffer,
    /// Receives leftover sweeps in the first two weeks of a month.
    NextMonth,
}

impl fmt::Display for PotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PotKind::Essential => "Essential",
            PotKind::Savings => "Savings",
            PotKind::Buffer => "Buffer",
            PotKind::NextMonth => "Next Month",
        };
        f.write_str(label)
    }
}

/// A single transfer into a pot recorded on a plan day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PotContribution {
    pub pot_id: Uuid,
    pub pot_name: String,
    pub amount: f64,
    pub source: ContributionSource,
}

impl PotContribution {
    pub fn new(pot: &Pot, amount: f64, source: ContributionSource) -> Self {
        Self {
            pot_id: pot.id,
            pot_name: pot.name.clone(),
            amount: amount.max(0.0),
            source,
        }
    }
}

impl Amounted for PotContribution {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Distinguishes how a contribution entered the pot in the audit trail.
pub enum ContributionSource {
    /// Daily pro-rata slice of a monthly essential pot's goal.
    MonthlyTarget,
    /// Flat Monday share of a weekly essential pot's goal.
    WeeklyShare,
    /// Weekly surplus routed by the leftover policy.
    LeftoverSweep,
}

impl fmt::Display for ContributionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContributionSource::MonthlyTarget => "Monthly Target",
            ContributionSource::WeeklyShare => "Weekly Share",
            ContributionSource::LeftoverSweep => "Leftover Sweep",
        };
        f.write_str(label)
    }
}
