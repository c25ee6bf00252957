//! Shared traits and cadence enums for planning primitives.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities referenced by the plan.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates how often income arrives.
#[derive(Default)]
pub enum IncomeCadence {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl IncomeCadence {
    /// Returns the nominal day-count the cadence amount is smoothed over.
    pub fn days(self) -> u32 {
        match self {
            IncomeCadence::Daily => 1,
            IncomeCadence::Weekly => 7,
            IncomeCadence::Monthly => 30,
        }
    }
}

impl fmt::Display for IncomeCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeCadence::Daily => "Daily",
            IncomeCadence::Weekly => "Weekly",
            IncomeCadence::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}
