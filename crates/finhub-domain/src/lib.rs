//! finhub-domain
//!
//! Pure domain models for the Financial Hub planning engine (plan
//! configuration, expenses, pots, per-day and per-week projection records).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod day;
pub mod expense;
pub mod plan;
pub mod pot;
pub mod projection;
pub mod weekly;

pub use common::*;
pub use day::*;
pub use expense::*;
pub use plan::*;
pub use pot::*;
pub use projection::*;
pub use weekly::*;
