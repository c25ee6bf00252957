//! finhub-engine
//!
//! The cash-flow projection engine: schedule matching, the daily ledger
//! simulator, weekly leftover allocation, and the weekly summary pass.
//! Depends on finhub-domain. No I/O beyond tracing, no storage.

pub mod advice;
pub mod aggregator;
pub mod allocator;
pub mod calendar;
pub mod error;
pub mod schedule;
pub mod simulator;

pub use advice::{Recommender, StandardRecommender};
pub use aggregator::{calendar_weeks, WeeklyAggregator};
pub use allocator::{LeftoverAllocator, WeekTotals};
pub use error::EngineError;
pub use schedule::ScheduleMatcher;
pub use simulator::{PlanSimulator, PROJECTION_MONTHS};
