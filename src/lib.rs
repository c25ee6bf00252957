#![doc(test(attr(deny(warnings))))]

//! Financial Hub: deterministic cash-flow projection and pot allocation.
//!
//! Thin facade over the workspace crates so frontends depend on a single
//! surface: re-exports the domain model, the projection engine, and the
//! boundary adapters, and owns global tracing initialization.

pub use finhub_config::{ConfigError, PlanStore};
pub use finhub_domain::*;
pub use finhub_engine::{
    calendar_weeks, EngineError, LeftoverAllocator, PlanSimulator, Recommender, ScheduleMatcher,
    StandardRecommender, WeekTotals, WeeklyAggregator, PROJECTION_MONTHS,
};
pub use finhub_export::{CsvExporter, ExportError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("finhub=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Financial Hub tracing initialized.");
    });
}
