//! finhub-config
//!
//! Input-boundary persistence for plan configurations. The engine accepts a
//! fully-populated `PlanConfiguration` value; this crate owns the disk-backed
//! hand-off (JSON documents plus default directory resolution).

pub mod error;
pub mod store;

pub use error::ConfigError;
pub use store::PlanStore;
