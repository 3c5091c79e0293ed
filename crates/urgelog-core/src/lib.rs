//! # Urgelog Core
//!
//! Core library for Urgelog - a local-first, CLI-first urge tracker.
//!
//! This crate provides the domain model, entry validation, the analytics
//! derivation engine, and the entry store, independent of the CLI
//! interface.
//!
//! ## Architecture
//!
//! - **model**: entry record, closed category enumerations, validation
//! - **analytics**: pure summary derivation over an entry snapshot
//! - **storage**: entry store trait and SQLite implementation
//!
//! Analytics are always recomputed from the full entry collection; there
//! is no cached or incremental summary state anywhere in the crate.

pub mod analytics;
pub mod error;
pub mod model;
pub mod storage;

pub use analytics::{compute_analytics, compute_analytics_at, AnalyticsSummary};
pub use error::{Result, UrgeLogError};
pub use model::{
    ActionTaken, Emotion, Location, PhysicalSensation, SensationLocation, SensationType,
    UrgeEntry, UrgeType, ValidationError,
};
pub use storage::{EntryStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
