use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::CycleLevel;

/// Request-level failures of the aggregation engine.
///
/// Average and ratio computations never surface here; every
/// zero-denominator case yields the defined null-or-zero value for that
/// metric instead.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("{level} cycle {id} not found")]
    CycleNotFound { level: CycleLevel, id: Uuid },
    #[error("invalid cycle window: end {end} precedes start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    /// Data-access failure, propagated unchanged; there is nothing to retry
    /// in a pure computation over already-fetched data.
    #[error("data access failed: {0}")]
    Store(#[from] anyhow::Error),
}
