//! Cycle aggregation engine for swim-team periodization dashboards.
//!
//! The engine rolls up planned training, gym execution feedback, assessments
//! and wellness records into per-cycle dashboard metrics (macro, meso and
//! micro windows). It performs read-only computation: a host application
//! implements [`store::TrainingStore`] and serves the resulting payloads.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AggregationPolicy;
pub use error::DashboardError;
pub use services::CycleDashboardService;
