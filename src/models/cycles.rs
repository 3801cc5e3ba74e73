use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Periodization level a dashboard is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleLevel {
    Macro,
    Meso,
    Micro,
}

impl fmt::Display for CycleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleLevel::Macro => write!(f, "macro"),
            CycleLevel::Meso => write!(f, "meso"),
            CycleLevel::Micro => write!(f, "micro"),
        }
    }
}

/// Inclusive date interval of a resolved cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CycleWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }
}

/// A configured functional-direction entry. The catalog is the only source
/// of valid bucket keys for direction aggregation; catalog order is the
/// documented tie-break when fuzzy matching free-text labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionalDirectionRange {
    pub id: Uuid,
    /// Canonical direction name, e.g. "Aeróbico" or "VO2".
    pub direction: String,
    pub re_min: Option<f64>,
    pub re_max: Option<f64>,
    pub er_min: Option<f64>,
    pub er_max: Option<f64>,
}
