use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Planned,
    Active,
    Completed,
}

/// Whether a session is the written plan or an execution clone of one.
///
/// Starting a planned session clones it; the clone keeps a reference back to
/// the plan it executes. Modelling this as a variant keeps every query site
/// free of nullable-parent checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionOrigin {
    Plan,
    Execution { plan_id: Uuid },
}

impl SessionOrigin {
    pub fn is_plan(&self) -> bool {
        matches!(self, SessionOrigin::Plan)
    }

    pub fn plan_id(&self) -> Option<Uuid> {
        match self {
            SessionOrigin::Plan => None,
            SessionOrigin::Execution { plan_id } => Some(*plan_id),
        }
    }
}

/// Training-zone tag on a swim subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingZone {
    #[serde(rename = "DDR")]
    Ddr,
    #[serde(rename = "DCR")]
    Dcr,
}

/// A swim workout: an ordered list of series, each an ordered list of
/// subdivisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: Uuid,
    pub date: NaiveDate,
    pub status: SessionStatus,
    pub origin: SessionOrigin,
    pub series: Vec<TrainingSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSeries {
    pub id: Uuid,
    pub order: u32,
    pub name: Option<String>,
    pub subdivisions: Vec<TrainingSubdivision>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSubdivision {
    pub id: Uuid,
    pub order: u32,
    pub zone: TrainingZone,
    /// Distance per repetition, in meters.
    pub distance: f64,
    pub reps: u32,
    /// Free-text training-zone label, matched against the configured
    /// functional-direction catalog.
    pub functional_base: Option<String>,
    pub da_re: Option<f64>,
    pub da_er: Option<f64>,
}

impl TrainingSubdivision {
    /// Planned volume contribution in meters: distance times repetitions.
    pub fn volume(&self) -> f64 {
        self.distance * f64::from(self.reps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    Present,
    Absent,
}

/// Per-athlete participation record for a training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFeedback {
    pub id: Uuid,
    pub session_id: Uuid,
    pub athlete_id: Uuid,
    /// Which series the athlete actually swam. `None` means the whole
    /// session; records predate per-series feedback.
    pub series_id: Option<Uuid>,
    pub attendance: Attendance,
    pub rpe_real: Option<f64>,
}
