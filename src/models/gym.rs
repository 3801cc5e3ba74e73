use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::Attendance;

/// Catalog exercise as captured when the session was created, so later
/// template edits do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSnapshot {
    pub name: String,
    /// Physiological-capacity tag, e.g. "Força Máxima".
    pub physical_motor_capacity: Option<String>,
}

/// A gym workout with the execution feedback recorded against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymSession {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: Option<String>,
    pub exercises: Vec<ExerciseSnapshot>,
    pub feedbacks: Vec<GymFeedback>,
}

impl GymSession {
    /// Capacity tag for an exercise, looked up by exact name in this
    /// session's catalog snapshot.
    pub fn exercise_capacity(&self, name: &str) -> Option<&str> {
        self.exercises
            .iter()
            .find(|exercise| exercise.name == name)
            .and_then(|exercise| exercise.physical_motor_capacity.as_deref())
    }
}

/// Per-athlete gym execution record: exercise name to the ordered loads
/// lifted per set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymFeedback {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub attendance: Attendance,
    pub performed_loads: HashMap<String, Vec<f64>>,
}

/// The six physiological capacities gym load is bucketed into for the
/// detailed breakdown. The first four roll up under DDR, the last two
/// under DCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalCapacity {
    /// "Força Explosiva"
    ExplosiveStrength,
    /// "Explosiva"
    Explosive,
    /// "Força Rápida"
    FastStrength,
    /// "Resistência Força"
    StrengthEndurance,
    /// "Força Máxima"
    MaxStrength,
    /// "Força Resistiva"
    ResistiveStrength,
}

impl PhysicalCapacity {
    /// Exact-name match against a catalog tag. Unknown tags bucket nowhere
    /// but their load still counts toward the grand total.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Força Explosiva" => Some(Self::ExplosiveStrength),
            "Explosiva" => Some(Self::Explosive),
            "Força Rápida" => Some(Self::FastStrength),
            "Resistência Força" => Some(Self::StrengthEndurance),
            "Força Máxima" => Some(Self::MaxStrength),
            "Força Resistiva" => Some(Self::ResistiveStrength),
            _ => None,
        }
    }
}
