use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AthleteStatus {
    Active,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub id: Uuid,
    pub name: String,
    pub status: AthleteStatus,
}

/// Dated physical assessment. Body weight lives here, not on the athlete:
/// "current weight" is always the most recent assessment at or before a
/// reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub date: NaiveDate,
    /// Body weight in kg.
    pub weight: Option<f64>,
    /// Vertical jump in cm.
    pub jump_height: Option<f64>,
    /// Medicine-ball throw in meters.
    pub throw_distance: Option<f64>,
}

/// Daily subjective wellness scores, each on a 1-10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wellness {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub date: NaiveDate,
    pub sleep_quality: Option<u8>,
    pub fatigue_level: Option<u8>,
    pub muscle_soreness: Option<u8>,
    pub stress_level: Option<u8>,
}
