use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::PhysicalCapacity;

/// Swimming volume roll-up for a cycle window. Volumes are kilometers,
/// the per-session average is meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimmingDashboard {
    pub total_volume: f64,
    pub total_sessions: usize,
    pub average_per_session: f64,
    pub ddr_volume: f64,
    pub dcr_volume: f64,
}

/// Gym load roll-up. The breakdown is present only when a detailed view
/// was requested; it flattens into the payload alongside the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymDashboard {
    pub total_load: f64,
    pub total_sessions: usize,
    pub average_load: f64,
    #[serde(flatten)]
    pub breakdown: Option<GymLoadBreakdown>,
}

/// Load split by physiological capacity. An explicit accumulator so the
/// bucketing fold carries no hidden mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GymLoadBreakdown {
    pub ddr_explosive: f64,
    pub ddr_explosiva: f64,
    pub ddr_fast: f64,
    pub ddr_resistance: f64,
    pub dcr_max: f64,
    pub dcr_resistive: f64,
}

impl GymLoadBreakdown {
    pub fn add(&mut self, capacity: PhysicalCapacity, load: f64) {
        match capacity {
            PhysicalCapacity::ExplosiveStrength => self.ddr_explosive += load,
            PhysicalCapacity::Explosive => self.ddr_explosiva += load,
            PhysicalCapacity::FastStrength => self.ddr_fast += load,
            PhysicalCapacity::StrengthEndurance => self.ddr_resistance += load,
            PhysicalCapacity::MaxStrength => self.dcr_max += load,
            PhysicalCapacity::ResistiveStrength => self.dcr_resistive += load,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthletesDashboard {
    pub improved_count: usize,
    pub declined_count: usize,
    /// Percentage of Present feedback over all feedback in the window,
    /// rounded to 2 decimals.
    pub average_attendance: f64,
    pub weight_gained_count: usize,
    pub weight_lost_count: usize,
}

/// Mean wellness scores over the window, each independently null when the
/// field has no non-null samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessDashboard {
    pub avg_sleep: Option<f64>,
    pub avg_fatigue: Option<f64>,
    pub avg_stress: Option<f64>,
    pub avg_muscle_soreness: Option<f64>,
}

/// Planned physiological-marker targets for a window; null when no planned
/// subdivision carries the marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetMarkers {
    pub target_er: Option<f64>,
    pub target_re: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDashboard {
    pub swimming: SwimmingDashboard,
    pub gym: GymDashboard,
    pub athletes: AthletesDashboard,
    pub wellness: WellnessDashboard,
    pub relative_load: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MesoDashboard {
    pub swimming: SwimmingDashboard,
    pub gym: GymDashboard,
    pub athletes: AthletesDashboard,
    pub wellness: WellnessDashboard,
    pub functional_direction: HashMap<String, f64>,
    pub target_er: Option<f64>,
    pub target_re: Option<f64>,
    pub relative_load: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroDashboard {
    pub swimming: SwimmingDashboard,
    pub gym: GymDashboard,
    pub athletes: AthletesDashboard,
    pub wellness: WellnessDashboard,
    pub functional_direction: HashMap<String, f64>,
    pub relative_load: Option<f64>,
}
