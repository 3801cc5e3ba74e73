use std::collections::HashSet;
use uuid::Uuid;

use crate::config::{AggregationPolicy, SwimVolumeBasis};
use crate::models::{Attendance, SwimmingDashboard, TrainingZone};
use crate::services::{attended_sessions, round2};
use crate::store::CycleSnapshot;

/// Rolls up swim volume over a cycle window, split by training zone.
///
/// Team view sums PLANNED volume; which sessions qualify is a policy
/// decision (see [`SwimVolumeBasis`]). Athlete view sums only sessions the
/// athlete has Present feedback for, honoring per-series feedback with a
/// whole-session fallback.
#[derive(Debug, Clone)]
pub struct SwimmingVolumeCalculator {
    policy: AggregationPolicy,
}

impl SwimmingVolumeCalculator {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    pub fn calculate(&self, snapshot: &CycleSnapshot, athlete: Option<Uuid>) -> SwimmingDashboard {
        let mut total = 0.0;
        let mut ddr = 0.0;
        let mut dcr = 0.0;
        let mut session_ids: HashSet<Uuid> = HashSet::new();

        let mut accumulate = |zone: TrainingZone, volume: f64| {
            total += volume;
            match zone {
                TrainingZone::Ddr => ddr += volume,
                TrainingZone::Dcr => dcr += volume,
            }
        };

        match athlete {
            Some(athlete_id) => {
                for attended in attended_sessions(snapshot, athlete_id) {
                    session_ids.insert(attended.session.id);
                    for series in &attended.series {
                        for subdivision in &series.subdivisions {
                            accumulate(subdivision.zone, subdivision.volume());
                        }
                    }
                }
            }
            None => {
                for session in &snapshot.sessions {
                    let qualifies = match self.policy.swim_volume_basis {
                        SwimVolumeBasis::PlannedOnly => session.origin.is_plan(),
                        SwimVolumeBasis::AttendanceBased => snapshot
                            .session_feedback
                            .iter()
                            .any(|feedback| {
                                feedback.session_id == session.id
                                    && feedback.attendance == Attendance::Present
                            }),
                    };
                    if !qualifies {
                        continue;
                    }
                    session_ids.insert(session.id);
                    for series in &session.series {
                        for subdivision in &series.subdivisions {
                            accumulate(subdivision.zone, subdivision.volume());
                        }
                    }
                }
            }
        }

        let total_sessions = session_ids.len();
        let average_per_session = if total_sessions > 0 {
            total / total_sessions as f64
        } else {
            0.0
        };

        SwimmingDashboard {
            total_volume: round2(total / 1000.0),
            total_sessions,
            average_per_session: round2(average_per_session),
            ddr_volume: round2(ddr / 1000.0),
            dcr_volume: round2(dcr / 1000.0),
        }
    }
}
