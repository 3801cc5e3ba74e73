// The cycle aggregation engine: independent metric calculators plus the
// composer that assembles them into per-cycle dashboard payloads.

pub mod athlete_progress;
pub mod dashboard_composer;
pub mod functional_direction;
pub mod gym_load;
pub mod relative_load;
pub mod swimming_volume;
pub mod target_markers;
pub mod wellness;

pub use athlete_progress::AthleteProgressCalculator;
pub use dashboard_composer::CycleDashboardService;
pub use functional_direction::{normalize_direction, FunctionalDirectionAggregator};
pub use gym_load::GymLoadCalculator;
pub use relative_load::RelativeLoadCalculator;
pub use swimming_volume::SwimmingVolumeCalculator;
pub use target_markers::TargetMarkerCalculator;
pub use wellness::WellnessAggregator;

use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{Attendance, SessionFeedback, TrainingSeries, TrainingSession};
use crate::store::CycleSnapshot;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A session an athlete took part in, narrowed to the series they swam.
pub(crate) struct AttendedSession<'a> {
    pub session: &'a TrainingSession,
    pub series: Vec<&'a TrainingSeries>,
}

/// Resolve which sessions and series an athlete actually swam in the
/// snapshot window.
///
/// A session qualifies when the athlete has at least one Present feedback
/// record for it. Feedback rows carrying a `series_id` narrow participation
/// to those series; when none of the athlete's rows for the session carry
/// one, the whole session counts (records predating per-series feedback).
pub(crate) fn attended_sessions(
    snapshot: &CycleSnapshot,
    athlete_id: Uuid,
) -> Vec<AttendedSession<'_>> {
    let mut attended = Vec::new();

    for session in &snapshot.sessions {
        let present: Vec<&SessionFeedback> = snapshot
            .session_feedback
            .iter()
            .filter(|feedback| {
                feedback.session_id == session.id
                    && feedback.athlete_id == athlete_id
                    && feedback.attendance == Attendance::Present
            })
            .collect();
        if present.is_empty() {
            continue;
        }

        let series_ids: HashSet<Uuid> = present
            .iter()
            .filter_map(|feedback| feedback.series_id)
            .collect();
        let series: Vec<&TrainingSeries> = if series_ids.is_empty() {
            session.series.iter().collect()
        } else {
            session
                .series
                .iter()
                .filter(|series| series_ids.contains(&series.id))
                .collect()
        };

        attended.push(AttendedSession { session, series });
    }

    attended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(77.444), 77.44);
        assert_eq!(round2(77.446), 77.45);
        assert_eq!(round2(0.5), 0.5);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(7.04), 7.0);
        assert_eq!(round1(6.96), 7.0);
    }
}
