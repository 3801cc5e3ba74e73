use tracing::debug;
use uuid::Uuid;

use crate::models::{GymDashboard, GymLoadBreakdown, PhysicalCapacity};
use crate::services::round2;
use crate::store::CycleSnapshot;

/// Rolls up lifted load across gym sessions in a cycle window.
///
/// Total load is the absolute sum of every set load recorded in qualifying
/// feedback, not a per-athlete average. A session counts toward the average
/// denominator only when at least one qualifying feedback record carries
/// performed loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GymLoadCalculator;

impl GymLoadCalculator {
    pub fn calculate(
        &self,
        snapshot: &CycleSnapshot,
        athlete: Option<Uuid>,
        detailed: bool,
    ) -> GymDashboard {
        let mut total_load = 0.0;
        let mut sessions_with_feedback = 0;
        let mut breakdown = GymLoadBreakdown::default();

        for session in &snapshot.gym_sessions {
            let mut session_counted = false;

            for feedback in &session.feedbacks {
                if athlete.is_some_and(|id| feedback.athlete_id != id) {
                    continue;
                }
                if feedback.performed_loads.is_empty() {
                    continue;
                }
                session_counted = true;

                for (exercise, loads) in &feedback.performed_loads {
                    let load_sum: f64 = loads.iter().sum();
                    total_load += load_sum;

                    if detailed {
                        let capacity = session
                            .exercise_capacity(exercise)
                            .and_then(PhysicalCapacity::from_name);
                        match capacity {
                            Some(capacity) => breakdown.add(capacity, load_sum),
                            None => debug!(
                                %exercise,
                                "no capacity tag in session snapshot, load counted in total only"
                            ),
                        }
                    }
                }
            }

            if session_counted {
                sessions_with_feedback += 1;
            }
        }

        let average_load = if sessions_with_feedback > 0 {
            total_load / sessions_with_feedback as f64
        } else {
            0.0
        };

        GymDashboard {
            total_load: round2(total_load),
            total_sessions: sessions_with_feedback,
            average_load: round2(average_load),
            breakdown: detailed.then(|| GymLoadBreakdown {
                ddr_explosive: round2(breakdown.ddr_explosive),
                ddr_explosiva: round2(breakdown.ddr_explosiva),
                ddr_fast: round2(breakdown.ddr_fast),
                ddr_resistance: round2(breakdown.ddr_resistance),
                dcr_max: round2(breakdown.dcr_max),
                dcr_resistive: round2(breakdown.dcr_resistive),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendance, CycleWindow, ExerciseSnapshot, GymFeedback, GymSession};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn loads(entries: &[(&str, &[f64])]) -> HashMap<String, Vec<f64>> {
        entries
            .iter()
            .map(|(name, sets)| (name.to_string(), sets.to_vec()))
            .collect()
    }

    fn gym_feedback(athlete_id: Uuid, performed: HashMap<String, Vec<f64>>) -> GymFeedback {
        GymFeedback {
            id: Uuid::new_v4(),
            athlete_id,
            attendance: Attendance::Present,
            performed_loads: performed,
        }
    }

    fn squat_session(on: NaiveDate, feedbacks: Vec<GymFeedback>) -> GymSession {
        GymSession {
            id: Uuid::new_v4(),
            date: on,
            title: None,
            exercises: vec![ExerciseSnapshot {
                name: "Squat".to_string(),
                physical_motor_capacity: Some("Força Máxima".to_string()),
            }],
            feedbacks,
        }
    }

    fn snapshot() -> CycleSnapshot {
        CycleSnapshot::new(CycleWindow::new(date(1), date(7)))
    }

    #[test]
    fn detailed_view_buckets_load_by_capacity() {
        let mut snapshot = snapshot();
        snapshot.gym_sessions.push(squat_session(
            date(2),
            vec![gym_feedback(Uuid::new_v4(), loads(&[("Squat", &[100.0, 120.0])]))],
        ));

        let result = GymLoadCalculator.calculate(&snapshot, None, true);

        assert_eq!(result.total_load, 220.0);
        assert_eq!(result.total_sessions, 1);
        assert_eq!(result.average_load, 220.0);
        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.dcr_max, 220.0);
        assert_eq!(
            (
                breakdown.ddr_explosive,
                breakdown.ddr_explosiva,
                breakdown.ddr_fast,
                breakdown.ddr_resistance,
                breakdown.dcr_resistive,
            ),
            (0.0, 0.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn untagged_exercise_counts_toward_total_only() {
        let mut snapshot = snapshot();
        let mut session = squat_session(
            date(2),
            vec![gym_feedback(
                Uuid::new_v4(),
                loads(&[("Squat", &[100.0]), ("Mystery Lift", &[40.0])]),
            )],
        );
        session.exercises.push(ExerciseSnapshot {
            name: "Mystery Lift".to_string(),
            physical_motor_capacity: Some("Cardio".to_string()),
        });
        snapshot.gym_sessions.push(session);

        let result = GymLoadCalculator.calculate(&snapshot, None, true);

        assert_eq!(result.total_load, 140.0);
        assert_eq!(result.breakdown.unwrap().dcr_max, 100.0);
    }

    #[test]
    fn empty_feedback_does_not_count_the_session() {
        let mut snapshot = snapshot();
        snapshot
            .gym_sessions
            .push(squat_session(date(2), vec![gym_feedback(Uuid::new_v4(), loads(&[]))]));

        let result = GymLoadCalculator.calculate(&snapshot, None, false);

        assert_eq!(result.total_sessions, 0);
        assert_eq!(result.average_load, 0.0);
        assert_eq!(result.total_load, 0.0);
    }

    #[test]
    fn athlete_filter_excludes_other_feedback() {
        let athlete_id = Uuid::new_v4();
        let teammate = Uuid::new_v4();
        let mut snapshot = snapshot();
        snapshot.gym_sessions.push(squat_session(
            date(2),
            vec![
                gym_feedback(athlete_id, loads(&[("Squat", &[60.0, 60.0])])),
                gym_feedback(teammate, loads(&[("Squat", &[100.0])])),
            ],
        ));

        let result = GymLoadCalculator.calculate(&snapshot, Some(athlete_id), false);

        assert_eq!(result.total_load, 120.0);
        assert_eq!(result.total_sessions, 1);
        assert!(result.breakdown.is_none());
    }

    #[test]
    fn average_divides_by_sessions_with_feedback() {
        let mut snapshot = snapshot();
        snapshot.gym_sessions.push(squat_session(
            date(2),
            vec![gym_feedback(Uuid::new_v4(), loads(&[("Squat", &[100.0])]))],
        ));
        snapshot.gym_sessions.push(squat_session(
            date(3),
            vec![gym_feedback(Uuid::new_v4(), loads(&[("Squat", &[200.0])]))],
        ));
        // A planned session nobody recorded loads for.
        snapshot.gym_sessions.push(squat_session(date(4), vec![]));

        let result = GymLoadCalculator.calculate(&snapshot, None, false);

        assert_eq!(result.total_load, 300.0);
        assert_eq!(result.total_sessions, 2);
        assert_eq!(result.average_load, 150.0);
    }
}
