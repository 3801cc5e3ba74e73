use uuid::Uuid;

use crate::models::{Assessment, AthletesDashboard, AthleteStatus, Attendance};
use crate::services::round2;
use crate::store::CycleSnapshot;

/// Counts athletes whose weight or performance moved between the first and
/// last assessment inside the window, plus the window attendance rate.
///
/// Comparisons need two distinct assessments; a single record in the window
/// counts the athlete in no bucket. The performance proxy is jump height
/// plus throw distance, missing parts treated as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct AthleteProgressCalculator;

impl AthleteProgressCalculator {
    pub fn calculate(&self, snapshot: &CycleSnapshot, athlete: Option<Uuid>) -> AthletesDashboard {
        let mut improved_count = 0;
        let mut declined_count = 0;
        let mut weight_gained_count = 0;
        let mut weight_lost_count = 0;

        let athletes = snapshot
            .athletes
            .iter()
            .filter(|candidate| candidate.status == AthleteStatus::Active)
            .filter(|candidate| athlete.is_none_or(|id| candidate.id == id));

        for roster_athlete in athletes {
            let mut in_window: Vec<&Assessment> = snapshot
                .assessments
                .iter()
                .filter(|assessment| {
                    assessment.athlete_id == roster_athlete.id
                        && snapshot.window.contains(assessment.date)
                })
                .collect();
            in_window.sort_by_key(|assessment| assessment.date);

            let (Some(first), Some(last)) = (in_window.first(), in_window.last()) else {
                continue;
            };
            if first.id == last.id {
                continue;
            }

            if let (Some(first_weight), Some(last_weight)) = (first.weight, last.weight) {
                if last_weight > first_weight {
                    weight_gained_count += 1;
                } else if last_weight < first_weight {
                    weight_lost_count += 1;
                }
            }

            let first_perf = first.jump_height.unwrap_or(0.0) + first.throw_distance.unwrap_or(0.0);
            let last_perf = last.jump_height.unwrap_or(0.0) + last.throw_distance.unwrap_or(0.0);
            if last_perf > first_perf {
                improved_count += 1;
            } else if last_perf < first_perf {
                declined_count += 1;
            }
        }

        let feedback: Vec<_> = snapshot
            .session_feedback
            .iter()
            .filter(|record| athlete.is_none_or(|id| record.athlete_id == id))
            .collect();
        let present = feedback
            .iter()
            .filter(|record| record.attendance == Attendance::Present)
            .count();
        let average_attendance = if feedback.is_empty() {
            0.0
        } else {
            round2(present as f64 / feedback.len() as f64 * 100.0)
        };

        AthletesDashboard {
            improved_count,
            declined_count,
            average_attendance,
            weight_gained_count,
            weight_lost_count,
        }
    }
}
