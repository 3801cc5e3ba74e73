use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Assessment, AthleteStatus};
use crate::services::round2;
use crate::store::CycleSnapshot;

/// Divides an aggregate load by body weight: one athlete's weight for the
/// individual view, the summed weight of the Active roster for the team.
///
/// Weight is resolved from assessment history, the most recent record with
/// a weight dated at or before the window end. Null when the load is not
/// positive or no weight can be resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeLoadCalculator;

impl RelativeLoadCalculator {
    pub fn calculate(
        &self,
        snapshot: &CycleSnapshot,
        total_load: f64,
        athlete: Option<Uuid>,
    ) -> Option<f64> {
        if total_load <= 0.0 {
            return None;
        }

        let end = snapshot.window.end;
        let total_weight = match athlete {
            Some(athlete_id) => {
                weight_as_of(&snapshot.assessments, athlete_id, end).unwrap_or(0.0)
            }
            None => snapshot
                .athletes
                .iter()
                .filter(|roster| roster.status == AthleteStatus::Active)
                // Athletes with no qualifying assessment contribute 0.
                .map(|roster| weight_as_of(&snapshot.assessments, roster.id, end).unwrap_or(0.0))
                .sum(),
        };

        (total_weight > 0.0).then(|| round2(total_load / total_weight))
    }
}

/// Most recent weight for an athlete at or before the given date.
fn weight_as_of(assessments: &[Assessment], athlete_id: Uuid, on: NaiveDate) -> Option<f64> {
    assessments
        .iter()
        .filter(|assessment| {
            assessment.athlete_id == athlete_id
                && assessment.date <= on
                && assessment.weight.is_some()
        })
        .max_by_key(|assessment| assessment.date)
        .and_then(|assessment| assessment.weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Athlete, CycleWindow};
    use pretty_assertions::assert_eq;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn weight_assessment(athlete_id: Uuid, on: NaiveDate, weight: Option<f64>) -> Assessment {
        Assessment {
            id: Uuid::new_v4(),
            athlete_id,
            date: on,
            weight,
            jump_height: None,
            throw_distance: None,
        }
    }

    fn roster_athlete(status: AthleteStatus) -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            name: "Bruno Lima".to_string(),
            status,
        }
    }

    fn snapshot() -> CycleSnapshot {
        CycleSnapshot::new(CycleWindow::new(date(1, 1), date(1, 7)))
    }

    #[test]
    fn zero_load_is_null_regardless_of_weight() {
        let mut snapshot = snapshot();
        let athlete_id = Uuid::new_v4();
        snapshot
            .assessments
            .push(weight_assessment(athlete_id, date(1, 2), Some(75.0)));

        assert_eq!(
            RelativeLoadCalculator.calculate(&snapshot, 0.0, Some(athlete_id)),
            None
        );
    }

    #[test]
    fn unresolvable_weight_is_null_regardless_of_load() {
        let snapshot = snapshot();
        assert_eq!(
            RelativeLoadCalculator.calculate(&snapshot, 300.0, Some(Uuid::new_v4())),
            None
        );
    }

    #[test]
    fn individual_view_uses_most_recent_weight_at_or_before_end() {
        let mut snapshot = snapshot();
        let athlete_id = Uuid::new_v4();
        snapshot
            .assessments
            .push(weight_assessment(athlete_id, date(1, 2), Some(70.0)));
        snapshot
            .assessments
            .push(weight_assessment(athlete_id, date(1, 5), Some(75.0)));
        // A weightless record later must not shadow the resolved weight.
        snapshot
            .assessments
            .push(weight_assessment(athlete_id, date(1, 6), None));

        assert_eq!(
            RelativeLoadCalculator.calculate(&snapshot, 300.0, Some(athlete_id)),
            Some(4.0)
        );
    }

    #[test]
    fn team_view_sums_active_roster_weights() {
        let mut snapshot = snapshot();
        let first = roster_athlete(AthleteStatus::Active);
        let second = roster_athlete(AthleteStatus::Active);
        let blocked = roster_athlete(AthleteStatus::Blocked);
        let unweighed = roster_athlete(AthleteStatus::Active);
        snapshot
            .assessments
            .push(weight_assessment(first.id, date(1, 2), Some(70.0)));
        snapshot
            .assessments
            .push(weight_assessment(second.id, date(1, 3), Some(80.0)));
        snapshot
            .assessments
            .push(weight_assessment(blocked.id, date(1, 3), Some(90.0)));
        snapshot.athletes.extend([first, second, blocked, unweighed]);

        assert_eq!(
            RelativeLoadCalculator.calculate(&snapshot, 300.0, None),
            Some(2.0)
        );
    }
}
