use uuid::Uuid;

use crate::models::{Wellness, WellnessDashboard};
use crate::services::round1;
use crate::store::CycleSnapshot;

/// Averages the four subjective wellness scores over a cycle window.
///
/// Each score is averaged independently over its non-null samples; a score
/// with no samples comes back null, never zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellnessAggregator;

impl WellnessAggregator {
    pub fn calculate(&self, snapshot: &CycleSnapshot, athlete: Option<Uuid>) -> WellnessDashboard {
        let records: Vec<&Wellness> = snapshot
            .wellness
            .iter()
            .filter(|record| athlete.is_none_or(|id| record.athlete_id == id))
            .collect();

        WellnessDashboard {
            avg_sleep: mean(records.iter().filter_map(|record| record.sleep_quality)),
            avg_fatigue: mean(records.iter().filter_map(|record| record.fatigue_level)),
            avg_stress: mean(records.iter().filter_map(|record| record.stress_level)),
            avg_muscle_soreness: mean(records.iter().filter_map(|record| record.muscle_soreness)),
        }
    }
}

fn mean(values: impl Iterator<Item = u8>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += f64::from(value);
        count += 1;
    }
    (count > 0).then(|| round1(sum / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CycleWindow;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn record(
        athlete_id: Uuid,
        sleep: Option<u8>,
        fatigue: Option<u8>,
        soreness: Option<u8>,
        stress: Option<u8>,
    ) -> Wellness {
        Wellness {
            id: Uuid::new_v4(),
            athlete_id,
            date: date(3),
            sleep_quality: sleep,
            fatigue_level: fatigue,
            muscle_soreness: soreness,
            stress_level: stress,
        }
    }

    fn snapshot() -> CycleSnapshot {
        CycleSnapshot::new(CycleWindow::new(date(1), date(7)))
    }

    #[test]
    fn averages_skip_null_samples_per_field() {
        let mut snapshot = snapshot();
        let athlete_id = Uuid::new_v4();
        snapshot.wellness.push(record(athlete_id, Some(8), Some(4), None, None));
        snapshot.wellness.push(record(athlete_id, Some(6), None, None, Some(2)));
        snapshot.wellness.push(record(athlete_id, None, Some(5), None, None));

        let result = WellnessAggregator.calculate(&snapshot, None);

        assert_eq!(result.avg_sleep, Some(7.0));
        assert_eq!(result.avg_fatigue, Some(4.5));
        assert_eq!(result.avg_stress, Some(2.0));
        // No soreness sample anywhere: null, not zero.
        assert_eq!(result.avg_muscle_soreness, None);
    }

    #[test]
    fn no_records_yield_all_nulls() {
        let result = WellnessAggregator.calculate(&snapshot(), None);

        assert_eq!(
            result,
            WellnessDashboard {
                avg_sleep: None,
                avg_fatigue: None,
                avg_stress: None,
                avg_muscle_soreness: None,
            }
        );
    }

    #[test]
    fn athlete_filter_restricts_samples() {
        let mut snapshot = snapshot();
        let athlete_id = Uuid::new_v4();
        snapshot.wellness.push(record(athlete_id, Some(9), None, None, None));
        snapshot.wellness.push(record(Uuid::new_v4(), Some(3), None, None, None));

        let result = WellnessAggregator.calculate(&snapshot, Some(athlete_id));

        assert_eq!(result.avg_sleep, Some(9.0));
    }
}
