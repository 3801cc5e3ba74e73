use crate::config::{AggregationPolicy, TargetAverage};
use crate::models::TargetMarkers;
use crate::services::round2;
use crate::store::CycleSnapshot;

/// Averages the planned DA-ER and DA-RE markers over plan subdivisions in
/// the window. Whether the average is distance-weighted or a plain mean is
/// a policy decision.
#[derive(Debug, Clone)]
pub struct TargetMarkerCalculator {
    policy: AggregationPolicy,
}

impl TargetMarkerCalculator {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    pub fn calculate(&self, snapshot: &CycleSnapshot) -> TargetMarkers {
        let subdivisions = snapshot
            .sessions
            .iter()
            .filter(|session| session.origin.is_plan())
            .flat_map(|session| session.series.iter())
            .flat_map(|series| series.subdivisions.iter());

        match self.policy.target_average {
            TargetAverage::DistanceWeighted => {
                let mut er_weighted = 0.0;
                let mut er_distance = 0.0;
                let mut re_weighted = 0.0;
                let mut re_distance = 0.0;

                for subdivision in subdivisions {
                    if subdivision.distance <= 0.0 {
                        continue;
                    }
                    if let Some(er) = subdivision.da_er {
                        er_weighted += er * subdivision.distance;
                        er_distance += subdivision.distance;
                    }
                    if let Some(re) = subdivision.da_re {
                        re_weighted += re * subdivision.distance;
                        re_distance += subdivision.distance;
                    }
                }

                TargetMarkers {
                    target_er: (er_distance > 0.0).then(|| round2(er_weighted / er_distance)),
                    target_re: (re_distance > 0.0).then(|| round2(re_weighted / re_distance)),
                }
            }
            TargetAverage::Simple => {
                let mut er_sum = 0.0;
                let mut er_count = 0usize;
                let mut re_sum = 0.0;
                let mut re_count = 0usize;

                for subdivision in subdivisions {
                    if let Some(er) = subdivision.da_er {
                        er_sum += er;
                        er_count += 1;
                    }
                    if let Some(re) = subdivision.da_re {
                        re_sum += re;
                        re_count += 1;
                    }
                }

                TargetMarkers {
                    target_er: (er_count > 0).then(|| round2(er_sum / er_count as f64)),
                    target_re: (re_count > 0).then(|| round2(re_sum / re_count as f64)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CycleWindow, SessionOrigin, SessionStatus, TrainingSeries, TrainingSession,
        TrainingSubdivision, TrainingZone,
    };
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn marked(distance: f64, da_er: Option<f64>, da_re: Option<f64>) -> TrainingSubdivision {
        TrainingSubdivision {
            id: Uuid::new_v4(),
            order: 1,
            zone: TrainingZone::Ddr,
            distance,
            reps: 1,
            functional_base: None,
            da_re,
            da_er,
        }
    }

    fn plan_with(subdivisions: Vec<TrainingSubdivision>) -> TrainingSession {
        TrainingSession {
            id: Uuid::new_v4(),
            date: date(2),
            status: SessionStatus::Planned,
            origin: SessionOrigin::Plan,
            series: vec![TrainingSeries {
                id: Uuid::new_v4(),
                order: 1,
                name: None,
                subdivisions,
            }],
        }
    }

    fn snapshot() -> CycleSnapshot {
        CycleSnapshot::new(CycleWindow::new(date(1), date(7)))
    }

    #[test]
    fn distance_weighted_average() {
        let mut snapshot = snapshot();
        snapshot.sessions.push(plan_with(vec![
            marked(100.0, Some(2.0), None),
            marked(300.0, Some(4.0), Some(6.0)),
        ]));

        let policy = AggregationPolicy::default();
        let result = TargetMarkerCalculator::new(policy).calculate(&snapshot);

        // ER: (2*100 + 4*300) / 400 = 3.5; RE only from the second subdivision.
        assert_eq!(result.target_er, Some(3.5));
        assert_eq!(result.target_re, Some(6.0));
    }

    #[test]
    fn simple_average_ignores_distance() {
        let mut snapshot = snapshot();
        snapshot.sessions.push(plan_with(vec![
            marked(100.0, Some(2.0), None),
            marked(300.0, Some(4.0), None),
        ]));

        let policy = AggregationPolicy {
            target_average: TargetAverage::Simple,
            ..AggregationPolicy::default()
        };
        let result = TargetMarkerCalculator::new(policy).calculate(&snapshot);

        assert_eq!(result.target_er, Some(3.0));
        assert_eq!(result.target_re, None);
    }

    #[test]
    fn no_markers_yield_nulls() {
        let mut snapshot = snapshot();
        snapshot.sessions.push(plan_with(vec![marked(100.0, None, None)]));

        let result = TargetMarkerCalculator::new(AggregationPolicy::default()).calculate(&snapshot);

        assert_eq!(result.target_er, None);
        assert_eq!(result.target_re, None);
    }

    #[test]
    fn weighted_average_skips_zero_distance() {
        let mut snapshot = snapshot();
        snapshot.sessions.push(plan_with(vec![
            marked(0.0, Some(9.0), None),
            marked(200.0, Some(3.0), None),
        ]));

        let result = TargetMarkerCalculator::new(AggregationPolicy::default()).calculate(&snapshot);

        assert_eq!(result.target_er, Some(3.0));
    }
}
