use std::env;

/// Which rule decides team swimming volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwimVolumeBasis {
    /// Sum planned volume over plan sessions in the window.
    PlannedOnly,
    /// Sum only sessions that have at least one Present feedback record.
    AttendanceBased,
}

/// What a qualifying subdivision contributes to a functional-direction
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionMeasure {
    /// Distance times reps, in meters. Non-positive volumes are skipped.
    Volume,
    /// One per subdivision.
    Count,
}

/// How target ER/RE markers are averaged over planned subdivisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAverage {
    /// Weighted by subdivision distance.
    DistanceWeighted,
    /// Plain mean of non-null markers.
    Simple,
}

/// Strategy selection for the aggregation rules that have shifted between
/// product revisions. Defaults follow the latest agreed behavior; hosts can
/// override through the environment until the variants are settled with
/// stakeholders.
#[derive(Debug, Clone)]
pub struct AggregationPolicy {
    pub swim_volume_basis: SwimVolumeBasis,
    pub direction_measure: DirectionMeasure,
    pub target_average: TargetAverage,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            swim_volume_basis: SwimVolumeBasis::PlannedOnly,
            direction_measure: DirectionMeasure::Volume,
            target_average: TargetAverage::DistanceWeighted,
        }
    }
}

impl AggregationPolicy {
    /// Read the policy from environment variables, falling back to the
    /// defaults for anything missing or unrecognized.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let swim_volume_basis = match env::var("SWIM_VOLUME_BASIS").ok().as_deref() {
            Some("attendance") => SwimVolumeBasis::AttendanceBased,
            Some("planned") => SwimVolumeBasis::PlannedOnly,
            _ => defaults.swim_volume_basis,
        };
        let direction_measure = match env::var("DIRECTION_MEASURE").ok().as_deref() {
            Some("count") => DirectionMeasure::Count,
            Some("volume") => DirectionMeasure::Volume,
            _ => defaults.direction_measure,
        };
        let target_average = match env::var("TARGET_AVERAGE").ok().as_deref() {
            Some("simple") => TargetAverage::Simple,
            Some("weighted") => TargetAverage::DistanceWeighted,
            _ => defaults.target_average,
        };

        Self {
            swim_volume_basis,
            direction_measure,
            target_average,
        }
    }
}
