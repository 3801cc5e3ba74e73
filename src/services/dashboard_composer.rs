use tracing::info;
use uuid::Uuid;

use crate::config::AggregationPolicy;
use crate::error::DashboardError;
use crate::models::{CycleLevel, MacroDashboard, MesoDashboard, MicroDashboard};
use crate::services::{
    AthleteProgressCalculator, FunctionalDirectionAggregator, GymLoadCalculator,
    RelativeLoadCalculator, SwimmingVolumeCalculator, TargetMarkerCalculator, WellnessAggregator,
};
use crate::store::{CycleSnapshot, TrainingStore};

/// Composes the per-cycle dashboards out of the metric calculators.
///
/// Stateless per request: each call resolves the cycle window, loads one
/// read-snapshot and runs every calculator against that same snapshot.
#[derive(Debug, Clone)]
pub struct CycleDashboardService<S: TrainingStore> {
    store: S,
    swimming: SwimmingVolumeCalculator,
    gym: GymLoadCalculator,
    athletes: AthleteProgressCalculator,
    wellness: WellnessAggregator,
    directions: FunctionalDirectionAggregator,
    relative_load: RelativeLoadCalculator,
    targets: TargetMarkerCalculator,
}

impl<S: TrainingStore> CycleDashboardService<S> {
    pub fn new(store: S, policy: AggregationPolicy) -> Self {
        Self {
            swimming: SwimmingVolumeCalculator::new(policy.clone()),
            gym: GymLoadCalculator,
            athletes: AthleteProgressCalculator,
            wellness: WellnessAggregator,
            directions: FunctionalDirectionAggregator::new(policy.clone()),
            relative_load: RelativeLoadCalculator,
            targets: TargetMarkerCalculator::new(policy),
            store,
        }
    }

    /// Season-level dashboard: swimming, detailed gym, athlete progress,
    /// wellness and relative load. No functional direction or ER/RE targets
    /// at this level.
    pub async fn macro_dashboard(&self, id: Uuid) -> Result<MacroDashboard, DashboardError> {
        info!(%id, "building macro cycle dashboard");
        let snapshot = self.snapshot(CycleLevel::Macro, id).await?;

        let gym = self.gym.calculate(&snapshot, None, true);
        let relative_load = self.relative_load.calculate(&snapshot, gym.total_load, None);

        Ok(MacroDashboard {
            swimming: self.swimming.calculate(&snapshot, None),
            athletes: self.athletes.calculate(&snapshot, None),
            wellness: self.wellness.calculate(&snapshot, None),
            gym,
            relative_load,
        })
    }

    /// Block-level dashboard: the macro metrics plus functional-direction
    /// buckets and the planned ER/RE targets.
    pub async fn meso_dashboard(&self, id: Uuid) -> Result<MesoDashboard, DashboardError> {
        info!(%id, "building meso cycle dashboard");
        let snapshot = self.snapshot(CycleLevel::Meso, id).await?;

        let gym = self.gym.calculate(&snapshot, None, true);
        let relative_load = self.relative_load.calculate(&snapshot, gym.total_load, None);
        let targets = self.targets.calculate(&snapshot);

        Ok(MesoDashboard {
            swimming: self.swimming.calculate(&snapshot, None),
            athletes: self.athletes.calculate(&snapshot, None),
            wellness: self.wellness.calculate(&snapshot, None),
            functional_direction: self.directions.calculate(&snapshot, None),
            target_er: targets.target_er,
            target_re: targets.target_re,
            gym,
            relative_load,
        })
    }

    /// Week-level dashboard. The optional athlete id narrows every metric
    /// to an individual drill-down.
    pub async fn micro_dashboard(
        &self,
        id: Uuid,
        athlete_id: Option<Uuid>,
    ) -> Result<MicroDashboard, DashboardError> {
        info!(%id, ?athlete_id, "building micro cycle dashboard");
        let snapshot = self.snapshot(CycleLevel::Micro, id).await?;

        let gym = self.gym.calculate(&snapshot, athlete_id, true);
        let relative_load = self
            .relative_load
            .calculate(&snapshot, gym.total_load, athlete_id);

        Ok(MicroDashboard {
            swimming: self.swimming.calculate(&snapshot, athlete_id),
            athletes: self.athletes.calculate(&snapshot, athlete_id),
            wellness: self.wellness.calculate(&snapshot, athlete_id),
            functional_direction: self.directions.calculate(&snapshot, athlete_id),
            gym,
            relative_load,
        })
    }

    async fn snapshot(
        &self,
        level: CycleLevel,
        id: Uuid,
    ) -> Result<CycleSnapshot, DashboardError> {
        let window = self
            .store
            .cycle_window(level, id)
            .await?
            .ok_or(DashboardError::CycleNotFound { level, id })?;
        // The CRUD layer should never persist an inverted window; reject it
        // here rather than aggregate over a window that matches nothing.
        if !window.is_valid() {
            return Err(DashboardError::InvalidWindow {
                start: window.start,
                end: window.end,
            });
        }
        Ok(self.store.load_snapshot(&window).await?)
    }
}
