use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    Assessment, Athlete, CycleLevel, CycleWindow, FunctionalDirectionRange, GymSession,
    SessionFeedback, TrainingSession, Wellness,
};

pub mod memory;

pub use memory::MemoryStore;

/// One consistent read of everything a dashboard request needs.
///
/// A snapshot is loaded once per request and handed to every calculator, so
/// a single dashboard can never observe different data versions for
/// different metrics.
#[derive(Debug, Clone)]
pub struct CycleSnapshot {
    pub window: CycleWindow,
    /// Swim sessions dated inside the window, plans and executions alike.
    pub sessions: Vec<TrainingSession>,
    /// Feedback records belonging to `sessions`.
    pub session_feedback: Vec<SessionFeedback>,
    /// Gym sessions dated inside the window, feedback nested.
    pub gym_sessions: Vec<GymSession>,
    /// Every athlete on the roster, regardless of status.
    pub athletes: Vec<Athlete>,
    /// Assessments dated at or before the window end. This is a superset
    /// of the window: weight resolution walks back into history.
    pub assessments: Vec<Assessment>,
    /// Wellness records dated inside the window.
    pub wellness: Vec<Wellness>,
    /// The configured functional-direction catalog, in catalog order.
    pub directions: Vec<FunctionalDirectionRange>,
}

impl CycleSnapshot {
    pub fn new(window: CycleWindow) -> Self {
        Self {
            window,
            sessions: Vec::new(),
            session_feedback: Vec::new(),
            gym_sessions: Vec::new(),
            athletes: Vec::new(),
            assessments: Vec::new(),
            wellness: Vec::new(),
            directions: Vec::new(),
        }
    }
}

/// Read-only data-access seam the engine consumes. The host application
/// owns persistence; implementations must honor the field contracts
/// documented on [`CycleSnapshot`].
#[async_trait]
pub trait TrainingStore: Send + Sync {
    /// Resolve a cycle's date window, or `None` when the id is unknown.
    async fn cycle_window(&self, level: CycleLevel, id: Uuid) -> Result<Option<CycleWindow>>;

    /// Load the full read-snapshot for a window.
    async fn load_snapshot(&self, window: &CycleWindow) -> Result<CycleSnapshot>;
}
