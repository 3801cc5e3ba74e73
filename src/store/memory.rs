use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::models::{
    Assessment, Athlete, CycleLevel, CycleWindow, FunctionalDirectionRange, GymSession,
    SessionFeedback, TrainingSession, Wellness,
};
use crate::store::{CycleSnapshot, TrainingStore};

/// Vec-backed [`TrainingStore`] for tests and embedded hosts. Data is pushed
/// in whole-entity form and filtered per request, matching the snapshot
/// contracts of the production data layer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cycles: HashMap<(CycleLevel, Uuid), CycleWindow>,
    sessions: Vec<TrainingSession>,
    session_feedback: Vec<SessionFeedback>,
    gym_sessions: Vec<GymSession>,
    athletes: Vec<Athlete>,
    assessments: Vec<Assessment>,
    wellness: Vec<Wellness>,
    directions: Vec<FunctionalDirectionRange>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cycle(&mut self, level: CycleLevel, id: Uuid, window: CycleWindow) {
        self.cycles.insert((level, id), window);
    }

    pub fn push_session(&mut self, session: TrainingSession) {
        self.sessions.push(session);
    }

    pub fn push_session_feedback(&mut self, feedback: SessionFeedback) {
        self.session_feedback.push(feedback);
    }

    pub fn push_gym_session(&mut self, session: GymSession) {
        self.gym_sessions.push(session);
    }

    pub fn push_athlete(&mut self, athlete: Athlete) {
        self.athletes.push(athlete);
    }

    pub fn push_assessment(&mut self, assessment: Assessment) {
        self.assessments.push(assessment);
    }

    pub fn push_wellness(&mut self, wellness: Wellness) {
        self.wellness.push(wellness);
    }

    pub fn push_direction(&mut self, direction: FunctionalDirectionRange) {
        self.directions.push(direction);
    }
}

#[async_trait]
impl TrainingStore for MemoryStore {
    async fn cycle_window(&self, level: CycleLevel, id: Uuid) -> Result<Option<CycleWindow>> {
        Ok(self.cycles.get(&(level, id)).copied())
    }

    async fn load_snapshot(&self, window: &CycleWindow) -> Result<CycleSnapshot> {
        let sessions: Vec<TrainingSession> = self
            .sessions
            .iter()
            .filter(|session| window.contains(session.date))
            .cloned()
            .collect();
        let session_ids: HashSet<Uuid> = sessions.iter().map(|session| session.id).collect();

        Ok(CycleSnapshot {
            window: *window,
            session_feedback: self
                .session_feedback
                .iter()
                .filter(|feedback| session_ids.contains(&feedback.session_id))
                .cloned()
                .collect(),
            sessions,
            gym_sessions: self
                .gym_sessions
                .iter()
                .filter(|session| window.contains(session.date))
                .cloned()
                .collect(),
            athletes: self.athletes.clone(),
            assessments: self
                .assessments
                .iter()
                .filter(|assessment| assessment.date <= window.end)
                .cloned()
                .collect(),
            wellness: self
                .wellness
                .iter()
                .filter(|record| window.contains(record.date))
                .cloned()
                .collect(),
            directions: self.directions.clone(),
        })
    }
}
