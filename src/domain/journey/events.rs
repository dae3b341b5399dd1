//! Journey domain events.
//!
//! Published by the application layer after a completion has been
//! persisted. The aggregate id of every event is the learner id.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventEnvelope, EventId, LearnerId, PhaseId, SectionId, StepId, Timestamp,
};

/// A step moved to `completed` for the first time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepCompleted {
    pub event_id: EventId,
    pub learner_id: LearnerId,
    pub step_id: StepId,
    pub section_id: SectionId,
    pub phase_id: PhaseId,
    pub completed_at: Timestamp,
}

domain_event!(
    StepCompleted,
    event_type = "journey.step_completed.v1",
    aggregate_id = learner_id,
    aggregate_type = "Journey",
    occurred_at = completed_at,
    event_id = event_id
);

/// The frontier advanced to a previously locked step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepUnlocked {
    pub event_id: EventId,
    pub learner_id: LearnerId,
    pub step_id: StepId,
    pub phase_id: PhaseId,
    /// True when the unlock crossed into a different phase.
    pub entered_new_phase: bool,
    pub unlocked_at: Timestamp,
}

domain_event!(
    StepUnlocked,
    event_type = "journey.step_unlocked.v1",
    aggregate_id = learner_id,
    aggregate_type = "Journey",
    occurred_at = unlocked_at,
    event_id = event_id
);

/// Every step of the curriculum is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyFinished {
    pub event_id: EventId,
    pub learner_id: LearnerId,
    pub finished_at: Timestamp,
}

domain_event!(
    JourneyFinished,
    event_type = "journey.finished.v1",
    aggregate_id = learner_id,
    aggregate_type = "Journey",
    occurred_at = finished_at,
    event_id = event_id
);

/// Any event emitted by a journey transition.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyEvent {
    StepCompleted(StepCompleted),
    StepUnlocked(StepUnlocked),
    JourneyFinished(JourneyFinished),
}

impl JourneyEvent {
    /// Wraps the event for transport.
    pub fn to_envelope(&self) -> EventEnvelope {
        match self {
            JourneyEvent::StepCompleted(e) => EventEnvelope::from_event(e),
            JourneyEvent::StepUnlocked(e) => EventEnvelope::from_event(e),
            JourneyEvent::JourneyFinished(e) => EventEnvelope::from_event(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_completed_envelope_routes_by_learner() {
        let event = StepCompleted {
            event_id: EventId::new(),
            learner_id: LearnerId::new("learner-1").unwrap(),
            step_id: StepId::new("s1").unwrap(),
            section_id: SectionId::new("sec1").unwrap(),
            phase_id: PhaseId::new("a").unwrap(),
            completed_at: Timestamp::now(),
        };

        let envelope = JourneyEvent::StepCompleted(event.clone()).to_envelope();

        assert_eq!(envelope.event_type, "journey.step_completed.v1");
        assert_eq!(envelope.aggregate_id, "learner-1");
        assert_eq!(envelope.aggregate_type, "Journey");
        assert_eq!(envelope.payload_as::<StepCompleted>().unwrap(), event);
    }

    #[test]
    fn journey_finished_payload_carries_learner() {
        let envelope = JourneyEvent::JourneyFinished(JourneyFinished {
            event_id: EventId::new(),
            learner_id: LearnerId::new("learner-2").unwrap(),
            finished_at: Timestamp::now(),
        })
        .to_envelope();

        assert_eq!(envelope.payload["learner_id"], "learner-2");
    }
}
