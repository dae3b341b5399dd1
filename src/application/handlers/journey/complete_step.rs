//! CompleteStepHandler - Command handler for completing a step.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::{CommandMetadata, EventEnvelope, LearnerId, StepId};
use crate::domain::journey::{
    apply_completion, JourneyError, JourneyEvent, JourneyState, TransitionOutcome,
};
use crate::ports::{EventPublisher, ProgressRepository};

use super::load_state;

/// Command to complete a step.
#[derive(Debug, Clone)]
pub struct CompleteStepCommand {
    pub learner_id: LearnerId,
    pub step_id: StepId,
}

/// Result of completing a step.
#[derive(Debug, Clone)]
pub struct CompleteStepResult {
    pub state: JourneyState,
    pub outcome: TransitionOutcome,
    /// Events emitted by this completion, in publish order.
    pub events: Vec<JourneyEvent>,
}

/// Handler for step completion.
///
/// Unknown step ids and repeated completions that change nothing are
/// answered without touching storage or the event bus.
pub struct CompleteStepHandler {
    curriculum: Arc<Curriculum>,
    repository: Arc<dyn ProgressRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    publish_events: bool,
}

impl CompleteStepHandler {
    pub fn new(
        curriculum: Arc<Curriculum>,
        repository: Arc<dyn ProgressRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            curriculum,
            repository,
            event_publisher,
            publish_events: true,
        }
    }

    /// Builder: toggle event publication.
    pub fn with_publish_events(mut self, enabled: bool) -> Self {
        self.publish_events = enabled;
        self
    }

    pub async fn handle(
        &self,
        cmd: CompleteStepCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteStepResult, JourneyError> {
        // 1. Load current state
        let state = load_state(self.repository.as_ref(), &self.curriculum, &cmd.learner_id).await?;

        // 2. Apply the transition
        let transition = apply_completion(&state, &cmd.step_id);
        if !transition.changed() {
            debug!(
                learner_id = %cmd.learner_id,
                step_id = %cmd.step_id,
                outcome = ?transition.outcome,
                "completion changed nothing"
            );
            return Ok(CompleteStepResult {
                state: transition.state,
                outcome: transition.outcome,
                events: Vec::new(),
            });
        }

        // 3. Persist
        self.repository
            .save(&cmd.learner_id, transition.state.progress())
            .await?;

        // 4. Publish
        let events = transition.events(&cmd.learner_id);
        if self.publish_events && !events.is_empty() {
            let correlation_id = metadata.correlation_id();
            let envelopes: Vec<EventEnvelope> = events
                .iter()
                .map(|event| {
                    let envelope = event
                        .to_envelope()
                        .with_correlation_id(correlation_id.clone())
                        .with_learner_id(metadata.learner_id.to_string());
                    match metadata.source() {
                        Some(source) => envelope.with_source(source),
                        None => envelope,
                    }
                })
                .collect();
            self.event_publisher.publish_all(envelopes).await?;
        }

        info!(
            learner_id = %cmd.learner_id,
            step_id = %cmd.step_id,
            outcome = ?transition.outcome,
            events = events.len(),
            "step completed"
        );

        Ok(CompleteStepResult {
            state: transition.state,
            outcome: transition.outcome,
            events,
        })
    }
}
