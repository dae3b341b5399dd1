//! StartJourneyHandler - Command handler for opening a learner's journey.
//!
//! Restores stored progress when there is any, otherwise creates the
//! session-start state. The normalised map is written back so later reads
//! see exactly the curriculum's steps.

use std::sync::Arc;

use tracing::info;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::{CommandMetadata, LearnerId};
use crate::domain::journey::{JourneyError, JourneyState};
use crate::ports::ProgressRepository;

/// Command to start or resume a journey.
#[derive(Debug, Clone)]
pub struct StartJourneyCommand {
    pub learner_id: LearnerId,
}

/// Result of starting a journey.
#[derive(Debug, Clone)]
pub struct StartJourneyResult {
    pub state: JourneyState,
    /// True when stored progress was found.
    pub resumed: bool,
}

/// Handler for starting journeys.
pub struct StartJourneyHandler {
    curriculum: Arc<Curriculum>,
    repository: Arc<dyn ProgressRepository>,
}

impl StartJourneyHandler {
    pub fn new(curriculum: Arc<Curriculum>, repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            curriculum,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartJourneyCommand,
        metadata: CommandMetadata,
    ) -> Result<StartJourneyResult, JourneyError> {
        let persisted = self.repository.load(&cmd.learner_id).await?;
        let resumed = persisted.is_some();

        let state = match persisted {
            Some(progress) => {
                let state = JourneyState::restore(Arc::clone(&self.curriculum), progress.clone());
                if state.progress() != &progress {
                    self.repository.save(&cmd.learner_id, state.progress()).await?;
                }
                state
            }
            None => {
                let state = JourneyState::start(Arc::clone(&self.curriculum));
                self.repository.save(&cmd.learner_id, state.progress()).await?;
                state
            }
        };

        info!(
            learner_id = %cmd.learner_id,
            correlation_id = %metadata.correlation_id(),
            resumed,
            "journey started"
        );

        Ok(StartJourneyResult { state, resumed })
    }
}
