//! Journey handlers.
//!
//! Commands:
//! - `StartJourneyHandler` - restore or create a learner's progress
//! - `CompleteStepHandler` - complete a step, persist, publish events
//!
//! Queries:
//! - `GetJourneyOverviewHandler` - journey map read model
//! - `GetStepNavigationHandler` - in-section paging for a step

mod complete_step;
mod get_journey_overview;
mod get_step_navigation;
mod start_journey;

pub use complete_step::{CompleteStepCommand, CompleteStepHandler, CompleteStepResult};
pub use get_journey_overview::{GetJourneyOverviewHandler, GetJourneyOverviewQuery};
pub use get_step_navigation::{GetStepNavigationHandler, GetStepNavigationQuery, StepNavigationView};
pub use start_journey::{StartJourneyCommand, StartJourneyHandler, StartJourneyResult};

use std::sync::Arc;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::LearnerId;
use crate::domain::journey::{JourneyError, JourneyState};
use crate::ports::ProgressRepository;

/// Loads a learner's stored progress against the curriculum.
async fn load_state(
    repository: &dyn ProgressRepository,
    curriculum: &Arc<Curriculum>,
    learner_id: &LearnerId,
) -> Result<JourneyState, JourneyError> {
    let persisted = repository
        .load(learner_id)
        .await?
        .ok_or_else(|| JourneyError::not_started(learner_id.clone()))?;
    Ok(JourneyState::restore(Arc::clone(curriculum), persisted))
}
