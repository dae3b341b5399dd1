//! GetJourneyOverviewHandler - Query handler for the journey map.

use std::sync::Arc;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::LearnerId;
use crate::domain::journey::{JourneyError, JourneyOverview};
use crate::ports::ProgressRepository;

use super::load_state;

/// Query for a learner's journey map.
#[derive(Debug, Clone)]
pub struct GetJourneyOverviewQuery {
    pub learner_id: LearnerId,
}

/// Handler for the journey overview.
pub struct GetJourneyOverviewHandler {
    curriculum: Arc<Curriculum>,
    repository: Arc<dyn ProgressRepository>,
}

impl GetJourneyOverviewHandler {
    pub fn new(curriculum: Arc<Curriculum>, repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            curriculum,
            repository,
        }
    }

    pub async fn handle(
        &self,
        query: GetJourneyOverviewQuery,
    ) -> Result<JourneyOverview, JourneyError> {
        let state = load_state(self.repository.as_ref(), &self.curriculum, &query.learner_id).await?;
        Ok(state.overview())
    }
}
