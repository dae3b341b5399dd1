//! GetStepNavigationHandler - Query handler for step paging.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::{LearnerId, ProgressStatus, StepId};
use crate::domain::journey::{JourneyError, StepNavigation};
use crate::ports::ProgressRepository;

use super::load_state;

/// Query for a step's neighbours.
#[derive(Debug, Clone)]
pub struct GetStepNavigationQuery {
    pub learner_id: LearnerId,
    pub step_id: StepId,
}

/// Navigation plus the statuses a step screen needs to render its buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepNavigationView {
    pub navigation: StepNavigation,
    pub status: ProgressStatus,
    /// Whether the in-section next step can be opened yet.
    pub next_accessible: bool,
}

/// Handler for step navigation.
pub struct GetStepNavigationHandler {
    curriculum: Arc<Curriculum>,
    repository: Arc<dyn ProgressRepository>,
}

impl GetStepNavigationHandler {
    pub fn new(curriculum: Arc<Curriculum>, repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            curriculum,
            repository,
        }
    }

    pub async fn handle(
        &self,
        query: GetStepNavigationQuery,
    ) -> Result<StepNavigationView, JourneyError> {
        let state = load_state(self.repository.as_ref(), &self.curriculum, &query.learner_id).await?;

        let navigation = state
            .navigation(&query.step_id)
            .ok_or_else(|| JourneyError::step_not_found(query.step_id.clone()))?;
        let status = state.status_of(&query.step_id).unwrap_or_default();
        let next_accessible = navigation
            .next
            .as_ref()
            .is_some_and(|next| state.is_accessible(next));

        Ok(StepNavigationView {
            navigation,
            status,
            next_accessible,
        })
    }
}
