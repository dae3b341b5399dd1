//! JourneyState aggregate root - curriculum plus the learner's progress map.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::{ProgressStatus, StepId};

/// Status of every step, keyed by step id.
pub type ProgressMap = BTreeMap<StepId, ProgressStatus>;

/// The single unit of truth shared by the query service and the
/// transition engine.
///
/// The progress map is total over the curriculum's steps. A state is never
/// mutated in place: transitions return a new `JourneyState` that shares the
/// same curriculum.
#[derive(Debug, Clone)]
pub struct JourneyState {
    curriculum: Arc<Curriculum>,
    progress: ProgressMap,
}

impl JourneyState {
    /// Creates the session-start state: every step locked except the first.
    pub fn start(curriculum: Arc<Curriculum>) -> Self {
        let mut progress: ProgressMap = curriculum
            .step_ids()
            .map(|id| (id.clone(), ProgressStatus::Locked))
            .collect();

        if let Some(first) = curriculum.first_step() {
            progress.insert(first.clone(), ProgressStatus::Unlocked);
        }

        Self {
            curriculum,
            progress,
        }
    }

    /// Rebuilds a state from a persisted progress map.
    ///
    /// Entries for steps no longer in the curriculum are dropped, missing
    /// steps default to `Locked`. When nothing is unlocked or completed the
    /// first step is unlocked, as in [`JourneyState::start`].
    pub fn restore(curriculum: Arc<Curriculum>, persisted: ProgressMap) -> Self {
        let mut progress: ProgressMap = curriculum
            .step_ids()
            .map(|id| (id.clone(), ProgressStatus::Locked))
            .collect();

        for (step_id, status) in persisted {
            match progress.get_mut(&step_id) {
                Some(slot) => *slot = status,
                None => warn!(%step_id, "dropping progress for step missing from curriculum"),
            }
        }

        let untouched = progress.values().all(ProgressStatus::is_locked);
        if untouched {
            return Self::start(curriculum);
        }

        Self {
            curriculum,
            progress,
        }
    }

    /// Returns the authored content.
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// Returns the progress map.
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    /// Returns the status of a step, `None` for unknown ids.
    pub fn status_of(&self, step_id: &StepId) -> Option<ProgressStatus> {
        self.progress.get(step_id).copied()
    }

    pub(crate) fn with_progress(&self, progress: ProgressMap) -> Self {
        Self {
            curriculum: Arc::clone(&self.curriculum),
            progress,
        }
    }
}

impl PartialEq for JourneyState {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.curriculum, &other.curriculum) || self.curriculum == other.curriculum)
            && self.progress == other.progress
    }
}
