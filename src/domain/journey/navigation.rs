//! Step-to-step navigation resolver.
//!
//! Paging stays inside the step's own section in both directions.
//! Crossing into the next section or phase is the transition engine's job;
//! going back across a section boundary is not offered at all.

use serde::Serialize;

use crate::domain::curriculum::Step;
use crate::domain::foundation::StepId;

use super::JourneyState;

/// Neighbours of a step within its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepNavigation {
    pub step_id: StepId,
    pub previous: Option<StepId>,
    /// Returned regardless of lock status.
    pub next: Option<StepId>,
}

impl StepNavigation {
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl JourneyState {
    /// The step with `order - 1` in the same section.
    pub fn previous_step(&self, step_id: &StepId) -> Option<&Step> {
        let id = self.curriculum().previous_in_section(step_id)?;
        self.curriculum().step(id)
    }

    pub fn has_previous_step(&self, step_id: &StepId) -> bool {
        self.previous_step(step_id).is_some()
    }

    /// The step with `order + 1` in the same section.
    pub fn next_step(&self, step_id: &StepId) -> Option<&Step> {
        let id = self.curriculum().next_in_section(step_id)?;
        self.curriculum().step(id)
    }

    /// Both neighbours at once; `None` for unknown step ids.
    pub fn navigation(&self, step_id: &StepId) -> Option<StepNavigation> {
        self.step(step_id)?;
        Some(StepNavigation {
            step_id: step_id.clone(),
            previous: self.previous_step(step_id).map(|s| s.id.clone()),
            next: self.next_step(step_id).map(|s| s.id.clone()),
        })
    }
}
