//! Journey query service - pure reads over a `JourneyState`.
//!
//! Unknown ids never raise errors: lookups return `None`, collections come
//! back empty and derived values fall back to their empty forms. These run
//! on every render, including while state is still loading.

use serde::Serialize;

use crate::domain::curriculum::{Phase, Section, Step};
use crate::domain::foundation::{PhaseId, ProgressStatus, SectionId, StepId};

use super::{JourneyState, PhaseStatus, Progress};

/// One row of the journey map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSummary {
    pub id: PhaseId,
    pub slug: String,
    pub title: String,
    pub order: u32,
    pub status: PhaseStatus,
    pub progress: Progress,
}

/// Read model for the journey map view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyOverview {
    pub phases: Vec<PhaseSummary>,
    pub next_step: Option<StepId>,
    pub progress: Progress,
    pub finished: bool,
}

impl JourneyState {
    /// All phases sorted by `order`.
    pub fn phases_ordered(&self) -> Vec<&Phase> {
        self.curriculum().phases_ordered()
    }

    /// Sections of a phase sorted by `order`.
    pub fn sections_of_phase(&self, phase_id: &PhaseId) -> Vec<&Section> {
        self.curriculum().sections_of(phase_id)
    }

    /// Steps of a section sorted by `order`.
    pub fn steps_of_section(&self, section_id: &SectionId) -> Vec<&Step> {
        self.curriculum().steps_of(section_id)
    }

    pub fn step(&self, step_id: &StepId) -> Option<&Step> {
        self.curriculum().step(step_id)
    }

    pub fn section_for_step(&self, step_id: &StepId) -> Option<&Section> {
        self.curriculum().section_for_step(step_id)
    }

    pub fn phase_for_step(&self, step_id: &StepId) -> Option<&Phase> {
        self.curriculum().phase_for_step(step_id)
    }

    /// True when the learner may open the step (unlocked or completed).
    pub fn is_accessible(&self, step_id: &StepId) -> bool {
        self.status_of(step_id)
            .map(|s| s.is_accessible())
            .unwrap_or(false)
    }

    /// First unlocked step in phase, section, step order.
    ///
    /// `None` means the learner has no frontier: everything is completed or
    /// still locked.
    pub fn next_unlocked_step(&self) -> Option<&Step> {
        self.curriculum()
            .step_ids()
            .find(|id| self.status_of(id).is_some_and(|s| s.is_unlocked()))
            .and_then(|id| self.curriculum().step(id))
    }

    pub fn phase_progress(&self, phase_id: &PhaseId) -> Progress {
        Progress::tally(self.statuses(self.curriculum().step_ids_in_phase(phase_id)))
    }

    pub fn section_progress(&self, section_id: &SectionId) -> Progress {
        Progress::tally(self.statuses(self.curriculum().step_ids_in_section(section_id)))
    }

    /// Progress over the whole curriculum.
    pub fn journey_progress(&self) -> Progress {
        Progress::tally(self.progress().values().copied())
    }

    /// Derived status of a phase; unknown phases report `Locked`.
    pub fn phase_status(&self, phase_id: &PhaseId) -> PhaseStatus {
        PhaseStatus::derive(self.statuses(self.curriculum().step_ids_in_phase(phase_id)))
    }

    /// Derived status of a section, using the phase rules.
    pub fn section_status(&self, section_id: &SectionId) -> PhaseStatus {
        PhaseStatus::derive(self.statuses(self.curriculum().step_ids_in_section(section_id)))
    }

    /// True once every step is completed.
    pub fn is_finished(&self) -> bool {
        self.progress().values().all(ProgressStatus::is_completed)
    }

    /// Snapshot for the journey map.
    pub fn overview(&self) -> JourneyOverview {
        let phases = self
            .phases_ordered()
            .into_iter()
            .map(|phase| PhaseSummary {
                id: phase.id.clone(),
                slug: phase.slug.clone(),
                title: phase.title.clone(),
                order: phase.order,
                status: self.phase_status(&phase.id),
                progress: self.phase_progress(&phase.id),
            })
            .collect();

        JourneyOverview {
            phases,
            next_step: self.next_unlocked_step().map(|s| s.id.clone()),
            progress: self.journey_progress(),
            finished: self.is_finished(),
        }
    }

    fn statuses<'a>(
        &'a self,
        ids: Vec<&'a StepId>,
    ) -> impl Iterator<Item = ProgressStatus> + 'a {
        ids.into_iter()
            .map(move |id| self.status_of(id).unwrap_or_default())
    }
}
