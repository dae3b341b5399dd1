//! Presentation shell - transient view selection over a journey.
//!
//! The shell owns the canonical `JourneyState` for one learner session and
//! decides which screen is shown. Every navigability decision is delegated
//! to the query service; every progress change goes through the transition
//! engine.

use tracing::debug;

use crate::domain::foundation::{PhaseId, StepId};
use crate::domain::journey::{apply_completion, JourneyError, JourneyState, TransitionOutcome};

/// Which screen the learner is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// All phases with their status and progress.
    JourneyMap,
    /// Introduction screen for one phase.
    PhaseHero(PhaseId),
    /// A single step's content.
    StepScreen(StepId),
}

/// View-mode selector holding the learner's journey state.
#[derive(Debug, Clone)]
pub struct JourneyShell {
    state: JourneyState,
    view: ViewMode,
}

impl JourneyShell {
    /// Opens the shell on the journey map.
    pub fn new(state: JourneyState) -> Self {
        Self {
            state,
            view: ViewMode::JourneyMap,
        }
    }

    pub fn state(&self) -> &JourneyState {
        &self.state
    }

    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    /// Hands the state back, e.g. for persisting on exit.
    pub fn into_state(self) -> JourneyState {
        self.state
    }

    /// Shows a phase hero. Locked phases are refused.
    pub fn open_phase(&mut self, phase_id: &PhaseId) -> Result<&ViewMode, JourneyError> {
        if self.state.curriculum().phase(phase_id).is_none() {
            return Err(JourneyError::phase_not_found(phase_id.clone()));
        }
        if !self.state.phase_status(phase_id).is_accessible() {
            return Err(JourneyError::phase_locked(phase_id.clone()));
        }
        Ok(self.show(ViewMode::PhaseHero(phase_id.clone())))
    }

    /// Shows a step screen. Locked steps are refused.
    pub fn open_step(&mut self, step_id: &StepId) -> Result<&ViewMode, JourneyError> {
        if self.state.step(step_id).is_none() {
            return Err(JourneyError::step_not_found(step_id.clone()));
        }
        if !self.state.is_accessible(step_id) {
            return Err(JourneyError::step_locked(step_id.clone()));
        }
        Ok(self.show(ViewMode::StepScreen(step_id.clone())))
    }

    pub fn back_to_map(&mut self) -> &ViewMode {
        self.show(ViewMode::JourneyMap)
    }

    /// Opens the learner's frontier step, or the map when there is none.
    pub fn continue_journey(&mut self) -> &ViewMode {
        let view = match self.state.next_unlocked_step() {
            Some(step) => ViewMode::StepScreen(step.id.clone()),
            None => ViewMode::JourneyMap,
        };
        self.show(view)
    }

    /// Pages back within the current section.
    ///
    /// Stays put on the first step of a section or outside a step screen.
    pub fn go_previous(&mut self) -> Result<&ViewMode, JourneyError> {
        let previous = self
            .current_step()
            .and_then(|id| self.state.previous_step(id))
            .map(|step| step.id.clone());
        match previous {
            Some(id) => self.open_step(&id),
            None => Ok(&self.view),
        }
    }

    /// Pages forward within the current section.
    ///
    /// A locked next step is refused with `StepLocked`.
    pub fn go_next(&mut self) -> Result<&ViewMode, JourneyError> {
        let next = self
            .current_step()
            .and_then(|id| self.state.next_step(id))
            .map(|step| step.id.clone());
        match next {
            Some(id) => self.open_step(&id),
            None => Ok(&self.view),
        }
    }

    /// Completes the step on screen and moves on.
    ///
    /// Goes to the next step of the same section when there is one, to the
    /// hero of the next step's phase when the frontier left the section,
    /// and back to the map at the end of the curriculum.
    pub fn complete_current_step(&mut self) -> Result<TransitionOutcome, JourneyError> {
        let step_id = self
            .current_step()
            .cloned()
            .ok_or_else(|| JourneyError::ValidationFailed {
                field: "view".to_string(),
                message: "no step is open".to_string(),
            })?;

        let transition = apply_completion(&self.state, &step_id);
        self.state = transition.state;

        let view = match self.state.next_step(&step_id) {
            Some(next) => ViewMode::StepScreen(next.id.clone()),
            None => match &transition.outcome {
                TransitionOutcome::Advanced { next }
                | TransitionOutcome::NextAlreadyCompleted { next } => self
                    .state
                    .phase_for_step(next)
                    .map(|phase| ViewMode::PhaseHero(phase.id.clone()))
                    .unwrap_or(ViewMode::JourneyMap),
                TransitionOutcome::EndOfCurriculum | TransitionOutcome::UnknownStep => {
                    ViewMode::JourneyMap
                }
            },
        };
        self.show(view);

        Ok(transition.outcome)
    }

    fn current_step(&self) -> Option<&StepId> {
        match &self.view {
            ViewMode::StepScreen(id) => Some(id),
            _ => None,
        }
    }

    fn show(&mut self, view: ViewMode) -> &ViewMode {
        debug!(?view, "view changed");
        self.view = view;
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::curriculum::fixtures::{boundary_curriculum, phase_id, step_id};
    use crate::domain::foundation::ProgressStatus;

    fn shell() -> JourneyShell {
        JourneyShell::new(JourneyState::start(Arc::new(boundary_curriculum())))
    }

    // ───────────────────────────────────────────────────────────────
    // Opening screens
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn starts_on_journey_map() {
        assert_eq!(shell().view(), &ViewMode::JourneyMap);
    }

    #[test]
    fn open_phase_refuses_locked_phase() {
        let mut shell = shell();
        let err = shell.open_phase(&phase_id("b")).unwrap_err();
        assert_eq!(err, JourneyError::PhaseLocked(phase_id("b")));
        assert_eq!(shell.view(), &ViewMode::JourneyMap);
    }

    #[test]
    fn open_phase_shows_hero_for_current_phase() {
        let mut shell = shell();
        assert_eq!(
            shell.open_phase(&phase_id("a")).unwrap(),
            &ViewMode::PhaseHero(phase_id("a"))
        );
    }

    #[test]
    fn open_unknown_phase_is_not_found() {
        let mut shell = shell();
        assert!(matches!(
            shell.open_phase(&phase_id("ghost")),
            Err(JourneyError::PhaseNotFound(_))
        ));
    }

    #[test]
    fn open_step_refuses_locked_step() {
        let mut shell = shell();
        assert_eq!(
            shell.open_step(&step_id("s2")).unwrap_err(),
            JourneyError::StepLocked(step_id("s2"))
        );
    }

    #[test]
    fn continue_journey_opens_frontier() {
        let mut shell = shell();
        assert_eq!(shell.continue_journey(), &ViewMode::StepScreen(step_id("s1")));
        assert_eq!(shell.back_to_map(), &ViewMode::JourneyMap);
    }

    // ───────────────────────────────────────────────────────────────
    // Paging
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn go_next_refuses_locked_step() {
        let mut shell = shell();
        shell.continue_journey();
        assert!(matches!(shell.go_next(), Err(JourneyError::StepLocked(_))));
        assert_eq!(shell.view(), &ViewMode::StepScreen(step_id("s1")));
    }

    #[test]
    fn paging_stays_inside_section() {
        let mut shell = shell();
        shell.continue_journey();
        shell.complete_current_step().unwrap();
        shell.complete_current_step().unwrap();
        shell.open_step(&step_id("s3")).unwrap();

        // s3 opens its section; previous stays put.
        assert_eq!(shell.go_previous().unwrap(), &ViewMode::StepScreen(step_id("s3")));
    }

    #[test]
    fn go_previous_returns_to_completed_step() {
        let mut shell = shell();
        shell.continue_journey();
        shell.complete_current_step().unwrap();
        assert_eq!(shell.go_previous().unwrap(), &ViewMode::StepScreen(step_id("s1")));
    }

    // ───────────────────────────────────────────────────────────────
    // Completion
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn completing_moves_to_next_step_in_section() {
        let mut shell = shell();
        shell.continue_journey();

        let outcome = shell.complete_current_step().unwrap();

        assert_eq!(outcome, TransitionOutcome::Advanced { next: step_id("s2") });
        assert_eq!(shell.view(), &ViewMode::StepScreen(step_id("s2")));
    }

    #[test]
    fn completing_section_end_shows_hero_of_next_phase() {
        let mut shell = shell();
        shell.continue_journey();
        shell.complete_current_step().unwrap(); // s1 -> s2
        shell.complete_current_step().unwrap(); // s2 -> hero(a), s3 unlocked
        assert_eq!(shell.view(), &ViewMode::PhaseHero(phase_id("a")));

        shell.continue_journey();
        shell.complete_current_step().unwrap(); // s3 -> hero(b)

        assert_eq!(shell.view(), &ViewMode::PhaseHero(phase_id("b")));
        assert_eq!(
            shell.state().status_of(&step_id("s4")),
            Some(ProgressStatus::Unlocked)
        );
    }

    #[test]
    fn completing_last_step_returns_to_map() {
        let mut shell = shell();
        for _ in 0..4 {
            shell.continue_journey();
            shell.complete_current_step().unwrap();
        }

        assert_eq!(shell.view(), &ViewMode::JourneyMap);
        assert!(shell.state().is_finished());
    }

    #[test]
    fn completing_without_open_step_is_rejected() {
        let mut shell = shell();
        assert!(matches!(
            shell.complete_current_step(),
            Err(JourneyError::ValidationFailed { .. })
        ));
    }
}
