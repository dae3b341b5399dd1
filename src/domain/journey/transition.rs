//! Progress transition engine - the only way progress changes.
//!
//! Completing a step marks it `completed` and moves the frontier to the
//! structurally next step. "Next" is found by carrying from step to section
//! to phase, skipping containers without steps (see
//! [`Curriculum::step_after`](crate::domain::curriculum::Curriculum::step_after)).
//! A next step that is already completed is left alone, so completing a
//! revisited step never downgrades later progress.

use tracing::{debug, warn};

use crate::domain::foundation::{EventId, LearnerId, ProgressStatus, StepId, Timestamp};

use super::{JourneyEvent, JourneyFinished, JourneyState, StepCompleted, StepUnlocked};

/// What happened to the frontier after a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The step id is not part of the curriculum; nothing changed.
    UnknownStep,
    /// The next step is now (or already was) unlocked.
    Advanced { next: StepId },
    /// The next step was completed earlier and keeps that status.
    NextAlreadyCompleted { next: StepId },
    /// The step was the last one in the curriculum.
    EndOfCurriculum,
}

/// Result of applying a completion to a state.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: JourneyState,
    pub step_id: StepId,
    pub outcome: TransitionOutcome,
    /// Set when the step was not completed before this transition.
    pub newly_completed: bool,
    /// Set when a previously locked step became unlocked.
    pub newly_unlocked: Option<StepId>,
}

impl Transition {
    /// True when the progress map differs from the input state.
    pub fn changed(&self) -> bool {
        self.newly_completed || self.newly_unlocked.is_some()
    }

    /// Builds the events describing this transition for a learner.
    ///
    /// `StepCompleted` and `JourneyFinished` only accompany a first
    /// completion; `StepUnlocked` follows every step that left `locked`.
    pub fn events(&self, learner_id: &LearnerId) -> Vec<JourneyEvent> {
        let mut events = Vec::new();
        let now = Timestamp::now();
        let curriculum = self.state.curriculum();
        let completed_phase = curriculum.phase_for_step(&self.step_id);

        if self.newly_completed {
            if let (Some(section), Some(phase)) =
                (curriculum.section_for_step(&self.step_id), completed_phase)
            {
                events.push(JourneyEvent::StepCompleted(StepCompleted {
                    event_id: EventId::new(),
                    learner_id: learner_id.clone(),
                    step_id: self.step_id.clone(),
                    section_id: section.id.clone(),
                    phase_id: phase.id.clone(),
                    completed_at: now,
                }));
            }
        }

        if let Some(unlocked) = &self.newly_unlocked {
            if let Some(phase) = curriculum.phase_for_step(unlocked) {
                events.push(JourneyEvent::StepUnlocked(StepUnlocked {
                    event_id: EventId::new(),
                    learner_id: learner_id.clone(),
                    step_id: unlocked.clone(),
                    phase_id: phase.id.clone(),
                    entered_new_phase: completed_phase.map(|p| p.id != phase.id).unwrap_or(false),
                    unlocked_at: now,
                }));
            }
        }

        if self.newly_completed && self.state.is_finished() {
            events.push(JourneyEvent::JourneyFinished(JourneyFinished {
                event_id: EventId::new(),
                learner_id: learner_id.clone(),
                finished_at: now,
            }));
        }

        events
    }
}

/// Completes a step and advances the frontier, reporting what changed.
pub fn apply_completion(state: &JourneyState, step_id: &StepId) -> Transition {
    let Some(previous) = state.status_of(step_id) else {
        warn!(%step_id, "ignoring completion of unknown step");
        return Transition {
            state: state.clone(),
            step_id: step_id.clone(),
            outcome: TransitionOutcome::UnknownStep,
            newly_completed: false,
            newly_unlocked: None,
        };
    };

    let mut progress = state.progress().clone();
    progress.insert(step_id.clone(), ProgressStatus::Completed);

    let mut newly_unlocked = None;
    let outcome = match state.curriculum().step_after(step_id) {
        None => TransitionOutcome::EndOfCurriculum,
        Some(next) => {
            let current = progress.get(next).copied().unwrap_or_default();
            if current.is_completed() {
                TransitionOutcome::NextAlreadyCompleted { next: next.clone() }
            } else {
                if current.is_locked() {
                    newly_unlocked = Some(next.clone());
                }
                progress.insert(next.clone(), current.unlocked());
                TransitionOutcome::Advanced { next: next.clone() }
            }
        }
    };

    debug_assert!(
        state.progress().iter().all(|(id, before)| {
            progress
                .get(id)
                .is_some_and(|after| before.can_transition_to(after))
        }),
        "completion moved a step backwards"
    );
    debug!(%step_id, ?outcome, "step completed");

    Transition {
        state: state.with_progress(progress),
        step_id: step_id.clone(),
        outcome,
        newly_completed: !previous.is_completed(),
        newly_unlocked,
    }
}

/// Returns the state after completing `step_id`.
///
/// Unknown ids return the input state unchanged.
pub fn complete_step(state: &JourneyState, step_id: &StepId) -> JourneyState {
    apply_completion(state, step_id).state
}

impl JourneyState {
    /// See [`complete_step`].
    pub fn complete_step(&self, step_id: &StepId) -> JourneyState {
        complete_step(self, step_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::curriculum::fixtures::{
        boundary_curriculum, phase, phase_id, section, step, step_id,
    };
    use crate::domain::curriculum::Curriculum;
    use crate::domain::journey::{PhaseStatus, ProgressMap};

    fn start() -> JourneyState {
        JourneyState::start(Arc::new(boundary_curriculum()))
    }

    fn complete_all(state: JourneyState, ids: &[&str]) -> JourneyState {
        ids.iter()
            .fold(state, |state, id| state.complete_step(&step_id(id)))
    }

    fn status(state: &JourneyState, id: &str) -> ProgressStatus {
        state.status_of(&step_id(id)).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Cascade across boundaries
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn completing_step_unlocks_next_in_section() {
        let state = start().complete_step(&step_id("s1"));
        assert_eq!(status(&state, "s1"), ProgressStatus::Completed);
        assert_eq!(status(&state, "s2"), ProgressStatus::Unlocked);
        assert_eq!(status(&state, "s3"), ProgressStatus::Locked);
    }

    #[test]
    fn completing_last_step_of_section_unlocks_next_section() {
        let state = complete_all(start(), &["s1", "s2"]);
        assert_eq!(status(&state, "s3"), ProgressStatus::Unlocked);
        assert_eq!(status(&state, "s1"), ProgressStatus::Completed);
    }

    #[test]
    fn completing_last_step_of_phase_unlocks_next_phase() {
        let state = complete_all(start(), &["s1", "s2", "s3"]);
        assert_eq!(status(&state, "s4"), ProgressStatus::Unlocked);
    }

    #[test]
    fn phase_completes_only_after_all_its_steps() {
        let state = complete_all(start(), &["s1", "s2"]);
        assert_eq!(state.phase_status(&phase_id("a")), PhaseStatus::Current);

        let state = state.complete_step(&step_id("s3"));
        assert_eq!(state.phase_status(&phase_id("a")), PhaseStatus::Completed);
        assert_eq!(state.phase_status(&phase_id("b")), PhaseStatus::Current);
    }

    #[test]
    fn cascade_skips_empty_section_and_empty_phase() {
        let curriculum = Curriculum::new(
            vec![phase("a", 0), phase("empty", 1), phase("c", 2)],
            vec![
                section("sec1", "a", 0),
                section("hollow", "a", 1),
                section("sec3", "c", 0),
            ],
            vec![step("s1", "sec1", 0), step("s3", "sec3", 0)],
        )
        .unwrap();
        let state = JourneyState::start(Arc::new(curriculum));

        let transition = apply_completion(&state, &step_id("s1"));

        assert_eq!(
            transition.outcome,
            TransitionOutcome::Advanced { next: step_id("s3") }
        );
        assert_eq!(status(&transition.state, "s3"), ProgressStatus::Unlocked);
    }

    // ───────────────────────────────────────────────────────────────
    // Terminal and no-op cases
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn completing_final_step_leaves_no_frontier() {
        let state = complete_all(start(), &["s1", "s2", "s3", "s4"]);
        assert!(state.next_unlocked_step().is_none());
        assert!(state.is_finished());
    }

    #[test]
    fn final_step_reports_end_of_curriculum() {
        let state = complete_all(start(), &["s1", "s2", "s3"]);
        let transition = apply_completion(&state, &step_id("s4"));
        assert_eq!(transition.outcome, TransitionOutcome::EndOfCurriculum);
        assert!(transition.newly_unlocked.is_none());
    }

    #[test]
    fn unknown_step_returns_identical_state() {
        let state = complete_all(start(), &["s1"]);
        let next = state.complete_step(&step_id("nonexistent"));
        assert_eq!(next, state);
    }

    #[test]
    fn unknown_step_outcome_reports_no_change() {
        let transition = apply_completion(&start(), &step_id("nonexistent"));
        assert_eq!(transition.outcome, TransitionOutcome::UnknownStep);
        assert!(!transition.changed());
        assert!(transition.events(&LearnerId::new("l").unwrap()).is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Idempotence and monotonicity
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn completing_twice_equals_completing_once() {
        let once = start().complete_step(&step_id("s1"));
        let twice = once.complete_step(&step_id("s1"));
        assert_eq!(once, twice);
    }

    #[test]
    fn recompleting_earlier_step_keeps_later_progress() {
        let state = complete_all(start(), &["s1", "s2", "s3"]);
        let revisited = state.complete_step(&step_id("s1"));

        assert_eq!(status(&revisited, "s2"), ProgressStatus::Completed);
        assert_eq!(status(&revisited, "s4"), ProgressStatus::Unlocked);
        assert_eq!(revisited, state);
    }

    #[test]
    fn revisit_reports_next_already_completed() {
        let state = complete_all(start(), &["s1", "s2"]);
        let transition = apply_completion(&state, &step_id("s1"));
        assert_eq!(
            transition.outcome,
            TransitionOutcome::NextAlreadyCompleted { next: step_id("s2") }
        );
        assert!(!transition.changed());
    }

    #[test]
    fn completing_a_locked_step_is_allowed() {
        let state = start().complete_step(&step_id("s3"));
        assert_eq!(status(&state, "s3"), ProgressStatus::Completed);
        assert_eq!(status(&state, "s4"), ProgressStatus::Unlocked);
        // The original frontier is untouched.
        assert_eq!(status(&state, "s1"), ProgressStatus::Unlocked);
    }

    #[test]
    fn at_most_one_step_newly_unlocked() {
        let before = start();
        let after = before.complete_step(&step_id("s1"));

        let newly_unlocked = after
            .progress()
            .iter()
            .filter(|(id, s)| s.is_unlocked() && !before.status_of(id).unwrap().is_unlocked())
            .count();
        assert_eq!(newly_unlocked, 1);
    }

    // ───────────────────────────────────────────────────────────────
    // Events
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn crossing_phase_emits_completed_and_unlocked_events() {
        let state = complete_all(start(), &["s1", "s2"]);
        let transition = apply_completion(&state, &step_id("s3"));
        let events = transition.events(&LearnerId::new("learner-1").unwrap());

        assert_eq!(events.len(), 2);
        match &events[1] {
            JourneyEvent::StepUnlocked(e) => {
                assert_eq!(e.step_id, step_id("s4"));
                assert!(e.entered_new_phase);
            }
            other => panic!("Expected StepUnlocked, got {:?}", other),
        }
    }

    #[test]
    fn finishing_emits_journey_finished() {
        let state = complete_all(start(), &["s1", "s2", "s3"]);
        let events = apply_completion(&state, &step_id("s4"))
            .events(&LearnerId::new("learner-1").unwrap());

        assert!(matches!(events.last(), Some(JourneyEvent::JourneyFinished(_))));
    }

    #[test]
    fn recompleting_with_locked_next_emits_only_unlocked() {
        let mut progress = ProgressMap::new();
        progress.insert(step_id("s1"), ProgressStatus::Completed);
        let state = JourneyState::restore(Arc::new(boundary_curriculum()), progress);

        let transition = apply_completion(&state, &step_id("s1"));
        let events = transition.events(&LearnerId::new("learner-1").unwrap());

        assert!(!transition.newly_completed);
        assert_eq!(transition.newly_unlocked, Some(step_id("s2")));
        assert_eq!(events.len(), 1);
        match &events[0] {
            JourneyEvent::StepUnlocked(e) => {
                assert_eq!(e.step_id, step_id("s2"));
                assert!(!e.entered_new_phase);
            }
            other => panic!("Expected StepUnlocked, got {:?}", other),
        }
    }

    #[test]
    fn recompleting_in_finished_journey_emits_nothing() {
        let state = complete_all(start(), &["s1", "s2", "s3", "s4"]);
        let events = apply_completion(&state, &step_id("s4"))
            .events(&LearnerId::new("learner-1").unwrap());

        assert!(events.is_empty());
    }

    #[test]
    fn restored_state_keeps_completed_steps_completed() {
        let mut progress = ProgressMap::new();
        progress.insert(step_id("s1"), ProgressStatus::Completed);
        progress.insert(step_id("s2"), ProgressStatus::Completed);
        progress.insert(step_id("s3"), ProgressStatus::Unlocked);
        let state = JourneyState::restore(Arc::new(boundary_curriculum()), progress);

        let state = state.complete_step(&step_id("s3"));
        for id in ["s1", "s2", "s3"] {
            assert_eq!(status(&state, id), ProgressStatus::Completed);
        }
    }
}
