//! ProgressStatus enum for tracking a learner's progress on a step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime progress of a single step.
///
/// `Completed` is terminal: once a step is completed it never returns to
/// `Locked` or `Unlocked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    Locked,
    Unlocked,
    Completed,
}

impl ProgressStatus {
    /// Returns true if the step has not been reached yet.
    pub fn is_locked(&self) -> bool {
        matches!(self, ProgressStatus::Locked)
    }

    /// Returns true if the step is the learner's current frontier.
    pub fn is_unlocked(&self) -> bool {
        matches!(self, ProgressStatus::Unlocked)
    }

    /// Returns true if the step is finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, ProgressStatus::Completed)
    }

    /// Returns true if the learner may open the step.
    pub fn is_accessible(&self) -> bool {
        !self.is_locked()
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Locked -> Unlocked
    /// - Locked -> Completed
    /// - Unlocked -> Completed
    /// - any status -> itself
    pub fn can_transition_to(&self, target: &ProgressStatus) -> bool {
        use ProgressStatus::*;
        self == target || matches!((self, target), (Locked, Unlocked) | (Locked, Completed) | (Unlocked, Completed))
    }

    /// Returns the status after an unlock request.
    pub fn unlocked(self) -> Self {
        match self {
            ProgressStatus::Completed => ProgressStatus::Completed,
            _ => ProgressStatus::Unlocked,
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressStatus::Locked => "Locked",
            ProgressStatus::Unlocked => "Unlocked",
            ProgressStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
