//! Derived progress values for phases and sections.
//!
//! Nothing here is stored; every value is recomputed from the step
//! progress map so there is a single source of truth.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{Percentage, ProgressStatus};

/// Status of a container (phase or section), derived from its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Locked,
    Unlocked,
    Current,
    Completed,
}

impl PhaseStatus {
    /// Derives a status from the statuses of every step in the container.
    ///
    /// Rules, first match wins:
    /// 1. no steps -> `Locked`
    /// 2. all steps completed -> `Completed`
    /// 3. any step unlocked -> `Current`
    /// 4. any step completed -> `Unlocked`
    /// 5. otherwise -> `Locked`
    pub fn derive(statuses: impl IntoIterator<Item = ProgressStatus>) -> Self {
        let (mut total, mut completed, mut unlocked) = (0usize, 0usize, 0usize);
        for status in statuses {
            total += 1;
            match status {
                ProgressStatus::Completed => completed += 1,
                ProgressStatus::Unlocked => unlocked += 1,
                ProgressStatus::Locked => {}
            }
        }

        if total == 0 {
            PhaseStatus::Locked
        } else if completed == total {
            PhaseStatus::Completed
        } else if unlocked > 0 {
            PhaseStatus::Current
        } else if completed > 0 {
            PhaseStatus::Unlocked
        } else {
            PhaseStatus::Locked
        }
    }

    /// Returns true if the learner may open the container.
    pub fn is_accessible(&self) -> bool {
        !matches!(self, PhaseStatus::Locked)
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhaseStatus::Locked => "Locked",
            PhaseStatus::Unlocked => "Unlocked",
            PhaseStatus::Current => "Current",
            PhaseStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// Completed/total step counts with a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: Percentage,
}

impl Progress {
    pub const EMPTY: Progress = Progress {
        completed: 0,
        total: 0,
        percentage: Percentage::ZERO,
    };

    /// Counts completed steps among the given statuses.
    pub fn tally(statuses: impl IntoIterator<Item = ProgressStatus>) -> Self {
        let (completed, total) = statuses.into_iter().fold((0, 0), |(done, all), status| {
            (done + usize::from(status.is_completed()), all + 1)
        });
        Self {
            completed,
            total,
            percentage: Percentage::from_ratio(completed, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProgressStatus::*;

    #[test]
    fn no_steps_is_locked() {
        assert_eq!(PhaseStatus::derive(Vec::new()), PhaseStatus::Locked);
    }

    #[test]
    fn all_completed_is_completed() {
        assert_eq!(PhaseStatus::derive([Completed, Completed]), PhaseStatus::Completed);
    }

    #[test]
    fn mix_of_completed_and_unlocked_is_current() {
        assert_eq!(PhaseStatus::derive([Completed, Unlocked, Locked]), PhaseStatus::Current);
    }

    #[test]
    fn completed_without_frontier_is_unlocked() {
        assert_eq!(PhaseStatus::derive([Completed, Locked]), PhaseStatus::Unlocked);
    }

    #[test]
    fn untouched_is_locked() {
        assert_eq!(PhaseStatus::derive([Locked, Locked]), PhaseStatus::Locked);
    }

    #[test]
    fn tally_two_of_four_is_fifty_percent() {
        let progress = Progress::tally([Completed, Completed, Unlocked, Locked]);
        assert_eq!(
            progress,
            Progress {
                completed: 2,
                total: 4,
                percentage: Percentage::new(50)
            }
        );
    }

    #[test]
    fn tally_of_nothing_is_empty() {
        assert_eq!(Progress::tally(Vec::new()), Progress::EMPTY);
    }

    #[test]
    fn phase_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&PhaseStatus::Current).unwrap(), r#""current""#);
    }
}
