//! Journey module - a learner's progress through the curriculum.
//!
//! - `JourneyState` - curriculum plus the total step progress map
//! - queries - hierarchy lookups, progress aggregation, derived statuses
//! - navigation - in-section previous/next resolution
//! - transition - `complete_step`, the single mutation entry point

mod errors;
mod events;
mod navigation;
mod queries;
mod state;
mod status;
mod transition;

pub use errors::JourneyError;
pub use events::{JourneyEvent, JourneyFinished, StepCompleted, StepUnlocked};
pub use navigation::StepNavigation;
pub use queries::{JourneyOverview, PhaseSummary};
pub use state::{JourneyState, ProgressMap};
pub use status::{PhaseStatus, Progress};
pub use transition::{apply_completion, complete_step, Transition, TransitionOutcome};
