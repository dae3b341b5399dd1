//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the learning journey domain.

mod command;
mod errors;
mod events;
mod ids;
mod percentage;
mod progress_status;
mod step_type;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::{LearnerId, PhaseId, SectionId, StepId};
pub use percentage::Percentage;
pub use progress_status::ProgressStatus;
pub use step_type::StepType;
pub use timestamp::Timestamp;
