//! Journey-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, LearnerId, PhaseId, StepId};

/// Errors raised by journey handlers and the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyError {
    /// No progress has been stored for the learner yet.
    NotStarted(LearnerId),
    /// Step id is not part of the curriculum.
    StepNotFound(StepId),
    /// Phase id is not part of the curriculum.
    PhaseNotFound(PhaseId),
    /// The learner has not reached the step.
    StepLocked(StepId),
    /// The learner has not reached the phase.
    PhaseLocked(PhaseId),
    /// Curriculum could not be loaded.
    CurriculumUnavailable(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl JourneyError {
    pub fn not_started(learner_id: LearnerId) -> Self {
        JourneyError::NotStarted(learner_id)
    }
    pub fn step_not_found(step_id: StepId) -> Self {
        JourneyError::StepNotFound(step_id)
    }
    pub fn phase_not_found(phase_id: PhaseId) -> Self {
        JourneyError::PhaseNotFound(phase_id)
    }
    pub fn step_locked(step_id: StepId) -> Self {
        JourneyError::StepLocked(step_id)
    }
    pub fn phase_locked(phase_id: PhaseId) -> Self {
        JourneyError::PhaseLocked(phase_id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        JourneyError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            JourneyError::NotStarted(_) => ErrorCode::JourneyNotFound,
            JourneyError::StepNotFound(_) => ErrorCode::StepNotFound,
            JourneyError::PhaseNotFound(_) => ErrorCode::PhaseNotFound,
            JourneyError::StepLocked(_) => ErrorCode::StepLocked,
            JourneyError::PhaseLocked(_) => ErrorCode::PhaseLocked,
            JourneyError::CurriculumUnavailable(_) => ErrorCode::CurriculumUnavailable,
            JourneyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            JourneyError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            JourneyError::NotStarted(id) => format!("No journey started for learner: {}", id),
            JourneyError::StepNotFound(id) => format!("Step not found: {}", id),
            JourneyError::PhaseNotFound(id) => format!("Phase not found: {}", id),
            JourneyError::StepLocked(id) => format!("Step is locked: {}", id),
            JourneyError::PhaseLocked(id) => format!("Phase is locked: {}", id),
            JourneyError::CurriculumUnavailable(msg) => {
                format!("Curriculum unavailable: {}", msg)
            }
            JourneyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            JourneyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for JourneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JourneyError {}

impl From<DomainError> for JourneyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => JourneyError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::InvalidCurriculum | ErrorCode::CurriculumUnavailable => {
                JourneyError::CurriculumUnavailable(err.to_string())
            }
            _ => JourneyError::Infrastructure(err.to_string()),
        }
    }
}
