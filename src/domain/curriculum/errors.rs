//! Authoring-time validation failures.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// How strictly empty containers are treated when a curriculum is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPolicy {
    /// Sections without steps and phases without sections are allowed;
    /// progression skips over them.
    #[default]
    Lenient,
    /// Any empty section or phase is an authoring error.
    Strict,
}

/// Reasons a curriculum is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurriculumError {
    #[error("Curriculum contains no steps")]
    NoSteps,

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' references unknown {parent_kind} '{parent_id}'")]
    DanglingReference {
        kind: &'static str,
        id: String,
        parent_kind: &'static str,
        parent_id: String,
    },

    #[error("{scope}: order {order} is used more than once")]
    DuplicateOrder { scope: String, order: u32 },

    #[error("{scope}: expected order {expected}, found {found}")]
    OrderGap {
        scope: String,
        expected: u32,
        found: u32,
    },

    #[error("{kind} '{id}' has no content")]
    EmptyContainer { kind: &'static str, id: String },
}

impl From<CurriculumError> for DomainError {
    fn from(err: CurriculumError) -> Self {
        DomainError::new(ErrorCode::InvalidCurriculum, err.to_string())
    }
}
