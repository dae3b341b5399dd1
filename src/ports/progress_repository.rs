//! Progress repository port.
//!
//! Persistence of a learner's progress map is owned by an external backend.
//! The engine hands it the output of every completion and reads it back at
//! session start; nothing else is stored, since phase status and progress
//! are always derived.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LearnerId};
use crate::domain::journey::ProgressMap;

/// Repository port for per-learner progress maps.
///
/// Writes are last-writer-wins keyed by learner.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load a learner's progress map.
    ///
    /// Returns `None` if the learner has never started a journey.
    async fn load(&self, learner_id: &LearnerId) -> Result<Option<ProgressMap>, DomainError>;

    /// Replace a learner's progress map.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, learner_id: &LearnerId, progress: &ProgressMap) -> Result<(), DomainError>;
}
