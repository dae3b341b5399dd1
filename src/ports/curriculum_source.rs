//! Curriculum source port.
//!
//! Content is loaded once per process and validated on the way in; a source
//! that returns malformed content fails loudly instead of letting the
//! engine stall at runtime.

use crate::domain::curriculum::Curriculum;
use crate::domain::foundation::DomainError;

/// Port for loading authored curriculum content.
pub trait CurriculumSource: Send + Sync {
    /// Load and validate the curriculum.
    ///
    /// # Errors
    ///
    /// - `CurriculumUnavailable` when the content cannot be read or parsed
    /// - `InvalidCurriculum` when the content breaks an authoring invariant
    fn load(&self) -> Result<Curriculum, DomainError>;
}
