//! Curriculum module - Authored phases, sections and steps.
//!
//! Content is validated once when a `Curriculum` is built and never
//! changes afterwards.

mod curriculum;
mod entities;
mod errors;

#[cfg(test)]
pub(crate) mod fixtures;

pub use curriculum::{Curriculum, Position};
pub use entities::{Phase, Section, Step};
pub use errors::{ContentPolicy, CurriculumError};
