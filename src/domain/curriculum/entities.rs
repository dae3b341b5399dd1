//! Authored content entities: phases, sections and steps.
//!
//! Content is immutable at runtime. The only mutable state in a journey is
//! the progress map held by `JourneyState`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::foundation::{PhaseId, SectionId, StepId, StepType};

/// A top-level curriculum unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: PhaseId,
    pub slug: String,
    pub title: String,
    /// Zero-based position among all phases.
    pub order: u32,
}

/// A sub-unit of exactly one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub phase_id: PhaseId,
    pub slug: String,
    pub title: String,
    /// Zero-based position within the parent phase.
    pub order: u32,
}

/// The atomic unit of learning content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub section_id: SectionId,
    pub title: String,
    /// Zero-based position within the parent section.
    pub order: u32,
    pub step_type: StepType,
    /// Renderer-specific payload, opaque to the progress engine.
    #[serde(default)]
    pub content: JsonValue,
}
