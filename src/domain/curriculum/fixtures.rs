//! Builders for compact test curricula.

use serde_json::json;

use crate::domain::foundation::{PhaseId, SectionId, StepId, StepType};

use super::{Curriculum, Phase, Section, Step};

pub fn phase(id: &str, order: u32) -> Phase {
    Phase {
        id: PhaseId::new(id).unwrap(),
        slug: id.to_string(),
        title: format!("Phase {}", id),
        order,
    }
}

pub fn section(id: &str, phase_id: &str, order: u32) -> Section {
    Section {
        id: SectionId::new(id).unwrap(),
        phase_id: PhaseId::new(phase_id).unwrap(),
        slug: id.to_string(),
        title: format!("Section {}", id),
        order,
    }
}

pub fn step(id: &str, section_id: &str, order: u32) -> Step {
    Step {
        id: StepId::new(id).unwrap(),
        section_id: SectionId::new(section_id).unwrap(),
        title: format!("Step {}", id),
        order,
        step_type: StepType::Text,
        content: json!({ "body": format!("Content for {}", id) }),
    }
}

/// Phase A (Section 1: s1, s2; Section 2: s3) and Phase B (Section 3: s4).
pub fn boundary_curriculum() -> Curriculum {
    Curriculum::new(
        vec![phase("a", 0), phase("b", 1)],
        vec![section("sec1", "a", 0), section("sec2", "a", 1), section("sec3", "b", 0)],
        vec![
            step("s1", "sec1", 0),
            step("s2", "sec1", 1),
            step("s3", "sec2", 0),
            step("s4", "sec3", 0),
        ],
    )
    .unwrap()
}

pub fn step_id(id: &str) -> StepId {
    StepId::new(id).unwrap()
}

pub fn phase_id(id: &str) -> PhaseId {
    PhaseId::new(id).unwrap()
}
