//! YAML curriculum adapter - Implementation of CurriculumSource.
//!
//! Reads a flat authoring document:
//!
//! ```yaml
//! phases:
//!   - { id: discovery, slug: discovery, title: Discovery, order: 0 }
//! sections:
//!   - { id: intro, phase_id: discovery, slug: intro, title: Intro, order: 0 }
//! steps:
//!   - id: welcome
//!     section_id: intro
//!     title: Welcome
//!     order: 0
//!     step_type: video
//!     content: { url: "https://example.com/welcome.mp4" }
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use crate::domain::curriculum::{ContentPolicy, Curriculum, Phase, Section, Step};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CurriculumSource;

/// Raw authoring document, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumDocument {
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl CurriculumDocument {
    /// Validates the document into a `Curriculum`.
    pub fn into_curriculum(self, policy: ContentPolicy) -> Result<Curriculum, DomainError> {
        Ok(Curriculum::with_policy(
            self.phases,
            self.sections,
            self.steps,
            policy,
        )?)
    }
}

/// Parses and validates a curriculum from YAML text.
pub fn parse_curriculum(yaml: &str, policy: ContentPolicy) -> Result<Curriculum, DomainError> {
    let document: CurriculumDocument = serde_yaml::from_str(yaml).map_err(|e| {
        DomainError::new(
            ErrorCode::CurriculumUnavailable,
            format!("Malformed curriculum document: {}", e),
        )
    })?;
    document.into_curriculum(policy)
}

/// Loads the curriculum from a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlCurriculumSource {
    path: PathBuf,
    policy: ContentPolicy,
}

impl YamlCurriculumSource {
    pub fn new(path: impl Into<PathBuf>, policy: ContentPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }
}

impl CurriculumSource for YamlCurriculumSource {
    fn load(&self) -> Result<Curriculum, DomainError> {
        let yaml = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::new(
                ErrorCode::CurriculumUnavailable,
                format!("Cannot read curriculum file: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let curriculum = parse_curriculum(&yaml, self.policy)?;
        info!(
            path = %self.path.display(),
            steps = curriculum.step_count(),
            "curriculum loaded"
        );
        Ok(curriculum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::domain::foundation::{StepId, StepType};

    const SAMPLE: &str = r#"
phases:
  - { id: discovery, slug: discovery, title: Discovery, order: 0 }
  - { id: analysis, slug: analysis, title: Analysis, order: 1 }
sections:
  - { id: intro, phase_id: discovery, slug: intro, title: Intro, order: 0 }
  - { id: modelling, phase_id: analysis, slug: modelling, title: Modelling, order: 0 }
steps:
  - id: welcome
    section_id: intro
    title: Welcome
    order: 0
    step_type: video
    content: { url: "https://example.com/welcome.mp4" }
  - id: kickoff
    section_id: intro
    title: Kickoff meeting
    order: 1
    step_type: meeting
  - id: process-map
    section_id: modelling
    title: Map the process
    order: 0
    step_type: task
"#;

    #[test]
    fn parses_flat_document() {
        let curriculum = parse_curriculum(SAMPLE, ContentPolicy::Lenient).unwrap();

        assert_eq!(curriculum.step_count(), 3);
        let kickoff = curriculum.step(&StepId::new("kickoff").unwrap()).unwrap();
        assert_eq!(kickoff.step_type, StepType::Meeting);
        assert!(kickoff.content.is_null());
    }

    #[test]
    fn malformed_yaml_is_unavailable() {
        let err = parse_curriculum("phases: [ {", ContentPolicy::Lenient).unwrap_err();
        assert_eq!(err.code, ErrorCode::CurriculumUnavailable);
    }

    #[test]
    fn unknown_step_type_is_rejected() {
        let yaml = SAMPLE.replace("step_type: task", "step_type: hologram");
        let err = parse_curriculum(&yaml, ContentPolicy::Lenient).unwrap_err();
        assert_eq!(err.code, ErrorCode::CurriculumUnavailable);
    }

    #[test]
    fn order_gap_is_invalid_curriculum() {
        let yaml = SAMPLE.replace("order: 1\n    step_type: meeting", "order: 2\n    step_type: meeting");
        let err = parse_curriculum(&yaml, ContentPolicy::Lenient).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCurriculum);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = YamlCurriculumSource::new(file.path(), ContentPolicy::Strict);
        let curriculum = source.load().unwrap();

        assert_eq!(curriculum.phases_ordered().len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let source = YamlCurriculumSource::new("/definitely/not/here.yaml", ContentPolicy::Lenient);
        let err = source.load().unwrap_err();
        assert_eq!(err.code, ErrorCode::CurriculumUnavailable);
        assert_eq!(
            err.details.get("path").map(String::as_str),
            Some("/definitely/not/here.yaml")
        );
    }
}
