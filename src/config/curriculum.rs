//! Curriculum source configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::curriculum::ContentPolicy;

use super::ValidationError;

/// Where authored content lives and how strictly it is checked
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumConfig {
    /// Path to the curriculum YAML document
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Whether empty sections and phases are tolerated
    #[serde(default)]
    pub policy: ContentPolicy,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            policy: ContentPolicy::default(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("curricula/onboarding.yaml")
}

impl CurriculumConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("curriculum.path"));
        }
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(()),
            _ => Err(ValidationError::UnsupportedCurriculumFormat(
                self.path.display().to_string(),
            )),
        }
    }
}
