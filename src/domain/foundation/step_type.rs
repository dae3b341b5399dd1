//! StepType enum tagging how a step's content is presented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of step kinds a curriculum may author.
///
/// The engine never inspects the tag; renderers and completion criteria
/// live outside the progress core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    Text,
    Video,
    Checklist,
    Task,
    Reflection,
    Quiz,
    /// AI-simulated stakeholder meeting.
    Meeting,
    Audio,
}

impl StepType {
    /// Returns all step types.
    pub fn all() -> &'static [StepType] {
        &[
            StepType::Text,
            StepType::Video,
            StepType::Checklist,
            StepType::Task,
            StepType::Reflection,
            StepType::Quiz,
            StepType::Meeting,
            StepType::Audio,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StepType::Text => "Reading",
            StepType::Video => "Video",
            StepType::Checklist => "Checklist",
            StepType::Task => "Task",
            StepType::Reflection => "Reflection",
            StepType::Quiz => "Quiz",
            StepType::Meeting => "Stakeholder Meeting",
            StepType::Audio => "Audio",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_variant_once() {
        let all = StepType::all();
        assert_eq!(all.len(), 8);
        for (i, a) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(a));
        }
    }

    #[test]
    fn deserializes_from_snake_case() {
        let t: StepType = serde_json::from_str(r#""meeting""#).unwrap();
        assert_eq!(t, StepType::Meeting);
    }

    #[test]
    fn rejects_unknown_tags() {
        let result: Result<StepType, _> = serde_json::from_str(r#""hologram""#);
        assert!(result.is_err());
    }

    #[test]
    fn display_uses_friendly_name() {
        assert_eq!(format!("{}", StepType::Text), "Reading");
    }
}
