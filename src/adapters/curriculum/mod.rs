//! Curriculum adapters.

mod yaml_source;

pub use yaml_source::{parse_curriculum, CurriculumDocument, YamlCurriculumSource};
