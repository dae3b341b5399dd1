//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `curriculum` - YAML curriculum loader
//! - `events` - Event bus implementations
//! - `progress` - Progress persistence

pub mod curriculum;
pub mod events;
pub mod progress;

pub use curriculum::{parse_curriculum, CurriculumDocument, YamlCurriculumSource};
pub use events::InMemoryEventBus;
pub use progress::InMemoryProgressRepository;
