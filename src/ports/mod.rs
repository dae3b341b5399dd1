//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the journey domain and the hosted backend. Adapters implement them.
//!
//! - `CurriculumSource` - Loads authored content
//! - `ProgressRepository` - Persists per-learner progress maps
//! - `EventPublisher` - Publishes journey events

mod curriculum_source;
mod event_publisher;
mod progress_repository;

pub use curriculum_source::CurriculumSource;
pub use event_publisher::EventPublisher;
pub use progress_repository::ProgressRepository;
