//! Event bus adapters.
//!
//! - `InMemoryEventBus` - in-process capture bus for tests and local runs

mod in_memory;

pub use in_memory::InMemoryEventBus;
