//! Learning Journey - sequential curriculum progress engine
//!
//! Tracks a learner through phases, sections and steps. Exactly one step is
//! the learner's frontier; completing it unlocks the structurally next step,
//! crossing section and phase boundaries as needed. Phase status and
//! progress are always derived from the step progress map.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
