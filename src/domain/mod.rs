//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `curriculum` - Authored phases, sections and steps, validated at load
//! - `journey` - Progress state, queries, navigation and the transition engine

pub mod curriculum;
pub mod foundation;
pub mod journey;
