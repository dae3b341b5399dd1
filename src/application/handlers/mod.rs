//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod journey;

pub use journey::{
    CompleteStepCommand, CompleteStepHandler, CompleteStepResult, GetJourneyOverviewHandler,
    GetJourneyOverviewQuery, GetStepNavigationHandler, GetStepNavigationQuery,
    StartJourneyCommand, StartJourneyHandler, StartJourneyResult, StepNavigationView,
};
