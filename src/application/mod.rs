//! Application layer - Commands, Queries, Handlers and the presentation shell.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
pub mod shell;

pub use handlers::{
    CompleteStepCommand, CompleteStepHandler, CompleteStepResult, GetJourneyOverviewHandler,
    GetJourneyOverviewQuery, GetStepNavigationHandler, GetStepNavigationQuery,
    StartJourneyCommand, StartJourneyHandler, StartJourneyResult, StepNavigationView,
};
pub use shell::{JourneyShell, ViewMode};
