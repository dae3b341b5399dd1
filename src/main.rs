//! Local runner: loads the configured curriculum, plays the given step
//! completions for a learner and prints the journey map as JSON.
//!
//! ```text
//! learning-journey [LEARNER_ID] [STEP_ID...]
//! ```

use std::error::Error;
use std::sync::Arc;

use tracing::{error, info};

use learning_journey::adapters::{InMemoryEventBus, InMemoryProgressRepository, YamlCurriculumSource};
use learning_journey::application::{
    CompleteStepCommand, CompleteStepHandler, GetJourneyOverviewHandler, GetJourneyOverviewQuery,
    StartJourneyCommand, StartJourneyHandler,
};
use learning_journey::config::{AppConfig, LogFormat, LoggingConfig};
use learning_journey::domain::foundation::{CommandMetadata, LearnerId, StepId};
use learning_journey::ports::CurriculumSource;

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(logging.env_filter());
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };
    init_tracing(&config.logging);

    let mut args = std::env::args().skip(1);
    let learner_id = LearnerId::new(args.next().unwrap_or_else(|| "local".to_string()))?;
    let steps = args.map(StepId::new).collect::<Result<Vec<_>, _>>()?;

    let source = YamlCurriculumSource::new(&config.curriculum.path, config.curriculum.policy);
    let curriculum = Arc::new(source.load()?);

    let repository = Arc::new(InMemoryProgressRepository::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let metadata = CommandMetadata::new(learner_id.clone()).with_source("cli");

    StartJourneyHandler::new(Arc::clone(&curriculum), repository.clone())
        .handle(
            StartJourneyCommand {
                learner_id: learner_id.clone(),
            },
            metadata.clone(),
        )
        .await?;

    let complete = CompleteStepHandler::new(Arc::clone(&curriculum), repository.clone(), bus.clone())
        .with_publish_events(config.features.publish_events);
    for step_id in steps {
        complete
            .handle(
                CompleteStepCommand {
                    learner_id: learner_id.clone(),
                    step_id,
                },
                metadata.clone(),
            )
            .await?;
    }

    let overview = GetJourneyOverviewHandler::new(curriculum, repository)
        .handle(GetJourneyOverviewQuery { learner_id })
        .await?;

    info!(events = bus.event_count(), "journey replayed");
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
