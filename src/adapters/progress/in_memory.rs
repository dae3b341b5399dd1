//! In-memory progress repository.
//!
//! Stands in for the hosted backend in tests and local runs. Keeps one
//! progress map per learner; saves replace the whole map.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, LearnerId};
use crate::domain::journey::ProgressMap;
use crate::ports::ProgressRepository;

/// In-memory progress store.
#[derive(Debug, Default)]
pub struct InMemoryProgressRepository {
    maps: RwLock<HashMap<LearnerId, ProgressMap>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of learners with stored progress.
    pub async fn learner_count(&self) -> usize {
        self.maps.read().await.len()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn load(&self, learner_id: &LearnerId) -> Result<Option<ProgressMap>, DomainError> {
        Ok(self.maps.read().await.get(learner_id).cloned())
    }

    async fn save(&self, learner_id: &LearnerId, progress: &ProgressMap) -> Result<(), DomainError> {
        self.maps
            .write()
            .await
            .insert(learner_id.clone(), progress.clone());
        Ok(())
    }
}
