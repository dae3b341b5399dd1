//! In-memory event bus.
//!
//! Captures every published envelope in order so tests and the local
//! binary can inspect what a journey emitted. Delivery is synchronous and
//! deterministic.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("journey.step_completed.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    fail_with: RwLock<Option<String>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus that rejects every publish with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_with: RwLock::new(Some(message.into())),
        }
    }

    // === Test Helpers ===

    /// Returns all published events in publish order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.read().clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.read()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns events routed to a learner.
    pub fn events_for_learner(&self, learner_id: &str) -> Vec<EventEnvelope> {
        self.read()
            .iter()
            .filter(|e| e.aggregate_id == learner_id)
            .cloned()
            .collect()
    }

    /// Clears all published events.
    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn event_count(&self) -> usize {
        self.read().len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.read().iter().any(|e| e.event_type == event_type)
    }

    // A poisoned lock still holds a consistent Vec; keep serving it.
    fn read(&self) -> RwLockReadGuard<'_, Vec<EventEnvelope>> {
        self.published.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<EventEnvelope>> {
        self.published.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let failure = self
            .fail_with
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(message) = failure {
            return Err(DomainError::new(ErrorCode::PublishError, message)
                .with_detail("event_type", event.event_type));
        }

        self.write().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::foundation::{EventId, Timestamp};

    fn envelope(event_type: &str, learner: &str) -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: event_type.to_string(),
            schema_version: 1,
            aggregate_id: learner.to_string(),
            aggregate_type: "Journey".to_string(),
            occurred_at: Timestamp::now(),
            payload: json!({}),
            metadata: Default::default(),
        }
    }

    #[tokio::test]
    async fn publish_captures_in_order() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("journey.step_completed.v1", "l1"))
            .await
            .unwrap();
        bus.publish(envelope("journey.step_unlocked.v1", "l1"))
            .await
            .unwrap();

        let types: Vec<_> = bus
            .published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(
            types,
            vec!["journey.step_completed.v1", "journey.step_unlocked.v1"]
        );
    }

    #[tokio::test]
    async fn filters_by_type_and_learner() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            envelope("journey.step_completed.v1", "l1"),
            envelope("journey.step_completed.v1", "l2"),
            envelope("journey.finished.v1", "l2"),
        ])
        .await
        .unwrap();

        assert_eq!(bus.events_of_type("journey.step_completed.v1").len(), 2);
        assert_eq!(bus.events_for_learner("l2").len(), 2);
        assert!(bus.has_event("journey.finished.v1"));
        assert!(!bus.has_event("journey.step_unlocked.v1"));
    }

    #[tokio::test]
    async fn clear_resets_capture() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("journey.finished.v1", "l1")).await.unwrap();
        bus.clear();
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn failing_bus_rejects_and_captures_nothing() {
        let bus = InMemoryEventBus::failing("sync service offline");
        let err = bus
            .publish(envelope("journey.finished.v1", "l1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PublishError);
        assert_eq!(bus.event_count(), 0);
    }
}
