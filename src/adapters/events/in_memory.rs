//! In-memory event publisher for testing.
//!
//! Captures every envelope it receives so tests can assert on what the
//! submission flow emitted.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in production.
//! It uses `.expect()` on lock operations which will panic if locks are poisoned.
//! Production code should use the Redis publisher.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tokio::sync::Notify;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event publisher for testing.
///
/// Features:
/// - Event capture for assertions
/// - Switchable failure mode to exercise error swallowing
/// - Waiting helpers for publishes delivered by a background task
///
/// # Example
///
/// ```ignore
/// let publisher = Arc::new(InMemoryEventPublisher::new());
///
/// orchestrator.submit(submission).await?;
///
/// assert!(publisher.wait_for_events(1, Duration::from_secs(1)).await);
/// assert_eq!(publisher.published_events()[0].event_type, "feedback.submitted.v1");
/// ```
#[derive(Default)]
pub struct InMemoryEventPublisher {
    published: RwLock<Vec<EventEnvelope>>,
    attempts: RwLock<usize>,
    failing: AtomicBool,
    notify: Notify,
}

impl InMemoryEventPublisher {
    /// Creates a new empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher whose every publish fails.
    pub fn failing() -> Self {
        let publisher = Self::new();
        publisher.set_failing(true);
        publisher
    }

    /// Toggle failure mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Returns all published events (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .clone()
    }

    /// Returns count of published events.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .len()
    }

    /// Number of publish calls, including failed ones.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn attempt_count(&self) -> usize {
        *self
            .attempts
            .read()
            .expect("InMemoryEventPublisher: attempts lock poisoned")
    }

    /// Wait until at least `count` publish attempts were made.
    ///
    /// Returns `false` if the timeout elapses first.
    pub async fn wait_for_attempts(&self, count: usize, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, async {
            loop {
                let notified = self.notify.notified();
                if self.attempt_count() >= count {
                    return;
                }
                notified.await;
            }
        })
        .await
        .is_ok()
    }

    /// Wait until at least `count` events were successfully published.
    ///
    /// Returns `false` if the timeout elapses first.
    pub async fn wait_for_events(&self, count: usize, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, async {
            loop {
                let notified = self.notify.notified();
                if self.event_count() >= count {
                    return;
                }
                notified.await;
            }
        })
        .await
        .is_ok()
    }

    fn record_attempt(&self) {
        *self
            .attempts
            .write()
            .expect("InMemoryEventPublisher: attempts write lock poisoned") += 1;
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let result = if self.failing.load(Ordering::SeqCst) {
            Err(DomainError::new(
                ErrorCode::EventPublishFailed,
                format!("Simulated publish failure for {}", event.event_type),
            ))
        } else {
            self.published
                .write()
                .expect("InMemoryEventPublisher: published write lock poisoned")
                .push(event);
            Ok(())
        };

        self.record_attempt();
        self.notify.notify_waiters();
        result
    }
}
