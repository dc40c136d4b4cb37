//! EventBus service for adapter status events.
//!
//! Provides a broadcast-based event channel with sequence numbering.
//! The adapter owns one bus and publishes `ONLINE` / `OFFLINE` events
//! on it; the host subscribes to receive them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::models::{AdapterStatus, StatusPayload};

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing sequence number assigned by EventBus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceNumber(pub u64);

impl SequenceNumber {
    pub const fn zero() -> Self {
        Self(0)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named status event: the event name is the status, the payload
/// identifies the adapter instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterEvent {
    pub event_id: EventId,
    pub sequence: SequenceNumber,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "event")]
    pub status: AdapterStatus,
    pub payload: StatusPayload,
}

impl AdapterEvent {
    /// Create an unsequenced event for the given adapter instance.
    pub fn new(status: AdapterStatus, adapter_id: impl Into<String>) -> Self {
        Self {
            event_id: EventId::new(),
            sequence: SequenceNumber::zero(),
            timestamp: Utc::now(),
            status,
            payload: StatusPayload {
                id: adapter_id.into(),
            },
        }
    }

    /// Event name as seen by the host (`ONLINE` / `OFFLINE`).
    pub const fn name(&self) -> &'static str {
        self.status.as_str()
    }
}

/// Configuration for the EventBus.
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Channel capacity for the broadcast channel.
    pub channel_capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
        }
    }
}

/// Broadcast bus for adapter events.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<AdapterEvent>,
    sequence: AtomicU64,
}

impl EventBus {
    /// Create a new EventBus with the given configuration.
    pub fn new(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            sequence: AtomicU64::new(0),
        }
    }

    /// Publish an event to all subscribers and return it as sent.
    pub fn publish(&self, mut event: AdapterEvent) -> AdapterEvent {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        event.sequence = SequenceNumber(seq);

        // No subscribers is not an error.
        let _ = self.sender.send(event.clone());
        event
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(EventBusConfig::default())
    }
}
