//! Service layer.

pub mod event_bus;

pub use event_bus::{AdapterEvent, EventBus, EventBusConfig, EventId, SequenceNumber};
