//! Event bus abstraction for decoupled emission.
//!
//! The pipeline core never talks to a concrete frontend; it emits named
//! events through this trait. Frontends (CLI today, a viewer later) supply
//! the implementation, and tests capture emissions in memory.

use std::sync::{Arc, Mutex};

/// Trait for emitting events to subscribers.
pub trait EventBus: Send + Sync {
    /// Emit an event under a topic (e.g. "sign:committed") with a JSON
    /// payload.
    fn emit(&self, topic: &str, payload: serde_json::Value);
}

/// Shared event bus handle.
pub type EventBusRef = Arc<dyn EventBus>;

/// A captured event from [`InMemoryEventBus`].
#[derive(Debug, Clone)]
pub struct EmittedEvent {
    pub topic: String,
    pub payload: serde_json::Value,
}

/// Test bus that records every emission for later inspection.
#[derive(Default)]
pub struct InMemoryEventBus {
    events: Mutex<Vec<EmittedEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured events, in emission order.
    pub fn events(&self) -> Vec<EmittedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Captured events for one topic.
    pub fn events_for(&self, topic: &str) -> Vec<EmittedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.topic == topic)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventBus for InMemoryEventBus {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        self.events.lock().unwrap().push(EmittedEvent {
            topic: topic.to_string(),
            payload,
        });
    }
}

/// Bus that discards everything.
pub struct NullEventBus;

impl EventBus for NullEventBus {
    fn emit(&self, _topic: &str, _payload: serde_json::Value) {}
}
