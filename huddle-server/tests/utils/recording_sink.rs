use huddle_server::{EventSink, RelayEvent};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Sink that records every relay event for later assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<RelayEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<RelayEvent> {
        self.events.lock().unwrap().clone()
    }

    /// How many recorded events match `predicate`.
    pub fn matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(&RelayEvent) -> bool,
    {
        self.events().iter().filter(|event| predicate(event)).count()
    }

    /// Polls until at least `count` events match `predicate`, up to
    /// `timeout_ms`. Returns whether the count was reached.
    pub async fn wait_for<F>(&self, count: usize, timeout_ms: u64, predicate: F) -> bool
    where
        F: Fn(&RelayEvent) -> bool,
    {
        let deadline = std::time::Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            if self.matching(&predicate) >= count {
                return true;
            }
            if std::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: RelayEvent) {
        self.events.lock().unwrap().push(event);
    }
}
