use crate::auth::{AllowAll, RoomAuthorizer};
use crate::config::RelayConfig;
use crate::observe::{EventSink, LogSink};
use crate::room::RoomRegistry;
use crate::signaling::BroadcastDispatcher;
use std::sync::Arc;
use std::time::Instant;

struct RelayInner {
    registry: Arc<RoomRegistry>,
    dispatcher: BroadcastDispatcher,
    authorizer: Arc<dyn RoomAuthorizer>,
    sink: Arc<dyn EventSink>,
    config: RelayConfig,
    started_at: Instant,
}

/// Shared state behind every connection handler. Cloning shares the
/// same registry, dispatcher and collaborators.
#[derive(Clone)]
pub struct RelayService {
    inner: Arc<RelayInner>,
}

impl RelayService {
    /// Relay with the default collaborators: every join allowed, events
    /// go to the log.
    pub fn new(config: RelayConfig) -> Self {
        Self::with_collaborators(config, Arc::new(AllowAll), Arc::new(LogSink))
    }

    /// Relay with explicit collaborators, for deployments that bring
    /// their own authorization or monitoring.
    pub fn with_collaborators(
        config: RelayConfig,
        authorizer: Arc<dyn RoomAuthorizer>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let registry = Arc::new(RoomRegistry::new());
        let dispatcher = BroadcastDispatcher::new(registry.clone(), sink.clone());

        Self {
            inner: Arc::new(RelayInner {
                registry,
                dispatcher,
                authorizer,
                sink,
                config,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    pub fn dispatcher(&self) -> &BroadcastDispatcher {
        &self.inner.dispatcher
    }

    pub fn authorizer(&self) -> &dyn RoomAuthorizer {
        self.inner.authorizer.as_ref()
    }

    pub fn sink(&self) -> &dyn EventSink {
        self.inner.sink.as_ref()
    }

    pub fn config(&self) -> &RelayConfig {
        &self.inner.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
