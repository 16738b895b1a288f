use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One processing node a request passed through, recorded for path
/// reconstruction across shards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    /// Service name of the processing unit (e.g. "indexer").
    pub service: String,
    /// Instance id within the service (e.g. "0", "replica-2").
    pub instance: String,
    /// When this node started processing the request. Nanosecond resolution.
    pub start_time: DateTime<Utc>,
}

impl Hop {
    pub fn new(
        service: impl Into<String>,
        instance: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            service: service.into(),
            instance: instance.into(),
            start_time,
        }
    }

    /// Dedup key: service + instance, treated as one opaque identity.
    /// Two hops with the same identity are the same node reported twice.
    pub fn identity(&self) -> (&str, &str) {
        (&self.service, &self.instance)
    }
}
