use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};

/// Identifier of a visual resource (geometry or material) the scene needs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Blocks the first render until every declared resource is ready
///
/// There is no timeout: a resource that never resolves keeps the gate closed
/// and the host keeps showing the placeholder.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    pending: BTreeSet<ResourceId>,
    total: usize,
}

impl ReadinessGate {
    pub fn new(resources: impl IntoIterator<Item = ResourceId>) -> Self {
        let pending: BTreeSet<_> = resources.into_iter().collect();
        Self {
            total: pending.len(),
            pending,
        }
    }

    /// Mark one resource ready; returns false for unknown or repeated ids
    pub fn mark_ready(&mut self, id: &ResourceId) -> bool {
        let removed = self.pending.remove(id);
        if removed {
            log::debug!("resource ready: {id} ({:.0}%)", self.progress() * 100.0);
            if self.pending.is_empty() {
                log::info!("all {} scene resources ready", self.total);
            }
        }
        removed
    }

    pub fn is_ready(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fraction of declared resources that are ready, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            (self.total - self.pending.len()) as f32 / self.total as f32
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &ResourceId> {
        self.pending.iter()
    }

    /// Wait on resource loads, marking each one ready as it completes
    ///
    /// Completes once every given load has finished. Loads that never finish
    /// suspend this future forever, which is the intended stalled state.
    pub async fn resolve<I, F>(&mut self, loads: I)
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = ResourceId>,
    {
        let mut in_flight: FuturesUnordered<F> = loads.into_iter().collect();
        while let Some(id) = in_flight.next().await {
            if !self.mark_ready(&id) {
                log::warn!("resource {id} resolved but was not pending");
            }
        }
    }
}
