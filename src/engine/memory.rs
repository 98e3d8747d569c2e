//! In-memory engine

use std::collections::HashSet;

use super::{BackendError, Engine};
use crate::domain::{
    Connection, Container, EntityFilter, EntityKind, Image, Network, Pod, Registry, Volume,
};

/// Engine over records held in memory
///
/// Kinds marked with [`MemoryEngine::fail`] return a query error instead.
#[derive(Debug, Clone, Default)]
pub struct MemoryEngine {
    pub containers: Vec<Container>,
    pub pods: Vec<Pod>,
    pub images: Vec<Image>,
    pub volumes: Vec<Volume>,
    pub networks: Vec<Network>,
    pub registries: Vec<Registry>,
    pub connections: Vec<Connection>,
    failing: HashSet<EntityKind>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every query for `kind` fail
    pub fn fail(mut self, kind: EntityKind) -> Self {
        self.failing.insert(kind);
        self
    }

    fn check(&self, kind: EntityKind) -> Result<(), BackendError> {
        if self.failing.contains(&kind) {
            return Err(BackendError::query(kind, "engine unavailable"));
        }
        Ok(())
    }
}

impl Engine for MemoryEngine {
    fn containers(&self, filter: &EntityFilter) -> Result<Vec<Container>, BackendError> {
        self.check(EntityKind::Container)?;
        Ok(self
            .containers
            .iter()
            .filter(|c| filter.accepts_state(&c.state))
            .cloned()
            .collect())
    }

    fn pods(&self, filter: &EntityFilter) -> Result<Vec<Pod>, BackendError> {
        self.check(EntityKind::Pod)?;
        Ok(self
            .pods
            .iter()
            .filter(|p| filter.accepts_state(&p.status))
            .cloned()
            .collect())
    }

    fn images(&self, _filter: &EntityFilter) -> Result<Vec<Image>, BackendError> {
        self.check(EntityKind::Image)?;
        Ok(self.images.clone())
    }

    fn volumes(&self, _filter: &EntityFilter) -> Result<Vec<Volume>, BackendError> {
        self.check(EntityKind::Volume)?;
        Ok(self.volumes.clone())
    }

    fn networks(&self, _filter: &EntityFilter) -> Result<Vec<Network>, BackendError> {
        self.check(EntityKind::Network)?;
        Ok(self.networks.clone())
    }

    fn registries(&self, _filter: &EntityFilter) -> Result<Vec<Registry>, BackendError> {
        self.check(EntityKind::Registry)?;
        Ok(self.registries.clone())
    }

    fn connections(&self, _filter: &EntityFilter) -> Result<Vec<Connection>, BackendError> {
        self.check(EntityKind::Connection)?;
        Ok(self.connections.clone())
    }
}
