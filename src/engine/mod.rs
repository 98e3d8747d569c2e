//! # Query Engine
//!
//! The read-only query interface completion runs against.
//!
//! ## Implementations
//!
//! | Engine | Source |
//! |--------|--------|
//! | [`SnapshotEngine`] | JSONL entity snapshot, `containers.conf`, `registries.conf` |
//! | [`MemoryEngine`] | Records held in memory (embedding and tests) |
//!
//! Every method issues exactly one query and returns either the full record
//! list for that kind or a [`BackendError`]. Callers do not retry.

mod conf;
mod memory;
mod snapshot;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{
    Connection, Container, EntityFilter, EntityKind, Image, Network, Pod, Registry, Volume,
};

pub use conf::{read_connections, read_registries};
pub use memory::MemoryEngine;
pub use snapshot::{SnapshotEngine, SnapshotRecord};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("listing {kind}s failed: {message}")]
    Query { kind: EntityKind, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} (line {line}): {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl BackendError {
    pub fn query(kind: EntityKind, message: impl Into<String>) -> Self {
        BackendError::Query {
            kind,
            message: message.into(),
        }
    }
}

/// Read-only access to the backend's entities
///
/// Implementations must be safe for sequential reuse. Nothing here assumes
/// concurrent use.
pub trait Engine {
    fn containers(&self, filter: &EntityFilter) -> Result<Vec<Container>, BackendError>;

    fn pods(&self, filter: &EntityFilter) -> Result<Vec<Pod>, BackendError>;

    fn images(&self, filter: &EntityFilter) -> Result<Vec<Image>, BackendError>;

    fn volumes(&self, filter: &EntityFilter) -> Result<Vec<Volume>, BackendError>;

    fn networks(&self, filter: &EntityFilter) -> Result<Vec<Network>, BackendError>;

    fn registries(&self, filter: &EntityFilter) -> Result<Vec<Registry>, BackendError>;

    fn connections(&self, filter: &EntityFilter) -> Result<Vec<Connection>, BackendError>;
}
