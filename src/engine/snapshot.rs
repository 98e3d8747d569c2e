//! JSONL snapshot engine
//!
//! Entities are read from a snapshot file with one JSON record per line,
//! tagged by `kind`:
//!
//! ```text
//! {"kind":"container","id":"3f1c...","names":["web"],"pod_name":"","state":"running"}
//! {"kind":"image","id":"a1b2...","repo_tags":["quay.io/app:latest"]}
//! ```
//!
//! Connections and registries come from `containers.conf` and
//! `registries.conf`. Reads hold a shared lock on the snapshot.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use super::conf::{read_connections, read_registries};
use super::{BackendError, Engine};
use crate::domain::{Connection, Container, EntityFilter, Image, Network, Pod, Registry, Volume};

/// One line of a snapshot file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotRecord {
    Container(Container),
    Pod(Pod),
    Image(Image),
    Volume(Volume),
    Network(Network),
}

/// Engine backed by a snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotEngine {
    path: PathBuf,
    containers_conf: Option<PathBuf>,
    registries_conf: Option<PathBuf>,
}

impl SnapshotEngine {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            containers_conf: None,
            registries_conf: None,
        }
    }

    /// Reads service destinations from this `containers.conf`
    pub fn with_containers_conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.containers_conf = Some(path.into());
        self
    }

    /// Reads search registries from this `registries.conf`
    pub fn with_registries_conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.registries_conf = Some(path.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record in the snapshot
    ///
    /// A missing snapshot is an error: the engine cannot be reached.
    pub fn read_all(&self) -> Result<Vec<SnapshotRecord>, BackendError> {
        let io_err = |source: std::io::Error| BackendError::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(io_err)?;
        file.lock_shared().map_err(io_err)?;

        let reader = BufReader::new(&file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(io_err)?;
            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str(&line).map_err(|e| BackendError::Parse {
                path: self.path.clone(),
                line: line_num + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }

        // Lock is released when file is dropped
        Ok(records)
    }

    fn select<T>(
        &self,
        pick: impl Fn(SnapshotRecord) -> Option<T>,
    ) -> Result<Vec<T>, BackendError> {
        Ok(self.read_all()?.into_iter().filter_map(pick).collect())
    }
}

impl Engine for SnapshotEngine {
    fn containers(&self, filter: &EntityFilter) -> Result<Vec<Container>, BackendError> {
        self.select(|record| match record {
            SnapshotRecord::Container(c) if filter.accepts_state(&c.state) => Some(c),
            _ => None,
        })
    }

    fn pods(&self, filter: &EntityFilter) -> Result<Vec<Pod>, BackendError> {
        self.select(|record| match record {
            SnapshotRecord::Pod(p) if filter.accepts_state(&p.status) => Some(p),
            _ => None,
        })
    }

    fn images(&self, _filter: &EntityFilter) -> Result<Vec<Image>, BackendError> {
        self.select(|record| match record {
            SnapshotRecord::Image(i) => Some(i),
            _ => None,
        })
    }

    fn volumes(&self, _filter: &EntityFilter) -> Result<Vec<Volume>, BackendError> {
        self.select(|record| match record {
            SnapshotRecord::Volume(v) => Some(v),
            _ => None,
        })
    }

    fn networks(&self, _filter: &EntityFilter) -> Result<Vec<Network>, BackendError> {
        self.select(|record| match record {
            SnapshotRecord::Network(n) => Some(n),
            _ => None,
        })
    }

    fn registries(&self, _filter: &EntityFilter) -> Result<Vec<Registry>, BackendError> {
        match &self.registries_conf {
            Some(path) => read_registries(path),
            None => Ok(Vec::new()),
        }
    }

    fn connections(&self, _filter: &EntityFilter) -> Result<Vec<Connection>, BackendError> {
        match &self.containers_conf {
            Some(path) => read_connections(path),
            None => Ok(Vec::new()),
        }
    }
}
