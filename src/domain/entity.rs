//! Entity records returned by the query engine
//!
//! Records are read-only snapshots valid for one completion call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of nameable objects the tool manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Container,
    Pod,
    Image,
    Volume,
    Network,
    Registry,
    Connection,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Container => "container",
            EntityKind::Pod => "pod",
            EntityKind::Image => "image",
            EntityKind::Volume => "volume",
            EntityKind::Network => "network",
            EntityKind::Registry => "registry",
            EntityKind::Connection => "connection",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,

    /// Declared names; the first one is the display name
    pub names: Vec<String>,

    #[serde(default)]
    pub pod_name: String,

    /// Lifecycle state ("created", "running", "exited", ...)
    #[serde(default)]
    pub state: String,
}

impl Container {
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,

    /// References in `repo[:tag|@digest]` form
    #[serde(default)]
    pub repo_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub name: String,
}

/// A remote service destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub uri: String,
}

/// A query request for one entity kind
///
/// Built per call and discarded once the query returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityFilter {
    /// Accepted states; empty means any
    pub statuses: Vec<String>,

    /// Include inactive entities, not just running ones
    pub all: bool,

    /// Include pod information for containers
    pub pods: bool,
}

impl EntityFilter {
    /// Everything, regardless of state
    pub fn all() -> Self {
        Self {
            statuses: Vec::new(),
            all: true,
            pods: true,
        }
    }

    /// Restricts the filter to the given states
    pub fn with_statuses(mut self, statuses: &[&str]) -> Self {
        self.statuses = statuses.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Returns true if a record in `state` passes the status filter
    pub fn accepts_state(&self, state: &str) -> bool {
        if !self.statuses.is_empty() {
            return self.statuses.iter().any(|s| s == state);
        }
        self.all || state == "running"
    }
}

/// Which fields of a record are eligible for prefix matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// Names always, IDs once more than one character is typed
    #[default]
    Default,
    IdsOnly,
    NamesOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_statuses() {
        let filter = EntityFilter::all().with_statuses(&["created", "exited"]);
        assert!(filter.accepts_state("created"));
        assert!(filter.accepts_state("exited"));
        assert!(!filter.accepts_state("running"));
    }

    #[test]
    fn filter_active_only() {
        let filter = EntityFilter::default();
        assert!(filter.accepts_state("running"));
        assert!(!filter.accepts_state("exited"));
        assert!(EntityFilter::all().accepts_state("exited"));
    }

    #[test]
    fn container_deserializes_with_defaults() {
        let json = r#"{"id":"abc","names":["web"]}"#;
        let container: Container = serde_json::from_str(json).unwrap();
        assert_eq!(container.primary_name(), Some("web"));
        assert_eq!(container.pod_name, "");
        assert_eq!(container.state, "");
    }
}
