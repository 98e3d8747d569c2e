//! Readers for the container tools' TOML configuration files
//!
//! - `containers.conf`: `[engine.service_destinations.<name>]` tables with a `uri`
//! - `registries.conf`: `unqualified-search-registries`, or the older
//!   `[registries.search] registries = [...]` form
//!
//! A missing file reads as empty.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::BackendError;
use crate::domain::{Connection, Registry};

#[derive(Debug, Default, Deserialize)]
struct ContainersConf {
    #[serde(default)]
    engine: EngineTable,
}

#[derive(Debug, Default, Deserialize)]
struct EngineTable {
    #[serde(default)]
    service_destinations: BTreeMap<String, Destination>,
}

#[derive(Debug, Deserialize)]
struct Destination {
    uri: String,
}

#[derive(Debug, Default, Deserialize)]
struct RegistriesConf {
    #[serde(default, rename = "unqualified-search-registries")]
    unqualified_search: Vec<String>,

    #[serde(default)]
    registries: LegacyRegistries,
}

#[derive(Debug, Default, Deserialize)]
struct LegacyRegistries {
    #[serde(default)]
    search: LegacyList,
}

#[derive(Debug, Default, Deserialize)]
struct LegacyList {
    #[serde(default)]
    registries: Vec<String>,
}

/// Reads a TOML file, or `None` when it does not exist
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, BackendError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BackendError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str(&content).map(Some).map_err(|e| {
        let line = e
            .span()
            .map(|span| content[..span.start].matches('\n').count() + 1)
            .unwrap_or(0);
        BackendError::Parse {
            path: path.to_path_buf(),
            line,
            message: e.message().to_string(),
        }
    })
}

/// Service destinations, ordered by name
pub fn read_connections(path: &Path) -> Result<Vec<Connection>, BackendError> {
    let conf: ContainersConf = read_toml(path)?.unwrap_or_default();
    Ok(conf
        .engine
        .service_destinations
        .into_iter()
        .map(|(name, destination)| Connection {
            name,
            uri: destination.uri,
        })
        .collect())
}

/// Search registries in declaration order, without duplicates
pub fn read_registries(path: &Path) -> Result<Vec<Registry>, BackendError> {
    let conf: RegistriesConf = read_toml(path)?.unwrap_or_default();

    let mut names: Vec<String> = Vec::new();
    for name in conf
        .unqualified_search
        .into_iter()
        .chain(conf.registries.search.registries)
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(names.into_iter().map(|name| Registry { name }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn connections_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("containers.conf");
        fs::write(
            &path,
            r#"
[engine]
active_service = "prod"

[engine.service_destinations.prod]
uri = "ssh://core@10.0.0.5:22/run/podman/podman.sock"
identity = "/home/me/.ssh/id_ed25519"

[engine.service_destinations.dev]
uri = "unix:///run/user/1000/podman/podman.sock"
"#,
        )
        .unwrap();

        let connections = read_connections(&path).unwrap();
        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].name, "dev");
        assert_eq!(connections[1].uri, "ssh://core@10.0.0.5:22/run/podman/podman.sock");
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read_connections(&dir.path().join("nope.conf")).unwrap().is_empty());
        assert!(read_registries(&dir.path().join("nope.conf")).unwrap().is_empty());
    }

    #[test]
    fn registries_both_formats() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registries.conf");
        fs::write(
            &path,
            r#"
unqualified-search-registries = ["registry.fedoraproject.org", "docker.io"]

[registries.search]
registries = ["docker.io", "quay.io"]
"#,
        )
        .unwrap();

        let names: Vec<_> = read_registries(&path)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["registry.fedoraproject.org", "docker.io", "quay.io"]);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registries.conf");
        fs::write(&path, "\nunqualified-search-registries = [\"a\"\n").unwrap();

        assert!(matches!(
            read_registries(&path),
            Err(BackendError::Parse { .. })
        ));
    }
}
