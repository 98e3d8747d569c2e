//! Entity query adapters
//!
//! Each adapter builds a filter, issues one query, and prefix-matches the
//! records. On a backend failure the error is reported and the completion
//! carries the error directive. There is no retry.

use super::Completer;
use crate::domain::{
    match_containers, match_images, match_names, match_pods, Completion, CompletionMode, Directive,
    EntityFilter, Suggestion,
};
use crate::engine::BackendError;

impl Completer<'_> {
    fn backend_failure(&self, err: BackendError) -> Completion {
        self.diagnostics.error(&err.to_string());
        Completion::error()
    }

    /// Containers in any of `statuses` (all when empty), annotated with the pod name
    pub fn get_containers(
        &self,
        to_complete: &str,
        mode: CompletionMode,
        statuses: &[&str],
    ) -> Completion {
        let filter = EntityFilter::all().with_statuses(statuses);
        match self.engine.containers(&filter) {
            Ok(containers) => Completion::new(
                match_containers(&containers, to_complete, mode),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }

    pub fn get_pods(
        &self,
        to_complete: &str,
        mode: CompletionMode,
        statuses: &[&str],
    ) -> Completion {
        let filter = EntityFilter::all().with_statuses(statuses);
        match self.engine.pods(&filter) {
            Ok(pods) => Completion::new(
                match_pods(&pods, to_complete, mode),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }

    pub fn get_volumes(&self, to_complete: &str) -> Completion {
        match self.engine.volumes(&EntityFilter::all()) {
            Ok(volumes) => Completion::new(
                match_names(volumes.iter().map(|v| v.name.as_str()), to_complete),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }

    pub fn get_images(&self, to_complete: &str) -> Completion {
        match self.engine.images(&EntityFilter::all()) {
            Ok(images) => Completion::new(
                match_images(&images, to_complete),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }

    pub fn get_networks(&self, to_complete: &str) -> Completion {
        match self.engine.networks(&EntityFilter::all()) {
            Ok(networks) => Completion::new(
                match_names(networks.iter().map(|n| n.name.as_str()), to_complete),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }

    pub fn get_registries(&self, to_complete: &str) -> Completion {
        match self.engine.registries(&EntityFilter::all()) {
            Ok(registries) => Completion::new(
                match_names(registries.iter().map(|r| r.name.as_str()), to_complete),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }

    /// Every connection, described by its URI
    pub fn get_connections(&self) -> Completion {
        match self.engine.connections(&EntityFilter::all()) {
            Ok(connections) => Completion::new(
                connections
                    .into_iter()
                    .map(|c| Suggestion::annotated(c.name, c.uri))
                    .collect(),
                Directive::NO_FILE_COMPLETION,
            ),
            Err(err) => self.backend_failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{container, image, pod, Recorder};
    use super::super::Silent;
    use super::*;
    use crate::domain::{Connection, EntityKind, Registry, Volume};
    use crate::engine::MemoryEngine;

    fn engine() -> MemoryEngine {
        let mut engine = MemoryEngine::new();
        engine.containers = vec![
            container("abcdef1234567890aaaa", "web", "frontend", "running"),
            container("abff001122334455bbbb", "db", "", "exited"),
        ];
        engine.pods = vec![pod("ab00aa11bb22cc33", "frontend", "running")];
        engine.images = vec![image(
            "0123456789abcdef",
            &["registry.example.org/group/app:latest"],
        )];
        engine.volumes = vec![
            Volume {
                name: "data".to_string(),
            },
            Volume {
                name: "cache".to_string(),
            },
        ];
        engine.registries = vec![
            Registry {
                name: "docker.io".to_string(),
            },
            Registry {
                name: "quay.io".to_string(),
            },
        ];
        engine.connections = vec![Connection {
            name: "prod".to_string(),
            uri: "ssh://core@10.0.0.5/run/podman/podman.sock".to_string(),
        }];
        engine
    }

    #[test]
    fn two_characters_match_ids_only() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        let completion = completer.get_containers("ab", CompletionMode::Default, &[]);
        assert_eq!(completion.texts(), vec!["abcdef123456", "abff00112233"]);
        assert_eq!(completion.directive, Directive::NO_FILE_COMPLETION);
    }

    #[test]
    fn one_character_matches_names_only() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        let completion = completer.get_containers("a", CompletionMode::Default, &[]);
        assert!(completion.is_empty());
        let completion = completer.get_containers("w", CompletionMode::Default, &[]);
        assert_eq!(completion.rendered(), vec!["web\tfrontend"]);
    }

    #[test]
    fn statuses_restrict_containers() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        let completion = completer.get_containers("", CompletionMode::Default, &["exited"]);
        assert_eq!(completion.texts(), vec!["db"]);
    }

    #[test]
    fn backend_failure_reports_and_errors() {
        let engine = engine().fail(EntityKind::Container);
        let recorder = Recorder::default();
        let completer = Completer::new(&engine, &recorder);

        let completion = completer.get_containers("w", CompletionMode::Default, &[]);
        assert!(completion.is_empty());
        assert_eq!(completion.directive, Directive::ERROR);
        assert_eq!(recorder.errors.borrow().len(), 1);
        assert!(recorder.errors.borrow()[0].contains("container"));
    }

    #[test]
    fn pods_by_id() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        assert_eq!(
            completer.get_pods("ab", CompletionMode::IdsOnly, &[]).texts(),
            vec!["ab00aa11bb22"]
        );
        assert_eq!(
            completer.get_pods("f", CompletionMode::Default, &[]).texts(),
            vec!["frontend"]
        );
    }

    #[test]
    fn volumes_and_registries_by_prefix() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        assert_eq!(completer.get_volumes("d").texts(), vec!["data"]);
        assert_eq!(completer.get_volumes("").texts(), vec!["data", "cache"]);
        assert_eq!(completer.get_registries("q").texts(), vec!["quay.io"]);
    }

    #[test]
    fn images_full_reference_when_empty() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        assert_eq!(
            completer.get_images("").texts(),
            vec!["registry.example.org/group/app:latest"]
        );
        let texts = completer.get_images("app").texts().join(",");
        assert_eq!(texts, "app:latest,app");
    }

    #[test]
    fn connections_are_annotated_and_unfiltered() {
        let engine = engine();
        let completer = Completer::new(&engine, &Silent);
        let completion = completer.get_connections();
        assert_eq!(
            completion.rendered(),
            vec!["prod\tssh://core@10.0.0.5/run/podman/podman.sock"]
        );
    }
}
