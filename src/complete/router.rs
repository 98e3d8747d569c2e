//! Completion entry points
//!
//! Positional entry points go through the arity gate first; a rejected
//! position yields no suggestions and no files, never an error. Flag value
//! entry points complete regardless of position.

use super::{vocab, Completer, EntryPoint};
use crate::domain::{
    gate, CommandContext, Completion, CompletionMode, Directive, GateDecision, KeyValueGrammar,
    Suggestion,
};

impl Completer<'_> {
    /// Returns true if one more argument is acceptable at the cursor
    fn valid_cmd_line(&self, cmd: &CommandContext, args: &[String], to_complete: &str) -> bool {
        match gate(&cmd.arity, args, to_complete) {
            GateDecision::Valid => true,
            GateDecision::BelowFloor { need, got } => {
                self.diagnostics.debug(
                    "arity",
                    &format!("{}: needs {} arg(s), has {}; completing", cmd.name, need, got),
                );
                true
            }
            GateDecision::Rejected(err) => {
                self.diagnostics
                    .debug("arity", &format!("{}: {}; not completing", cmd.name, err));
                false
            }
        }
    }

    /// Gates `complete` on the argument position
    fn positional(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
        complete: impl FnOnce() -> Completion,
    ) -> Completion {
        if !self.valid_cmd_line(cmd, args, to_complete) {
            return Completion::nothing();
        }
        complete()
    }

    /// Runs the entry point `entry`
    pub fn complete(
        &self,
        entry: EntryPoint,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        match entry {
            EntryPoint::Containers => self.containers(cmd, args, to_complete),
            EntryPoint::ContainersCreated => self.containers_created(cmd, args, to_complete),
            EntryPoint::ContainersExited => self.containers_exited(cmd, args, to_complete),
            EntryPoint::ContainersPaused => self.containers_paused(cmd, args, to_complete),
            EntryPoint::ContainersRunning => self.containers_running(cmd, args, to_complete),
            EntryPoint::ContainersStartable => self.containers_startable(cmd, args, to_complete),
            EntryPoint::Pods => self.pods(cmd, args, to_complete),
            EntryPoint::PodsRunning => self.pods_running(cmd, args, to_complete),
            EntryPoint::ContainersAndPods => self.containers_and_pods(cmd, args, to_complete),
            EntryPoint::ContainersAndImages => self.containers_and_images(cmd, args, to_complete),
            EntryPoint::Volumes => self.volumes(cmd, args, to_complete),
            EntryPoint::Images => self.images(cmd, args, to_complete),
            EntryPoint::CreateRun => self.create_run(cmd, args, to_complete),
            EntryPoint::Registries => self.registries(cmd, args, to_complete),
            EntryPoint::Networks => self.networks(cmd, args, to_complete),
            EntryPoint::Cp => self.cp(cmd, args, to_complete),
            EntryPoint::SystemConnections => self.system_connections(cmd, args, to_complete),
            EntryPoint::DetachKeys => self.detach_keys(to_complete),
            EntryPoint::Namespace => self.namespace(to_complete),
            EntryPoint::UserNamespace => self.user_namespace(to_complete),
            EntryPoint::LogOpt => self.log_opt(to_complete),
            EntryPoint::SecurityOption => self.security_option(to_complete),
            EntryPoint::User => self.user_flag(to_complete),
            EntryPoint::VolumeFlag => self.volume_flag(to_complete),
            EntryPoint::PsFilters => self.ps_filters(to_complete),
            EntryPoint::PodPsFilters => self.pod_ps_filters(to_complete),
            EntryPoint::ChangeInstructions
            | EntryPoint::ImageFormat
            | EntryPoint::CreateAttach
            | EntryPoint::CgroupMode
            | EntryPoint::ImageVolume
            | EntryPoint::LogDriver
            | EntryPoint::PullOption
            | EntryPoint::RestartOption
            | EntryPoint::StopSignal
            | EntryPoint::SystemdFlag
            | EntryPoint::MountFlag
            | EntryPoint::JsonFormat
            | EntryPoint::EventFilter
            | EntryPoint::SystemdRestartOptions
            | EntryPoint::TrustType
            | EntryPoint::ImageSort
            | EntryPoint::InspectType
            | EntryPoint::ManifestFormat
            | EntryPoint::NetworkDriver
            | EntryPoint::PodShareNamespace
            | EntryPoint::PodPsSort
            | EntryPoint::PsSort
            | EntryPoint::ImageSaveFormat
            | EntryPoint::WaitCondition
            | EntryPoint::CgroupManager
            | EntryPoint::EventBackend
            | EntryPoint::LogLevel
            | EntryPoint::SdNotify => self.vocabulary(entry),
        }
    }

    fn vocabulary(&self, entry: EntryPoint) -> Completion {
        match entry.vocabulary() {
            Some((words, directive)) => Completion::words(words, directive),
            None => {
                self.diagnostics
                    .error(&format!("{} has no vocabulary", entry.name()));
                Completion::error()
            }
        }
    }

    pub fn containers(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_containers(to_complete, CompletionMode::Default, &[])
        })
    }

    pub fn containers_created(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_containers(to_complete, CompletionMode::Default, &["created"])
        })
    }

    pub fn containers_exited(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_containers(to_complete, CompletionMode::Default, &["exited"])
        })
    }

    pub fn containers_paused(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_containers(to_complete, CompletionMode::Default, &["paused"])
        })
    }

    pub fn containers_running(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_containers(to_complete, CompletionMode::Default, &["running"])
        })
    }

    /// Containers that can be started: created or exited
    pub fn containers_startable(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_containers(to_complete, CompletionMode::Default, &["created", "exited"])
        })
    }

    pub fn pods(&self, cmd: &CommandContext, args: &[String], to_complete: &str) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_pods(to_complete, CompletionMode::Default, &[])
        })
    }

    /// Running pods; degraded pods count as running
    pub fn pods_running(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            self.get_pods(to_complete, CompletionMode::Default, &["running", "degraded"])
        })
    }

    pub fn containers_and_pods(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            let mut suggestions = self
                .get_containers(to_complete, CompletionMode::Default, &[])
                .suggestions;
            suggestions.extend(
                self.get_pods(to_complete, CompletionMode::Default, &[]).suggestions,
            );
            Completion::new(suggestions, Directive::NO_FILE_COMPLETION)
        })
    }

    pub fn containers_and_images(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            let mut suggestions = self
                .get_containers(to_complete, CompletionMode::Default, &[])
                .suggestions;
            suggestions.extend(self.get_images(to_complete).suggestions);
            Completion::new(suggestions, Directive::NO_FILE_COMPLETION)
        })
    }

    pub fn volumes(&self, cmd: &CommandContext, args: &[String], to_complete: &str) -> Completion {
        self.positional(cmd, args, to_complete, || self.get_volumes(to_complete))
    }

    pub fn images(&self, cmd: &CommandContext, args: &[String], to_complete: &str) -> Completion {
        self.positional(cmd, args, to_complete, || self.get_images(to_complete))
    }

    /// The image for `create`/`run`, then the command to run in it
    pub fn create_run(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || {
            if args.is_empty() {
                return self.get_images(to_complete);
            }
            Completion::filesystem()
        })
    }

    pub fn registries(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || self.get_registries(to_complete))
    }

    pub fn networks(&self, cmd: &CommandContext, args: &[String], to_complete: &str) -> Completion {
        self.positional(cmd, args, to_complete, || self.get_networks(to_complete))
    }

    /// `cp SRC DEST`, where either side is a path or `container:path`
    ///
    /// Matching container names are offered without a trailing space so a
    /// `:path` can follow; otherwise the shell completes local paths. Nothing
    /// is offered past the second argument.
    pub fn cp(&self, cmd: &CommandContext, args: &[String], to_complete: &str) -> Completion {
        self.positional(cmd, args, to_complete, || {
            if args.len() >= 2 {
                return Completion::nothing();
            }

            let containers = self.get_containers(to_complete, CompletionMode::Default, &[]);
            if containers
                .suggestions
                .iter()
                .any(|s| s.text.starts_with(to_complete))
            {
                return Completion::new(containers.suggestions, Directive::NO_APPEND_SPACE);
            }
            Completion::filesystem()
        })
    }

    pub fn system_connections(
        &self,
        cmd: &CommandContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        self.positional(cmd, args, to_complete, || self.get_connections())
    }

    /// `--detach-keys`: another `ctrl-` after each comma
    pub fn detach_keys(&self, to_complete: &str) -> Completion {
        let suggestion = if to_complete.ends_with(',') {
            format!("{}ctrl-", to_complete)
        } else {
            "ctrl-".to_string()
        };
        Completion::new(vec![Suggestion::new(suggestion)], Directive::NO_APPEND_SPACE)
    }

    fn namespace_grammar(&self) -> KeyValueGrammar<'_> {
        KeyValueGrammar::new()
            .nested("container:", move |s| {
                self.get_containers(s, CompletionMode::Default, &[])
            })
            .nested("ns:", |_| Completion::filesystem())
            .leaf("host")
            .leaf("private")
    }

    /// `host`, `private`, `container:<name>` or `ns:<path>`
    pub fn namespace(&self, to_complete: &str) -> Completion {
        self.namespace_grammar().complete(to_complete)
    }

    /// The namespace modes plus `auto` and `keep-id`
    pub fn user_namespace(&self, to_complete: &str) -> Completion {
        let mut completion = self.namespace(to_complete);
        if completion.directive.is_error() {
            return completion;
        }
        completion
            .suggestions
            .extend(vocab::USER_NAMESPACE_EXTRAS.iter().map(|w| Suggestion::new(*w)));
        completion
    }

    pub fn log_opt(&self, to_complete: &str) -> Completion {
        if to_complete.starts_with("path=") {
            return Completion::filesystem();
        }
        Completion::words(
            vocab::LOG_OPTIONS,
            Directive::NO_FILE_COMPLETION | Directive::NO_APPEND_SPACE,
        )
    }

    pub fn security_option(&self, to_complete: &str) -> Completion {
        KeyValueGrammar::new()
            .leaf("apparmor=")
            .leaf("no-new-privileges")
            .nested("seccomp=", |_| Completion::filesystem())
            .nested("label=", |s| {
                if s.starts_with('d') {
                    return Completion::words(&["disable"], Directive::NO_FILE_COMPLETION);
                }
                Completion::words(
                    vocab::LABEL_OPTIONS,
                    Directive::NO_APPEND_SPACE | Directive::NO_FILE_COMPLETION,
                )
            })
            .complete(to_complete)
    }

    /// Volume names, then a second path after `:`
    pub fn volume_flag(&self, to_complete: &str) -> Completion {
        let volumes = self.get_volumes(to_complete);
        let directive = if to_complete.contains(':') {
            Directive::FILESYSTEM_PATHS
        } else {
            Directive::FILESYSTEM_PATHS | Directive::NO_APPEND_SPACE
        };
        Completion::new(volumes.suggestions, directive)
    }

    /// `ps --filter`
    pub fn ps_filters(&self, to_complete: &str) -> Completion {
        KeyValueGrammar::new()
            .nested("id=", move |s| self.get_containers(s, CompletionMode::IdsOnly, &[]))
            .nested("name=", move |s| {
                self.get_containers(s, CompletionMode::NamesOnly, &[])
            })
            .nested("status=", |_| {
                Completion::words(vocab::CONTAINER_STATUSES, Directive::NO_FILE_COMPLETION)
            })
            .nested("ancestor=", move |s| self.get_images(s))
            .nested("before=", move |s| {
                self.get_containers(s, CompletionMode::Default, &[])
            })
            .nested("since=", move |s| {
                self.get_containers(s, CompletionMode::Default, &[])
            })
            .nested("volume=", move |s| self.get_volumes(s))
            .nested("health=", |_| {
                Completion::words(vocab::HEALTH_STATES, Directive::NO_FILE_COMPLETION)
            })
            .leaf("label=")
            .leaf("exited=")
            .leaf("until=")
            .complete(to_complete)
    }

    /// `pod ps --filter`
    pub fn pod_ps_filters(&self, to_complete: &str) -> Completion {
        KeyValueGrammar::new()
            .nested("id=", move |s| self.get_pods(s, CompletionMode::IdsOnly, &[]))
            .nested("name=", move |s| self.get_pods(s, CompletionMode::NamesOnly, &[]))
            .nested("status=", |_| {
                Completion::words(vocab::POD_STATUSES, Directive::NO_FILE_COMPLETION)
            })
            .nested("ctr-ids=", move |s| {
                self.get_containers(s, CompletionMode::IdsOnly, &[])
            })
            .nested("ctr-names=", move |s| {
                self.get_containers(s, CompletionMode::NamesOnly, &[])
            })
            .leaf("ctr-number=")
            .nested("ctr-status=", |_| {
                Completion::words(vocab::CONTAINER_STATUSES, Directive::NO_FILE_COMPLETION)
            })
            .leaf("label=")
            .complete(to_complete)
    }
}
