//! Names of the completion entry points

use clap::ValueEnum;

use super::vocab;
use crate::domain::Directive;

/// One entry point per positional argument kind or flag value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum EntryPoint {
    // Positional arguments
    Containers,
    ContainersCreated,
    ContainersExited,
    ContainersPaused,
    ContainersRunning,
    ContainersStartable,
    Pods,
    PodsRunning,
    ContainersAndPods,
    ContainersAndImages,
    Volumes,
    Images,
    CreateRun,
    Registries,
    Networks,
    Cp,
    SystemConnections,

    // Flag values
    DetachKeys,
    ChangeInstructions,
    ImageFormat,
    CreateAttach,
    Namespace,
    UserNamespace,
    CgroupMode,
    ImageVolume,
    LogDriver,
    LogOpt,
    PullOption,
    RestartOption,
    SecurityOption,
    StopSignal,
    SystemdFlag,
    User,
    MountFlag,
    VolumeFlag,
    JsonFormat,
    EventFilter,
    SystemdRestartOptions,
    TrustType,
    ImageSort,
    InspectType,
    ManifestFormat,
    NetworkDriver,
    PodShareNamespace,
    PodPsSort,
    PsSort,
    ImageSaveFormat,
    WaitCondition,
    CgroupManager,
    EventBackend,
    LogLevel,
    SdNotify,
    PsFilters,
    PodPsFilters,
}

impl EntryPoint {
    pub fn all() -> &'static [EntryPoint] {
        EntryPoint::value_variants()
    }

    /// Command-line name, e.g. `containers-running`
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }

    /// Returns true if the entry point completes a positional argument and
    /// is subject to the arity gate
    pub fn is_positional(&self) -> bool {
        matches!(
            self,
            EntryPoint::Containers
                | EntryPoint::ContainersCreated
                | EntryPoint::ContainersExited
                | EntryPoint::ContainersPaused
                | EntryPoint::ContainersRunning
                | EntryPoint::ContainersStartable
                | EntryPoint::Pods
                | EntryPoint::PodsRunning
                | EntryPoint::ContainersAndPods
                | EntryPoint::ContainersAndImages
                | EntryPoint::Volumes
                | EntryPoint::Images
                | EntryPoint::CreateRun
                | EntryPoint::Registries
                | EntryPoint::Networks
                | EntryPoint::Cp
                | EntryPoint::SystemConnections
        )
    }

    /// The fixed word list and directive, for closed vocabularies
    pub fn vocabulary(&self) -> Option<(&'static [&'static str], Directive)> {
        let no_files = Directive::NO_FILE_COMPLETION;
        let no_space = Directive::NO_APPEND_SPACE;
        let words = match self {
            EntryPoint::ChangeInstructions => return Some((vocab::CHANGE_INSTRUCTIONS, no_space)),
            EntryPoint::MountFlag => return Some((vocab::MOUNT_TYPES, no_space)),
            EntryPoint::EventFilter => return Some((vocab::EVENT_FILTERS, no_space)),
            EntryPoint::ImageFormat => vocab::IMAGE_FORMATS,
            EntryPoint::CreateAttach => vocab::ATTACH_STREAMS,
            EntryPoint::CgroupMode => vocab::CGROUP_MODES,
            EntryPoint::ImageVolume => vocab::IMAGE_VOLUMES,
            EntryPoint::LogDriver => vocab::LOG_DRIVERS,
            EntryPoint::PullOption => vocab::PULL_POLICIES,
            EntryPoint::RestartOption => vocab::RESTART_POLICIES,
            EntryPoint::StopSignal => vocab::STOP_SIGNALS,
            EntryPoint::SystemdFlag => vocab::SYSTEMD_FLAG,
            EntryPoint::JsonFormat => vocab::JSON_FORMAT,
            EntryPoint::SystemdRestartOptions => vocab::SYSTEMD_RESTART_POLICIES,
            EntryPoint::TrustType => vocab::TRUST_TYPES,
            EntryPoint::ImageSort => vocab::IMAGE_SORT,
            EntryPoint::InspectType => vocab::INSPECT_TYPES,
            EntryPoint::ManifestFormat => vocab::MANIFEST_FORMATS,
            EntryPoint::NetworkDriver => vocab::NETWORK_DRIVERS,
            EntryPoint::PodShareNamespace => vocab::POD_SHARE_NAMESPACES,
            EntryPoint::PodPsSort => vocab::POD_PS_SORT,
            EntryPoint::PsSort => vocab::PS_SORT,
            EntryPoint::ImageSaveFormat => vocab::IMAGE_SAVE_FORMATS,
            EntryPoint::WaitCondition => vocab::WAIT_CONDITIONS,
            EntryPoint::CgroupManager => vocab::CGROUP_MANAGERS,
            EntryPoint::EventBackend => vocab::EVENT_BACKENDS,
            EntryPoint::LogLevel => vocab::LOG_LEVELS,
            EntryPoint::SdNotify => vocab::SD_NOTIFY_MODES,
            _ => return None,
        };
        Some((words, no_files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(EntryPoint::ContainersRunning.name(), "containers-running");
        assert_eq!(EntryPoint::SdNotify.name(), "sd-notify");
        assert_eq!(
            EntryPoint::from_str("pod-ps-filters", false),
            Ok(EntryPoint::PodPsFilters)
        );
    }

    #[test]
    fn positional_entries_have_no_vocabulary() {
        for entry in EntryPoint::all() {
            if entry.is_positional() {
                assert!(entry.vocabulary().is_none(), "{:?}", entry);
            }
        }
    }

    #[test]
    fn log_drivers_hide_json_file() {
        let (words, directive) = EntryPoint::LogDriver.vocabulary().unwrap();
        assert_eq!(words, &["journald", "none", "k8s-file"]);
        assert_eq!(directive, Directive::NO_FILE_COMPLETION);
    }
}
