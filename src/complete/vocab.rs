//! Closed vocabularies offered without querying the engine
//!
//! These lists are part of the tool's command-line contract and are kept
//! in the order users already know.

/// Instructions accepted by `--change` on commit and import
pub const CHANGE_INSTRUCTIONS: &[&str] = &[
    "CMD",
    "ENTRYPOINT",
    "ENV",
    "EXPOSE",
    "LABEL",
    "ONBUILD",
    "STOPSIGNAL",
    "USER",
    "VOLUME",
    "WORKDIR",
];

pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error", "fatal", "panic"];

pub const IMAGE_FORMATS: &[&str] = &["oci", "docker"];

pub const ATTACH_STREAMS: &[&str] = &["stdin", "stdout", "stderr"];

pub const CGROUP_MODES: &[&str] = &["enabled", "disabled", "no-conmon", "split"];

pub const IMAGE_VOLUMES: &[&str] = &["bind", "tmpfs", "ignore"];

// json-file is accepted but not advertised
pub const LOG_DRIVERS: &[&str] = &["journald", "none", "k8s-file"];

pub const LOG_OPTIONS: &[&str] = &["path=", "tag="];

pub const PULL_POLICIES: &[&str] = &["always", "missing", "never"];

pub const RESTART_POLICIES: &[&str] = &["always", "no", "on-failure", "unless-stopped"];

/// Sub-keys of `--security-opt label=`
pub const LABEL_OPTIONS: &[&str] = &["user:", "role:", "type:", "level:", "filetype:", "disable"];

pub const STOP_SIGNALS: &[&str] = &["SIGHUP", "SIGINT", "SIGKILL", "SIGTERM"];

pub const SYSTEMD_FLAG: &[&str] = &["true", "false", "always"];

pub const MOUNT_TYPES: &[&str] = &["type=bind,", "type=volume,", "type=tmpfs,"];

pub const JSON_FORMAT: &[&str] = &["json"];

pub const EVENT_FILTERS: &[&str] = &["container=", "event=", "image=", "pod=", "volume=", "type="];

/// Restart policies of generated systemd units
pub const SYSTEMD_RESTART_POLICIES: &[&str] = &[
    "no",
    "on-success",
    "on-failure",
    "on-abnormal",
    "on-watchdog",
    "on-abort",
    "always",
];

pub const TRUST_TYPES: &[&str] = &["signedBy", "accept", "reject"];

pub const IMAGE_SORT: &[&str] = &["created", "id", "repository", "size", "tag"];

pub const INSPECT_TYPES: &[&str] = &["container", "image", "all"];

pub const MANIFEST_FORMATS: &[&str] = &["oci", "v2s2"];

pub const NETWORK_DRIVERS: &[&str] = &["bridge"];

pub const POD_SHARE_NAMESPACES: &[&str] = &["ipc", "net", "pid", "user", "uts", "cgroup", "none"];

pub const POD_PS_SORT: &[&str] = &["created", "id", "name", "status", "number"];

pub const PS_SORT: &[&str] = &[
    "command",
    "created",
    "id",
    "image",
    "names",
    "runningfor",
    "size",
    "status",
];

pub const IMAGE_SAVE_FORMATS: &[&str] = &["oci-archive", "oci-dir", "docker-dir"];

pub const WAIT_CONDITIONS: &[&str] = &[
    "unknown",
    "configured",
    "created",
    "running",
    "stopped",
    "paused",
    "exited",
    "removing",
];

pub const CGROUP_MANAGERS: &[&str] = &["cgroupfs", "systemd"];

pub const EVENT_BACKENDS: &[&str] = &["file", "journald", "none"];

pub const SD_NOTIFY_MODES: &[&str] = &["container", "conmon", "ignore"];

pub const CONTAINER_STATUSES: &[&str] = &[
    "created", "running", "paused", "stopped", "exited", "unknown",
];

pub const POD_STATUSES: &[&str] = &[
    "stopped", "running", "paused", "exited", "dead", "created", "degraded",
];

pub const HEALTH_STATES: &[&str] = &["healthy", "unhealthy"];

/// Modes `--userns` accepts on top of the namespace grammar
pub const USER_NAMESPACE_EXTRAS: &[&str] = &["auto", "keep-id"];
