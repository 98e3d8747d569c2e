//! ctrcomp - Shell tab-completion engine for container CLIs
//!
//! Given the command being completed, the arguments already typed and the
//! partial token, each entry point returns a list of suggestions plus a
//! directive telling the shell how to finish the word. Entities come from an
//! [`engine::Engine`]; the binary ships a file-backed snapshot engine.

pub mod domain;
pub mod engine;
pub mod complete;
pub mod config;
pub mod cli;

pub use complete::{Completer, Diagnostics, EntryPoint, Silent};
pub use domain::{Completion, Directive, Suggestion};
pub use engine::{BackendError, Engine};
