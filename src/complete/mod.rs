//! # Completion
//!
//! Named completion entry points over an [`Engine`].
//!
//! ## Flow
//!
//! ```text
//! shell ──(command, args, partial)──▶ Completer::<entry point>
//!                                        │
//!                                        ├── arity gate (positional entry points)
//!                                        ├── entity adapter ──▶ Engine query ──▶ prefix matcher
//!                                        ├── key-value grammar
//!                                        └── fixed vocabulary
//!                                        ▼
//!                               Completion { suggestions, directive }
//! ```
//!
//! Entry points never fail: backend and file errors are reported through
//! [`Diagnostics`] and come back as an empty completion with the error
//! directive.

mod accounts;
mod adapters;
mod entry;
mod router;
pub mod vocab;

use crate::engine::Engine;

pub use accounts::AccountFiles;
pub use entry::EntryPoint;

/// The shell's diagnostic channel
pub trait Diagnostics {
    /// Reports a failure the user should see
    fn error(&self, message: &str);

    /// Reports debugging detail
    fn debug(&self, context: &str, message: &str);
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn error(&self, _message: &str) {}

    fn debug(&self, _context: &str, _message: &str) {}
}

/// Completion entry points bound to one engine
///
/// The engine is borrowed read-only for the lifetime of the completer and
/// queried once per entity kind per call.
pub struct Completer<'a> {
    engine: &'a dyn Engine,
    diagnostics: &'a dyn Diagnostics,
    accounts: AccountFiles,
}

impl<'a> Completer<'a> {
    pub fn new(engine: &'a dyn Engine, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            engine,
            diagnostics,
            accounts: AccountFiles::default(),
        }
    }

    /// Reads users and groups from these files instead of `/etc`
    pub fn with_accounts(mut self, accounts: AccountFiles) -> Self {
        self.accounts = accounts;
        self
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::Diagnostics;
    use crate::domain::{Container, Image, Pod};

    /// Records reported messages
    #[derive(Default)]
    pub struct Recorder {
        pub errors: RefCell<Vec<String>>,
        pub debug: RefCell<Vec<String>>,
    }

    impl Diagnostics for Recorder {
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn debug(&self, context: &str, message: &str) {
            self.debug.borrow_mut().push(format!("{}: {}", context, message));
        }
    }

    pub fn container(id: &str, name: &str, pod: &str, state: &str) -> Container {
        Container {
            id: id.to_string(),
            names: vec![name.to_string()],
            pod_name: pod.to_string(),
            state: state.to_string(),
        }
    }

    pub fn pod(id: &str, name: &str, status: &str) -> Pod {
        Pod {
            id: id.to_string(),
            name: name.to_string(),
            status: status.to_string(),
        }
    }

    pub fn image(id: &str, tags: &[&str]) -> Image {
        Image {
            id: id.to_string(),
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}
