//! # Command-Line Interface
//!
//! Shell-facing front end for the completion engine.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `complete <ENTRY> [ARGS...] <PARTIAL>` | Run one entry point |
//! | `entries` | List entry point names |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Shell completion protocol
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! ctrcomp --verbose complete containers-running ""
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
