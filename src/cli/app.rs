//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use crate::complete::{Completer, EntryPoint};
use crate::config::Config;
use crate::domain::{ArityPolicy, CommandContext, Completion};

#[derive(Parser)]
#[command(name = "ctrcomp")]
#[command(author, version, about = "Shell completion engine for container CLIs")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "CTRCOMP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Complete one argument or flag value
    Complete {
        /// Entry point to run
        entry: EntryPoint,

        /// Positional arity of the command being completed
        /// (any, none, exact:N, min:N, max:N, range:A:B)
        #[arg(long, default_value = "any")]
        arity: ArityPolicy,

        /// Name of the command being completed
        #[arg(long = "command-name", default_value = "")]
        command_name: String,

        /// Entity snapshot to query
        #[arg(long, env = "CTRCOMP_SNAPSHOT")]
        snapshot: Option<PathBuf>,

        /// containers.conf holding service destinations
        #[arg(long, env = "CTRCOMP_CONTAINERS_CONF")]
        containers_conf: Option<PathBuf>,

        /// registries.conf holding search registries
        #[arg(long, env = "CTRCOMP_REGISTRIES_CONF")]
        registries_conf: Option<PathBuf>,

        /// User database for --user completion
        #[arg(long)]
        passwd: Option<PathBuf>,

        /// Group database for --user completion
        #[arg(long)]
        group: Option<PathBuf>,

        /// Arguments already on the line, then the partial token
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// List completion entry points
    Entries,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Complete {
            entry,
            arity,
            command_name,
            snapshot,
            containers_conf,
            registries_conf,
            passwd,
            group,
            words,
        } => {
            let loaded = match &cli.config {
                Some(path) => Config::load_from(path),
                None => Config::load(),
            };
            let mut config = match loaded {
                Ok(config) => config,
                Err(e) => {
                    // The shell still needs a directive line
                    output.error(&format!("{:#}", e));
                    output.completion(&Completion::error());
                    return Ok(());
                }
            };
            config.snapshot = snapshot.or(config.snapshot);
            config.containers_conf = containers_conf.or(config.containers_conf);
            config.registries_conf = registries_conf.or(config.registries_conf);
            config.passwd = passwd.or(config.passwd);
            config.group = group.or(config.group);

            if !entry.is_positional() && arity != ArityPolicy::Any {
                output.verbose_ctx(
                    "arity",
                    &format!("{} completes a flag value; --arity {} ignored", entry.name(), arity),
                );
            }

            let (to_complete, args) = split_partial(words);
            let cmd = CommandContext::with_policy(command_name, arity);
            complete(&output, &config, entry, &cmd, &args, &to_complete);
        }

        Commands::Entries => entries(&output),
    }

    Ok(())
}

/// Splits the trailing words into the partial token and the arguments before it
fn split_partial(mut words: Vec<String>) -> (String, Vec<String>) {
    let to_complete = words.pop().unwrap_or_default();
    (to_complete, words)
}

fn complete(
    output: &Output,
    config: &Config,
    entry: EntryPoint,
    cmd: &CommandContext,
    args: &[String],
    to_complete: &str,
) {
    let engine = config.engine();
    output.verbose_ctx(
        "complete",
        &format!(
            "{} args={:?} partial={:?} snapshot={}",
            entry.name(),
            args,
            to_complete,
            engine.path().display()
        ),
    );

    let completer = Completer::new(&engine, output).with_accounts(config.accounts());
    let completion = completer.complete(entry, cmd, args, to_complete);
    output.completion(&completion);
}

fn entry_kind(entry: EntryPoint) -> &'static str {
    if entry.is_positional() {
        "positional"
    } else {
        "flag"
    }
}

fn entries(output: &Output) {
    if output.is_json() {
        let items: Vec<_> = EntryPoint::all()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.name(),
                    "kind": entry_kind(*e),
                })
            })
            .collect();
        output.data(&items);
    } else {
        for entry in EntryPoint::all() {
            println!("{}", entry.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn last_word_is_the_partial() {
        let (partial, args) = split_partial(vec!["web".into(), "d".into()]);
        assert_eq!(partial, "d");
        assert_eq!(args, vec!["web".to_string()]);

        let (partial, args) = split_partial(Vec::new());
        assert_eq!(partial, "");
        assert!(args.is_empty());
    }

    #[test]
    fn parses_complete_invocation() {
        let cli = Cli::try_parse_from([
            "ctrcomp",
            "complete",
            "containers-running",
            "--arity",
            "exact:1",
            "web",
            "",
        ])
        .unwrap();

        match cli.command {
            Commands::Complete {
                entry, arity, words, ..
            } => {
                assert_eq!(entry, EntryPoint::ContainersRunning);
                assert_eq!(arity, ArityPolicy::Exact(1));
                assert_eq!(words, vec!["web".to_string(), String::new()]);
            }
            Commands::Entries => panic!("expected complete"),
        }
    }

    #[test]
    fn entry_kinds() {
        assert_eq!(entry_kind(EntryPoint::ContainersRunning), "positional");
        assert_eq!(entry_kind(EntryPoint::PsFilters), "flag");
    }

    #[test]
    fn rejects_bad_arity() {
        let parsed = Cli::try_parse_from(["ctrcomp", "complete", "pods", "--arity", "some", ""]);
        assert!(parsed.is_err());
    }
}
