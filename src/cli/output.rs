//! Output formatting for CLI commands

use serde::Serialize;

use crate::complete::Diagnostics;
use crate::domain::Completion;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a completion result
    ///
    /// Text output follows the shell protocol: one suggestion per line, then
    /// `:<directive code>` on the last line.
    pub fn completion(&self, completion: &Completion) {
        match self.format {
            OutputFormat::Text => {
                for line in completion.rendered() {
                    println!("{}", line);
                }
                println!(":{}", completion.directive.shell_code());
            }
            OutputFormat::Json => self.data(&serde_json::json!({
                "suggestions": completion.suggestions,
                "directive": completion.directive.shell_code(),
                "flags": completion.directive.flag_names(),
            })),
        }
        self.verbose(&format!(
            "Completion ended with directive: {}",
            completion.directive
        ));
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

impl Diagnostics for Output {
    fn error(&self, message: &str) {
        Output::error(self, message);
    }

    fn debug(&self, context: &str, message: &str) {
        self.verbose_ctx(context, message);
    }
}
