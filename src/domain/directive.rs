//! Completion results handed back to the invoking shell
//!
//! A [`Completion`] is an ordered list of [`Suggestion`]s plus a [`Directive`]
//! telling the shell how to treat them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::Serialize;

/// Post-completion shell behavior, as a set of flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directive(u8);

impl Directive {
    /// Report a completion failure; suggestions must be empty
    pub const ERROR: Directive = Directive(1 << 0);
    /// Do not insert a trailing space after the accepted suggestion
    pub const NO_APPEND_SPACE: Directive = Directive(1 << 1);
    /// Do not also offer filesystem paths
    pub const NO_FILE_COMPLETION: Directive = Directive(1 << 2);
    /// Ignore the suggestions and let the shell complete paths
    pub const FILESYSTEM_PATHS: Directive = Directive(1 << 3);

    const NAMES: [(Directive, &'static str); 4] = [
        (Directive::ERROR, "Error"),
        (Directive::NO_APPEND_SPACE, "NoAppendSpace"),
        (Directive::NO_FILE_COMPLETION, "NoFileCompletion"),
        (Directive::FILESYSTEM_PATHS, "FallBackToFilesystemPaths"),
    ];

    /// Returns true if every flag in `other` is set
    pub fn contains(self, other: Directive) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_error(self) -> bool {
        self.contains(Directive::ERROR)
    }

    /// Integer understood by shell completion scripts
    ///
    /// Path fallback is the scripts' default behavior, so it encodes as 0.
    pub fn shell_code(self) -> u8 {
        if self.is_error() {
            return 1;
        }
        self.0 & (Directive::NO_APPEND_SPACE.0 | Directive::NO_FILE_COMPLETION.0)
    }

    /// Names of the flags that are set, in a fixed order
    pub fn flag_names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Directive {
    type Output = Directive;

    fn bitor(self, rhs: Directive) -> Directive {
        Directive(self.0 | rhs.0)
    }
}

impl BitOrAssign for Directive {
    fn bitor_assign(&mut self, rhs: Directive) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            write!(f, "Default")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

/// One completion candidate with an optional description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    pub fn annotated(text: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Some(annotation.into()),
        }
    }

    /// Returns a copy with `prefix` put in front of the text
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self {
            text: format!("{}{}", prefix, self.text),
            annotation: self.annotation.clone(),
        }
    }

    /// Renders the wire form: `text` or `text<TAB>annotation`
    ///
    /// Tabs inside the text would split it in the shell, so they become spaces.
    pub fn render(&self) -> String {
        let text = self.text.replace('\t', " ");
        match &self.annotation {
            Some(annotation) => format!("{}\t{}", text, annotation),
            None => text,
        }
    }
}

impl From<&str> for Suggestion {
    fn from(text: &str) -> Self {
        Suggestion::new(text)
    }
}

impl From<String> for Suggestion {
    fn from(text: String) -> Self {
        Suggestion::new(text)
    }
}

/// The `(suggestions, directive)` pair every entry point returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub suggestions: Vec<Suggestion>,
    pub directive: Directive,
}

impl Completion {
    pub fn new(suggestions: Vec<Suggestion>, directive: Directive) -> Self {
        Self {
            suggestions,
            directive,
        }
    }

    /// A fixed word list
    pub fn words(words: &[&str], directive: Directive) -> Self {
        Self::new(words.iter().map(|w| Suggestion::new(*w)).collect(), directive)
    }

    /// Nothing to suggest, and no files either
    pub fn nothing() -> Self {
        Self::new(Vec::new(), Directive::NO_FILE_COMPLETION)
    }

    /// Let the shell complete filesystem paths
    pub fn filesystem() -> Self {
        Self::new(Vec::new(), Directive::FILESYSTEM_PATHS)
    }

    /// A failed completion; always carries no suggestions
    pub fn error() -> Self {
        Self::new(Vec::new(), Directive::ERROR)
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Plain suggestion texts, without annotations
    pub fn texts(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.text.as_str()).collect()
    }

    /// Wire lines for the shell
    pub fn rendered(&self) -> Vec<String> {
        self.suggestions.iter().map(Suggestion::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_combine() {
        let directive = Directive::NO_FILE_COMPLETION | Directive::NO_APPEND_SPACE;
        assert!(directive.contains(Directive::NO_FILE_COMPLETION));
        assert!(directive.contains(Directive::NO_APPEND_SPACE));
        assert!(!directive.is_error());
        assert_eq!(directive.to_string(), "NoAppendSpace|NoFileCompletion");
    }

    #[test]
    fn shell_codes() {
        assert_eq!(Directive::default().shell_code(), 0);
        assert_eq!(Directive::ERROR.shell_code(), 1);
        assert_eq!(Directive::NO_APPEND_SPACE.shell_code(), 2);
        assert_eq!(Directive::NO_FILE_COMPLETION.shell_code(), 4);
        assert_eq!(Directive::FILESYSTEM_PATHS.shell_code(), 0);
        assert_eq!(
            (Directive::FILESYSTEM_PATHS | Directive::NO_APPEND_SPACE).shell_code(),
            2
        );
        assert_eq!(
            (Directive::NO_FILE_COMPLETION | Directive::NO_APPEND_SPACE).shell_code(),
            6
        );
    }

    #[test]
    fn render_annotation() {
        assert_eq!(Suggestion::new("web").render(), "web");
        assert_eq!(Suggestion::annotated("web", "mypod").render(), "web\tmypod");
        assert_eq!(Suggestion::new("a\tb").render(), "a b");
    }

    #[test]
    fn error_completion_is_empty() {
        let completion = Completion::error();
        assert!(completion.is_empty());
        assert_eq!(completion.directive, Directive::ERROR);
    }

    #[test]
    fn prefixed_keeps_annotation() {
        let suggestion = Suggestion::annotated("abc", "pod").prefixed("id=");
        assert_eq!(suggestion.text, "id=abc");
        assert_eq!(suggestion.annotation.as_deref(), Some("pod"));
    }
}
