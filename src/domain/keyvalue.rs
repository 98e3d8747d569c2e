//! Completion for structured `key=value` / `key:value` flag values
//!
//! A [`KeyValueGrammar`] lists literal keys in declaration order, each either
//! a [`KeyCompleter::Leaf`] or a [`KeyCompleter::Nested`] completer for the
//! text after the key. Keys are compared by literal prefix.

use std::fmt;

use super::directive::{Completion, Directive, Suggestion};

/// Completes the remainder after a key
pub type NestedCompleter<'a> = Box<dyn Fn(&str) -> Completion + 'a>;

pub enum KeyCompleter<'a> {
    /// The key takes no further completion
    Leaf,
    Nested(NestedCompleter<'a>),
}

impl fmt::Debug for KeyCompleter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCompleter::Leaf => write!(f, "Leaf"),
            KeyCompleter::Nested(_) => write!(f, "Nested(..)"),
        }
    }
}

/// An ordered key table
#[derive(Debug, Default)]
pub struct KeyValueGrammar<'a> {
    entries: Vec<(String, KeyCompleter<'a>)>,
}

impl<'a> KeyValueGrammar<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a key with no further completion
    pub fn leaf(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), KeyCompleter::Leaf));
        self
    }

    /// Adds a key whose remainder is completed by `completer`
    pub fn nested(
        mut self,
        key: impl Into<String>,
        completer: impl Fn(&str) -> Completion + 'a,
    ) -> Self {
        self.entries.push((key.into(), KeyCompleter::Nested(Box::new(completer))));
        self
    }

    /// Completes `to_complete` against the grammar
    ///
    /// If the token already starts with a key, the first such key in
    /// declaration order takes over: its completer sees the remainder and
    /// every result is prefixed with the key again. Otherwise every key
    /// starting with the token is offered, without a trailing space when
    /// the key ends in `=` or `:`.
    pub fn complete(&self, to_complete: &str) -> Completion {
        let delegate = self
            .entries
            .iter()
            .find(|(key, _)| to_complete.starts_with(key.as_str()));

        if let Some((key, completer)) = delegate {
            return match completer {
                KeyCompleter::Nested(complete) => {
                    let nested = complete(&to_complete[key.len()..]);
                    Completion::new(
                        nested.suggestions.iter().map(|s| s.prefixed(key)).collect(),
                        nested.directive,
                    )
                }
                KeyCompleter::Leaf => Completion::nothing(),
            };
        }

        let mut directive = Directive::NO_FILE_COMPLETION;
        let mut suggestions = Vec::new();
        for (key, _) in &self.entries {
            if !key.starts_with(to_complete) {
                continue;
            }
            if key.ends_with('=') || key.ends_with(':') {
                directive |= Directive::NO_APPEND_SPACE;
            }
            suggestions.push(Suggestion::new(key.as_str()));
        }
        Completion::new(suggestions, directive)
    }
}
