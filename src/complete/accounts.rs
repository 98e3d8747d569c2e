//! `--user` completion from the local account databases
//!
//! Users come from `passwd` and groups from `group`, both in the colon
//! separated `name:x:id:...` layout. Numeric IDs are offered once the user
//! has typed at least one character of the current part.

use std::fs;
use std::path::{Path, PathBuf};

use super::Completer;
use crate::domain::{Completion, Directive, Suggestion};

/// Locations of the account databases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFiles {
    pub passwd: PathBuf,
    pub group: PathBuf,
}

impl Default for AccountFiles {
    fn default() -> Self {
        Self {
            passwd: PathBuf::from("/etc/passwd"),
            group: PathBuf::from("/etc/group"),
        }
    }
}

/// `(name, id)` pairs from an account database
fn parse_entries(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split(':');
            let name = fields.next()?;
            let id = fields.nth(1)?;
            Some((name, id))
        })
        .collect()
}

impl Completer<'_> {
    fn read_accounts(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                self.diagnostics
                    .error(&format!("failed to read {}: {}", path.display(), e));
                None
            }
        }
    }

    /// Completes `user[:group]`
    pub fn user_flag(&self, to_complete: &str) -> Completion {
        if let Some((user, typed_group)) = to_complete.split_once(':') {
            let Some(content) = self.read_accounts(&self.accounts.group) else {
                return Completion::error();
            };

            let mut groups = Vec::new();
            for (name, gid) in parse_entries(&content) {
                groups.push(Suggestion::new(format!("{}:{}", user, name)));
                if !typed_group.is_empty() {
                    groups.push(Suggestion::new(format!("{}:{}", user, gid)));
                }
            }
            return Completion::new(groups, Directive::NO_FILE_COMPLETION);
        }

        let Some(content) = self.read_accounts(&self.accounts.passwd) else {
            return Completion::error();
        };

        let mut users = Vec::new();
        for (name, uid) in parse_entries(&content) {
            users.push(Suggestion::new(format!("{}:", name)));
            if !to_complete.is_empty() {
                users.push(Suggestion::new(format!("{}:", uid)));
            }
        }
        Completion::new(users, Directive::NO_APPEND_SPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Recorder;
    use super::super::Silent;
    use super::*;
    use crate::engine::MemoryEngine;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, AccountFiles) {
        let dir = TempDir::new().unwrap();
        let passwd = dir.path().join("passwd");
        let group = dir.path().join("group");
        fs::write(
            &passwd,
            "root:x:0:0:root:/root:/bin/bash\n# comment\nalice:x:1000:1000::/home/alice:/bin/sh\n",
        )
        .unwrap();
        fs::write(&group, "root:x:0:\nwheel:x:10:alice\n").unwrap();
        (dir, AccountFiles { passwd, group })
    }

    #[test]
    fn users_without_ids_when_empty() {
        let (_dir, files) = fixture();
        let engine = MemoryEngine::new();
        let completer = Completer::new(&engine, &Silent).with_accounts(files);

        let completion = completer.user_flag("");
        assert_eq!(completion.texts(), vec!["root:", "alice:"]);
        assert_eq!(completion.directive, Directive::NO_APPEND_SPACE);
    }

    #[test]
    fn users_with_ids_after_first_char() {
        let (_dir, files) = fixture();
        let engine = MemoryEngine::new();
        let completer = Completer::new(&engine, &Silent).with_accounts(files);

        let completion = completer.user_flag("a");
        assert_eq!(completion.texts(), vec!["root:", "0:", "alice:", "1000:"]);
    }

    #[test]
    fn groups_after_colon() {
        let (_dir, files) = fixture();
        let engine = MemoryEngine::new();
        let completer = Completer::new(&engine, &Silent).with_accounts(files);

        let completion = completer.user_flag("alice:");
        assert_eq!(completion.texts(), vec!["alice:root", "alice:wheel"]);
        assert_eq!(completion.directive, Directive::NO_FILE_COMPLETION);

        let completion = completer.user_flag("alice:w");
        assert_eq!(
            completion.texts(),
            vec!["alice:root", "alice:0", "alice:wheel", "alice:10"]
        );
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let files = AccountFiles {
            passwd: dir.path().join("missing-passwd"),
            group: dir.path().join("missing-group"),
        };
        let engine = MemoryEngine::new();
        let recorder = Recorder::default();
        let completer = Completer::new(&engine, &recorder).with_accounts(files);

        let completion = completer.user_flag("");
        assert!(completion.is_empty());
        assert!(completion.directive.is_error());
        assert_eq!(recorder.errors.borrow().len(), 1);
    }
}
