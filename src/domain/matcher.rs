//! Prefix matching of partial tokens against entity records
//!
//! All functions here are pure. Candidates keep record order, IDs before
//! names within one record.

use super::directive::Suggestion;
use super::entity::{CompletionMode, Container, Image, Pod};

/// Displayed length of a shortened ID
pub const SHORT_ID_LEN: usize = 12;

/// Returns true if IDs may be matched in `mode` for `partial`
///
/// In [`CompletionMode::Default`] IDs need at least two typed characters, so a
/// single keystroke does not flood the list with hex prefixes.
pub fn ids_eligible(mode: CompletionMode, partial: &str) -> bool {
    match mode {
        CompletionMode::IdsOnly => true,
        CompletionMode::Default => partial.len() > 1,
        CompletionMode::NamesOnly => false,
    }
}

pub fn names_eligible(mode: CompletionMode) -> bool {
    mode != CompletionMode::IdsOnly
}

/// The first 12 characters of an ID
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Suggestions for containers, annotated with their pod name
pub fn match_containers(
    containers: &[Container],
    partial: &str,
    mode: CompletionMode,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    for container in containers {
        if ids_eligible(mode, partial) && container.id.starts_with(partial) {
            suggestions.push(Suggestion::annotated(
                short_id(&container.id),
                container.pod_name.as_str(),
            ));
        }
        if !names_eligible(mode) {
            continue;
        }
        if let Some(name) = container.primary_name() {
            if name.starts_with(partial) {
                suggestions.push(Suggestion::annotated(name, container.pod_name.as_str()));
            }
        }
    }
    suggestions
}

pub fn match_pods(pods: &[Pod], partial: &str, mode: CompletionMode) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    for pod in pods {
        if ids_eligible(mode, partial) && pod.id.starts_with(partial) {
            suggestions.push(Suggestion::new(short_id(&pod.id)));
        }
        if names_eligible(mode) && pod.name.starts_with(partial) {
            suggestions.push(Suggestion::new(pod.name.as_str()));
        }
    }
    suggestions
}

/// Matches plain names, unannotated
pub fn match_names<'a>(names: impl IntoIterator<Item = &'a str>, partial: &str) -> Vec<Suggestion> {
    names
        .into_iter()
        .filter(|name| name.starts_with(partial))
        .map(Suggestion::new)
        .collect()
}

pub fn match_images(images: &[Image], partial: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    for image in images {
        if ids_eligible(CompletionMode::Default, partial) && image.id.starts_with(partial) {
            suggestions.push(Suggestion::new(short_id(&image.id)));
        }
        for reference in &image.repo_tags {
            suggestions.extend(
                reference_candidates(reference, partial)
                    .into_iter()
                    .map(Suggestion::new),
            );
        }
    }
    suggestions
}

/// Candidate spellings of an image reference that start with `partial`
///
/// `registry.example.org/group/app:latest` is offered as
/// `registry.example.org/group/app:latest`, `registry.example.org/group/app`,
/// `group/app:latest`, `group/app`, `app:latest` and `app`. With nothing typed
/// only the full reference is offered.
pub fn reference_candidates(reference: &str, partial: &str) -> Vec<String> {
    if partial.is_empty() {
        return vec![reference.to_string()];
    }

    let segments: Vec<&str> = reference.split('/').collect();
    let mut candidates = Vec::new();
    for start in 0..segments.len() {
        let with_tag = segments[start..].join("/");
        let without_tag = strip_tag(&with_tag);

        if with_tag.starts_with(partial) {
            candidates.push(with_tag.clone());
        }
        if without_tag != with_tag && without_tag.starts_with(partial) {
            candidates.push(without_tag.to_string());
        }
    }
    candidates
}

/// Drops a trailing `:tag` or `@digest` from the last path segment
fn strip_tag(reference: &str) -> &str {
    let last_start = reference.rfind('/').map_or(0, |i| i + 1);
    let last = &reference[last_start..];
    match last.find([':', '@']) {
        Some(end) => &reference[..last_start + end],
        None => reference,
    }
}
