//! Domain model for shell completion
//!
//! Contains the completion logic without any I/O concerns.

mod arity;
mod directive;
mod entity;
mod keyvalue;
mod matcher;

pub use arity::{
    gate, recover_counts, ArgsValidator, Arity, ArityError, ArityPolicy, CommandContext,
    GateDecision,
};
pub use directive::{Completion, Directive, Suggestion};
pub use entity::{
    CompletionMode, Connection, Container, EntityFilter, EntityKind, Image, Network, Pod, Registry,
    Volume,
};
pub use keyvalue::{KeyCompleter, KeyValueGrammar, NestedCompleter};
pub use matcher::{
    ids_eligible, match_containers, match_images, match_names, match_pods, names_eligible,
    reference_candidates, short_id, SHORT_ID_LEN,
};
