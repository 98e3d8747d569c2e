//! Positional argument counts and the gate that decides whether completion
//! should be attempted at the cursor position
//!
//! Commands normally declare an [`ArityPolicy`], which the gate queries
//! directly. Commands that only expose an opaque validator are still
//! supported: the gate then recovers `(need, got)` from the validator's
//! failure message, and rejects when the phrasing is unknown.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why a candidate argument list was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArityError {
    #[error("accepts no arguments, received {got}")]
    NoArgs { got: usize },

    #[error("requires at least {need} arg(s), only received {got}")]
    NotEnough { need: usize, got: usize },

    #[error("accepts {need} arg(s), received {got}")]
    WrongCount { need: usize, got: usize },

    #[error("accepts at most {max} arg(s), received {got}")]
    TooMany { max: usize, got: usize },

    #[error("accepts between {min} and {max} arg(s), received {got}")]
    OutOfRange { min: usize, max: usize, got: usize },

    /// Free-text failure from an opaque validator
    #[error("{0}")]
    Message(String),
}

impl ArityError {
    /// The `(need, got)` pair, when one is known
    ///
    /// Structured variants answer directly. Free-text messages go through
    /// [`recover_counts`].
    pub fn counts(&self) -> Option<(usize, usize)> {
        match self {
            ArityError::NotEnough { need, got } | ArityError::WrongCount { need, got } => {
                Some((*need, *got))
            }
            ArityError::OutOfRange { min, got, .. } => Some((*min, *got)),
            ArityError::Message(message) => recover_counts(message),
            ArityError::NoArgs { .. } | ArityError::TooMany { .. } => None,
        }
    }
}

/// Recovers `(need, got)` from a validator message
///
/// Understands "requires at least N arg(s), only received M" and
/// "accepts N arg(s), received M". Anything else yields `None`.
pub fn recover_counts(message: &str) -> Option<(usize, usize)> {
    let cleaned = message.strip_prefix("requires at least ").unwrap_or(message);
    let cleaned = cleaned.replace("only received", "received");
    let cleaned = cleaned.strip_prefix("accepts ").unwrap_or(&cleaned);

    let (need, rest) = cleaned.split_once(" arg(s), received ")?;
    let need = need.trim().parse().ok()?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let got = digits.parse().ok()?;
    Some((need, got))
}

/// Declared positional argument count of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArityPolicy {
    #[default]
    Any,
    NoArgs,
    Exact(usize),
    Min(usize),
    Max(usize),
    Range(usize, usize),
}

impl ArityPolicy {
    /// Checks a candidate argument count against the policy
    pub fn validate(&self, got: usize) -> Result<(), ArityError> {
        match *self {
            ArityPolicy::Any => Ok(()),
            ArityPolicy::NoArgs if got > 0 => Err(ArityError::NoArgs { got }),
            ArityPolicy::NoArgs => Ok(()),
            ArityPolicy::Exact(need) if got != need => Err(ArityError::WrongCount { need, got }),
            ArityPolicy::Exact(_) => Ok(()),
            ArityPolicy::Min(need) if got < need => Err(ArityError::NotEnough { need, got }),
            ArityPolicy::Min(_) => Ok(()),
            ArityPolicy::Max(max) if got > max => Err(ArityError::TooMany { max, got }),
            ArityPolicy::Max(_) => Ok(()),
            ArityPolicy::Range(min, max) if got < min || got > max => {
                Err(ArityError::OutOfRange { min, max, got })
            }
            ArityPolicy::Range(..) => Ok(()),
        }
    }
}

impl fmt::Display for ArityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityPolicy::Any => write!(f, "any"),
            ArityPolicy::NoArgs => write!(f, "none"),
            ArityPolicy::Exact(n) => write!(f, "exact:{}", n),
            ArityPolicy::Min(n) => write!(f, "min:{}", n),
            ArityPolicy::Max(n) => write!(f, "max:{}", n),
            ArityPolicy::Range(min, max) => write!(f, "range:{}:{}", min, max),
        }
    }
}

impl FromStr for ArityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            format!(
                "invalid arity '{}': expected any, none, exact:N, min:N, max:N or range:A:B",
                s
            )
        };
        let number = |v: &str| v.parse::<usize>().map_err(|_| invalid());

        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            ["any"] => Ok(ArityPolicy::Any),
            ["none"] => Ok(ArityPolicy::NoArgs),
            ["exact", n] => Ok(ArityPolicy::Exact(number(n)?)),
            ["min", n] => Ok(ArityPolicy::Min(number(n)?)),
            ["max", n] => Ok(ArityPolicy::Max(number(n)?)),
            ["range", min, max] => {
                let (min, max) = (number(min)?, number(max)?);
                if min > max {
                    return Err(invalid());
                }
                Ok(ArityPolicy::Range(min, max))
            }
            _ => Err(invalid()),
        }
    }
}

/// Opaque validator over the full candidate argument list
pub type ArgsValidator = Box<dyn Fn(&[String]) -> Result<(), String>>;

/// How a command exposes its argument rules
#[derive(Default)]
pub enum Arity {
    /// No rule declared; completion is always attempted
    #[default]
    Unchecked,
    Policy(ArityPolicy),
    Validator(ArgsValidator),
}

impl Arity {
    pub fn validator(f: impl Fn(&[String]) -> Result<(), String> + 'static) -> Self {
        Arity::Validator(Box::new(f))
    }

    /// Validates a full candidate argument list
    pub fn check(&self, candidate: &[String]) -> Result<(), ArityError> {
        match self {
            Arity::Unchecked => Ok(()),
            Arity::Policy(policy) => policy.validate(candidate.len()),
            Arity::Validator(validate) => validate(candidate).map_err(ArityError::Message),
        }
    }
}

impl fmt::Debug for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unchecked => write!(f, "Unchecked"),
            Arity::Policy(policy) => write!(f, "Policy({})", policy),
            Arity::Validator(_) => write!(f, "Validator(..)"),
        }
    }
}

/// The command whose arguments are being completed
#[derive(Debug, Default)]
pub struct CommandContext {
    pub name: String,
    pub arity: Arity,
}

impl CommandContext {
    pub fn new(name: impl Into<String>, arity: Arity) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    pub fn with_policy(name: impl Into<String>, policy: ArityPolicy) -> Self {
        Self::new(name, Arity::Policy(policy))
    }
}

/// Outcome of the arity gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The line with the partial token appended is valid
    Valid,
    /// Invalid, but still short of the required count
    BelowFloor { need: usize, got: usize },
    /// No further argument is acceptable
    Rejected(ArityError),
}

impl GateDecision {
    pub fn allows_completion(&self) -> bool {
        !matches!(self, GateDecision::Rejected(_))
    }
}

/// Decides whether `to_complete` may be completed after `args`
pub fn gate(arity: &Arity, args: &[String], to_complete: &str) -> GateDecision {
    let mut candidate = args.to_vec();
    candidate.push(to_complete.to_string());

    match arity.check(&candidate) {
        Ok(()) => GateDecision::Valid,
        Err(err) => match err.counts() {
            Some((need, got)) if need >= got => GateDecision::BelowFloor { need, got },
            _ => GateDecision::Rejected(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unchecked_always_allows() {
        assert!(gate(&Arity::Unchecked, &args(&["a", "b", "c"]), "d").allows_completion());
    }

    #[test]
    fn min_two_with_no_args() {
        let arity = Arity::Policy(ArityPolicy::Min(2));
        assert_eq!(
            gate(&arity, &[], "x"),
            GateDecision::BelowFloor { need: 2, got: 1 }
        );
    }

    #[test]
    fn exact_two_with_two_args_rejects() {
        let arity = Arity::Policy(ArityPolicy::Exact(2));
        let decision = gate(&arity, &args(&["a", "b"]), "");
        assert!(!decision.allows_completion());
    }

    #[test]
    fn exact_two_second_arg_is_valid() {
        let arity = Arity::Policy(ArityPolicy::Exact(2));
        assert_eq!(gate(&arity, &args(&["a"]), "b"), GateDecision::Valid);
    }

    #[test]
    fn max_and_none_reject_overflow() {
        assert!(!gate(&Arity::Policy(ArityPolicy::Max(1)), &args(&["a"]), "").allows_completion());
        assert!(!gate(&Arity::Policy(ArityPolicy::NoArgs), &[], "").allows_completion());
    }

    #[test]
    fn range_below_min_allows() {
        let arity = Arity::Policy(ArityPolicy::Range(3, 4));
        assert!(gate(&arity, &[], "a").allows_completion());
        assert!(gate(&arity, &args(&["a", "b", "c"]), "d").allows_completion());
        assert!(!gate(&arity, &args(&["a", "b", "c", "d"]), "e").allows_completion());
    }

    #[test]
    fn validator_message_recovery() {
        let arity = Arity::validator(|candidate| {
            if candidate.len() < 2 {
                Err(format!(
                    "requires at least 2 arg(s), only received {}",
                    candidate.len()
                ))
            } else {
                Ok(())
            }
        });
        assert!(gate(&arity, &[], "x").allows_completion());
        assert!(gate(&arity, &args(&["a"]), "x").allows_completion());
    }

    #[test]
    fn validator_unknown_phrasing_fails_closed() {
        let arity =
            Arity::validator(|_| Err("--latest and containers cannot be used together".into()));
        assert!(!gate(&arity, &[], "x").allows_completion());
    }

    #[test]
    fn recover_known_phrasings() {
        assert_eq!(
            recover_counts("requires at least 2 arg(s), only received 1"),
            Some((2, 1))
        );
        assert_eq!(recover_counts("accepts 1 arg(s), received 2"), Some((1, 2)));
        assert_eq!(recover_counts("accepts at most 1 arg(s), received 2"), None);
        assert_eq!(recover_counts("unknown command \"x\" for \"y\""), None);
    }

    #[test]
    fn structured_messages_match_phrasings() {
        let err = ArityPolicy::Min(2).validate(1).unwrap_err();
        assert_eq!(err.to_string(), "requires at least 2 arg(s), only received 1");
        assert_eq!(recover_counts(&err.to_string()), err.counts());

        let err = ArityPolicy::Exact(1).validate(2).unwrap_err();
        assert_eq!(err.to_string(), "accepts 1 arg(s), received 2");
        assert_eq!(recover_counts(&err.to_string()), err.counts());
    }

    #[test]
    fn parse_policy() {
        assert_eq!("exact:2".parse(), Ok(ArityPolicy::Exact(2)));
        assert_eq!("min:1".parse(), Ok(ArityPolicy::Min(1)));
        assert_eq!("range:1:3".parse(), Ok(ArityPolicy::Range(1, 3)));
        assert_eq!("none".parse(), Ok(ArityPolicy::NoArgs));
        assert!("range:3:1".parse::<ArityPolicy>().is_err());
        assert!("exact".parse::<ArityPolicy>().is_err());
        assert_eq!(ArityPolicy::Range(1, 3).to_string(), "range:1:3");
    }
}
