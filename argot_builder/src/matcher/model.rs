use std::collections::VecDeque;
use thiserror::Error;

use crate::matcher::ArgumentConfig;
use crate::model::Arity;

/// What a matched token is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Target {
    /// The descriptor at this registry index.
    Descriptor(usize),
    /// The implicit `--version-check` option.
    VersionCheck,
}

/// One occurrence of an option, flag, or positional token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MatchTokens {
    pub target: Target,
    /// The raw value; `None` for a flag.
    pub value: Option<String>,
}

impl MatchTokens {
    pub(crate) fn flag(index: usize) -> Self {
        Self {
            target: Target::Descriptor(index),
            value: None,
        }
    }

    pub(crate) fn value(target: Target, value: impl Into<String>) -> Self {
        Self {
            target,
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Unknown option '{0}'.")]
    UnknownOption(String),

    #[error("Unknown subcommand '{token}'.")]
    UnknownSubcommand { token: String, choices: Vec<String> },

    #[error("Option '{0}' requires a value.")]
    MissingValue(String),

    #[error("Missing the positional argument '{0}'.")]
    MissingArgument(String),

    #[error("Missing a subcommand.")]
    MissingSubcommand(Vec<String>),

    #[error("Unexpected argument '{0}'.")]
    ArgumentsExhausted(String),

    #[error("Invalid export format '{0}'.")]
    InvalidExportFormat(String),
}

/// The positional slots not yet filled, in declaration order.
///
/// A list slot is always the final one; once reached it stays open for every further token.
#[derive(Debug)]
pub(super) struct PositionalSlots {
    slots: VecDeque<ArgumentConfig>,
}

impl PositionalSlots {
    pub(super) fn new(slots: impl IntoIterator<Item = ArgumentConfig>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// The registry index of the slot receiving the next positional token.
    pub(super) fn next(&mut self) -> Option<usize> {
        match self.slots.front() {
            Some(slot) if slot.arity() == Arity::List => Some(slot.index()),
            Some(_) => self.slots.pop_front().map(|slot| slot.index()),
            None => None,
        }
    }

    /// The first single slot left unfilled; a list slot may take no tokens at all.
    pub(super) fn unfilled(&self) -> Option<&str> {
        self.slots
            .iter()
            .find(|slot| slot.arity() == Arity::Single)
            .map(|slot| slot.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_single() {
        // Setup
        let mut slots = PositionalSlots::new(vec![
            ArgumentConfig::new(0, "ARGUMENT-1", Arity::Single),
            ArgumentConfig::new(2, "ARGUMENT-2", Arity::Single),
        ]);
        assert_eq!(slots.unfilled(), Some("ARGUMENT-1"));

        // Execute & verify
        assert_eq!(slots.next(), Some(0));
        assert_eq!(slots.unfilled(), Some("ARGUMENT-2"));
        assert_eq!(slots.next(), Some(2));
        assert_eq!(slots.unfilled(), None);
        assert_eq!(slots.next(), None);
    }

    #[test]
    fn slots_list() {
        // Setup
        let mut slots = PositionalSlots::new(vec![
            ArgumentConfig::new(0, "ARGUMENT-1", Arity::Single),
            ArgumentConfig::new(1, "ARGUMENT-2", Arity::List),
        ]);

        // Execute & verify
        assert_eq!(slots.next(), Some(0));
        assert_eq!(slots.unfilled(), None);

        for _ in 0..5 {
            assert_eq!(slots.next(), Some(1));
        }

        assert_eq!(slots.unfilled(), None);
    }

    #[test]
    fn slots_empty() {
        let mut slots = PositionalSlots::new(vec![]);
        assert_eq!(slots.unfilled(), None);
        assert_eq!(slots.next(), None);
    }

    #[test]
    fn match_tokens() {
        assert_eq!(
            MatchTokens::flag(2),
            MatchTokens {
                target: Target::Descriptor(2),
                value: None,
            }
        );
        assert_eq!(
            MatchTokens::value(Target::VersionCheck, "false").value,
            Some("false".to_string())
        );
    }
}
