use crate::matcher::MatchTokens;
use crate::model::{Arity, Identifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    index: usize,
    identifier: Identifier,
    takes_value: bool,
}

impl OptionConfig {
    pub(crate) fn new(index: usize, identifier: Identifier, takes_value: bool) -> Self {
        Self {
            index,
            identifier,
            takes_value,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Whether the option consumes a value (`false` for flags).
    pub(crate) fn takes_value(&self) -> bool {
        self.takes_value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentConfig {
    index: usize,
    name: String,
    arity: Arity,
}

impl ArgumentConfig {
    pub(crate) fn new(index: usize, name: impl Into<String>, arity: Arity) -> Self {
        Self {
            index,
            name: name.into(),
            arity,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn arity(&self) -> Arity {
        self.arity
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Matches {
    /// Every occurrence, in command line order.
    pub values: Vec<MatchTokens>,
    /// The subcommand keyword, for a top-level parser.
    pub dispatch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Identifier::new('v', "value"), true)]
    #[case(Identifier::from('f'), false)]
    fn option_config(#[case] identifier: Identifier, #[case] takes_value: bool) {
        let config = OptionConfig::new(3, identifier.clone(), takes_value);
        assert_eq!(config.index(), 3);
        assert_eq!(config.identifier(), &identifier);
        assert_eq!(config.takes_value(), takes_value);
    }

    #[test]
    fn argument_config() {
        let config = ArgumentConfig::new(1, "ARGUMENT-1", Arity::List);
        assert_eq!(config.index(), 1);
        assert_eq!(config.name(), "ARGUMENT-1");
        assert_eq!(config.arity(), Arity::List);
    }
}
