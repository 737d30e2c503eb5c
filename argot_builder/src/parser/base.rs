use thiserror::Error;

use crate::api::InvalidCapture;
use crate::matcher::*;
use crate::model::{MetaRequest, Visibility};
use crate::parser::{Descriptor, Registry};
use crate::prelude::Value;
use crate::validator::ValidationError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A mistake in the program's declaration of its command line interface.
///
/// Raised at the offending call (construction, registration, or a second parse), never deferred.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DesignError {
    /// The program name contains characters other than alphanumerics, `-`, and `_`.
    #[error("Invalid program name '{0}': only alphanumeric characters, '-', and '_' are allowed.")]
    InvalidProgramName(String),

    /// A subcommand keyword is empty or contains non-alphanumeric characters.
    #[error("Invalid subcommand '{0}': only alphanumeric characters are allowed.")]
    InvalidSubcommand(String),

    /// Neither a short nor a long identifier was given.
    #[error("An option or flag requires a short or a long identifier.")]
    EmptyIdentifier,

    /// The short identifier is whitespace, non-printable, or the reserved `h`.
    #[error("Invalid short identifier '{0}': it must be a printable, non-whitespace character other than 'h'.")]
    InvalidShortIdentifier(char),

    /// The long identifier is malformed.
    #[error("Invalid long identifier '{long}': {reason}.")]
    InvalidLongIdentifier {
        /// The offending identifier.
        long: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The long identifier is implicitly registered by every parser.
    #[error("The long identifier '{0}' is reserved.")]
    ReservedIdentifier(String),

    /// The identifier was already registered by a previous option or flag.
    #[error("Cannot duplicate the identifier '{0}'.")]
    DuplicateIdentifier(String),

    /// The identifier equals a subcommand keyword.
    #[error("The identifier '{0}' collides with a subcommand keyword.")]
    SubcommandCollision(String),

    /// A flag's bound variable reads `true` at registration.
    #[error("The flag '{0}' must default to false.")]
    FlagDefaultTrue(String),

    /// A positional argument follows a list positional argument.
    #[error("A positional argument cannot follow a list positional argument.")]
    PositionalAfterList,

    /// A positional argument was registered on a parser with subcommands.
    #[error("A parser with subcommands cannot take positional arguments.")]
    PositionalWithSubcommands,

    /// An [`Enumeration`](crate::prelude::Enumeration) maps the same name twice.
    #[error("The enumeration name '{0}' is not distinct.")]
    DuplicateEnumerationName(String),

    /// A [`RegexValidator`](crate::RegexValidator) pattern does not compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The compile error.
        reason: String,
    },

    /// The parser was already parsed; it accepts neither registrations nor another parse.
    #[error("The parser has already parsed its command line.")]
    AlreadyParsed,

    /// The sub-parser was requested from a parser without subcommands.
    #[error("Only a parser with subcommands has a sub-parser.")]
    NotTopLevel,

    /// The sub-parser was requested before a subcommand was successfully parsed.
    #[error("No subcommand has been parsed.")]
    SubParserUnavailable,
}

/// A mistake in the command line supplied by the end user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParserError {
    /// A token addresses an option or flag which does not exist.
    #[error("Unknown option '{0}'.")]
    UnknownOption(String),

    /// The subcommand token is not one of the keywords.
    #[error("Unknown subcommand '{token}': expected one of [{}].", .choices.join(", "))]
    UnknownSubcommand {
        /// The offending token.
        token: String,
        /// The allowed keywords.
        choices: Vec<String>,
    },

    /// A token cannot be converted into the bound variable's type.
    #[error("Invalid value for '{option}': cannot convert '{token}' to {type_name}.")]
    ValueConversion {
        /// The option or positional argument name.
        option: String,
        /// The offending token.
        token: String,
        /// The human readable type.
        type_name: String,
    },

    /// A converted value was rejected by a validator.
    #[error("Invalid value for '{option}': {error}")]
    Validation {
        /// The option or positional argument name.
        option: String,
        /// The validator's reason, verbatim.
        error: ValidationError,
    },

    /// A value, positional argument, or subcommand is missing.
    #[error("{0}")]
    TooFewArguments(String),

    /// A positional token has no slot left.
    #[error("Too many arguments: unexpected '{0}'.")]
    TooManyArguments(String),

    /// Required options were not supplied.
    #[error("Missing required option(s): {}.", .0.join(", "))]
    RequiredOptionMissing(Vec<String>),
}

impl From<MatchError> for ParserError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::UnknownOption(token) => ParserError::UnknownOption(token),
            MatchError::UnknownSubcommand { token, choices } => {
                ParserError::UnknownSubcommand { token, choices }
            }
            MatchError::MissingValue(_)
            | MatchError::MissingArgument(_)
            | MatchError::MissingSubcommand(_) => ParserError::TooFewArguments(error.to_string()),
            MatchError::ArgumentsExhausted(token) => ParserError::TooManyArguments(token),
            MatchError::InvalidExportFormat(token) => ParserError::Validation {
                option: "--export-help".to_string(),
                error: ValidationError::new(format!("Value {token} is not one of [html, man].")),
            },
        }
    }
}

impl ParserError {
    fn from_capture(option: &str, error: InvalidCapture) -> Self {
        match error {
            InvalidCapture::InvalidConversion { token, type_name } => ParserError::ValueConversion {
                option: option.to_string(),
                token,
                type_name,
            },
            InvalidCapture::Rejected(error) => ParserError::Validation {
                option: option.to_string(),
                error,
            },
        }
    }
}

/// Any error from the command line parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A mistake in the program.
    #[error(transparent)]
    Design(#[from] DesignError),

    /// A mistake in the command line.
    #[error(transparent)]
    Parser(#[from] ParserError),
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the command line parser object graph so that different types may all be 'captured' in a single parser.
pub(crate) trait AnonymousCapturable {
    /// Declare that the parameter has been matched.
    fn matched(&mut self);

    /// Convert, validate, and store a value anonymously for this parameter.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;
}


pub(crate) struct Parser<'a> {
    token_matcher: TokenMatcher,
    descriptors: Vec<Descriptor>,
    captures: Vec<Box<dyn AnonymousCapturable + 'a>>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn new(registry: Registry<'a>) -> Self {
        let (options, arguments) = registry.configs();
        let token_matcher =
            TokenMatcher::new(options, arguments, registry.subcommands().to_vec());
        let (descriptors, captures) = registry.into_parts();

        Self {
            token_matcher,
            descriptors,
            captures,
        }
    }

    pub(crate) fn consume(self, tokens: &[String]) -> Result<Action, ParserError> {
        let Parser {
            mut token_matcher,
            descriptors,
            mut captures,
        } = self;

        // 1. Meta tokens take priority over everything, including malformed input.
        if let Some(request) = find_meta(token_matcher.meta_region(tokens))? {
            return Ok(Action::Meta(request));
        }

        // 2. Feed the raw token strings to the matcher, stopping at the subcommand.
        let mut token_iter = tokens.iter();

        for token in token_iter.by_ref() {
            token_matcher.feed(token)?;

            if token_matcher.is_dispatched() {
                break;
            }
        }

        let Matches { values, dispatch } = token_matcher.close()?;
        let mut supplied = vec![false; descriptors.len()];
        let mut version_check = None;

        // 3. Convert, validate, and store each occurrence, in command line order.
        for match_tokens in values {
            match (match_tokens.target, match_tokens.value) {
                (Target::VersionCheck, Some(value)) => {
                    let enabled =
                        bool::from_token(&value).ok_or_else(|| ParserError::ValueConversion {
                            option: "--version-check".to_string(),
                            token: value.clone(),
                            type_name: bool::type_label(),
                        })?;
                    version_check.replace(enabled);
                }
                (Target::VersionCheck, None) => {
                    unreachable!("internal error - version check must have a value");
                }
                (Target::Descriptor(index), value) => {
                    let capture = &mut captures[index];
                    // Some captures may do something based off the fact they were simply matched.
                    capture.matched();

                    if let Some(value) = value {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Binding '{value}' to '{}'.", descriptors[index].name());
                        }

                        capture.capture(&value).map_err(|error| {
                            ParserError::from_capture(descriptors[index].name(), error)
                        })?;
                    }

                    supplied[index] = true;
                }
            }
        }

        // 4. Every required descriptor must appear at least once.
        let missing: Vec<String> = descriptors
            .iter()
            .zip(supplied)
            .filter(|(descriptor, supplied)| {
                descriptor.visibility() == Visibility::Required && !supplied
            })
            .map(|(descriptor, _)| descriptor.name().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ParserError::RequiredOptionMissing(missing));
        }

        Ok(Action::Continue {
            version_check,
            dispatch: dispatch.map(|keyword| (keyword, token_iter.cloned().collect())),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Continue {
        version_check: Option<bool>,
        /// The subcommand keyword, and the tokens forwarded to its sub-parser.
        dispatch: Option<(String, Vec<String>)>,
    },
    Meta(MetaRequest),
}
