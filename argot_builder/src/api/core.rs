use std::rc::Rc;

use crate::api::{Flag, Opt, Positional};
use crate::model::{Identifier, Metadata, UpdateNotifications};
use crate::parser::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

enum State<'a> {
    Open(Registry<'a>),
    Parsed {
        descriptors: Vec<Descriptor>,
        /// The subcommand keyword, and the tokens forwarded to its sub-parser.
        dispatch: Option<(String, Vec<String>)>,
    },
}

/// The command line parser.
///
/// Declare the options, flags, and positional arguments with the `add_*` methods, then parse once.
/// Design mistakes are reported as [`DesignError`] at the offending call; command line mistakes as [`ParserError`].
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{CommandLineParser, Flag, Opt, Positional, Scalar};
///
/// let mut verbose = false;
/// let mut threads: u32 = 1;
/// let mut input = String::default();
/// let tokens = vec!["program", "-v", "--threads=4", "input.txt"];
/// let mut parser = CommandLineParser::new("program", tokens).unwrap();
/// parser
///     .add_flag(Flag::new(&mut verbose, 'v'))
///     .unwrap()
///     .add_option(Opt::new(Scalar::new(&mut threads), ('t', "threads")))
///     .unwrap()
///     .add_positional_option(Positional::new(Scalar::new(&mut input)))
///     .unwrap();
/// parser.try_parse().unwrap();
/// drop(parser);
///
/// assert!(verbose);
/// assert_eq!(threads, 4);
/// assert_eq!(input, "input.txt");
/// ```
pub struct CommandLineParser<'a> {
    program: String,
    arguments: Vec<String>,
    subcommands: Vec<String>,
    metadata: Metadata,
    notifications: UpdateNotifications,
    renderer: Rc<dyn Renderer>,
    state: State<'a>,
}

impl<'a> std::fmt::Debug for CommandLineParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("program", &self.program)
            .field("arguments", &self.arguments)
            .field("subcommands", &self.subcommands)
            .finish_non_exhaustive()
    }
}

impl<'a> CommandLineParser<'a> {
    /// Create a plain command line parser.
    /// The `tokens` begin with the program invocation (argv\[0\]), which is skipped.
    pub fn new(
        program: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DesignError> {
        Self::with_subcommands(program, tokens, Vec::<String>::default())
    }

    /// Create a top-level command line parser, which dispatches to one of the subcommand `keywords`.
    /// A top-level parser takes options and flags, but no positional arguments.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::CommandLineParser;
    ///
    /// let tokens = vec!["git", "push", "--force"];
    /// let mut parser = CommandLineParser::with_subcommands("git", tokens, ["pull", "push"]).unwrap();
    /// parser.try_parse().unwrap();
    ///
    /// assert_eq!(parser.subcommand(), Some("push"));
    /// let sub_parser = parser.sub_parser().unwrap();
    /// assert_eq!(sub_parser.program(), "git-push");
    /// assert_eq!(sub_parser.arguments(), &["--force".to_string()]);
    /// ```
    pub fn with_subcommands(
        program: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DesignError> {
        let program = program.into();
        check_program(&program)?;
        let subcommands = check_subcommands(keywords)?;
        let arguments = tokens.into_iter().skip(1).map(Into::into).collect();

        Ok(Self::open(
            program,
            arguments,
            subcommands,
            Metadata::default(),
            UpdateNotifications::default(),
            Rc::new(ConsoleRenderer::default()),
        ))
    }

    /// Create a plain command line parser over [`std::env::args`].
    pub fn from_env(program: impl Into<String>) -> Result<Self, DesignError> {
        Self::new(program, std::env::args())
    }

    /// Create a top-level command line parser over [`std::env::args`].
    pub fn from_env_with_subcommands(
        program: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DesignError> {
        Self::with_subcommands(program, std::env::args(), keywords)
    }

    fn open(
        program: String,
        arguments: Vec<String>,
        subcommands: Vec<String>,
        metadata: Metadata,
        notifications: UpdateNotifications,
        renderer: Rc<dyn Renderer>,
    ) -> Self {
        Self {
            program,
            arguments,
            state: State::Open(Registry::new(subcommands.clone())),
            subcommands,
            metadata,
            notifications,
            renderer,
        }
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The tokens this parser parses (argv\[0\] excluded).
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The subcommand keywords (empty for a plain parser).
    pub fn subcommands(&self) -> &[String] {
        &self.subcommands
    }

    /// Set whether the program would like to check for updates.
    /// The command line may override this via `--version-check {true,false}`.
    pub fn update_notifications(&mut self, notifications: UpdateNotifications) -> &mut Self {
        self.notifications = notifications;
        self
    }

    /// The update notification setting, including any `--version-check` override from the parse.
    pub fn notifications(&self) -> UpdateNotifications {
        self.notifications
    }

    /// The free-text metadata of the help page.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Edit the free-text metadata of the help page.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program", vec!["program"]).unwrap();
    /// let metadata = parser.metadata_mut();
    /// metadata.short_description = "Does awesome stuff.".to_string();
    /// metadata.version = "1.0.0".to_string();
    /// ```
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Replace the [`ConsoleRenderer`] used for meta requests (help, version, copyright, export).
    /// A sub-parser shares the renderer of its parent.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) -> &mut Self {
        self.renderer = Rc::from(renderer);
        self
    }

    fn registry_mut(&mut self) -> Result<&mut Registry<'a>, DesignError> {
        match &mut self.state {
            State::Open(registry) => Ok(registry),
            State::Parsed { .. } => Err(DesignError::AlreadyParsed),
        }
    }

    /// Add an option to the command line parser.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{CommandLineParser, Opt, RangeValidator, Scalar};
    ///
    /// let mut threads: u32 = 1;
    /// let mut parser = CommandLineParser::new("program", vec!["program", "-t", "8"]).unwrap();
    /// parser
    ///     .add_option(
    ///         Opt::new(Scalar::new(&mut threads), ('t', "threads"))
    ///             .help("The number of worker threads.")
    ///             .validator(RangeValidator::new(1, 64)),
    ///     )
    ///     .unwrap();
    /// parser.try_parse().unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(threads, 8);
    /// ```
    pub fn add_option<T: 'a>(&mut self, option: Opt<'a, T>) -> Result<&mut Self, DesignError> {
        let registry = self.registry_mut()?;
        let inner = option.consume();
        let identifier = match inner.identifier() {
            Some(identifier) => identifier.clone(),
            None => unreachable!("internal error - an option always has an identifier"),
        };
        check_identifier(registry, &identifier)?;
        check_enumeration(inner.enumeration_names().as_deref())?;
        let (descriptor, capture) = inner.split(identifier.to_string());

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered option {descriptor:?}.");
        }

        registry.insert(descriptor, capture);
        Ok(self)
    }

    /// Add a flag to the command line parser.
    /// The bound variable must read `false`.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{CommandLineParser, DesignError, Flag};
    ///
    /// let mut verbose = true;
    /// let mut parser = CommandLineParser::new("program", vec!["program"]).unwrap();
    /// let result = parser.add_flag(Flag::new(&mut verbose, ('v', "verbose")));
    ///
    /// assert_eq!(result.unwrap_err(), DesignError::FlagDefaultTrue("-v/--verbose".to_string()));
    /// ```
    pub fn add_flag(&mut self, flag: Flag<'a>) -> Result<&mut Self, DesignError> {
        let registry = self.registry_mut()?;
        let inner = flag.consume();
        let identifier = match inner.identifier() {
            Some(identifier) => identifier.clone(),
            None => unreachable!("internal error - a flag always has an identifier"),
        };
        check_identifier(registry, &identifier)?;
        let name = identifier.to_string();
        check_flag_default(&name, inner.flag_default())?;
        let (descriptor, capture) = inner.split(name);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered flag {descriptor:?}.");
        }

        registry.insert(descriptor, capture);
        Ok(self)
    }

    /// Add a positional argument to the command line parser.
    ///
    /// The order of positional arguments corresponds to their order on the command line.
    /// Only the final positional argument may be a list, and a top-level parser takes none at all.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{CommandLineParser, Collection, Positional, Scalar};
    ///
    /// let mut first = String::default();
    /// let mut rest: Vec<u32> = Vec::default();
    /// let mut parser = CommandLineParser::new("program", vec!["program", "a", "1", "2"]).unwrap();
    /// parser
    ///     .add_positional_option(Positional::new(Scalar::new(&mut first)))
    ///     .unwrap()
    ///     .add_positional_option(Positional::new(Collection::new(&mut rest)))
    ///     .unwrap();
    /// parser.try_parse().unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(first, "a");
    /// assert_eq!(rest, vec![1, 2]);
    /// ```
    pub fn add_positional_option<T: 'a>(
        &mut self,
        positional: Positional<'a, T>,
    ) -> Result<&mut Self, DesignError> {
        let registry = self.registry_mut()?;
        check_positional(registry)?;
        let inner = positional.consume();
        check_enumeration(inner.enumeration_names().as_deref())?;
        let (descriptor, capture) = inner.split(positional_name(registry));

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered positional argument {descriptor:?}.");
        }

        registry.insert(descriptor, capture);
        Ok(self)
    }

    /// Every declared option, flag, and positional argument, in registration order.
    pub fn descriptors(&self) -> &[Descriptor] {
        match &self.state {
            State::Open(registry) => registry.descriptors(),
            State::Parsed { descriptors, .. } => descriptors,
        }
    }

    /// Find the descriptor registered under the short identifier.
    pub fn find_short(&self, short: char) -> Option<&Descriptor> {
        self.descriptors().iter().find(|descriptor| {
            descriptor
                .identifier()
                .map_or(false, |identifier| identifier.short() == Some(short))
        })
    }

    /// Find the descriptor registered under the long identifier.
    pub fn find_long(&self, long: &str) -> Option<&Descriptor> {
        self.descriptors().iter().find(|descriptor| {
            descriptor
                .identifier()
                .map_or(false, |identifier| identifier.long() == Some(long))
        })
    }

    /// Find the descriptor registered under either part of the `identifier`.
    pub fn descriptor(&self, identifier: &Identifier) -> Option<&Descriptor> {
        identifier
            .short()
            .and_then(|short| self.find_short(short))
            .or_else(|| identifier.long().and_then(|long| self.find_long(long)))
    }

    /// Parse the command line, binding every matched token to its variable.
    ///
    /// A meta request (ex: `--help`) is rendered, and returned as [`Outcome::Meta`] without binding anything.
    /// The parser may only parse once; it accepts no registrations afterwards, even when the parse failed.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{CommandLineParser, DesignError, Error, Opt, Scalar};
    ///
    /// let mut size: u32 = 0;
    /// let mut parser = CommandLineParser::new("program", vec!["program", "--size", "big"]).unwrap();
    /// parser.add_option(Opt::new(Scalar::new(&mut size), "size")).unwrap();
    ///
    /// assert!(parser.try_parse().is_err());
    /// assert_eq!(parser.try_parse(), Err(Error::Design(DesignError::AlreadyParsed)));
    /// ```
    pub fn try_parse(&mut self) -> Result<Outcome, Error> {
        let registry = match &mut self.state {
            State::Open(registry) => std::mem::replace(registry, Registry::new(Vec::default())),
            State::Parsed { .. } => return Err(DesignError::AlreadyParsed.into()),
        };
        self.state = State::Parsed {
            descriptors: registry.descriptors().to_vec(),
            dispatch: None,
        };
        let page = HelpPage::new(
            self.program.clone(),
            self.metadata.clone(),
            registry.descriptors().to_vec(),
            self.subcommands.clone(),
            self.notifications,
        );
        let unit = ParseUnit::new(Parser::new(registry), page);

        match unit.invoke(&self.arguments, self.renderer.as_ref())? {
            ParseResult::Meta(request) => Ok(Outcome::Meta(request)),
            ParseResult::Complete { version_check } => {
                self.apply_version_check(version_check);
                Ok(Outcome::Parsed)
            }
            ParseResult::Dispatch {
                version_check,
                keyword,
                remaining,
            } => {
                self.apply_version_check(version_check);

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dispatching to '{keyword}' with {remaining:?}.");
                }

                if let State::Parsed { dispatch, .. } = &mut self.state {
                    dispatch.replace((keyword, remaining));
                }

                Ok(Outcome::Parsed)
            }
        }
    }

    /// Parse the command line, exiting the process with status `0` after rendering a meta request.
    ///
    /// Errors are returned to the caller; this never exits on an error.
    pub fn parse(&mut self) -> Result<(), Error> {
        match self.try_parse()? {
            Outcome::Parsed => Ok(()),
            Outcome::Meta(_) => std::process::exit(0),
        }
    }

    fn apply_version_check(&mut self, version_check: Option<bool>) {
        if let Some(enabled) = version_check {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Update notifications set to {enabled} by the command line.");
            }

            self.notifications = if enabled {
                UpdateNotifications::On
            } else {
                UpdateNotifications::Off
            };
        }
    }

    /// The subcommand keyword selected by the parse, if any.
    pub fn subcommand(&self) -> Option<&str> {
        match &self.state {
            State::Parsed {
                dispatch: Some((keyword, _)),
                ..
            } => Some(keyword),
            _ => None,
        }
    }

    /// Create the parser for the selected subcommand, over the tokens following its keyword.
    ///
    /// The sub-parser is named `<program>-<keyword>` and shares this parser's metadata, notifications, and renderer.
    /// It is independent of this parser: declare its options and parse it like any other plain parser.
    pub fn sub_parser<'b>(&self) -> Result<CommandLineParser<'b>, DesignError> {
        if self.subcommands.is_empty() {
            return Err(DesignError::NotTopLevel);
        }

        match &self.state {
            State::Parsed {
                dispatch: Some((keyword, remaining)),
                ..
            } => {
                let metadata = Metadata {
                    short_description: String::default(),
                    synopsis: Vec::default(),
                    description: Vec::default(),
                    examples: Vec::default(),
                    ..self.metadata.clone()
                };

                Ok(CommandLineParser::open(
                    format!("{}-{keyword}", self.program),
                    remaining.clone(),
                    Vec::default(),
                    metadata,
                    self.notifications,
                    self.renderer.clone(),
                ))
            }
            _ => Err(DesignError::SubParserUnavailable),
        }
    }
}
