//! `argot` is a design-checked command line parser for Rust.
//!
//! `argot` binds command line tokens directly into variables the program owns, and is built around the following concerns:
//! * *Type safe binding*:
//! The program declares a variable and its identifiers; conversion from `&str` happens inside the parser.
//! * *Validated values*:
//! Domain constraints (ranges, value lists, regular expressions, input/output files) are attached to the option itself.
//! The same constraint text appears in the help page and in the error message.
//! * *Design mistakes fail fast*:
//! A duplicate identifier, a reserved identifier, a flag that defaults to `true`, or a positional argument after a list
//! all fail with a [`DesignError`] at the offending call, before any end user sees the program.
//! * *Subcommand delegation*:
//! A top-level parser selects one subcommand keyword, then hands the remaining tokens to an independent sub-parser.
//!
//! # Usage
//! ```
//! use argot::{CommandLineParser, Collection, Opt, Positional, RangeValidator, Scalar};
//!
//! let mut threads: u32 = 1;
//! let mut items: Vec<u64> = Vec::default();
//! let tokens = vec!["summer", "--threads", "2", "1", "2", "3"];
//! let mut parser = CommandLineParser::new("summer", tokens).unwrap();
//! parser.metadata_mut().short_description = "Sums the items.".to_string();
//! parser
//!     .add_option(
//!         Opt::new(Scalar::new(&mut threads), ('t', "threads"))
//!             .help("The number of worker threads.")
//!             .validator(RangeValidator::new(1, 8)),
//!     )
//!     .unwrap()
//!     .add_positional_option(Positional::new(Collection::new(&mut items)).help("The items to sum."))
//!     .unwrap();
//! parser.try_parse().unwrap();
//! drop(parser);
//!
//! assert_eq!(threads, 2);
//! assert_eq!(items.iter().sum::<u64>(), 6);
//! ```
//!
//! In a real program, build the parser with [`CommandLineParser::from_env`] and call [`CommandLineParser::parse`].
//! It exits with status `0` after rendering `-h`/`--help`, `-hh`/`--advanced-help`, `--version`, `--copyright`,
//! or `--export-help`; any other mistake is returned, for the program to report:
//! ```no_run
//! use argot::{CommandLineParser, Flag};
//!
//! let mut verbose = false;
//! let mut parser = CommandLineParser::from_env("program").unwrap();
//! parser.add_flag(Flag::new(&mut verbose, ('v', "verbose"))).unwrap();
//!
//! if let Err(error) = parser.parse() {
//!     eprintln!("{error}");
//!     std::process::exit(1);
//! }
//! ```
//!
//! # Subcommands
//! ```
//! use argot::{CommandLineParser, Flag, Opt, Scalar};
//!
//! let mut verbose = false;
//! let tokens = vec!["git", "-v", "push", "--remote", "origin"];
//! let mut parser = CommandLineParser::with_subcommands("git", tokens, ["pull", "push"]).unwrap();
//! parser.add_flag(Flag::new(&mut verbose, 'v')).unwrap();
//! parser.try_parse().unwrap();
//!
//! let mut remote = String::default();
//! let mut sub_parser = parser.sub_parser().unwrap();
//! sub_parser.add_option(Opt::new(Scalar::new(&mut remote), "remote")).unwrap();
//! sub_parser.try_parse().unwrap();
//! drop(sub_parser);
//! drop(parser);
//!
//! assert!(verbose);
//! assert_eq!(remote, "origin");
//! ```
//!
//! # Enumerations
//! A type without a built-in conversion may provide a name table via [`prelude::Enumeration`].
//! Tokens convert by exact name lookup, and the help page lists the names in table order.
//! ```
//! use argot::{prelude::*, CommandLineParser, Opt, Scalar};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Mode {
//!     Fast,
//!     Thorough,
//! }
//!
//! impl Enumeration for Mode {
//!     fn enumeration_names() -> Vec<(&'static str, Self)> {
//!         vec![("fast", Mode::Fast), ("thorough", Mode::Thorough)]
//!     }
//! }
//!
//! let mut mode = Mode::Fast;
//! let mut parser = CommandLineParser::new("program", vec!["program", "--mode", "thorough"]).unwrap();
//! parser.add_option(Opt::new(Scalar::enumerated(&mut mode), "mode")).unwrap();
//! parser.try_parse().unwrap();
//! drop(parser);
//!
//! assert_eq!(mode, Mode::Thorough);
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for registration, meta requests, dispatch, and each bound token.
pub use argot_builder::*;
