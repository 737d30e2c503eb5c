//! Builder module for `argot`.
//! See [documentation root](https://docs.rs/argot/latest/argot/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod validator;

pub use api::*;
pub use model::*;
pub use parser::{
    ConsoleRenderer, Descriptor, DescriptorKind, DesignError, Error, HelpPage, Outcome,
    ParserError, Renderer,
};
pub use validator::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
