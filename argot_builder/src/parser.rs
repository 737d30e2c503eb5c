mod base;
mod design;
mod interface;
mod middleware;
mod printer;
mod registry;

pub(crate) use self::base::*;
pub(crate) use self::design::*;
pub(crate) use self::middleware::{ParseResult, ParseUnit};
pub(crate) use self::printer::Printer;
pub(crate) use self::registry::Registry;

pub use self::base::{DesignError, Error, ParserError};
pub use self::interface::{ConsoleRenderer, Renderer};
pub use self::middleware::Outcome;
pub use self::printer::HelpPage;
pub use self::registry::{Descriptor, DescriptorKind};
