use crate::model::MetaRequest;
use crate::parser::{Action, HelpPage, Parser, ParserError, Renderer};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// What a successful parse resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was bound; the program should carry on.
    Parsed,
    /// A meta request was rendered; the program should exit without further work.
    Meta(MetaRequest),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParseResult {
    Complete {
        version_check: Option<bool>,
    },
    Dispatch {
        version_check: Option<bool>,
        keyword: String,
        remaining: Vec<String>,
    },
    Meta(MetaRequest),
}

/// Pairs the parser with the page rendered for meta requests.
#[derive(Debug)]
pub(crate) struct ParseUnit<'a> {
    parser: Parser<'a>,
    page: HelpPage,
}

impl<'a> ParseUnit<'a> {
    pub(crate) fn new(parser: Parser<'a>, page: HelpPage) -> Self {
        Self { parser, page }
    }

    pub(crate) fn invoke(
        self,
        tokens: &[String],
        renderer: &dyn Renderer,
    ) -> Result<ParseResult, ParserError> {
        let ParseUnit { parser, page } = self;

        match parser.consume(tokens)? {
            Action::Meta(request) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Rendering {request:?} for '{}'.", page.program());
                }

                renderer.render(request, &page);
                Ok(ParseResult::Meta(request))
            }
            Action::Continue {
                version_check,
                dispatch: None,
            } => Ok(ParseResult::Complete { version_check }),
            Action::Continue {
                version_check,
                dispatch: Some((keyword, remaining)),
            } => Ok(ParseResult::Dispatch {
                version_check,
                keyword,
                remaining,
            }),
        }
    }
}
