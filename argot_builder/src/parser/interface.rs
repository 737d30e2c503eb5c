use crate::model::MetaRequest;
use crate::parser::{HelpPage, Printer};

/// Behaviour for presenting a meta request (help, version, copyright, export) to the user.
///
/// The parser hands over a complete [`HelpPage`] snapshot; renderers never see the bound variables.
pub trait Renderer {
    /// Render the page for `request`.
    fn render(&self, request: MetaRequest, page: &HelpPage);
}

/// The default renderer: a plain-text page on stdout.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {}

impl Renderer for ConsoleRenderer {
    fn render(&self, request: MetaRequest, page: &HelpPage) {
        for line in Printer::new(page).render(request) {
            println!("{line}");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test::*;
    use super::*;
    use crate::model::{Metadata, UpdateNotifications};
    use std::sync::mpsc::channel;

    fn page() -> HelpPage {
        HelpPage::new(
            "program".to_string(),
            Metadata::default(),
            vec![],
            vec![],
            UpdateNotifications::On,
        )
    }

    #[test]
    fn in_memory() {
        // Setup
        let renderer = InMemoryRenderer::default();

        // Execute
        renderer.render(MetaRequest::Version, &page());

        // Verify
        let pages = renderer.pages.borrow();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, MetaRequest::Version);
        assert_eq!(pages[0].1[0], "program");
    }

    #[test]
    fn channel_renderer() {
        // Setup
        let (sender, receiver) = channel();
        let renderer: Box<dyn Renderer> = Box::new(ChannelRenderer::new(sender));

        // Execute
        renderer.render(MetaRequest::Copyright, &page());

        // Verify
        let (request, lines) = receiver.try_recv().unwrap();
        assert_eq!(request, MetaRequest::Copyright);
        assert_eq!(lines[1], "Copyright information for program:");
    }

    #[test]
    fn console() {
        ConsoleRenderer::default().render(MetaRequest::Help, &page());
    }
}
