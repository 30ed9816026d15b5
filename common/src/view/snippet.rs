use anyhow::Result;
use tracing::{debug, warn};

use super::ViewController;
use crate::port::{DiagramRenderer, Node, PreferenceStore, UiPort};

// the snippet a copy button click should put on the clipboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleSnippet {
    pub page: String,
    pub text: String,
}

impl<P, S, R> ViewController<P, S, R>
where
    P: UiPort,
    S: PreferenceStore,
    R: DiagramRenderer,
{
    // the first visible page's snippet, if that page has one
    pub fn visible_snippet(&self) -> Option<VisibleSnippet> {
        let page = self.active_pages().into_iter().next()?;
        let text = self.port.text(&Node::Snippet(page.clone()))?;

        Some(VisibleSnippet { page, text })
    }

    // flag a successful copy on the page's button, returning how long to leave it up
    pub fn mark_copied(&mut self, page: &str) -> u32 {
        let label = self.settings.copy.copied_label.clone();

        if !self.port.set_label(&Node::CopyButton(page.to_owned()), &label) {
            debug!("page {page} has no copy button");
        }

        self.settings.copy.revert_ms
    }

    // settle a clipboard write: a failed write leaves the button alone and asks for no timer
    pub fn finish_copy(&mut self, page: &str, written: Result<()>) -> Option<u32> {
        match written {
            Ok(()) => Some(self.mark_copied(page)),
            Err(err) => {
                warn!("failed to copy snippet from {page}: {err:#}");
                None
            }
        }
    }

    pub fn reset_copy_label(&mut self, page: &str) {
        let label = self.settings.copy.idle_label.clone();
        self.port.set_label(&Node::CopyButton(page.to_owned()), &label);
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::view::tests::controller;

    #[test]
    fn snippet_comes_from_the_visible_page() {
        let mut controller = controller();
        assert_eq!(controller.visible_snippet(), None);

        controller.show_page("alpha");
        assert_eq!(
            controller.visible_snippet(),
            Some(VisibleSnippet {
                page: String::from("alpha"),
                text: String::from("alpha --install"),
            })
        );

        controller.show_page("beta");
        assert_eq!(controller.visible_snippet(), None);
    }

    #[test]
    fn nothing_to_copy_when_no_page_is_visible() {
        let mut controller = controller();
        controller.search("quantum");

        assert_eq!(controller.visible_snippet(), None);
    }

    #[test]
    fn copy_label_flips_and_reverts() {
        let mut controller = controller();
        let button = Node::CopyButton(String::from("alpha"));

        assert_eq!(controller.port().text(&button).as_deref(), Some("Copy"));

        assert_eq!(controller.mark_copied("alpha"), 1500);
        assert_eq!(controller.port().text(&button).as_deref(), Some("Copied!"));

        controller.reset_copy_label("alpha");
        assert_eq!(controller.port().text(&button).as_deref(), Some("Copy"));
    }

    #[test]
    fn failed_copy_keeps_the_idle_label() {
        let mut controller = controller();
        controller.show_page("alpha");
        let button = Node::CopyButton(String::from("alpha"));

        let snippet = controller.visible_snippet().unwrap();
        let revert = controller.finish_copy(&snippet.page, Err(anyhow!("permission denied")));

        assert_eq!(revert, None);
        assert_eq!(controller.port().text(&button).as_deref(), Some("Copy"));

        assert_eq!(controller.finish_copy(&snippet.page, Ok(())), Some(1500));
        assert_eq!(controller.port().text(&button).as_deref(), Some("Copied!"));
    }

    #[test]
    fn pages_without_snippets_have_no_button() {
        let mut controller = controller();

        controller.mark_copied("beta");
        assert!(!controller.port().exists(&Node::CopyButton(String::from("beta"))));
    }
}
