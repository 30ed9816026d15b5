use api::ACTIVE_CLASS;
use tracing::{Level, debug, instrument};

use super::ViewController;
use crate::port::{DiagramRenderer, Node, PreferenceStore, UiPort};

impl<P, S, R> ViewController<P, S, R>
where
    P: UiPort,
    S: PreferenceStore,
    R: DiagramRenderer,
{
    // make `id` the only active page and draw its diagrams
    //
    // an unknown id leaves the current page up, so there is never a moment with nothing shown
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn show_page(&mut self, id: &str) -> bool {
        let target = Node::page(id);

        if !self.port.exists(&target) {
            debug!("no such page");
            return false;
        }

        for page in self.port.pages() {
            self.port.set_class(&Node::Page(page), ACTIVE_CLASS, false);
        }

        self.port.set_class(&target, ACTIVE_CLASS, true);

        let style = self.diagram_style();
        self.renderer.render(id, &style);

        true
    }

    // filter pages and cards by a case-insensitive substring
    //
    // an empty query puts the site back the way it loads: home alone, every card visible
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn search(&mut self, query: &str) {
        let needle = query.to_lowercase();
        let pages = self.port.pages();
        let home = self.settings.home.clone();

        self.query = query.to_owned();

        if needle.is_empty() {
            self.show_page(&home);

            for page in pages.iter().filter(|page| **page != home) {
                self.port.set_class(&Node::page(page), ACTIVE_CLASS, false);
            }

            for page in &pages {
                for index in 0..self.port.card_count(page) {
                    self.port.set_hidden(&Node::card(page, index), false);
                }
            }

            return;
        }

        self.port.set_class(&Node::page(&home), ACTIVE_CLASS, false);

        for page in &pages {
            let matched = self.matches(&Node::page(page), &needle);
            self.port.set_class(&Node::page(page), ACTIVE_CLASS, matched);
        }

        // cards are only filtered where someone can see them
        for page in self.active_pages() {
            for index in 0..self.port.card_count(&page) {
                let card = Node::card(&page, index);
                let matched = self.matches(&card, &needle);
                self.port.set_hidden(&card, !matched);
            }
        }

        debug!({ active = ?self.active_pages() }, "search applied");
    }

    fn matches(&self, node: &Node, needle: &str) -> bool {
        self.port
            .text(node)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use crate::view::tests::controller;
    use crate::port::{Node, UiPort};

    #[test]
    fn show_page_switches_the_single_active_page() {
        let mut controller = controller();

        assert!(controller.show_page("beta"));
        assert_eq!(controller.active_pages(), vec!["beta"]);

        assert!(controller.show_page("alpha"));
        assert_eq!(controller.active_pages(), vec!["alpha"]);
    }

    #[test]
    fn show_page_is_idempotent() {
        let mut controller = controller();

        for id in ["home", "alpha", "beta", "missing"] {
            controller.show_page(id);
            let once = controller.port().clone();

            controller.show_page(id);
            assert_eq!(controller.port(), &once, "second show_page({id}) changed state");
        }
    }

    #[test]
    fn show_page_ignores_unknown_ids() {
        let mut controller = controller();

        assert!(!controller.show_page("gamma"));
        assert_eq!(controller.active_pages(), vec!["home"]);
        assert!(controller.renderer().calls.is_empty());
    }

    #[test]
    fn show_page_renders_diagrams_for_the_new_page() {
        let mut controller = controller();
        controller.show_page("alpha");

        let (page, style) = controller.renderer().calls.last().unwrap();
        assert_eq!(page, "alpha");
        assert_eq!(style, &controller.diagram_style());
    }

    #[test]
    fn search_matches_pages_case_insensitively() {
        let mut controller = controller();

        controller.search("widget");
        assert_eq!(controller.active_pages(), vec!["alpha"]);

        controller.search("");
        assert_eq!(controller.active_pages(), vec!["home"]);
    }

    #[test]
    fn search_partitions_pages_by_match() {
        let mut controller = controller();

        for query in ["TOOL", "a", "notes", "zzz", "Start"] {
            controller.search(query);

            let needle = query.to_lowercase();
            let active = controller.active_pages();

            for page in controller.port().pages() {
                let text = controller.port().text(&Node::page(&page)).unwrap().to_lowercase();
                assert_eq!(
                    active.contains(&page),
                    text.contains(&needle),
                    "page {page} for query {query}"
                );
            }
        }
    }

    #[test]
    fn search_can_reactivate_home_when_it_matches() {
        let mut controller = controller();

        controller.search("start here");
        assert_eq!(controller.active_pages(), vec!["home"]);
    }

    #[test]
    fn search_hides_unmatched_cards_on_active_pages() {
        let mut controller = controller();

        controller.search("sprockets");
        assert_eq!(controller.active_pages(), vec!["alpha"]);
        assert!(!controller.port().is_hidden(&Node::card("alpha", 0)));
        assert!(controller.port().is_hidden(&Node::card("alpha", 1)));

        // beta is not active, so its cards were left alone
        assert!(!controller.port().is_hidden(&Node::card("beta", 0)));
    }

    #[test]
    fn clearing_search_shows_every_card() {
        let mut controller = controller();

        controller.search("levers");
        assert!(controller.port().is_hidden(&Node::card("alpha", 0)));

        controller.search("");
        assert_eq!(controller.active_pages(), vec!["home"]);
        for page in controller.port().pages() {
            for index in 0..controller.port().card_count(&page) {
                assert!(!controller.port().is_hidden(&Node::card(&page, index)));
            }
        }
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn search_with_no_match_leaves_nothing_active() {
        let mut controller = controller();

        controller.search("quantum");
        assert!(controller.active_pages().is_empty());
        assert_eq!(controller.query(), "quantum");
    }
}
