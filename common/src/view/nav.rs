use api::{ARROW_CLOSED, ARROW_OPEN, OPEN_CLASS};
use tracing::debug;

use super::ViewController;
use crate::{
    config::NavEntry,
    port::{DiagramRenderer, NavLayout, NavMenu, NavSlot, Node, PreferenceStore, UiPort},
};

impl<P, S, R> ViewController<P, S, R>
where
    P: UiPort,
    S: PreferenceStore,
    R: DiagramRenderer,
{
    // mount the shared navigation fragment in both slots
    //
    // the main slot lays it out horizontally across the toolbar, the sidebar keeps it as is
    pub fn install_navigation(&mut self, entries: &[NavEntry]) {
        self.port.set_nav(
            NavSlot::Main,
            NavMenu {
                layout: NavLayout::Horizontal,
                entries: entries.to_vec(),
            },
        );

        self.port.set_nav(
            NavSlot::Sidebar,
            NavMenu {
                layout: NavLayout::Vertical,
                entries: entries.to_vec(),
            },
        );

        debug!({ entries = entries.len() }, "installed shared navigation");
    }

    // returns whether the submenu is now open
    //
    // only the copy in the given slot moves, the other slot keeps its own state
    pub fn toggle_submenu(&mut self, slot: NavSlot, id: &str) -> bool {
        let menu = Node::submenu(slot, id);
        let toggle = Node::submenu_toggle(slot, id);

        if !self.port.exists(&menu) {
            debug!("no such submenu {id} in {slot:?}");
            return false;
        }

        let open = !self.port.has_class(&menu, OPEN_CLASS);
        self.port.set_class(&menu, OPEN_CLASS, open);

        if let Some(label) = self.port.text(&toggle) {
            let (from, to) = if open {
                (ARROW_CLOSED, ARROW_OPEN)
            } else {
                (ARROW_OPEN, ARROW_CLOSED)
            };

            self.port
                .set_label(&toggle, &label.replacen(from, &to.to_string(), 1));
        }

        open
    }

    // returns whether the section is now hidden
    pub fn toggle_section(&mut self, id: &str) -> bool {
        let section = Node::Section(id.to_owned());

        if !self.port.exists(&section) {
            debug!("no such section {id}");
            return false;
        }

        let hidden = !self.port.is_hidden(&section);
        self.port.set_hidden(&section, hidden);

        hidden
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::tests::sample_site,
        document::SiteDocument,
        port::{NavLayout, NavSlot, Node, UiPort},
        view::tests::controller,
    };

    #[test]
    fn navigation_lands_in_both_slots() {
        let mut controller = controller();
        let nav = sample_site().nav;

        controller.install_navigation(&nav);

        let document: &SiteDocument = controller.port();
        let main = document.nav(NavSlot::Main).unwrap();
        let sidebar = document.nav(NavSlot::Sidebar).unwrap();

        assert_eq!(main.layout, NavLayout::Horizontal);
        assert_eq!(sidebar.layout, NavLayout::Vertical);
        assert_eq!(main.entries, nav);
        assert_eq!(sidebar.entries, nav);
    }

    #[test]
    fn submenu_toggle_flips_class_and_arrow() {
        let mut controller = controller();
        let menu = Node::submenu(NavSlot::Main, "products");
        let toggle = Node::submenu_toggle(NavSlot::Main, "products");

        assert!(controller.toggle_submenu(NavSlot::Main, "products"));
        assert!(controller.port().has_class(&menu, "open"));
        assert_eq!(controller.port().text(&toggle).as_deref(), Some("Products ▴"));

        assert!(!controller.toggle_submenu(NavSlot::Main, "products"));
        assert!(!controller.port().has_class(&menu, "open"));
        assert_eq!(controller.port().text(&toggle).as_deref(), Some("Products ▾"));
    }

    #[test]
    fn slots_open_their_submenus_independently() {
        let mut controller = controller();
        controller.install_navigation(&sample_site().nav);

        assert!(controller.toggle_submenu(NavSlot::Sidebar, "products"));

        let document = controller.port();
        assert!(document.has_class(&Node::submenu(NavSlot::Sidebar, "products"), "open"));
        assert!(!document.has_class(&Node::submenu(NavSlot::Main, "products"), "open"));
        assert_eq!(
            document
                .text(&Node::submenu_toggle(NavSlot::Main, "products"))
                .as_deref(),
            Some("Products ▾")
        );

        assert!(controller.toggle_submenu(NavSlot::Main, "products"));
        assert!(!controller.toggle_submenu(NavSlot::Sidebar, "products"));
        assert!(
            controller
                .port()
                .has_class(&Node::submenu(NavSlot::Main, "products"), "open")
        );
    }

    #[test]
    fn unknown_submenu_is_ignored() {
        let mut controller = controller();
        let before = controller.port().clone();

        assert!(!controller.toggle_submenu(NavSlot::Sidebar, "services"));
        assert_eq!(controller.port(), &before);
    }

    #[test]
    fn section_toggle_flips_visibility() {
        let mut controller = controller();
        let notes = Node::Section(String::from("alpha-notes"));

        assert!(controller.toggle_section("alpha-notes"));
        assert!(controller.port().is_hidden(&notes));

        assert!(!controller.toggle_section("alpha-notes"));
        assert!(!controller.port().is_hidden(&notes));

        assert!(!controller.toggle_section("missing"));
    }
}
