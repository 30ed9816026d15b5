use std::collections::{BTreeMap, BTreeSet};

use api::{ACTIVE_CLASS, ARROW_CLOSED, LIGHT_LABEL};

use crate::{
    config::{NavEntry, SiteConfig},
    port::{NavMenu, NavSlot, Node, UiPort},
};

// the mutable presentation state of a single element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    classes: BTreeSet<String>,
    hidden: bool,
    label: String,
}

impl Element {
    pub fn with_label(label: &str) -> Self {
        Element {
            label: label.to_owned(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    // the value for a class attribute, with the element's fixed classes in front
    pub fn class_string(&self, base: &str) -> String {
        std::iter::once(base)
            .chain(self.classes())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardNode {
    pub title: String,
    pub body: String,
    pub element: Element,
}

impl CardNode {
    pub fn text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionNode {
    pub id: String,
    pub title: String,
    pub body: String,
    pub element: Element,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageNode {
    pub id: String,
    pub title: String,
    pub body: String,
    pub element: Element,
    pub sections: Vec<SectionNode>,
    pub cards: Vec<CardNode>,
    pub snippet: Option<String>,
    pub copy_button: Element,
    pub diagrams: Vec<String>,
}

impl PageNode {
    pub fn is_active(&self) -> bool {
        self.element.has_class(ACTIVE_CLASS)
    }

    // everything a reader can see on the page, which is what search matches against
    pub fn text(&self) -> String {
        let mut parts = vec![self.title.as_str(), self.body.as_str()];

        for section in &self.sections {
            parts.push(&section.title);
            parts.push(&section.body);
        }

        for card in &self.cards {
            parts.push(&card.title);
            parts.push(&card.body);
        }

        if let Some(snippet) = &self.snippet {
            parts.push(snippet);
        }

        parts.retain(|part| !part.is_empty());
        parts.join("\n")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmenuNode {
    pub toggle: Element,
    pub menu: Element,
}

// site document
//
// an in-memory rendition of the page structure that the stylesheet expects.  the controller
// drives it through UiPort, and the webapp renders straight from it, so there is exactly one
// copy of the visible state
#[derive(Clone, Debug, PartialEq)]
pub struct SiteDocument {
    body: Element,
    banner: Element,
    header: Element,
    toolbar: Element,
    dark_toggle: Element,
    theme_selector: Element,
    pages: Vec<PageNode>,
    submenus: BTreeMap<(NavSlot, String), SubmenuNode>,
    main_nav: Option<NavMenu>,
    sidebar_nav: Option<NavMenu>,
}

impl SiteDocument {
    // the document as the static markup ships it: home active, nothing themed yet, and the
    // navigation slots still empty
    pub fn from_config(site: &SiteConfig) -> Self {
        let pages = site
            .pages
            .iter()
            .map(|page| {
                let mut element = Element::default();
                if page.id == site.view.home {
                    element.set_class(ACTIVE_CLASS, true);
                }

                let sections = page
                    .sections
                    .iter()
                    .map(|section| SectionNode {
                        id: section.id.clone(),
                        title: section.title.clone(),
                        body: section.body.clone(),
                        element: Element {
                            hidden: section.collapsed,
                            ..Default::default()
                        },
                    })
                    .collect();

                let cards = page
                    .cards
                    .iter()
                    .map(|card| CardNode {
                        title: card.title.clone(),
                        body: card.body.clone(),
                        element: Element::default(),
                    })
                    .collect();

                PageNode {
                    id: page.id.clone(),
                    title: page.title.clone(),
                    body: page.body.clone(),
                    element,
                    sections,
                    cards,
                    snippet: page.snippet.clone(),
                    copy_button: Element::with_label(&site.view.copy.idle_label),
                    diagrams: page.diagrams.clone(),
                }
            })
            .collect();

        let mut submenus = BTreeMap::new();
        for slot in NavSlot::all() {
            collect_submenus(slot, &site.nav, &mut submenus);
        }

        SiteDocument {
            body: Element::default(),
            banner: Element::default(),
            header: Element::default(),
            toolbar: Element::default(),
            dark_toggle: Element::with_label(LIGHT_LABEL),
            theme_selector: Element::with_label(site.view.default_theme.name()),
            pages,
            submenus,
            main_nav: None,
            sidebar_nav: None,
        }
    }

    pub fn page(&self, id: &str) -> Option<&PageNode> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn submenu(&self, slot: NavSlot, id: &str) -> Option<&SubmenuNode> {
        self.submenus.get(&(slot, id.to_owned()))
    }

    pub fn nav(&self, slot: NavSlot) -> Option<&NavMenu> {
        match slot {
            NavSlot::Main => self.main_nav.as_ref(),
            NavSlot::Sidebar => self.sidebar_nav.as_ref(),
        }
    }

    pub fn element(&self, node: &Node) -> Option<&Element> {
        match node {
            Node::Body => Some(&self.body),
            Node::Banner => Some(&self.banner),
            Node::Header => Some(&self.header),
            Node::Toolbar => Some(&self.toolbar),
            Node::DarkToggle => Some(&self.dark_toggle),
            Node::ThemeSelector => Some(&self.theme_selector),
            Node::Page(id) => self.page(id).map(|page| &page.element),
            Node::Card { page, index } => self
                .page(page)
                .and_then(|page| page.cards.get(*index))
                .map(|card| &card.element),
            Node::Section(id) => self.section(id).map(|section| &section.element),
            Node::Submenu { slot, id } => self.submenu(*slot, id).map(|submenu| &submenu.menu),
            Node::SubmenuToggle { slot, id } => {
                self.submenu(*slot, id).map(|submenu| &submenu.toggle)
            }
            // a snippet is plain text, only its button carries state
            Node::Snippet(_) => None,
            Node::CopyButton(id) => self
                .page(id)
                .filter(|page| page.snippet.is_some())
                .map(|page| &page.copy_button),
        }
    }

    fn element_mut(&mut self, node: &Node) -> Option<&mut Element> {
        match node {
            Node::Body => Some(&mut self.body),
            Node::Banner => Some(&mut self.banner),
            Node::Header => Some(&mut self.header),
            Node::Toolbar => Some(&mut self.toolbar),
            Node::DarkToggle => Some(&mut self.dark_toggle),
            Node::ThemeSelector => Some(&mut self.theme_selector),
            Node::Page(id) => self.page_mut(id).map(|page| &mut page.element),
            Node::Card { page, index } => self
                .page_mut(page)
                .and_then(|page| page.cards.get_mut(*index))
                .map(|card| &mut card.element),
            Node::Section(id) => self
                .pages
                .iter_mut()
                .flat_map(|page| page.sections.iter_mut())
                .find(|section| section.id == *id)
                .map(|section| &mut section.element),
            Node::Submenu { slot, id } => self
                .submenus
                .get_mut(&(*slot, id.clone()))
                .map(|submenu| &mut submenu.menu),
            Node::SubmenuToggle { slot, id } => self
                .submenus
                .get_mut(&(*slot, id.clone()))
                .map(|submenu| &mut submenu.toggle),
            Node::Snippet(_) => None,
            Node::CopyButton(id) => self
                .page_mut(id)
                .filter(|page| page.snippet.is_some())
                .map(|page| &mut page.copy_button),
        }
    }

    fn page_mut(&mut self, id: &str) -> Option<&mut PageNode> {
        self.pages.iter_mut().find(|page| page.id == id)
    }

    fn section(&self, id: &str) -> Option<&SectionNode> {
        self.pages
            .iter()
            .flat_map(|page| page.sections.iter())
            .find(|section| section.id == id)
    }
}

// every slot gets its own closed copy of each submenu in the fragment
fn collect_submenus(
    slot: NavSlot,
    entries: &[NavEntry],
    submenus: &mut BTreeMap<(NavSlot, String), SubmenuNode>,
) {
    for entry in entries.iter().filter(|entry| entry.is_submenu()) {
        if let Some(id) = &entry.id {
            submenus.insert(
                (slot, id.clone()),
                SubmenuNode {
                    toggle: Element::with_label(&format!("{} {ARROW_CLOSED}", entry.label)),
                    menu: Element::default(),
                },
            );
        }

        collect_submenus(slot, &entry.children, submenus);
    }
}

impl UiPort for SiteDocument {
    fn pages(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.id.clone()).collect()
    }

    fn card_count(&self, page: &str) -> usize {
        self.page(page).map_or(0, |page| page.cards.len())
    }

    fn exists(&self, node: &Node) -> bool {
        match node {
            Node::Snippet(id) => self.page(id).is_some_and(|page| page.snippet.is_some()),
            _ => self.element(node).is_some(),
        }
    }

    fn text(&self, node: &Node) -> Option<String> {
        match node {
            Node::Page(id) => self.page(id).map(PageNode::text),
            Node::Card { page, index } => self
                .page(page)
                .and_then(|page| page.cards.get(*index))
                .map(CardNode::text),
            Node::Section(id) => self
                .section(id)
                .map(|section| format!("{}\n{}", section.title, section.body)),
            Node::Snippet(id) => self.page(id).and_then(|page| page.snippet.clone()),
            _ => self.element(node).map(|element| element.label.clone()),
        }
    }

    fn classes(&self, node: &Node) -> Vec<String> {
        self.element(node)
            .map(|element| element.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        self.element(node).is_some_and(|element| element.has_class(class))
    }

    fn set_class(&mut self, node: &Node, class: &str, on: bool) -> bool {
        match self.element_mut(node) {
            Some(element) => {
                element.set_class(class, on);
                true
            }
            None => false,
        }
    }

    fn is_hidden(&self, node: &Node) -> bool {
        self.element(node).is_some_and(Element::is_hidden)
    }

    fn set_hidden(&mut self, node: &Node, hidden: bool) -> bool {
        match self.element_mut(node) {
            Some(element) => {
                element.hidden = hidden;
                true
            }
            None => false,
        }
    }

    fn set_label(&mut self, node: &Node, label: &str) -> bool {
        match self.element_mut(node) {
            Some(element) => {
                element.label = label.to_owned();
                true
            }
            None => false,
        }
    }

    fn set_nav(&mut self, slot: NavSlot, menu: NavMenu) {
        match slot {
            NavSlot::Main => self.main_nav = Some(menu),
            NavSlot::Sidebar => self.sidebar_nav = Some(menu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample_site;

    #[test]
    fn starts_with_home_active() {
        let doc = SiteDocument::from_config(&sample_site());

        assert_eq!(doc.pages(), vec!["home", "alpha", "beta"]);
        assert!(doc.has_class(&Node::page("home"), ACTIVE_CLASS));
        assert!(!doc.has_class(&Node::page("alpha"), ACTIVE_CLASS));
        assert!(doc.nav(NavSlot::Main).is_none());
    }

    #[test]
    fn page_text_includes_cards_and_snippet() {
        let doc = SiteDocument::from_config(&sample_site());
        let text = doc.text(&Node::page("alpha")).unwrap();

        assert!(text.contains("Alpha Widget"));
        assert!(text.contains("sprockets"));
        assert!(text.contains("Release notes."));
        assert!(text.contains("--install"));
    }

    #[test]
    fn missing_nodes_are_reported_not_created() {
        let mut doc = SiteDocument::from_config(&sample_site());

        assert!(!doc.exists(&Node::page("gamma")));
        assert!(!doc.set_class(&Node::page("gamma"), ACTIVE_CLASS, true));
        assert!(!doc.set_hidden(&Node::card("alpha", 7), true));
        assert!(!doc.set_label(&Node::CopyButton(String::from("beta")), "Copied!"));
        assert_eq!(doc.text(&Node::card("beta", 3)), None);
        assert!(doc.classes(&Node::Section(String::from("nope"))).is_empty());
    }

    #[test]
    fn submenus_start_closed() {
        let doc = SiteDocument::from_config(&sample_site());
        for slot in NavSlot::all() {
            let products = doc.submenu(slot, "products").unwrap();

            assert_eq!(products.toggle.label(), "Products ▾");
            assert!(!products.menu.has_class("open"));
        }
    }

    #[test]
    fn class_string_puts_base_first() {
        let mut element = Element::default();
        element.set_class("active", true);
        element.set_class("shrink", true);

        assert_eq!(element.class_string("page"), "page active shrink");
        assert_eq!(Element::default().class_string(""), "");
    }
}
