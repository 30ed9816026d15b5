use anyhow::Result;

use api::diagram::DiagramStyle;

use crate::config::NavEntry;

// the addressable parts of the page that the controller touches
//
// this is the typed equivalent of the fixed ids and classes that the stylesheet expects; the
// controller never reaches for anything that isn't listed here
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Body,
    Banner,
    Header,
    Toolbar,
    // every dark mode toggle button, which always share a label
    DarkToggle,
    // every theme selector; the label is the selected value
    ThemeSelector,
    Page(String),
    Card { page: String, index: usize },
    Section(String),
    // each nav slot carries its own copy of every submenu
    Submenu { slot: NavSlot, id: String },
    SubmenuToggle { slot: NavSlot, id: String },
    Snippet(String),
    CopyButton(String),
}

impl Node {
    pub fn page(id: &str) -> Self {
        Node::Page(id.to_owned())
    }

    pub fn card(page: &str, index: usize) -> Self {
        Node::Card {
            page: page.to_owned(),
            index,
        }
    }

    pub fn submenu(slot: NavSlot, id: &str) -> Self {
        Node::Submenu {
            slot,
            id: id.to_owned(),
        }
    }

    pub fn submenu_toggle(slot: NavSlot, id: &str) -> Self {
        Node::SubmenuToggle {
            slot,
            id: id.to_owned(),
        }
    }
}

// the two places the shared navigation fragment is mounted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavSlot {
    Main,
    Sidebar,
}

impl NavSlot {
    pub fn all() -> [NavSlot; 2] {
        [NavSlot::Main, NavSlot::Sidebar]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavLayout {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavMenu {
    pub layout: NavLayout,
    pub entries: Vec<NavEntry>,
}

// ui port
//
// all reads and writes of visible state go through here, so that the switching and filtering
// logic can run against an in-memory document in tests (and in the cli) as well as the
// browser.  writes return false when the node does not exist instead of failing, since
// there is never anyone to report the error to
pub trait UiPort {
    // page ids in document order
    fn pages(&self) -> Vec<String>;

    fn card_count(&self, page: &str) -> usize;

    fn exists(&self, node: &Node) -> bool;

    // the rendered text of a node, i.e. what a reader would see (and search)
    fn text(&self, node: &Node) -> Option<String>;

    fn classes(&self, node: &Node) -> Vec<String>;

    fn has_class(&self, node: &Node, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    fn set_class(&mut self, node: &Node, class: &str, on: bool) -> bool;

    fn is_hidden(&self, node: &Node) -> bool;

    fn set_hidden(&mut self, node: &Node, hidden: bool) -> bool;

    fn set_label(&mut self, node: &Node, label: &str) -> bool;

    fn set_nav(&mut self, slot: NavSlot, menu: NavMenu);
}

// key-value persistence for the preference set
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

// the external diagram library, treated as an opaque capability
pub trait DiagramRenderer {
    fn render(&mut self, page: &str, style: &DiagramStyle);
}
