use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result, bail, ensure};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::prefs::Theme;

use crate::NODE_ID_REGEX;

// site configuration
//
// this is the whole site in one document: presentation settings for the controller, the
// shared navigation fragment, and the page content itself
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    pub pages: Vec<PageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ViewSettings {
    // the page shown on load and whenever the search box is cleared
    pub home: String,
    // applied when nothing (or garbage) was persisted
    pub default_theme: Theme,
    pub scroll: ScrollThresholds,
    pub copy: CopyFeedback,
    pub diagram: DiagramFont,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            home: String::from("home"),
            default_theme: Theme::default(),
            scroll: ScrollThresholds::default(),
            copy: CopyFeedback::default(),
            diagram: DiagramFont::default(),
        }
    }
}

// scroll offsets (in css pixels) for the header collapse
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollThresholds {
    pub collapse_above: f64,
    pub expand_below: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        ScrollThresholds {
            collapse_above: 1.0,
            expand_below: 1.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CopyFeedback {
    pub idle_label: String,
    pub copied_label: String,
    pub revert_ms: u32,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        CopyFeedback {
            idle_label: String::from("Copy"),
            copied_label: String::from("Copied!"),
            revert_ms: 1500,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DiagramFont {
    pub font_size: String,
    pub font_family: String,
}

impl Default for DiagramFont {
    fn default() -> Self {
        DiagramFont {
            font_size: String::from("22px"),
            font_family: String::from("Segoe UI, sans-serif"),
        }
    }
}

// one entry of the shared navigation fragment
//
// exactly one of page, popup or children should be set; entries with children are submenus
// and need an id so that their open/closed state can be addressed
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavEntry {
    pub label: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub popup: Option<String>,
    #[serde(default)]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    pub fn is_submenu(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PageContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
    #[serde(default)]
    pub cards: Vec<CardContent>,
    #[serde(default)]
    pub snippet: Option<String>,
    // diagram sources, handed to the renderer untouched
    #[serde(default)]
    pub diagrams: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CardContent {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SectionContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub collapsed: bool,
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(doc).context("failed to parse site document")?;

        config.validate()?;

        Ok(config)
    }

    pub fn page(&self, id: &str) -> Option<&PageContent> {
        self.pages.iter().find(|page| page.id == id)
    }

    // structural checks that serde can't express
    pub fn validate(&self) -> Result<()> {
        let id_regex = Regex::new(NODE_ID_REGEX)?;

        ensure!(!self.pages.is_empty(), "site has no pages");

        let mut page_ids = HashSet::new();
        let mut section_ids = HashSet::new();

        for page in &self.pages {
            ensure!(id_regex.is_match(&page.id), "invalid page id {:?}", page.id);
            ensure!(page_ids.insert(page.id.as_str()), "duplicate page id {}", page.id);

            for section in &page.sections {
                ensure!(id_regex.is_match(&section.id), "invalid section id {:?}", section.id);
                ensure!(
                    section_ids.insert(section.id.as_str()),
                    "duplicate section id {}",
                    section.id
                );
            }
        }

        ensure!(
            page_ids.contains(self.view.home.as_str()),
            "home page {} does not exist",
            self.view.home
        );

        ensure!(
            self.view.scroll.expand_below <= self.view.scroll.collapse_above,
            "scroll expand threshold is above the collapse threshold"
        );

        let mut submenu_ids = HashSet::new();
        validate_nav(&self.nav, &page_ids, &mut submenu_ids, &id_regex)?;

        Ok(())
    }
}

fn validate_nav<'a>(
    entries: &'a [NavEntry],
    page_ids: &HashSet<&str>,
    submenu_ids: &mut HashSet<&'a str>,
    id_regex: &Regex,
) -> Result<()> {
    for entry in entries {
        let targets = [entry.page.is_some(), entry.popup.is_some(), entry.is_submenu()]
            .into_iter()
            .filter(|set| *set)
            .count();

        if targets != 1 {
            bail!("nav entry {} needs exactly one of page, popup or children", entry.label);
        }

        if let Some(page) = &entry.page {
            ensure!(
                page_ids.contains(page.as_str()),
                "nav entry {} points at missing page {page}",
                entry.label
            );
        }

        if entry.is_submenu() {
            let id = entry
                .id
                .as_deref()
                .with_context(|| format!("submenu {} has no id", entry.label))?;

            ensure!(id_regex.is_match(id), "invalid submenu id {id:?}");
            ensure!(submenu_ids.insert(id), "duplicate submenu id {id}");

            validate_nav(&entry.children, page_ids, submenu_ids, id_regex)?;
        }
    }

    Ok(())
}

#[instrument(level=Level::DEBUG)]
pub fn read_site(filename: &Path) -> Result<SiteConfig> {
    debug!("reading site document");

    let doc = std::fs::read_to_string(filename)
        .with_context(|| format!("failed to read {}", filename.display()))?;

    let site = SiteConfig::from_toml(&doc)?;

    debug!({ pages = site.pages.len() }, "successfully parsed site document");
    Ok(site)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // the three-page site used throughout the controller tests
    pub(crate) const SAMPLE_SITE: &str = r#"
[view]
home = "home"

[[nav]]
label = "Home"
page = "home"

[[nav]]
label = "Products"
id = "products"
children = [
    { label = "Alpha", page = "alpha" },
    { label = "Beta", page = "beta" },
]

[[nav]]
label = "Status"
popup = "https://status.example.org"

[[pages]]
id = "home"
title = "Welcome"
body = "Start here."

[[pages]]
id = "alpha"
title = "Alpha Widget"
snippet = "alpha --install"
diagrams = ["graph TD; A-->B"]

[[pages.sections]]
id = "alpha-notes"
title = "Notes"
body = "Release notes."

[[pages.cards]]
title = "Sprockets"
body = "Widget sprockets and gears."

[[pages.cards]]
title = "Levers"
body = "Plain levers."

[[pages]]
id = "beta"
title = "Beta Tool"

[[pages.cards]]
title = "Hammers"
body = "A tool for nails."
"#;

    pub(crate) fn sample_site() -> SiteConfig {
        SiteConfig::from_toml(SAMPLE_SITE).unwrap()
    }

    #[test]
    fn parses_sample_site_with_defaults() {
        let site = sample_site();

        assert_eq!(site.pages.len(), 3);
        assert_eq!(site.view.home, "home");
        assert_eq!(site.view.default_theme, Theme::Blue);
        assert_eq!(site.view.copy.revert_ms, 1500);
        assert_eq!(site.view.diagram.font_size, "22px");
        assert_eq!(site.page("alpha").unwrap().cards.len(), 2);
        assert!(site.nav[1].is_submenu());
    }

    #[test]
    fn shipped_site_document_is_valid() {
        let site = SiteConfig::from_toml(include_str!("../../webapp/site.toml")).unwrap();

        assert_eq!(site.view.home, "home");
        assert!(site.page("deployment").unwrap().sections[0].collapsed);
    }

    #[test]
    fn view_table_is_optional() {
        let site = SiteConfig::from_toml(
            r#"
[[pages]]
id = "home"
title = "Only page"
"#,
        )
        .unwrap();

        assert_eq!(site.view, ViewSettings::default());
    }

    #[test]
    fn rejects_missing_home() {
        let err = SiteConfig::from_toml(
            r#"
[view]
home = "index"

[[pages]]
id = "home"
title = "Home"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("home page index"));
    }

    #[test]
    fn rejects_duplicate_pages() {
        let err = SiteConfig::from_toml(
            r#"
[[pages]]
id = "home"
title = "One"

[[pages]]
id = "home"
title = "Two"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("duplicate page id"));
    }

    #[test]
    fn rejects_bad_nav() {
        let mut site = sample_site();
        site.nav[0].page = Some(String::from("nowhere"));
        assert!(site.validate().is_err());

        let mut site = sample_site();
        site.nav[1].id = None;
        assert!(site.validate().is_err());

        let mut site = sample_site();
        site.nav[2].page = Some(String::from("home"));
        assert!(site.validate().is_err());
    }

    #[test]
    fn rejects_selector_unsafe_ids() {
        let mut site = sample_site();
        site.pages[1].id = String::from("alpha widget");
        assert!(site.validate().is_err());
    }
}
