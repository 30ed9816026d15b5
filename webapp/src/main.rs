#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error, info};

mod common;
use crate::common::{diagram::MermaidRenderer, storage::BrowserStore, style};

mod components;
use components::{header::SiteHeader, navigation::NavSlotView, page::PageView};

use ::common::{
    config::SiteConfig,
    document::SiteDocument,
    port::{NavSlot, Node, UiPort},
    view::ViewController,
};

// the site content ships inside the binary, the same way the stylesheet does
const SITE: &str = include_str!("../site.toml");

const MERMAID_SRC: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js";

// the controller lives in a context signal rather than a GlobalSignal, so that every
// component works against the one instance built from the site document
pub type Controller = ViewController<SiteDocument, BrowserStore, MermaidRenderer>;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let site = use_hook(|| match SiteConfig::from_toml(SITE) {
        Ok(site) => Some(site),
        Err(err) => {
            error!("failed to load site document: {err:#}");
            None
        }
    });

    rsx! {
        style { "{style::SITE_STYLES}" }
        document::Script { src: MERMAID_SRC.to_string() }

        match site {
            Some(site) => rsx! {
                Site { site }
            },
            None => rsx! {
                span { "Failed to load site content, see console log" }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SiteProps {
    site: SiteConfig,
}

#[component]
fn Site(props: SiteProps) -> Element {
    let site = props.site;

    let controller = use_context_provider(|| {
        let mut controller = ViewController::new(
            SiteDocument::from_config(&site),
            BrowserStore,
            MermaidRenderer,
            site.view.clone(),
        );

        controller.restore();
        controller.install_navigation(&site.nav);
        controller.show_page(&site.view.home);

        info!("site ready with {} pages", site.pages.len());
        Signal::new(controller)
    });

    // the body classes (theme, dark mode, text scale) sit on the outermost element we own
    let (root_class, page_ids) = {
        let controller = controller.read();
        let document = controller.port();

        (
            document
                .element(&Node::Body)
                .map(|body| body.class_string("site"))
                .unwrap_or_default(),
            document.pages(),
        )
    };

    rsx! {
        div { class: "{root_class}",
            SiteHeader {}

            div { class: "site-layout",
                aside { id: "sidebar-nav", class: "sidebar",
                    NavSlotView { slot: NavSlot::Sidebar }
                }

                main { class: "site-content",
                    for id in page_ids {
                        PageView { key: "{id}", id: id.clone() }
                    }
                }
            }
        }
    }
}
