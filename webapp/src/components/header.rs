use dioxus::prelude::*;
use tracing::error;

use ::common::port::{NavSlot, Node};

use crate::{
    Controller,
    components::{navigation::NavSlotView, preferences::PreferenceControls, search_bar::SearchBar},
};

// banner, sticky header and the desktop toolbar, all of which shrink once the page scrolls
#[component]
pub fn SiteHeader() -> Element {
    let mut controller = use_context::<Signal<Controller>>();

    // scroll offsets arrive over the eval channel for as long as the header is mounted
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            window.addEventListener("scroll", () => dioxus.send(window.scrollY), { passive: true });
            await new Promise(() => {});
            "#,
        );

        loop {
            match eval.recv::<f64>().await {
                Ok(offset) => controller.write().on_scroll(offset),
                Err(err) => {
                    error!("scroll listener stopped: {err}");
                    break;
                }
            }
        }
    });

    let (banner_class, header_class, toolbar_class, title) = {
        let controller = controller.read();
        let document = controller.port();

        let class_of = |node: Node, base: &str| {
            document
                .element(&node)
                .map(|element| element.class_string(base))
                .unwrap_or_else(|| base.to_owned())
        };

        let title = document
            .page(&controller.settings().home)
            .map(|page| page.title.clone())
            .unwrap_or_default();

        (
            class_of(Node::Banner, "banner-wrapper"),
            class_of(Node::Header, "site-header"),
            class_of(Node::Toolbar, ""),
            title,
        )
    };

    rsx! {
        div { class: "{banner_class}", "Internal documentation" }

        header { class: "{header_class}",
            div { class: "header-row",
                span { class: "site-title", "{title}" }
                SearchBar { placeholder: "Search the guide" }
                PreferenceControls {}
            }

            div { id: "desktop-nav-toolbar", class: "{toolbar_class}",
                nav { id: "main-nav",
                    NavSlotView { slot: NavSlot::Main }
                }
            }
        }
    }
}
