use dioxus::prelude::*;

use ::common::document::SectionNode;
use api::{ARROW_CLOSED, ARROW_OPEN};

use crate::{Controller, common::clipboard::copy_visible_snippet};

#[derive(Clone, PartialEq, Props)]
struct SectionViewProps {
    section: SectionNode,
}

#[component]
fn SectionView(props: SectionViewProps) -> Element {
    let mut controller = use_context::<Signal<Controller>>();
    let section = props.section;
    let id = section.id.clone();
    let hidden = section.element.is_hidden();
    let arrow = if hidden { ARROW_CLOSED } else { ARROW_OPEN };

    rsx! {
        div { id: "{section.id}", class: "page-section",
            button {
                class: "section-toggle",
                onclick: move |_| {
                    controller.write().toggle_section(&id);
                },
                "{section.title} {arrow}"
            }
            div { class: "section-body", hidden: hidden, p { "{section.body}" } }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PageViewProps {
    id: String,
}

// one switchable page; hidden by the stylesheet unless it carries the active class
#[component]
pub fn PageView(props: PageViewProps) -> Element {
    let controller = use_context::<Signal<Controller>>();

    let Some(page) = controller.read().port().page(&props.id).cloned() else {
        return rsx! {};
    };

    let class = page.element.class_string("page");
    let copy_label = page.copy_button.label().to_owned();

    rsx! {
        div { id: "{page.id}", class: "{class}",
            h1 { class: "page-title", "{page.title}" }

            if !page.body.is_empty() {
                p { class: "page-body", "{page.body}" }
            }

            for section in page.sections.iter() {
                SectionView { key: "{section.id}", section: section.clone() }
            }

            if let Some(snippet) = page.snippet.as_ref() {
                div { class: "snippet-block",
                    pre { class: "snippet",
                        code { "{snippet}" }
                    }
                    button {
                        class: "btn btn-sm btn-primary",
                        onclick: move |_| copy_visible_snippet(controller),
                        "{copy_label}"
                    }
                }
            }

            for (index, source) in page.diagrams.iter().enumerate() {
                div { key: "{index}", class: "mermaid", "{source}" }
            }

            for (index, card) in page.cards.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "text-start",
                    hidden: card.element.is_hidden(),
                    h3 { "{card.title}" }
                    p { "{card.body}" }
                }
            }
        }
    }
}
