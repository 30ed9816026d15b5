use dioxus::prelude::*;

use ::common::{
    config::NavEntry,
    port::{NavLayout, NavSlot, Node, UiPort},
};

use crate::{Controller, common::open_popup};

#[derive(Clone, PartialEq, Props)]
struct NavEntryViewProps {
    slot: NavSlot,
    entry: NavEntry,
}

#[component]
fn NavEntryView(props: NavEntryViewProps) -> Element {
    let mut controller = use_context::<Signal<Controller>>();
    let slot = props.slot;
    let entry = props.entry;

    if let (true, Some(id)) = (entry.is_submenu(), entry.id.clone()) {
        let (label, menu_class) = {
            let controller = controller.read();
            let document = controller.port();

            (
                document
                    .text(&Node::submenu_toggle(slot, &id))
                    .unwrap_or_else(|| entry.label.clone()),
                document
                    .element(&Node::submenu(slot, &id))
                    .map(|element| element.class_string("submenu"))
                    .unwrap_or_else(|| String::from("submenu")),
            )
        };

        return rsx! {
            li {
                button {
                    class: "toggle-submenu",
                    onclick: move |_| {
                        controller.write().toggle_submenu(slot, &id);
                    },
                    "{label}"
                }
                ul { class: "{menu_class}",
                    for child in entry.children {
                        NavEntryView { key: "{child.label}", slot: slot, entry: child.clone() }
                    }
                }
            }
        };
    }

    let label = entry.label;

    match (entry.page, entry.popup) {
        (Some(page), _) => {
            let active = controller.read().active_pages().contains(&page);

            rsx! {
                li {
                    a {
                        class: if active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| {
                            controller.write().show_page(&page);
                        },
                        "{label}"
                    }
                }
            }
        }
        (None, Some(url)) => rsx! {
            li {
                a { class: "nav-link", onclick: move |_| open_popup(&url), "{label} ↗" }
            }
        },
        (None, None) => rsx! {
            li { span { class: "nav-link", "{label}" } }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavSlotViewProps {
    slot: NavSlot,
}

// one mount point for the shared navigation fragment
//
// renders nothing until the controller has installed the fragment
#[component]
pub fn NavSlotView(props: NavSlotViewProps) -> Element {
    let slot = props.slot;
    let controller = use_context::<Signal<Controller>>();

    let Some(menu) = controller.read().port().nav(slot).cloned() else {
        return rsx! {};
    };

    let class = match menu.layout {
        NavLayout::Horizontal => "nav nav-horizontal",
        NavLayout::Vertical => "nav",
    };

    rsx! {
        ul { class: "{class}",
            for entry in menu.entries {
                NavEntryView { key: "{entry.label}", slot: slot, entry: entry.clone() }
            }
        }
    }
}
