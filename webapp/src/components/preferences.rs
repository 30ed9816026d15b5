use dioxus::prelude::*;
use tracing::warn;

use ::common::port::{Node, UiPort};
use api::prefs::{TextScale, Theme};

use crate::Controller;

// theme selector, text size buttons and the dark mode toggle
#[component]
pub fn PreferenceControls() -> Element {
    let mut controller = use_context::<Signal<Controller>>();

    let (selected, dark_label) = {
        let controller = controller.read();
        let document = controller.port();

        (
            document.text(&Node::ThemeSelector).unwrap_or_default(),
            document.text(&Node::DarkToggle).unwrap_or_default(),
        )
    };

    rsx! {
        div { class: "header-controls",
            select {
                class: "theme-selector",
                value: "{selected}",
                onchange: move |event: FormEvent| match event.value().parse::<Theme>() {
                    Ok(theme) => controller.write().set_theme(theme),
                    Err(err) => warn!("ignoring theme selection: {err}"),
                },
                for theme in Theme::all() {
                    option {
                        key: "{theme.name()}",
                        value: "{theme.name()}",
                        selected: theme.name() == selected,
                        "{theme}"
                    }
                }
            }

            for scale in TextScale::all() {
                button {
                    key: "{scale}",
                    class: "btn btn-sm",
                    title: "{scale}",
                    onclick: move |_| controller.write().set_text_scale(scale),
                    "{scale.label()}"
                }
            }

            button {
                class: "btn btn-sm toggle-dark",
                onclick: move |_| {
                    controller.write().toggle_dark_mode();
                },
                "{dark_label}"
            }
        }
    }
}
