use dioxus::prelude::*;

use crate::Controller;

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    placeholder: &'static str,
}

// live search: every keystroke re-filters the pages
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut controller = use_context::<Signal<Controller>>();
    let placeholder = props.placeholder;
    let query = controller.read().query().to_owned();

    rsx! {
        div { class: "search-bar",
            input {
                class: "form-input",
                name: "search_filter",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |event: FormEvent| {
                    controller.write().search(&event.value());
                },
            }

            if !query.is_empty() {
                button {
                    class: "btn btn-sm",
                    onclick: move |_| {
                        controller.write().search("");
                    },
                    "Clear"
                }
            }
        }
    }
}
