//! Persistent navigation header: logo, search box, profile chip.

use api::UserProfile;
use dioxus::prelude::*;

/// Top navigation bar, rendered on every view.
///
/// The search box only exists while `search_enabled` is true (the listing
/// view); everywhere else no input is rendered and nothing reaches
/// `on_search`. Each keystroke updates the displayed value and forwards the
/// same string to `on_search` synchronously — no debounce, no trimming.
#[component]
pub fn Header(
    user: Option<UserProfile>,
    search_enabled: bool,
    on_search: EventHandler<String>,
    on_logo_click: EventHandler<()>,
) -> Element {
    let mut search_query = use_signal(String::new);

    rsx! {
        header { class: "header",
            div {
                class: "header-logo",
                onclick: move |_| on_logo_click.call(()),
                span { class: "header-brand",
                    "Twi"
                    span { class: "header-brand-accent", "Tube" }
                }
            }

            if search_enabled {
                form {
                    class: "header-search",
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    input {
                        r#type: "text",
                        placeholder: "Search videos...",
                        value: search_query(),
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            search_query.set(value.clone());
                            on_search.call(value);
                        },
                    }
                }
            }

            if let Some(profile) = user {
                div { class: "header-user",
                    span { "{profile.display_name()}" }
                }
            }
        }
    }
}
