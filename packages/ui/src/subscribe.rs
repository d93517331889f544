//! Channel subscription toggle button.

use dioxus::prelude::*;

use crate::prefs::make_prefs;

/// Subscribe/Unsubscribe button backed by durable storage.
///
/// The state is read from the platform store on first render (a missing or
/// corrupt stored value reads as unsubscribed) and written back as part of
/// every toggle. The optional `on_toggle` handler fires once per click,
/// after the flip has been committed, with the new value — so a misbehaving
/// parent can never roll the toggle back.
#[component]
pub fn SubscribeButton(on_toggle: Option<EventHandler<bool>>) -> Element {
    let mut subscribed = use_signal(|| make_prefs().subscribed());

    let handle_click = move |_| {
        let now = make_prefs().toggle_subscribed();
        subscribed.set(now);
        tracing::debug!(subscribed = now, "subscription preference toggled");
        if let Some(handler) = on_toggle {
            handler.call(now);
        }
    };

    rsx! {
        button {
            class: if subscribed() { "subscribe-btn subscribed" } else { "subscribe-btn" },
            onclick: handle_click,
            if subscribed() {
                "Unsubscribe"
            } else {
                "Subscribe"
            }
        }
    }
}
