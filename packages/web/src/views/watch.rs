//! Watch page: one video with its channel row and the subscribe toggle.

use dioxus::prelude::*;
use ui::SubscribeButton;

use crate::catalog;

/// Watch page component.
#[component]
pub fn Watch(video_id: String) -> Element {
    let video = catalog::find(&video_id);
    let base_subscribers = video.map(|v| v.subscribers).unwrap_or(0);
    let mut subscribers = use_signal(|| base_subscribers);

    let Some(video) = video else {
        return rsx! {
            main { class: "watch",
                p { class: "watch-missing", "This video is no longer available." }
            }
        };
    };

    rsx! {
        main { class: "watch",
            div { class: "watch-player",
                span { class: "video-duration", "{video.duration}" }
            }
            h2 { "{video.title}" }
            div { class: "watch-channel-row",
                div {
                    p { class: "watch-channel", "{video.channel}" }
                    p { class: "watch-subscribers", "{subscribers()} subscribers" }
                }
                SubscribeButton {
                    on_toggle: move |now: bool| {
                        subscribers.set(if now { base_subscribers + 1 } else { base_subscribers });
                    },
                }
            }
        }
    }
}
