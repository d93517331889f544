//! Home listing view: the video grid, filtered live by the header's search.

use dioxus::prelude::*;

use crate::catalog::{self, Video};
use crate::{Route, SearchQuery};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let search_query = use_context::<Signal<SearchQuery>>();
    let needle = search_query().0.to_lowercase();

    let videos: Vec<&'static Video> = catalog::CATALOG
        .iter()
        .filter(|video| needle.is_empty() || video.title.to_lowercase().contains(&needle))
        .collect();

    rsx! {
        main { class: "home",
            if videos.is_empty() {
                p { class: "home-empty", "No videos match your search." }
            }
            div { class: "video-grid",
                for video in videos {
                    Link {
                        class: "video-card",
                        to: Route::Watch { video_id: video.id.to_string() },
                        div { class: "video-thumb",
                            span { class: "video-duration", "{video.duration}" }
                        }
                        h3 { "{video.title}" }
                        p { class: "video-channel", "{video.channel}" }
                    }
                }
            }
        }
    }
}
