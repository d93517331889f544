use dioxus::prelude::*;

use ui::{use_session, Header, SessionProvider};
use views::{Home, Login, Watch};

mod catalog;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/watch/:video_id")]
    Watch { video_id: String },
}

/// Live search text, provided by [`Shell`] and consumed by the listing view.
#[derive(Debug, Clone, Default, PartialEq)]
struct SearchQuery(String);

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Whether the header's search box is active on this route.
/// Search only exists on the listing view; everywhere else the input is not
/// rendered at all.
fn search_active(route: &Route) -> bool {
    matches!(route, Route::Home {})
}

/// Whether the header shows the logged-in user's chip on this route.
fn profile_visible(route: &Route) -> bool {
    !matches!(route, Route::Root {} | Route::Login {})
}

/// Layout wrapping every view: the persistent header plus the routed body.
///
/// Owns the search-query signal the header feeds; the listing view reads it
/// from context. Keystrokes land here synchronously, unbuffered.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let session = use_session();
    let mut search_query = use_context_provider(|| Signal::new(SearchQuery::default()));

    rsx! {
        Header {
            user: if profile_visible(&route) { session().user } else { None },
            search_enabled: search_active(&route),
            on_search: move |value: String| search_query.set(SearchQuery(value)),
            on_logo_click: move |_| { nav.push(Route::Home {}); },
        }
        Outlet::<Route> {}
    }
}

/// Redirect `/` by session state: home when logged in, login otherwise.
#[component]
fn Root() -> Element {
    let session = use_session();
    let nav = use_navigator();
    if session().is_authenticated() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_only_active_on_home() {
        assert!(search_active(&Route::Home {}));
        assert!(!search_active(&Route::Root {}));
        assert!(!search_active(&Route::Login {}));
        assert!(!search_active(&Route::Watch {
            video_id: "v1".to_string()
        }));
    }

    #[test]
    fn test_profile_hidden_on_entry_routes() {
        assert!(!profile_visible(&Route::Root {}));
        assert!(!profile_visible(&Route::Login {}));
        assert!(profile_visible(&Route::Home {}));
        assert!(profile_visible(&Route::Watch {
            video_id: "v1".to_string()
        }));
    }
}
