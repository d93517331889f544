//! Session context and hooks for the UI.

use api::UserProfile;
use dioxus::prelude::*;

/// Session state for the application.
///
/// One instance lives in context for the whole app. It changes through the
/// named mutations below, never by field pokes from components, so every
/// transition site is greppable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Profile of the logged-in user, set by a successful login.
    pub user: Option<UserProfile>,
    /// Whether a login request is in flight. Gates the submit control and
    /// the loading indicator.
    pub loading: bool,
    /// Message from the most recent failed login attempt.
    pub last_error: Option<String>,
}

impl SessionState {
    /// A login request was issued. Loading stays on until one of the two
    /// settlement mutations below runs; both clear it, on every path.
    pub fn submit_started(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    /// The server accepted the credentials and returned a profile.
    pub fn session_established(&mut self, profile: UserProfile) {
        self.user = Some(profile);
        self.loading = false;
        self.last_error = None;
    }

    /// The login attempt settled with a classified failure.
    pub fn session_failed(&mut self, message: String) {
        self.loading = false;
        self.last_error = Some(message);
    }

    /// Read projection: is someone logged in?
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or a login fails.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
