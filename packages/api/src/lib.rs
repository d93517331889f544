//! # API crate — backend calls for the TwiTube client
//!
//! Everything the frontends need to talk to the backend lives here, with no
//! Dioxus dependency so it stays unit-testable on the host.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`classify`] | Maps HTTP outcomes to user-facing success/failure categories |
//! | [`config`] | Backend base URL, resolved at compile time |
//! | [`models`] | Wire types: [`LoginCredentials`], [`UserProfile`] |
//!
//! The one network operation exposed here is [`login`]: a single POST with
//! the viewer's credentials, cookies included so the server can set the
//! session cookie on success.

use crate::classify::interpret_response;

pub mod classify;
pub mod config;
pub mod models;

pub use classify::LoginError;
pub use models::{LoginCredentials, UserProfile};

/// Log the viewer in.
///
/// Issues exactly one `POST {base}/api/v1/users/login` with a JSON body and
/// hands the settled response to the classifier. No retries and no
/// cancellation; a transport failure before any response arrives surfaces
/// as [`LoginError::Network`].
pub async fn login(credentials: &LoginCredentials) -> Result<UserProfile, LoginError> {
    let request = reqwest::Client::new()
        .post(config::login_url())
        .json(credentials);

    // On the web the browser only attaches (and stores) the session cookie
    // when the fetch opts into credentials.
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();

    let response = request.send().await.map_err(|err| {
        tracing::error!(error = %err, "login request failed before a response");
        LoginError::Network(err.to_string())
    })?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response
        .text()
        .await
        .map_err(|err| LoginError::Network(err.to_string()))?;

    interpret_response(status, content_type.as_deref(), &body)
}
