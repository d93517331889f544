//! Backend endpoint configuration.
//!
//! The base URL is baked in at compile time from `TWITUBE_BACKEND_URL`
//! (e.g. `https://api.twitube.example`). When unset it defaults to the
//! empty string, which makes every request same-origin — the right thing
//! when the client is served behind the same host as the API.

/// Base URL of the backend API, without a trailing slash.
pub fn backend_base_url() -> &'static str {
    option_env!("TWITUBE_BACKEND_URL").unwrap_or("")
}

/// Full URL of the login endpoint.
pub fn login_url() -> String {
    format!("{}/api/v1/users/login", backend_base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_has_versioned_path() {
        assert!(login_url().ends_with("/api/v1/users/login"));
    }
}
