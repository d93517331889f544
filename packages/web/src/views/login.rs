//! Login page view with the email/password form.
//!
//! This is where a submit turns into a session: one request through
//! [`api::login`], its outcome delivered to the shared session state as
//! either `session_established` or `session_failed`. The loading flag wraps
//! the request on every path, and the submit button is disabled while it is
//! set so a second submit cannot overlap the first. The inline error lives
//! in a view-local signal so it goes away with the form.

use api::LoginCredentials;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_password = use_signal(|| false);

    // Already logged in: skip the form.
    if session().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            session.write().submit_started();
            match api::login(&LoginCredentials {
                email: e,
                password: p,
            })
            .await
            {
                Ok(profile) => {
                    tracing::info!(user = profile.id, "login succeeded");
                    session.write().session_established(profile);
                    // Credentials are done with; clear them before leaving.
                    email.set(String::new());
                    password.set(String::new());
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!(error = %err, "login failed");
                    let message = err.to_string();
                    session.write().session_failed(message.clone());
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h2 { "Log in to your account" }

                if let Some(message) = error() {
                    p { class: "login-error", "{message}" }
                }

                form { class: "login-form", onsubmit: handle_submit,
                    label { r#for: "email", "Email address" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    div { class: "password-field",
                        input {
                            id: "password",
                            r#type: if show_password() { "text" } else { "password" },
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if !password().is_empty() {
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                onclick: move |_| show_password.toggle(),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "login-submit",
                        disabled: session().loading,
                        if session().loading { "Signing in..." } else { "Log in" }
                    }
                }
            }
        }
    }
}
