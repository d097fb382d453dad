//! Sign-in / sign-out modal.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::notification::use_notifier;

use super::ModalOverlay;

#[component]
pub fn AuthModal(on_close: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut notifier = use_notifier();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let address = email().trim().to_string();
            if address.is_empty() || !address.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if password().len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }

            auth.set(AuthState {
                user: auth().user,
                busy: true,
            });
            match api::client().sign_in(&address, &password()).await {
                Ok(session) => {
                    auth.set(AuthState {
                        user: Some(session.user),
                        busy: false,
                    });
                    notifier.success("Signed in");
                    on_close.call(());
                }
                Err(e) => {
                    auth.set(AuthState {
                        user: None,
                        busy: false,
                    });
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let handle_sign_out = move |_| {
        spawn(async move {
            auth.set(AuthState {
                user: auth().user,
                busy: true,
            });
            if let Err(e) = api::client().sign_out().await {
                tracing::error!("sign out: {e}");
            }
            auth.set(AuthState::default());
            notifier.success("Signed out");
            on_close.call(());
        });
    };

    let state = auth();

    rsx! {
        ModalOverlay {
            on_close,
            div {
                class: "auth-modal",
                if let Some(user) = state.user.as_ref() {
                    h2 { "Account" }
                    p {
                        class: "auth-modal__email",
                        {user.email.clone().unwrap_or_else(|| user.id.clone())}
                    }
                    button {
                        class: "button button--outline",
                        disabled: state.busy,
                        onclick: handle_sign_out,
                        if state.busy { "Signing out..." } else { "Sign out" }
                    }
                } else {
                    h2 { "Sign In" }
                    form {
                        onsubmit: handle_sign_in,
                        class: "auth-modal__form",

                        if let Some(message) = error() {
                            div { class: "auth-modal__error", "{message}" }
                        }

                        input {
                            r#type: "email",
                            placeholder: "Email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password (min 6 characters)",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary",
                            disabled: state.busy,
                            if state.busy { "Signing in..." } else { "Sign in" }
                        }
                    }
                    p {
                        class: "auth-modal__hint",
                        "No account yet? Create one while registering a plate."
                    }
                }
            }
        }
    }
}
