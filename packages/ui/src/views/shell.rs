//! Top-level layout: header, view toggle, active pane, toast, and the
//! three independent modal overlays.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::notification::NotificationToast;
use crate::state::{
    use_auth_modal, use_qr_profile, use_selected_profile, use_view, AuthModalOpen, QrProfile,
    SelectedProfile, View,
};

use super::{AuthModal, ProfileDetailModal, QrModal, RegisterView, SearchView};

#[component]
pub fn AppShell() -> Element {
    let mut view = use_view();
    let auth = use_auth();
    let SelectedProfile(mut selected) = use_selected_profile();
    let QrProfile(mut qr) = use_qr_profile();
    let AuthModalOpen(mut auth_open) = use_auth_modal();

    let account_label = auth()
        .user
        .as_ref()
        .map(|u| u.email.clone().unwrap_or_else(|| "Account".to_string()))
        .unwrap_or_else(|| "Sign in".to_string());

    let nav_class = |active: bool| {
        if active {
            "nav-toggle__button nav-toggle__button--active"
        } else {
            "nav-toggle__button"
        }
    };

    let active_view = match view() {
        View::Search => rsx! { SearchView {} },
        View::Register => rsx! { RegisterView {} },
    };

    rsx! {
        div {
            class: "app",

            NotificationToast {}

            header {
                class: "app__header",
                div {
                    h1 { "CarConnect" }
                    p { class: "app__tagline", "Discover the stories behind license plates" }
                }
                button {
                    class: "app__account",
                    onclick: move |_| auth_open.set(true),
                    "{account_label}"
                }
            }

            nav {
                class: "nav-toggle",
                button {
                    class: nav_class(view() == View::Search),
                    onclick: move |_| view.set(View::Search),
                    "Search"
                }
                button {
                    class: nav_class(view() == View::Register),
                    onclick: move |_| view.set(View::Register),
                    "Register"
                }
            }

            main {
                class: "app__main",
                {active_view}
            }

            if let Some(profile) = selected() {
                ProfileDetailModal {
                    profile,
                    on_close: move |_| selected.set(None),
                }
            }

            if let Some(profile) = qr() {
                QrModal {
                    profile,
                    on_close: move |_| qr.set(None),
                }
            }

            if auth_open() {
                AuthModal {
                    on_close: move |_| auth_open.set(false),
                }
            }
        }
    }
}
