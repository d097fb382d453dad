//! Authentication context for the UI.
//!
//! The shim owns the session; this signal mirrors just enough of it for
//! rendering (who is signed in, whether an auth call is in flight).

use api::AuthUser;
use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// A sign-in, sign-up, or sign-out request is in flight.
    pub busy: bool,
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context()
}

/// Provider component that manages authentication state.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Sessions are not persisted across runs, but the shim is the source of
    // truth: mirror whatever it holds on mount.
    let _ = use_resource(move || async move {
        let user = api::client().current_user().await;
        if auth_state().user != user {
            auth_state.set(AuthState { user, busy: false });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
