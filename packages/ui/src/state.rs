//! Application state contexts: the loaded profile list, the top-level view
//! toggle, and the three independent modal slots.

use api::Profile;
use dioxus::prelude::*;

use crate::notification::use_notifier;

/// Which top-level pane is showing. The only view-level state machine in
/// the app; modal visibility is tracked separately and independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Search,
    Register,
}

/// The in-memory copy of the remote `profiles` table.
#[derive(Clone, Debug, Default)]
pub struct ProfileStore {
    pub profiles: Vec<Profile>,
    pub loading: bool,
}

/// Profile shown in the detail modal, if any.
#[derive(Clone, Copy)]
pub struct SelectedProfile(pub Signal<Option<Profile>>);

/// Profile whose QR tag is being displayed, if any.
#[derive(Clone, Copy)]
pub struct QrProfile(pub Signal<Option<Profile>>);

/// Whether the sign-in/sign-out modal is open.
#[derive(Clone, Copy)]
pub struct AuthModalOpen(pub Signal<bool>);

pub fn use_profile_store() -> Signal<ProfileStore> {
    use_context()
}

pub fn use_view() -> Signal<View> {
    use_context()
}

pub fn use_selected_profile() -> SelectedProfile {
    use_context()
}

pub fn use_qr_profile() -> QrProfile {
    use_context()
}

pub fn use_auth_modal() -> AuthModalOpen {
    use_context()
}

/// Replace the in-memory list with a fresh full-table read. Returns whether
/// the reload succeeded; the caller decides how loudly to report failure.
pub async fn reload_profiles(mut store: Signal<ProfileStore>) -> bool {
    store.write().loading = true;
    let result = api::client().list_profiles().await;
    let mut state = store.write();
    state.loading = false;
    match result {
        Ok(profiles) => {
            state.profiles = profiles;
            true
        }
        Err(e) => {
            tracing::error!("failed to load profiles: {e}");
            false
        }
    }
}

/// Provides the profile store, view toggle, and modal contexts, and kicks
/// off the initial table load.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let store = use_context_provider(|| {
        Signal::new(ProfileStore {
            profiles: Vec::new(),
            loading: true,
        })
    });
    use_context_provider(|| Signal::new(View::default()));
    use_context_provider(|| SelectedProfile(Signal::new(None)));
    use_context_provider(|| QrProfile(Signal::new(None)));
    use_context_provider(|| AuthModalOpen(Signal::new(false)));

    let mut notifier = use_notifier();
    let _loader = use_resource(move || async move {
        if !reload_profiles(store).await {
            notifier.error("Failed to load profiles");
        }
    });

    rsx! {
        {children}
    }
}
