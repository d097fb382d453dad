//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod notification;
pub use notification::{
    use_notifier, Notification, NotificationKind, NotificationProvider, NotificationToast,
    Notifier, NOTIFICATION_TTL,
};

mod state;
pub use state::{
    reload_profiles, use_auth_modal, use_profile_store, use_qr_profile, use_selected_profile,
    use_view, AppStateProvider, AuthModalOpen, ProfileStore, QrProfile, SelectedProfile, View,
};

pub mod capture;
pub mod qr;
pub mod search;

mod profile_card;
pub use profile_card::ProfileCard;

pub mod views;

mod time;
