//! Search pane: query input, simulated camera/upload capture, result list.

use api::Profile;
use dioxus::prelude::*;

use crate::capture::{
    pick_simulated_plate, probe_camera, CAMERA_SCAN_DELAY, UPLOAD_SCAN_DELAY,
};
use crate::notification::use_notifier;
use crate::search::filter_profiles;
use crate::state::use_profile_store;
use crate::ProfileCard;

#[component]
pub fn SearchView() -> Element {
    let store = use_profile_store();
    let mut notifier = use_notifier();

    let mut query = use_signal(String::new);
    let mut scanning = use_signal(|| false);
    let mut camera_open = use_signal(|| false);
    // Set once after a denied permission probe; the button stays off for
    // the rest of the session.
    let mut camera_disabled = use_signal(|| false);

    let toggle_camera = move |_| {
        if camera_disabled() {
            return;
        }
        if camera_open() {
            camera_open.set(false);
            return;
        }
        spawn(async move {
            if probe_camera().await {
                camera_open.set(true);
            } else {
                camera_disabled.set(true);
                notifier.error("Camera access denied or not available");
            }
        });
    };

    let capture_photo = move |_| {
        let plate = pick_simulated_plate(&store.read().profiles, &mut rand::thread_rng());
        scanning.set(true);
        spawn(async move {
            crate::time::sleep(CAMERA_SCAN_DELAY).await;
            query.set(plate);
            camera_open.set(false);
            scanning.set(false);
        });
    };

    let upload_photo = move |_| {
        let plate = pick_simulated_plate(&store.read().profiles, &mut rand::thread_rng());
        scanning.set(true);
        spawn(async move {
            crate::time::sleep(UPLOAD_SCAN_DELAY).await;
            query.set(plate);
            scanning.set(false);
        });
    };

    let state = store.read();
    if state.loading {
        return rsx! {
            div { class: "loading",
                div { class: "loading__spinner" }
                p { "Loading profiles..." }
            }
        };
    }

    let results: Vec<Profile> = filter_profiles(&state.profiles, &query())
        .into_iter()
        .cloned()
        .collect();
    let total = state.profiles.len();
    let searching = !query().trim().is_empty();

    rsx! {
        div {
            class: "search-view",

            div {
                class: "search-box",
                h2 { "Find a Profile" }

                div {
                    class: "search-box__row",
                    input {
                        class: "search-box__input",
                        r#type: "text",
                        placeholder: "Plate, alias, name, or story...",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }

                div {
                    class: "search-box__row",
                    button {
                        class: "button button--camera",
                        disabled: camera_disabled() || scanning(),
                        onclick: toggle_camera,
                        if camera_open() { "Stop Camera" } else { "Use Camera" }
                    }
                    button {
                        class: "button button--upload",
                        disabled: scanning(),
                        onclick: upload_photo,
                        if scanning() { "Scanning..." } else { "Upload Photo" }
                    }
                }
            }

            if camera_open() {
                div {
                    class: "camera-pane",
                    p { "Point the camera at a plate and capture." }
                    button {
                        class: "button button--primary",
                        disabled: scanning(),
                        onclick: capture_photo,
                        if scanning() { "Scanning..." } else { "Capture & Analyze" }
                    }
                }
            }

            if searching {
                if results.is_empty() {
                    div {
                        class: "empty-state",
                        p { "No profiles found matching \"{query}\"" }
                    }
                } else {
                    h3 { class: "search-view__heading", "Search Results" }
                    for profile in results {
                        ProfileCard { key: "{profile.id}", profile }
                    }
                }
            } else {
                h3 { class: "search-view__heading", "All Registered Profiles ({total})" }
                if total == 0 {
                    div {
                        class: "empty-state",
                        p { "No profiles registered yet. Be the first to add one!" }
                    }
                } else {
                    for profile in results {
                        ProfileCard { key: "{profile.id}", profile }
                    }
                }
            }
        }
    }
}
