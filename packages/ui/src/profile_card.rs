use api::Profile;
use dioxus::prelude::*;

use crate::state::{use_qr_profile, use_selected_profile, QrProfile, SelectedProfile};

/// Summary card for one profile. Clicking the card opens the detail modal;
/// the tag button opens the QR modal instead.
#[component]
pub fn ProfileCard(profile: Profile) -> Element {
    let SelectedProfile(mut selected) = use_selected_profile();
    let QrProfile(mut qr) = use_qr_profile();

    let detail = profile.clone();
    let tagged = profile.clone();
    let date = profile.display_date();

    rsx! {
        div {
            class: "profile-card",
            onclick: move |_| selected.set(Some(detail.clone())),

            div {
                class: "profile-card__header",
                span { class: "profile-card__plate", "{profile.plate_number}" }
                span { class: "profile-card__state", "{profile.state}" }
                span { class: "profile-card__date", "{date}" }
            }

            div { class: "profile-card__owner", "{profile.first_name}" }

            if let Some(description) = profile.description.as_ref() {
                p { class: "profile-card__description", "{description}" }
            }

            if let Some(alias) = profile.alias.as_ref() {
                button {
                    class: "profile-card__qr",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        qr.set(Some(tagged.clone()));
                    },
                    "QR tag {alias}"
                }
            }
        }
    }
}
