use api::Profile;
use dioxus::prelude::*;

use super::ModalOverlay;

/// Read-only detail card for a single profile.
#[component]
pub fn ProfileDetailModal(profile: Profile, on_close: EventHandler<()>) -> Element {
    let date = profile.display_date();

    rsx! {
        ModalOverlay {
            on_close,
            div {
                class: "profile-detail",
                div {
                    class: "profile-detail__header",
                    h2 { "Profile" }
                    button {
                        class: "profile-detail__close",
                        onclick: move |_| on_close.call(()),
                        "x"
                    }
                }

                div {
                    class: "profile-detail__plate",
                    span { "{profile.plate_number}" }
                }
                div {
                    class: "profile-detail__state",
                    span { "{profile.state}" }
                }
                div {
                    class: "profile-detail__owner",
                    span { "{profile.first_name}" }
                }
                if !date.is_empty() {
                    p { class: "profile-detail__date", "Added on {date}" }
                }

                if let Some(description) = profile.description.as_ref() {
                    div {
                        class: "profile-detail__story",
                        h3 { "About this plate:" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}
