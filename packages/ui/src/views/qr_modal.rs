use api::Profile;
use dioxus::prelude::*;

use crate::qr::{download_filename, pattern_data_uri, QrPattern};

use super::ModalOverlay;

/// Displays the decorative QR tag for a profile's alias, with a download
/// link. Profiles without an alias never reach this modal.
#[component]
pub fn QrModal(profile: Profile, on_close: EventHandler<()>) -> Element {
    let alias = profile.alias.clone().unwrap_or_else(|| profile.id.clone());
    let pattern = QrPattern::derive(&alias);
    let data_uri = pattern_data_uri(&pattern);
    let filename = download_filename(&alias);

    rsx! {
        ModalOverlay {
            on_close,
            div {
                class: "qr-modal",
                h2 { "QR Tag" }
                p { class: "qr-modal__alias", "{alias}" }
                img {
                    class: "qr-modal__image",
                    src: "{data_uri}",
                    alt: "Tag for {alias}",
                }
                p { class: "qr-modal__hint", "Scan-a-like tag for sharing this profile." }
                div {
                    class: "qr-modal__actions",
                    a {
                        class: "button button--primary",
                        href: "{data_uri}",
                        download: "{filename}",
                        "Download"
                    }
                    button {
                        class: "button button--outline",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
