//! Transient notification banner with automatic clearing.
//!
//! One notification is visible at a time. Showing a new one replaces any
//! pending one and restarts the 3-second window; the superseded clear
//! timer becomes a no-op via the generation stamp.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a notification stays visible unless replaced.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Handle for showing notifications from any component.
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: Signal<Option<Notification>>,
    generation: Signal<u64>,
}

impl Notifier {
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message.into(), NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), NotificationKind::Error);
    }

    pub fn current(&self) -> Option<Notification> {
        (self.slot)()
    }

    fn show(&mut self, message: String, kind: NotificationKind) {
        let stamp = (self.generation)() + 1;
        self.generation.set(stamp);
        self.slot.set(Some(Notification { message, kind }));

        let generation = self.generation;
        let mut slot = self.slot;
        spawn(async move {
            crate::time::sleep(NOTIFICATION_TTL).await;
            // A newer notification owns the slot now; let its timer clear it.
            if generation() == stamp {
                slot.set(None);
            }
        });
    }
}

pub fn use_notifier() -> Notifier {
    use_context()
}

/// Provides the [`Notifier`] context. Wrap the app in this component.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let slot = use_signal(|| Option::<Notification>::None);
    let generation = use_signal(|| 0u64);
    use_context_provider(|| Notifier { slot, generation });

    rsx! {
        {children}
    }
}

/// Fixed-position banner in the top-right corner.
#[component]
pub fn NotificationToast() -> Element {
    let notifier = use_notifier();

    match notifier.current() {
        Some(notification) => {
            let class = match notification.kind {
                NotificationKind::Success => "toast toast--success",
                NotificationKind::Error => "toast toast--error",
            };
            rsx! {
                div {
                    class: "{class}",
                    span { "{notification.message}" }
                }
            }
        }
        None => rsx! {},
    }
}
