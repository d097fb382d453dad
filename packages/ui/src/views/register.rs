//! Registration pane: profile fields, optional alias, optional account
//! creation. All validation happens locally before any network call.

use api::{ApiError, NewProfile};
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::notification::use_notifier;
use crate::state::{reload_profiles, use_profile_store};

#[component]
pub fn RegisterView() -> Element {
    let profile_store = use_profile_store();
    let mut auth = use_auth();
    let mut notifier = use_notifier();

    let mut plate_number = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut state_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut alias = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let signed_in = auth().user.is_some();

    let generate_alias = move |_| {
        let generated = api::unique_alias(&profile_store.read().profiles, &mut rand::thread_rng());
        alias.set(generated);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let plate = plate_number().trim().to_string();
            let name = first_name().trim().to_string();
            let state = state_name();
            if plate.is_empty() || name.is_empty() || state.is_empty() {
                notifier.error("Please fill in the plate number, first name, and state");
                return;
            }

            let alias_input = alias().trim().to_uppercase();
            let alias_value = if alias_input.is_empty() {
                None
            } else if api::is_valid_alias(&alias_input) {
                Some(alias_input)
            } else {
                notifier.error("Alias must be 1-10 letters or digits");
                return;
            };

            let email_value = email().trim().to_string();
            let create_account = auth().user.is_none() && !email_value.is_empty();
            if create_account {
                if !email_value.contains('@') {
                    notifier.error("Please enter a valid email");
                    return;
                }
                if password().len() < 6 {
                    notifier.error("Password must be at least 6 characters");
                    return;
                }
            }

            let Some(plate_id) = api::plate_profile_id(&state, &plate) else {
                notifier.error("Please select a valid state");
                return;
            };
            let record = NewProfile {
                // An alias doubles as the identifier when present.
                id: alias_value.clone().unwrap_or(plate_id),
                plate_number: plate.to_uppercase(),
                first_name: name,
                state,
                description: {
                    let text = description().trim().to_string();
                    (!text.is_empty()).then_some(text)
                },
                alias: alias_value,
            };

            saving.set(true);
            let result = if create_account {
                api::client()
                    .register_account(&email_value, &password(), &record)
                    .await
                    .map(|(_, profile)| profile)
            } else {
                api::client().create_profile(&record).await
            };
            saving.set(false);

            // Sign-up may have succeeded even when the insert did not.
            if create_account {
                let user = api::client().current_user().await;
                if user.is_some() {
                    auth.set(AuthState { user, busy: false });
                }
            }

            match result {
                Ok(_) => {
                    reload_profiles(profile_store).await;
                    plate_number.set(String::new());
                    first_name.set(String::new());
                    state_name.set(String::new());
                    description.set(String::new());
                    alias.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    notifier.success("Tagged Successfully!");
                }
                Err(ApiError::ProfileIncomplete(reason)) => {
                    tracing::error!("profile insert failed after sign-up: {reason}");
                    notifier.error("Account created, but the profile was not saved. Please submit it again.");
                }
                Err(e) if e.is_email_taken() => {
                    notifier.error("This email is already registered.");
                }
                Err(e) if e.is_duplicate() => {
                    notifier.error("This plate has already been added.");
                }
                Err(e) => {
                    tracing::error!("failed to save profile: {e}");
                    notifier.error("Failed to save tag.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "register-view",
            h2 { "Register Your Plate" }

            form {
                onsubmit: handle_submit,
                class: "register-form",

                div {
                    class: "register-form__field",
                    label { r#for: "plate-number", "License Plate Number *" }
                    input {
                        id: "plate-number",
                        r#type: "text",
                        placeholder: "e.g., MYPLATE",
                        value: plate_number(),
                        oninput: move |evt: FormEvent| plate_number.set(evt.value().to_uppercase()),
                    }
                }

                div {
                    class: "register-form__field",
                    label { r#for: "first-name", "First Name *" }
                    input {
                        id: "first-name",
                        r#type: "text",
                        placeholder: "Your first name",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }

                div {
                    class: "register-form__field",
                    label { r#for: "state", "State *" }
                    select {
                        id: "state",
                        value: state_name(),
                        onchange: move |evt| state_name.set(evt.value()),
                        option { value: "", "Select your state" }
                        for (name, _) in api::US_STATES {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }

                div {
                    class: "register-form__field",
                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        rows: 4,
                        placeholder: "What's the story behind this plate?",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }

                div {
                    class: "register-form__field",
                    label { r#for: "alias", "QR Alias (optional)" }
                    div {
                        class: "register-form__alias-row",
                        input {
                            id: "alias",
                            r#type: "text",
                            placeholder: "1-10 letters or digits",
                            maxlength: 10,
                            value: alias(),
                            oninput: move |evt: FormEvent| alias.set(evt.value().to_uppercase()),
                        }
                        button {
                            r#type: "button",
                            class: "button button--outline",
                            onclick: generate_alias,
                            "Generate"
                        }
                    }
                }

                if !signed_in {
                    div {
                        class: "register-form__account",
                        h3 { "Create an account (optional)" }
                        div {
                            class: "register-form__field",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        div {
                            class: "register-form__field",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                placeholder: "At least 6 characters",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary register-form__submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Add My Plate" }
                }
            }
        }
    }
}
