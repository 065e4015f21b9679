//! Sign-In Page Component
//!
//! Decorative sign-in / sign-up form. Submitting it goes straight to the
//! recipes; nothing is validated or sent. Coffee beans trail the pointer
//! across the whole page.

use brewguide_core::assets::LOGO_IMAGE;
use brewguide_core::recipe::BACKGROUND_IMAGE;
use dioxus::prelude::*;

use crate::components::{AssetImage, MarkerTrail, TextInput, background_style};
use crate::hooks::{PointerFollow, position_from_mouse_event, use_pointer_follow};
use crate::state::{APP_STATE, AuthMode, CredentialForm};

// ============================================================================
// Auth Page Component
// ============================================================================

/// Sign-in / sign-up page
#[component]
pub fn AuthPage() -> Element {
    let state = APP_STATE.read();
    let mode = state.auth_mode;
    let follow_config = state.settings.follow;
    drop(state);

    let background =
        use_hook(|| background_style(APP_STATE.read().assets.src(BACKGROUND_IMAGE)));
    let follow = use_pointer_follow(follow_config);

    rsx! {
        div {
            class: "page page-cover",
            style: "{background}",
            onmousemove: move |e| follow.on_pointer_move(position_from_mouse_event(&e)),

            div {
                class: "page-overlay page-centered",

                FollowingBeans { follow: follow }

                AuthCard { mode: mode }
            }
        }
    }
}

/// The bean trail. Kept in its own component so only it re-renders per tick.
#[component]
fn FollowingBeans(follow: PointerFollow) -> Element {
    rsx! {
        MarkerTrail { markers: follow.markers() }
    }
}

// ============================================================================
// Form Card
// ============================================================================

#[component]
fn AuthCard(mode: AuthMode) -> Element {
    let mut form = use_signal(CredentialForm::default);

    rsx! {
        div {
            class: "auth-card",

            div {
                class: "auth-logo",
                AssetImage {
                    name: LOGO_IMAGE,
                    alt: "Coffee Icon",
                    width: Some(60),
                    height: Some(60),
                }
            }

            h2 { class: "auth-heading", "{mode.heading()}" }

            form {
                class: "auth-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    APP_STATE.write().submit_credentials(&form.read());
                },

                if mode.shows_full_name() {
                    TextInput {
                        label: Some("Full Name".to_string()),
                        value: form.read().full_name.clone(),
                        placeholder: Some("John Doe".to_string()),
                        on_change: move |v: String| form.write().full_name = v,
                    }
                }

                TextInput {
                    label: Some("Email Address".to_string()),
                    value: form.read().email.clone(),
                    placeholder: Some("you@example.com".to_string()),
                    input_type: "email".to_string(),
                    on_change: move |v: String| form.write().email = v,
                }

                TextInput {
                    label: Some("Password".to_string()),
                    value: form.read().password.clone(),
                    placeholder: Some("••••••••".to_string()),
                    input_type: "password".to_string(),
                    on_change: move |v: String| form.write().password = v,
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    "{mode.submit_label()}"
                }
            }

            div {
                class: "auth-switch",
                p {
                    "{mode.switch_prompt()} "
                    button {
                        class: "auth-switch-link",
                        r#type: "button",
                        onclick: move |_| APP_STATE.write().toggle_auth_mode(),
                        "{mode.switch_label()}"
                    }
                }
            }
        }
    }
}
