//! Image that degrades to a placeholder
//!
//! A file missing from the asset root never reaches the webview. A file the
//! webview fails to decode is swapped for the placeholder on its error event.

use dioxus::prelude::*;

use crate::state::APP_STATE;

/// Image loaded by file name from the asset root
#[component]
pub fn AssetImage(
    /// File name relative to the asset root
    name: &'static str,
    alt: &'static str,
    #[props(default)] class: &'static str,
    #[props(default)] width: Option<u32>,
    #[props(default)] height: Option<u32>,
) -> Element {
    // Resolved once per mounted image, not on every re-render.
    let src = use_hook(|| APP_STATE.read().assets.src(name));
    let mut failed = use_signal(|| false);
    let size_style = size_style(width, height);

    match src {
        Some(src) if !failed() => rsx! {
            img {
                class: "{class}",
                style: "{size_style}",
                src: "{src}",
                alt: "{alt}",
                onerror: move |_| {
                    tracing::warn!("Image {} failed to load, showing placeholder", name);
                    failed.set(true);
                },
            }
        },
        _ => rsx! {
            div {
                class: "asset-placeholder {class}",
                style: "{size_style}",
                role: "img",
                aria_label: "{alt}",
            }
        },
    }
}

/// Inline width/height for a fixed-size image
fn size_style(width: Option<u32>, height: Option<u32>) -> String {
    let mut style = String::new();
    if let Some(w) = width {
        style.push_str(&format!("width: {}px;", w));
    }
    if let Some(h) = height {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("height: {}px;", h));
    }
    style
}

/// Background declaration for a full-page image, or a plain gradient if the
/// image is missing
pub fn background_style(src: Option<String>) -> String {
    match src {
        Some(src) => format!("background-image: url('{}');", src),
        None => "background-image: linear-gradient(135deg, #3b2416, #1c110a);".to_string(),
    }
}
