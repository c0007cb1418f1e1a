//! Dioxus UI components for rendering image items.
//!
//! Remote items are handed to the webview as plain URLs; device items are
//! inlined as base64 data URLs so the webview can render them without file
//! access.

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use dioxus::prelude::*;

use crate::models::{image_mime_for, ImageItem};

#[derive(Debug, Clone)]
enum ImageLoadState {
    Loading,
    Loaded(String),
    Failed,
}

/// Resolves an image item to a URL the webview can render.
///
/// Remote items pass through unchanged. Device items are read from disk and
/// encoded as a data URL; an unreadable file yields `None`.
pub fn display_url(item: &ImageItem) -> Option<String> {
    if item.is_remote() {
        return Some(item.uri().to_string());
    }

    let path = Path::new(item.uri());
    let mime = image_mime_for(path).unwrap_or("image/jpeg");
    let bytes = std::fs::read(path).ok()?;
    Some(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// Grid of image thumbnails. Tapping a tile reports the item via `on_open`.
#[component]
pub fn ImageGrid(items: Vec<ImageItem>, on_open: EventHandler<ImageItem>) -> Element {
    if items.is_empty() {
        return rsx! {
            div {
                style: "padding: 24px; text-align: center; background: #f5f5f5; border-radius: 8px; color: #999;",
                "No images to show"
            }
        };
    }

    rsx! {
        div { class: "gallery-grid",
            for item in items {
                ImageTile { key: "{item.uri()}", item: item.clone(), on_open }
            }
        }
    }
}

#[component]
fn ImageTile(item: ImageItem, on_open: EventHandler<ImageItem>) -> Element {
    let mut image_state = use_signal(|| ImageLoadState::Loading);

    let load_item = item.clone();
    use_effect(move || match display_url(&load_item) {
        Some(url) => image_state.set(ImageLoadState::Loaded(url)),
        None => image_state.set(ImageLoadState::Failed),
    });

    let click_item = item.clone();
    rsx! {
        div {
            style: "aspect-ratio: 1/1; border-radius: 8px; overflow: hidden; background: #f0f0f0; cursor: pointer;",
            onclick: move |_| on_open.call(click_item.clone()),
            match image_state() {
                ImageLoadState::Loading => rsx! {
                    div {
                        style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: #999;",
                        "⏳"
                    }
                },
                ImageLoadState::Loaded(url) => rsx! {
                    img {
                        src: "{url}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                },
                ImageLoadState::Failed => rsx! {
                    div {
                        style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: #999;",
                        "📷"
                    }
                },
            }
        }
    }
}

/// Full-screen view of a single image with a close button.
#[component]
pub fn FullscreenImage(item: ImageItem, on_close: EventHandler<()>) -> Element {
    let mut image_state = use_signal(|| ImageLoadState::Loading);

    let load_item = item.clone();
    use_effect(move || match display_url(&load_item) {
        Some(url) => image_state.set(ImageLoadState::Loaded(url)),
        None => image_state.set(ImageLoadState::Failed),
    });

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1000; display: flex; flex-direction: column;",
            div {
                style: "display: flex; justify-content: flex-end; padding: 16px; background: rgba(0, 0, 0, 0.7);",
                button {
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px;",
                match image_state() {
                    ImageLoadState::Loading => rsx! {
                        div { style: "color: white; font-size: 48px;", "⏳" }
                    },
                    ImageLoadState::Loaded(url) => rsx! {
                        img {
                            src: "{url}",
                            style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                        }
                    },
                    ImageLoadState::Failed => rsx! {
                        div { style: "color: white; font-size: 48px;", "📷" }
                    },
                }
            }
        }
    }
}
