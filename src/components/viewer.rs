use dioxus::prelude::*;

use image_providers::{FullscreenImage, ImageItem};

use crate::Screen;

/// Full-screen view of a single image, reached by tapping a grid tile.
#[component]
pub fn ViewerScreen(uri: String, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        FullscreenImage {
            item: ImageItem::new(uri.clone()),
            on_close: move |_| on_navigate.call(Screen::Gallery),
        }
    }
}
