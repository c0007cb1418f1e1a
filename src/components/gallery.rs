use std::time::Duration;

use dioxus::prelude::*;

use image_providers::{
    request_media_permission, ImageGrid, ImageItem, LoadState, PermissionState, ProviderError,
    SourceKind,
};

use crate::{AppController, Screen};

const PERMISSION_EXPLANATION: &str = "Storage access is needed to show the photos on this device.";

/// How long an error toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

fn error_text(error: &ProviderError) -> &'static str {
    match error {
        ProviderError::NetworkCallFailed => "The image request failed. Please try again.",
        ProviderError::NoConnectivity => "No internet connection.",
    }
}

/// Gallery screen: source selector, thumbnail grid, loading indicator and
/// one-shot error toast. First screen shown on launch.
#[component]
pub fn GalleryScreen(on_navigate: EventHandler<Screen>) -> Element {
    let controller = use_context::<AppController>();

    let mut items = use_signal(Vec::<ImageItem>::new);
    let mut loading = use_signal(|| false);
    let mut toast = use_signal(|| None::<String>);
    let mut permission_denied = use_signal(|| false);
    let source_controller = controller.clone();
    let mut source = use_signal(move || source_controller.selected_source());

    // Bridge the controller's watch channels into signals.
    {
        let controller = controller.clone();
        use_effect(move || {
            let c = controller.clone();
            spawn(async move {
                let mut rx = c.images();
                loop {
                    items.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            });

            let c = controller.clone();
            spawn(async move {
                let mut rx = c.load_state();
                loop {
                    loading.set(matches!(*rx.borrow_and_update(), LoadState::Loading));
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            });

            // Each error occurrence is shown once, acknowledged right after
            // display and hidden again after a short delay.
            let c = controller.clone();
            spawn(async move {
                let mut rx = c.error_message();
                loop {
                    let current = rx.borrow_and_update().clone();
                    if let Some(error) = current {
                        toast.set(Some(error_text(&error).to_string()));
                        c.acknowledge_error();
                        tokio::time::sleep(TOAST_DURATION).await;
                        toast.set(None);
                    }
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            });
        });
    }

    // First load and the re-entry refetch. With the device source active,
    // the initial fetch is gated on the storage permission; coming back from
    // the viewer refetches device content.
    {
        let controller = controller.clone();
        use_effect(move || {
            let c = controller.clone();
            spawn(async move {
                match c.selected_source() {
                    SourceKind::Device => {
                        if c.did_load_once() {
                            c.refresh().await;
                        } else {
                            match request_media_permission().await {
                                PermissionState::Granted => {
                                    permission_denied.set(false);
                                    c.set_did_load_once(true);
                                    c.refresh().await;
                                }
                                PermissionState::Denied => {
                                    toast.set(Some(PERMISSION_EXPLANATION.to_string()));
                                    permission_denied.set(true);
                                }
                            }
                        }
                    }
                    SourceKind::Remote => {}
                }
            });
        });
    }

    let retry = {
        let controller = controller.clone();
        move |_| {
            let c = controller.clone();
            spawn(async move {
                match request_media_permission().await {
                    PermissionState::Granted => {
                        permission_denied.set(false);
                        c.set_did_load_once(true);
                        c.refresh().await;
                    }
                    PermissionState::Denied => {
                        toast.set(Some(PERMISSION_EXPLANATION.to_string()));
                    }
                }
            });
        }
    };

    let on_select = {
        let controller = controller.clone();
        move |e: FormEvent| {
            let kind = match e.value().as_str() {
                "remote" => SourceKind::Remote,
                _ => SourceKind::Device,
            };
            source.set(kind);
            let c = controller.clone();
            spawn(async move {
                if kind == SourceKind::Device && !c.did_load_once() {
                    c.select_source(kind).await;
                    match request_media_permission().await {
                        PermissionState::Granted => {
                            permission_denied.set(false);
                            c.set_did_load_once(true);
                            c.refresh().await;
                        }
                        PermissionState::Denied => {
                            toast.set(Some(PERMISSION_EXPLANATION.to_string()));
                            permission_denied.set(true);
                        }
                    }
                } else {
                    c.select_source(kind).await;
                }
            });
        }
    };

    rsx! {
        div { class: "gallery-screen",
            div { class: "gallery-toolbar",
                h1 { "Gallery" }
                select {
                    class: "source-select",
                    onchange: on_select,
                    option { value: "device", selected: source() == SourceKind::Device, "My photos" }
                    option { value: "remote", selected: source() == SourceKind::Remote, "Unsplash" }
                }
            }

            if permission_denied() {
                button { class: "btn-primary retry-button", onclick: retry, "Allow photo access" }
            }

            if loading() {
                div { class: "spinner-overlay",
                    div { class: "spinner" }
                }
            }

            div { class: "gallery-content",
                ImageGrid {
                    items: items(),
                    on_open: move |item: ImageItem| {
                        on_navigate.call(Screen::Viewer { uri: item.uri().to_string() });
                    },
                }
            }

            if let Some(message) = toast() {
                div { class: "toast", "{message}" }
            }
        }
    }
}
