use dioxus::prelude::*;

use image_providers::{
    DeviceGalleryConfig, DeviceImagesProvider, GalleryController, HttpConnectivity, PhotoApiClient,
    RemoteGalleryConfig, RemoteImagesProvider,
};

mod components;

use components::{GalleryScreen, ViewerScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Controller wired to the production sources.
pub type AppController =
    GalleryController<DeviceImagesProvider, RemoteImagesProvider<PhotoApiClient, HttpConnectivity>>;

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );

    #[cfg(not(target_os = "android"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Gallery,
    Viewer { uri: String },
}

fn build_controller() -> AppController {
    let api = PhotoApiClient::new(&RemoteGalleryConfig::default());
    let device = DeviceImagesProvider::new(DeviceGalleryConfig::default());
    let remote = RemoteImagesProvider::new(api, HttpConnectivity::default());
    GalleryController::new(device, remote)
}

#[component]
fn App() -> Element {
    use_context_provider(build_controller);
    let mut current_screen = use_signal(|| Screen::Gallery);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",
            match current_screen() {
                Screen::Gallery => rsx! {
                    GalleryScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::Viewer { uri } => rsx! {
                    ViewerScreen { uri, on_navigate: move |s| current_screen.set(s) }
                },
            }
        }
    }
}
