//! Shared test doubles for the provider seams.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ProviderError;
use crate::models::ImageItem;
use crate::provider::ImagesProvider;

/// Device-source stand-in returning a fixed fixture list.
pub struct FakeDeviceSource {
    errors_tx: watch::Sender<Option<ProviderError>>,
}

impl Default for FakeDeviceSource {
    fn default() -> Self {
        let (errors_tx, _) = watch::channel(None);
        Self { errors_tx }
    }
}

impl FakeDeviceSource {
    pub fn fixture() -> Vec<ImageItem> {
        vec![ImageItem::from_path("/pictures/device-1.jpg")]
    }
}

impl ImagesProvider for FakeDeviceSource {
    async fn image_items(&self) -> Vec<ImageItem> {
        Self::fixture()
    }

    fn errors(&self) -> watch::Receiver<Option<ProviderError>> {
        self.errors_tx.subscribe()
    }
}

/// Remote-source stand-in with a switchable connectivity flag.
pub struct FakeRemoteSource {
    online: Arc<AtomicBool>,
    errors_tx: watch::Sender<Option<ProviderError>>,
}

impl FakeRemoteSource {
    pub fn new(online: bool) -> Self {
        let (errors_tx, _) = watch::channel(None);
        Self {
            online: Arc::new(AtomicBool::new(online)),
            errors_tx,
        }
    }

    /// Handle for flipping connectivity after the source has been moved
    /// into a model or controller.
    pub fn online_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.online)
    }

    pub fn fixture() -> Vec<ImageItem> {
        vec![
            ImageItem::from_url("https://img.example/remote-1.jpg"),
            ImageItem::from_url("https://img.example/remote-2.jpg"),
        ]
    }
}

impl ImagesProvider for FakeRemoteSource {
    async fn image_items(&self) -> Vec<ImageItem> {
        if self.online.load(Ordering::SeqCst) {
            Self::fixture()
        } else {
            self.errors_tx
                .send_replace(Some(ProviderError::NoConnectivity));
            Vec::new()
        }
    }

    fn errors(&self) -> watch::Receiver<Option<ProviderError>> {
        self.errors_tx.subscribe()
    }
}
