use std::sync::Mutex;

use tokio::sync::watch;

use crate::error::ProviderError;
use crate::models::{ImageItem, SourceKind};
use crate::provider::ImagesProvider;

/// Coordinator over the two image sources.
///
/// Holds the current selection, forwards fetch calls to the selected source
/// and republishes both sources' error signals on a single merged channel
/// with last-write-wins semantics.
pub struct GalleryModel<D, R> {
    device: D,
    remote: R,
    selected: Mutex<SourceKind>,
    errors_tx: watch::Sender<Option<ProviderError>>,
}

impl<D, R> GalleryModel<D, R>
where
    D: ImagesProvider,
    R: ImagesProvider,
{
    pub fn new(device: D, remote: R) -> Self {
        let (errors_tx, _) = watch::channel(None);
        Self {
            device,
            remote,
            selected: Mutex::new(SourceKind::default()),
            errors_tx,
        }
    }

    pub fn select(&self, source: SourceKind) {
        if let Ok(mut guard) = self.selected.lock() {
            *guard = source;
        }
    }

    pub fn selected(&self) -> SourceKind {
        if let Ok(guard) = self.selected.lock() {
            *guard
        } else {
            SourceKind::default()
        }
    }

    /// Fetches from whichever source is currently selected.
    pub async fn image_items(&self) -> Vec<ImageItem> {
        match self.selected() {
            SourceKind::Device => self.fetch_from(&self.device).await,
            SourceKind::Remote => self.fetch_from(&self.remote).await,
        }
    }

    /// The merged error stream of both sources.
    pub fn errors(&self) -> watch::Receiver<Option<ProviderError>> {
        self.errors_tx.subscribe()
    }

    async fn fetch_from<P: ImagesProvider>(&self, provider: &P) -> Vec<ImageItem> {
        let mut errors = provider.errors();
        errors.borrow_and_update();

        let items = provider.image_items().await;

        if errors.has_changed().unwrap_or(false) {
            let latest = errors.borrow_and_update().clone();
            self.errors_tx.send_replace(latest);
        }
        items
    }
}
