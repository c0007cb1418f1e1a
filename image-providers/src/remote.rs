use std::sync::Mutex;

use tokio::sync::watch;

use crate::api::PhotoApi;
use crate::connectivity::Connectivity;
use crate::error::{ApiError, ProviderError};
use crate::models::ImageItem;
use crate::provider::ImagesProvider;

/// Number of items requested per page.
const PER_PAGE: u32 = 30;

/// Cache state of the remote source. A fetch failure leaves the cache
/// `Empty`, so the next call retries instead of serving a bad result.
#[derive(Debug)]
enum RemoteCache {
    Empty,
    Filled(Vec<ImageItem>),
}

/// Image source backed by the remote photo API.
///
/// Behavior per fetch:
/// - offline: signal `NoConnectivity`, return an empty list, never touch the
///   API;
/// - cached: return the last successful result without refetching;
/// - otherwise fetch pages 1-4 concurrently and concatenate them in page
///   order. Any failed page signals `NetworkCallFailed` and the whole batch
///   is discarded.
pub struct RemoteImagesProvider<A, C> {
    api: A,
    connectivity: C,
    cache: Mutex<RemoteCache>,
    errors_tx: watch::Sender<Option<ProviderError>>,
}

impl<A: PhotoApi, C: Connectivity> RemoteImagesProvider<A, C> {
    pub fn new(api: A, connectivity: C) -> Self {
        let (errors_tx, _) = watch::channel(None);
        Self {
            api,
            connectivity,
            cache: Mutex::new(RemoteCache::Empty),
            errors_tx,
        }
    }

    async fn fetch_all_pages(&self) -> Result<Vec<ImageItem>, ApiError> {
        let (p1, p2, p3, p4) = tokio::join!(
            self.api.list_photos(1, PER_PAGE),
            self.api.list_photos(2, PER_PAGE),
            self.api.list_photos(3, PER_PAGE),
            self.api.list_photos(4, PER_PAGE),
        );

        let mut items = Vec::new();
        for page in [p1, p2, p3, p4] {
            items.extend(
                page?
                    .into_iter()
                    .map(|entry| ImageItem::from_url(entry.urls.small)),
            );
        }
        Ok(items)
    }
}

impl<A: PhotoApi, C: Connectivity> ImagesProvider for RemoteImagesProvider<A, C> {
    async fn image_items(&self) -> Vec<ImageItem> {
        if !self.connectivity.is_connected().await {
            self.errors_tx
                .send_replace(Some(ProviderError::NoConnectivity));
            return Vec::new();
        }

        if let Ok(cache) = self.cache.lock() {
            if let RemoteCache::Filled(items) = &*cache {
                return items.clone();
            }
        }

        match self.fetch_all_pages().await {
            Ok(items) => {
                log::info!("Fetched {} remote images", items.len());
                if let Ok(mut cache) = self.cache.lock() {
                    *cache = RemoteCache::Filled(items.clone());
                }
                items
            }
            Err(e) => {
                log::warn!("Remote photo fetch failed: {}", e);
                self.errors_tx
                    .send_replace(Some(ProviderError::NetworkCallFailed));
                Vec::new()
            }
        }
    }

    fn errors(&self) -> watch::Receiver<Option<ProviderError>> {
        self.errors_tx.subscribe()
    }
}
