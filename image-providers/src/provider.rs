use tokio::sync::watch;

use crate::error::ProviderError;
use crate::models::ImageItem;

/// The capability both image sources implement: a uniform fetch operation
/// plus an error signal channel.
///
/// Fetching never fails at the type level. A source that cannot produce
/// images returns an empty list and publishes the reason on its error
/// channel, so callers render whatever they got and surface the signal
/// separately.
#[allow(async_fn_in_trait)]
pub trait ImagesProvider {
    /// Produces the current list of image references from this source.
    async fn image_items(&self) -> Vec<ImageItem>;

    /// Subscribes to this source's error signals. The channel carries the
    /// most recent signal; `None` means no error has been published yet.
    fn errors(&self) -> watch::Receiver<Option<ProviderError>>;
}
