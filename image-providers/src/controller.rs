use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ProviderError;
use crate::gallery::GalleryModel;
use crate::models::{ImageItem, SourceKind};
use crate::provider::ImagesProvider;

/// Fetch state of the gallery, re-entrant on every source switch or
/// explicit refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(ProviderError),
}

/// View-model of the gallery screen.
///
/// Owns the coordinator and publishes three observable channels: the latest
/// image list, the fetch state and a one-shot error message. Cheap to clone;
/// all clones share the same state.
pub struct GalleryController<D, R> {
    model: Arc<GalleryModel<D, R>>,
    images_tx: Arc<watch::Sender<Vec<ImageItem>>>,
    state_tx: Arc<watch::Sender<LoadState>>,
    error_tx: Arc<watch::Sender<Option<ProviderError>>>,
    did_load_once: Arc<AtomicBool>,
}

impl<D, R> Clone for GalleryController<D, R> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            images_tx: Arc::clone(&self.images_tx),
            state_tx: Arc::clone(&self.state_tx),
            error_tx: Arc::clone(&self.error_tx),
            did_load_once: Arc::clone(&self.did_load_once),
        }
    }
}

impl<D, R> GalleryController<D, R>
where
    D: ImagesProvider,
    R: ImagesProvider,
{
    pub fn new(device: D, remote: R) -> Self {
        let (images_tx, _) = watch::channel(Vec::new());
        let (state_tx, _) = watch::channel(LoadState::Idle);
        let (error_tx, _) = watch::channel(None);
        Self {
            model: Arc::new(GalleryModel::new(device, remote)),
            images_tx: Arc::new(images_tx),
            state_tx: Arc::new(state_tx),
            error_tx: Arc::new(error_tx),
            did_load_once: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The latest fetched image list.
    pub fn images(&self) -> watch::Receiver<Vec<ImageItem>> {
        self.images_tx.subscribe()
    }

    /// The fetch state machine channel.
    pub fn load_state(&self) -> watch::Receiver<LoadState> {
        self.state_tx.subscribe()
    }

    /// The one-shot error message channel. Holds the most recent error until
    /// [`acknowledge_error`](Self::acknowledge_error) clears it.
    pub fn error_message(&self) -> watch::Receiver<Option<ProviderError>> {
        self.error_tx.subscribe()
    }

    pub fn selected_source(&self) -> SourceKind {
        self.model.selected()
    }

    pub fn did_load_once(&self) -> bool {
        self.did_load_once.load(Ordering::SeqCst)
    }

    /// Marks that content has been loaded at least once. Set by the UI after
    /// the storage permission is granted and the first load fires.
    pub fn set_did_load_once(&self, value: bool) {
        self.did_load_once.store(value, Ordering::SeqCst);
    }

    /// Records a source selection. Selecting the remote source always
    /// refreshes; selecting the device source only refreshes once content
    /// has been loaded before (the first device load is gated on the
    /// storage permission and triggered by the UI).
    pub async fn select_source(&self, source: SourceKind) {
        self.model.select(source);
        match source {
            SourceKind::Remote => self.refresh().await,
            SourceKind::Device => {
                if self.did_load_once() {
                    self.refresh().await;
                }
            }
        }
    }

    /// Fetches from the selected source and publishes list, state and any
    /// error signal raised during the fetch.
    pub async fn refresh(&self) {
        self.state_tx.send_replace(LoadState::Loading);

        let mut errors = self.model.errors();
        errors.borrow_and_update();

        let items = self.model.image_items().await;

        let failure = if errors.has_changed().unwrap_or(false) {
            errors.borrow_and_update().clone()
        } else {
            None
        };

        self.images_tx.send_replace(items);
        match failure {
            Some(error) => {
                self.error_tx.send_replace(Some(error));
                self.state_tx.send_replace(LoadState::Errored(error));
            }
            None => {
                self.state_tx.send_replace(LoadState::Loaded);
            }
        }
    }

    /// Clears the error message after the UI has displayed it, so each
    /// occurrence is shown exactly once.
    pub fn acknowledge_error(&self) {
        self.error_tx.send_replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeDeviceSource, FakeRemoteSource};

    fn controller(online: bool) -> GalleryController<FakeDeviceSource, FakeRemoteSource> {
        GalleryController::new(FakeDeviceSource::default(), FakeRemoteSource::new(online))
    }

    #[tokio::test]
    async fn test_remote_selection_publishes_remote_list() {
        let controller = controller(true);

        controller.select_source(SourceKind::Remote).await;

        assert_eq!(*controller.images().borrow(), FakeRemoteSource::fixture());
        assert_eq!(*controller.load_state().borrow(), LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_remote_selection_changes_selected_source() {
        let controller = controller(true);
        assert_eq!(controller.selected_source(), SourceKind::Device);

        controller.select_source(SourceKind::Remote).await;

        assert_eq!(controller.selected_source(), SourceKind::Remote);
    }

    #[tokio::test]
    async fn test_reselecting_remote_keeps_list_and_selection() {
        let controller = controller(true);

        controller.select_source(SourceKind::Remote).await;
        let first = controller.images().borrow().clone();
        controller.select_source(SourceKind::Remote).await;

        assert_eq!(*controller.images().borrow(), first);
        assert_eq!(controller.selected_source(), SourceKind::Remote);
    }

    #[tokio::test]
    async fn test_remote_selection_without_connectivity_yields_empty_list() {
        let controller = controller(false);

        controller.select_source(SourceKind::Remote).await;

        assert!(controller.images().borrow().is_empty());
        assert_eq!(
            *controller.load_state().borrow(),
            LoadState::Errored(ProviderError::NoConnectivity)
        );
    }

    #[tokio::test]
    async fn test_remote_selection_without_connectivity_raises_error_message() {
        let controller = controller(false);

        controller.select_source(SourceKind::Remote).await;

        assert_eq!(
            *controller.error_message().borrow(),
            Some(ProviderError::NoConnectivity)
        );
    }

    #[tokio::test]
    async fn test_images_update_when_connectivity_returns() {
        let remote = FakeRemoteSource::new(false);
        let online = remote.online_handle();
        let controller = GalleryController::new(FakeDeviceSource::default(), remote);

        controller.select_source(SourceKind::Remote).await;
        assert!(controller.images().borrow().is_empty());

        online.store(true, std::sync::atomic::Ordering::SeqCst);
        controller.select_source(SourceKind::Device).await;
        controller.select_source(SourceKind::Remote).await;

        assert_eq!(*controller.images().borrow(), FakeRemoteSource::fixture());
    }

    #[tokio::test]
    async fn test_device_selection_publishes_fixture_after_first_load() {
        let controller = controller(true);
        controller.set_did_load_once(true);

        controller.select_source(SourceKind::Remote).await;
        controller.select_source(SourceKind::Device).await;

        assert_eq!(*controller.images().borrow(), FakeDeviceSource::fixture());
    }

    #[tokio::test]
    async fn test_device_selection_before_first_load_does_not_fetch() {
        let controller = controller(true);

        controller.select_source(SourceKind::Device).await;

        assert!(controller.images().borrow().is_empty());
        assert_eq!(*controller.load_state().borrow(), LoadState::Idle);
    }

    #[tokio::test]
    async fn test_reselecting_device_keeps_selection() {
        let controller = controller(true);

        controller.select_source(SourceKind::Device).await;
        let selection = controller.selected_source();
        controller.select_source(SourceKind::Device).await;

        assert_eq!(controller.selected_source(), selection);
        assert_eq!(controller.selected_source(), SourceKind::Device);
    }

    #[tokio::test]
    async fn test_error_is_cleared_after_acknowledgement() {
        let controller = controller(false);

        controller.select_source(SourceKind::Remote).await;
        assert_eq!(
            *controller.error_message().borrow(),
            Some(ProviderError::NoConnectivity)
        );

        controller.acknowledge_error();
        assert_eq!(*controller.error_message().borrow(), None);
    }

    #[tokio::test]
    async fn test_each_error_occurrence_is_signalled_again() {
        let controller = controller(false);
        let mut messages = controller.error_message();

        controller.select_source(SourceKind::Remote).await;
        assert!(messages.has_changed().unwrap());
        messages.borrow_and_update();
        controller.acknowledge_error();
        messages.borrow_and_update();

        controller.refresh().await;
        assert!(messages.has_changed().unwrap());
        assert_eq!(
            *messages.borrow_and_update(),
            Some(ProviderError::NoConnectivity)
        );
    }

    #[tokio::test]
    async fn test_successful_refresh_clears_errored_state() {
        let remote = FakeRemoteSource::new(false);
        let online = remote.online_handle();
        let controller = GalleryController::new(FakeDeviceSource::default(), remote);

        controller.select_source(SourceKind::Remote).await;
        assert!(matches!(
            *controller.load_state().borrow(),
            LoadState::Errored(_)
        ));

        online.store(true, std::sync::atomic::Ordering::SeqCst);
        controller.refresh().await;

        assert_eq!(*controller.load_state().borrow(), LoadState::Loaded);
    }
}
