use std::path::PathBuf;
use std::time::SystemTime;

use tokio::sync::watch;
use walkdir::WalkDir;

use crate::error::ProviderError;
use crate::models::{image_mime_for, DeviceGalleryConfig, ImageItem};
use crate::provider::ImagesProvider;

/// Image source backed by the device's media storage.
///
/// Walks the configured media directories, keeps files with an image MIME
/// type and orders them by most-recently-modified first. A directory or
/// entry that cannot be read contributes nothing; there is no error path.
pub struct DeviceImagesProvider {
    config: DeviceGalleryConfig,
    errors_tx: watch::Sender<Option<ProviderError>>,
}

impl DeviceImagesProvider {
    pub fn new(config: DeviceGalleryConfig) -> Self {
        let (errors_tx, _) = watch::channel(None);
        Self { config, errors_tx }
    }

    fn scan(&self) -> Vec<ImageItem> {
        let mut found: Vec<(PathBuf, SystemTime)> = Vec::new();

        for root in &self.config.media_roots {
            if !root.is_dir() {
                log::debug!("Media root {} not present, skipping", root.display());
                continue;
            }

            for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
                if !entry.file_type().is_file() {
                    continue;
                }
                if image_mime_for(entry.path()).is_none() {
                    continue;
                }
                let modified = entry
                    .metadata()
                    .ok()
                    .and_then(|m| m.modified().ok())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                found.push((entry.into_path(), modified));
            }
        }

        found.sort_by(|a, b| b.1.cmp(&a.1));
        found
            .into_iter()
            .map(|(path, _)| ImageItem::from_path(path))
            .collect()
    }
}

impl ImagesProvider for DeviceImagesProvider {
    async fn image_items(&self) -> Vec<ImageItem> {
        let items = self.scan();
        log::debug!("Device scan found {} images", items.len());
        items
    }

    fn errors(&self) -> watch::Receiver<Option<ProviderError>> {
        self.errors_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, OpenOptions};
    use std::path::Path;
    use std::time::Duration;

    fn touch(path: &Path, age_secs: u64) {
        fs::write(path, b"not really an image").unwrap();
        let modified = SystemTime::now() - Duration::from_secs(age_secs);
        OpenOptions::new()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(modified)
            .unwrap();
    }

    fn provider_for(root: &Path) -> DeviceImagesProvider {
        DeviceImagesProvider::new(DeviceGalleryConfig {
            media_roots: vec![root.to_path_buf()],
        })
    }

    #[tokio::test]
    async fn test_scan_keeps_only_image_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"), 30);
        touch(&dir.path().join("b.png"), 20);
        touch(&dir.path().join("notes.txt"), 10);

        let items = provider_for(dir.path()).image_items().await;
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.uri().ends_with(".txt")));
    }

    #[tokio::test]
    async fn test_scan_recurses_and_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("camera")).unwrap();
        touch(&dir.path().join("old.jpg"), 300);
        touch(&dir.path().join("camera/newest.webp"), 10);
        touch(&dir.path().join("middle.png"), 100);

        let items = provider_for(dir.path()).image_items().await;
        let names: Vec<&str> = items.iter().map(|i| i.uri()).collect();
        assert_eq!(items.len(), 3);
        assert!(names[0].ends_with("newest.webp"));
        assert!(names[1].ends_with("middle.png"));
        assert!(names[2].ends_with("old.jpg"));
    }

    #[tokio::test]
    async fn test_missing_root_yields_empty_list() {
        let provider = provider_for(Path::new("/definitely/not/a/real/dir"));
        assert!(provider.image_items().await.is_empty());
    }

    #[tokio::test]
    async fn test_device_source_never_signals_errors() {
        let dir = tempfile::tempdir().unwrap();
        let provider = provider_for(dir.path());
        let errors = provider.errors();
        let _ = provider.image_items().await;
        assert_eq!(*errors.borrow(), None);
    }
}
