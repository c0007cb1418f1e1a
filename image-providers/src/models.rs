use std::path::{Path, PathBuf};

/// An opaque locator for a single image: either an absolute path into the
/// device's media storage or a remote `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    uri: String,
}

impl ImageItem {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(path.as_ref().to_string_lossy().to_string())
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether this item points at a remote resource (as opposed to a file
    /// on the device).
    pub fn is_remote(&self) -> bool {
        self.uri.starts_with("http://") || self.uri.starts_with("https://")
    }
}

/// Which of the two interchangeable image sources is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Images from the device's media storage.
    #[default]
    Device,
    /// Images from the remote photo API.
    Remote,
}

/// Configuration for the device image source.
#[derive(Debug, Clone)]
pub struct DeviceGalleryConfig {
    /// Directories scanned for image files.
    pub media_roots: Vec<PathBuf>,
}

impl Default for DeviceGalleryConfig {
    fn default() -> Self {
        Self {
            media_roots: default_media_roots(),
        }
    }
}

fn default_media_roots() -> Vec<PathBuf> {
    #[cfg(target_os = "android")]
    {
        vec![
            PathBuf::from("/storage/emulated/0/DCIM"),
            PathBuf::from("/storage/emulated/0/Pictures"),
        ]
    }

    #[cfg(not(target_os = "android"))]
    {
        match dirs::picture_dir() {
            Some(dir) => vec![dir],
            None => vec![PathBuf::from("./photos")],
        }
    }
}

/// Configuration for the remote photo API source.
#[derive(Debug, Clone)]
pub struct RemoteGalleryConfig {
    pub base_url: String,
    /// API key sent as the `client_id` query parameter.
    pub client_id: String,
}

impl Default for RemoteGalleryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.unsplash.com".to_string(),
            client_id: "kVb8qXzDn4pLwY2tReJ0aH6cUfSgM1iNoQ9sB7mEx3Z".to_string(),
        }
    }
}

/// Maps a file extension to an image MIME type. Files whose extension is not
/// an image type return `None` and are skipped by the device scan.
pub(crate) fn image_mime_for(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("webp") => Some("image/webp"),
        Some("gif") => Some("image/gif"),
        Some("bmp") => Some("image/bmp"),
        Some("heic") | Some("heif") => Some("image/heic"),
        _ => None,
    }
}
