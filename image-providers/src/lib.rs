//! # Image Providers
//!
//! A reusable library for image galleries with interchangeable sources.
//!
//! This crate provides the source-switching core of the gallery app:
//! - a uniform fetch capability ([`ImagesProvider`]) with two
//!   implementations: the device's media storage and a remote photo API
//! - a coordinator ([`GalleryModel`]) holding the current selection and
//!   merging both sources' error signals into one stream
//! - a view-model ([`GalleryController`]) publishing the image list, the
//!   fetch state machine and one-shot error messages over watch channels
//!
//! ## Platform Separation
//!
//! This crate focuses on cross-platform fetch and state logic. Android
//! specifics (runtime permission JNI) are `cfg`-gated in
//! [`permissions`]; screens live in the application crate.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use image_providers::{
//!     DeviceGalleryConfig, DeviceImagesProvider, GalleryController, HttpConnectivity,
//!     PhotoApiClient, RemoteGalleryConfig, RemoteImagesProvider, SourceKind,
//! };
//!
//! let api = PhotoApiClient::new(&RemoteGalleryConfig::default());
//! let device = DeviceImagesProvider::new(DeviceGalleryConfig::default());
//! let remote = RemoteImagesProvider::new(api, HttpConnectivity::default());
//!
//! let controller = GalleryController::new(device, remote);
//! // controller.select_source(SourceKind::Remote).await;
//! ```

pub mod api;
pub mod connectivity;
pub mod controller;
pub mod device;
pub mod error;
pub mod gallery;
pub mod models;
pub mod permissions;
pub mod provider;
pub mod remote;

#[cfg(feature = "components")]
pub mod components;

#[cfg(test)]
mod test_utils;

pub use api::{PhotoApi, PhotoApiClient, PhotoEntry, PhotoUrls};
pub use connectivity::{Connectivity, HttpConnectivity};
pub use controller::{GalleryController, LoadState};
pub use device::DeviceImagesProvider;
pub use error::{ApiError, ProviderError};
pub use gallery::GalleryModel;
pub use models::{DeviceGalleryConfig, ImageItem, RemoteGalleryConfig, SourceKind};
pub use permissions::{check_media_permission, request_media_permission, PermissionState};
pub use provider::ImagesProvider;
pub use remote::RemoteImagesProvider;

#[cfg(feature = "components")]
pub use components::{display_url, FullscreenImage, ImageGrid};
