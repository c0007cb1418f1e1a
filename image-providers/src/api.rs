use std::time::Duration;

use serde::Deserialize;

use crate::error::ApiError;
use crate::models::RemoteGalleryConfig;

const USER_AGENT: &str = "ImageProviders/0.1.0";

/// One entry of the photo listing response. Only the image URL is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoEntry {
    pub urls: PhotoUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoUrls {
    pub small: String,
}

/// The paginated photo listing operation of the remote API.
#[allow(async_fn_in_trait)]
pub trait PhotoApi {
    async fn list_photos(&self, page: u32, per_page: u32) -> Result<Vec<PhotoEntry>, ApiError>;
}

/// HTTP client for the remote photo API.
#[derive(Debug, Clone)]
pub struct PhotoApiClient {
    base_url: String,
    client_id: String,
}

impl PhotoApiClient {
    pub fn new(config: &RemoteGalleryConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
        }
    }
}

impl PhotoApi for PhotoApiClient {
    async fn list_photos(&self, page: u32, per_page: u32) -> Result<Vec<PhotoEntry>, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(format!("Client build failed: {}", e)))?;

        let url = format!("{}/photos/", self.base_url);
        let page_param = page.to_string();
        let per_page_param = per_page.to_string();
        let response = client
            .get(&url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("page", page_param.as_str()),
                ("per_page", per_page_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::Server(response.status().as_u16()));
        }

        response
            .json::<Vec<PhotoEntry>>()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse response: {}", e)))
    }
}
