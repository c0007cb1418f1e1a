use std::time::Duration;

/// Answers whether a usable network connection is currently available.
///
/// The remote source consults this before touching the photo API so that an
/// offline device fails fast with a "no connectivity" signal instead of a
/// timeout.
#[allow(async_fn_in_trait)]
pub trait Connectivity {
    async fn is_connected(&self) -> bool;
}

/// Connectivity probe against a captive-portal style no-content endpoint.
#[derive(Debug, Clone)]
pub struct HttpConnectivity {
    probe_url: String,
}

impl HttpConnectivity {
    pub fn new(probe_url: impl Into<String>) -> Self {
        Self {
            probe_url: probe_url.into(),
        }
    }
}

impl Default for HttpConnectivity {
    fn default() -> Self {
        Self::new("https://www.google.com/generate_204")
    }
}

impl Connectivity for HttpConnectivity {
    async fn is_connected(&self) -> bool {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                log::warn!("Connectivity probe client build failed: {}", e);
                return false;
            }
        };

        match client.get(&self.probe_url).send().await {
            Ok(response) => response.status().is_success() || response.status().as_u16() == 204,
            Err(e) => {
                log::debug!("Connectivity probe failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_url() {
        let probe = HttpConnectivity::default();
        assert_eq!(probe.probe_url, "https://www.google.com/generate_204");
    }
}
