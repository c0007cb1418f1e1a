use std::fmt;

/// Error signal published by an image source when a fetch fails.
///
/// Both kinds are non-fatal: the fetch path always returns a list (possibly
/// empty) and the signal travels separately so the UI can show a transient
/// message once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderError {
    /// At least one request to the remote photo API failed.
    NetworkCallFailed,
    /// No usable network connection was available.
    NoConnectivity,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProviderError::NetworkCallFailed => write!(f, "Network call failed"),
            ProviderError::NoConnectivity => write!(f, "No internet connection"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Error type for the photo API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    Network(String),
    /// The response body could not be decoded.
    Json(String),
    /// The server answered with a non-success status.
    Server(u16),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Json(msg) => write!(f, "JSON error: {}", msg),
            ApiError::Server(status) => write!(f, "Server returned status: {}", status),
        }
    }
}

impl std::error::Error for ApiError {}
