//! Unsplash API client
//!
//! This module provides functionality to request a random photo descriptor
//! from the Unsplash API and to download the full-resolution image bytes.
//! Transport failures (the request never produced a usable response) are kept
//! distinct from everything else so the fetch loop can label them in the log.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Base URL for the Unsplash random photo endpoint
const UNSPLASH_RANDOM_URL: &str = "https://api.unsplash.com/photos/random";

/// User-Agent sent when downloading image bytes
const DOWNLOAD_USER_AGENT: &str = "Info-Beamer Photoframe";

/// Errors that can occur when talking to the remote service
///
/// Variants carry textual descriptions because the run log records errors as
/// plain text lines.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the service (DNS, connect, timeout)
    #[error("{0}")]
    Transport(String),

    /// The request failed after a connection was established
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON shape
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ApiError::Transport(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

impl ApiError {
    /// Whether this error happened at the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Descriptor of one random photo as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoDescriptor {
    /// Remote-assigned unique id; also the local cache file stem
    pub id: String,
    /// Available image URLs
    pub urls: PhotoUrls,
}

/// Image URL variants in the descriptor; only `full` is used
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    /// Full-resolution image URL
    pub full: String,
}

/// Where the fetch loop gets its photos from.
///
/// The production implementation is [`UnsplashClient`]; tests substitute a
/// scripted source to exercise cache hits and failure handling offline.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Requests one randomly selected photo descriptor
    async fn fetch_random(&self) -> Result<PhotoDescriptor, ApiError>;

    /// Downloads the image bytes behind a descriptor URL
    async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

/// Client for the Unsplash API
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl UnsplashClient {
    /// Create a new client authenticating with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: UNSPLASH_RANDOM_URL.to_string(),
        }
    }

    /// Create a client against a different endpoint base URL
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ImageSource for UnsplashClient {
    async fn fetch_random(&self) -> Result<PhotoDescriptor, ApiError> {
        let url = format!("{}?client_id={}", self.base_url, self.api_key);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, DOWNLOAD_USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_parses_from_api_json() {
        let json = r#"{
            "id": "Dwu85P9SOIk",
            "created_at": "2016-05-03T11:00:28-04:00",
            "urls": {
                "raw": "https://images.unsplash.com/face-springmorning.jpg",
                "full": "https://images.unsplash.com/face-springmorning.jpg?q=75",
                "regular": "https://images.unsplash.com/face-springmorning.jpg?w=1080"
            }
        }"#;

        let descriptor: PhotoDescriptor =
            serde_json::from_str(json).expect("Descriptor should parse");

        assert_eq!(descriptor.id, "Dwu85P9SOIk");
        assert_eq!(
            descriptor.urls.full,
            "https://images.unsplash.com/face-springmorning.jpg?q=75"
        );
    }

    #[test]
    fn test_descriptor_missing_full_url_is_a_parse_error() {
        let json = r#"{"id": "abc", "urls": {"regular": "https://example.com/r.jpg"}}"#;

        let result: Result<PhotoDescriptor, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_status_error_is_not_transport() {
        let err = ApiError::Status(reqwest::StatusCode::FORBIDDEN);
        assert!(!err.is_transport());
        assert!(err.to_string().contains("403"));
    }
}
