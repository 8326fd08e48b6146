//! Zowa API client
//!
//! Resolves a video id into its master manifest URL via the public PWA API
//! and fetches manifest bodies. One `reqwest::Client` is shared by both
//! calls; there are no retries, transport defaults apply.

use crate::extractor::models::ApiVideo;
use crate::utils::error::ZowaloaderError;
use anyhow::Result;
use reqwest::StatusCode;
use tracing::{debug, error};

/// HTTP client for the Zowa API and its manifest host
pub struct ZowaExtractor {
    http: reqwest::Client,
    api_base: String,
}

impl ZowaExtractor {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Fetch the API record for a video id.
    ///
    /// The id is already constrained to digits by the URL resolver, so the
    /// request URL is plain concatenation. Anything but a 200 is an error.
    pub async fn fetch_video(&self, video_id: &str) -> Result<ApiVideo> {
        let request_url = format!("{}{}", self.api_base, video_id);
        debug!("Fetching m3u8 link from: {}", request_url);

        let response = self.http.get(&request_url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            error!("Error fetching data from Zowa API: status {}", status);
            return Err(ZowaloaderError::ApiStatus(status.as_u16()).into());
        }

        let video: ApiVideo = response.json().await?;
        Ok(video)
    }

    /// Fetch the manifest body at `manifest_url` as text.
    pub async fn fetch_manifest(&self, manifest_url: &str) -> Result<String> {
        debug!("Fetching manifest: {}", manifest_url);

        let response = self.http.get(manifest_url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            error!("Error fetching manifest: status {}", status);
            return Err(ZowaloaderError::ManifestStatus(status.as_u16()).into());
        }

        Ok(response.text().await?)
    }

    /// API base this client resolves ids against.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_is_plain_concatenation() {
        let extractor = ZowaExtractor::new("https://api.zowa.app/api/v2/videos/pwa/");
        assert_eq!(
            format!("{}{}", extractor.api_base(), "12345"),
            "https://api.zowa.app/api/v2/videos/pwa/12345"
        );
    }
}
