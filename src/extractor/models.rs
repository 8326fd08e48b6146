//! Data structures for the Zowa API response

use serde::{Deserialize, Serialize};

/// Body of `GET <api-base><video_id>`.
///
/// Only the fields the pipeline reads are modelled; everything else in the
/// response is ignored. `video_url` may be absent or null, so the caller
/// decides how hard to fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiVideo {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{"id": 12345, "title": "A Short Film", "video_url": "https://host/x.m3u8"}"#;
        let video: ApiVideo = serde_json::from_str(json).unwrap();
        assert_eq!(video.id, Some(12345));
        assert_eq!(video.title.as_deref(), Some("A Short Film"));
        assert_eq!(video.video_url.as_deref(), Some("https://host/x.m3u8"));
    }

    #[test]
    fn test_parse_null_video_url() {
        let video: ApiVideo = serde_json::from_str(r#"{"video_url": null}"#).unwrap();
        assert!(video.video_url.is_none());
    }

    #[test]
    fn test_parse_missing_fields() {
        let video: ApiVideo = serde_json::from_str("{}").unwrap();
        assert!(video.id.is_none());
        assert!(video.title.is_none());
        assert!(video.video_url.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"video_url": "https://host/x.m3u8", "view_count": 99, "tags": []}"#;
        let video: ApiVideo = serde_json::from_str(json).unwrap();
        assert_eq!(video.video_url.as_deref(), Some("https://host/x.m3u8"));
    }
}
