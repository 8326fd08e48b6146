//! Playback-URL parsing

use crate::utils::error::ZowaloaderError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAY_URL_RE: Regex = Regex::new(r"https://zowa\.app/play/([0-9]+)").unwrap();
}

/// Extract the numeric video id from a playback page URL.
///
/// The input must contain exactly one `https://zowa.app/play/<digits>`
/// occurrence; zero or several occurrences are rejected rather than guessed
/// at.
pub fn extract_video_id(url: &str) -> Result<String, ZowaloaderError> {
    let ids: Vec<&str> = PLAY_URL_RE
        .captures_iter(url)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .collect();

    if ids.len() != 1 {
        return Err(ZowaloaderError::InvalidUrl(url.to_string()));
    }

    Ok(ids[0].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extracts_id_from_plain_url() {
        assert_eq!(
            extract_video_id("https://zowa.app/play/12345").unwrap(),
            "12345"
        );
    }

    #[test]
    fn test_extracts_id_with_trailing_path() {
        assert_eq!(
            extract_video_id("https://zowa.app/play/9876?ref=home").unwrap(),
            "9876"
        );
    }

    #[test]
    fn test_rejects_url_without_id() {
        assert!(extract_video_id("https://zowa.app/play/").is_err());
    }

    #[test]
    fn test_rejects_unrelated_url() {
        assert!(extract_video_id("https://example.com/watch?v=12345").is_err());
    }

    #[test]
    fn test_rejects_multiple_matches() {
        let url = "https://zowa.app/play/111 https://zowa.app/play/222";
        assert!(matches!(
            extract_video_id(url),
            Err(ZowaloaderError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(extract_video_id("").is_err());
    }

    proptest! {
        #[test]
        fn extracted_id_equals_captured_digits(id in "[0-9]{1,10}") {
            let url = format!("https://zowa.app/play/{}", id);
            prop_assert_eq!(extract_video_id(&url).unwrap(), id);
        }
    }
}
