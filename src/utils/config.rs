//! Run configuration

use crate::manifest::Action;
use std::path::PathBuf;

/// Zowa API endpoint the video id is appended to.
pub const DEFAULT_API_BASE: &str = "https://api.zowa.app/api/v2/videos/pwa/";

/// Configuration for one run, threaded by reference through the pipeline.
///
/// Verbosity is an explicit field here rather than ambient process state;
/// `main` maps it to the log level before the pipeline starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Playback page URL to resolve
    pub playback_url: String,

    /// API endpoint the video id is appended to
    pub api_base: String,

    /// How the final rendition is chosen
    pub action: Action,

    /// Directory the final .mp4 is written to (not needed when listing)
    pub output_dir: Option<PathBuf>,

    /// Enable debug diagnostics
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            playback_url: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            action: Action::Best,
            output_dir: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.action, Action::Best);
        assert!(config.output_dir.is_none());
        assert!(!config.verbose);
    }
}
