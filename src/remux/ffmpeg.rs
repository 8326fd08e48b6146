//! ffmpeg wrapper for the remux step
//!
//! Finds the ffmpeg binary (system PATH first, then common install
//! locations) and drives it in stream-copy mode. ffmpeg's own output is
//! inherited, not captured; its exit status is the only thing inspected.

use crate::remux::traits::Remuxer;
use crate::utils::error::ZowaloaderError;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Remuxer backed by an ffmpeg subprocess
pub struct FfmpegRemuxer {
    ffmpeg_path: Option<PathBuf>,
}

impl FfmpegRemuxer {
    /// Discover ffmpeg up front. A missing binary only fails at `remux`
    /// time, not at construction.
    pub fn new() -> Self {
        let ffmpeg_path = find_ffmpeg();
        if ffmpeg_path.is_none() {
            warn!("ffmpeg not found, downloads will fail until it is installed");
        }
        Self { ffmpeg_path }
    }

    /// Use a specific ffmpeg binary instead of discovering one.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            ffmpeg_path: Some(path),
        }
    }

    /// Path of the ffmpeg binary in use, if one was found.
    pub fn ffmpeg_path(&self) -> Option<&PathBuf> {
        self.ffmpeg_path.as_ref()
    }
}

impl Default for FfmpegRemuxer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Remuxer for FfmpegRemuxer {
    fn id(&self) -> &'static str {
        "ffmpeg"
    }

    /// Remux `input_url` into `output_path` with stream copy.
    /// Uses: ffmpeg -i <url> -c:v copy -c:a copy -bsf:a aac_adtstoasc <out>
    ///
    /// The `aac_adtstoasc` bitstream filter converts the ADTS audio framing
    /// HLS segments carry into the format an mp4 container expects.
    async fn remux(&self, input_url: &str, output_path: &Path) -> Result<()> {
        let ffmpeg = self
            .ffmpeg_path
            .as_ref()
            .ok_or(ZowaloaderError::FfmpegNotFound)?;

        debug!(
            "Invoking {} for {} -> {}",
            ffmpeg.display(),
            input_url,
            output_path.display()
        );

        let status = AsyncCommand::new(ffmpeg)
            .arg("-i")
            .arg(input_url)
            .arg("-c:v")
            .arg("copy")
            .arg("-c:a")
            .arg("copy")
            .arg("-bsf:a")
            .arg("aac_adtstoasc")
            .arg(output_path)
            .status()
            .await?;

        if !status.success() {
            error!("ffmpeg exited with {}", status);
            return Err(ZowaloaderError::RemuxFailed(status).into());
        }

        info!("Wrote {}", output_path.display());
        Ok(())
    }
}

// ============================================================
// ffmpeg Detection Functions
// ============================================================

/// Find the ffmpeg binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ffmpeg() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        debug!("Using system ffmpeg: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        debug!("Using ffmpeg from common path: {:?}", common);
        return Some(common);
    }

    None
}

/// Find ffmpeg in the system PATH
fn find_in_path() -> Option<PathBuf> {
    let path = which::which("ffmpeg").ok()?;
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find ffmpeg in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/ffmpeg",
        // macOS Homebrew (Intel)
        "/usr/local/bin/ffmpeg",
        // System
        "/usr/bin/ffmpeg",
        // User local
        "~/.local/bin/ffmpeg",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => PathBuf::from(path_str),
            }
        } else {
            PathBuf::from(path_str)
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ffmpeg() {
        let result = find_ffmpeg();
        println!("ffmpeg found at: {:?}", result);
        // Don't assert - ffmpeg might not be installed in CI
    }

    #[test]
    fn test_is_executable() {
        let path = Path::new("/bin/ls");
        if path.exists() {
            assert!(is_executable(path));
        }
    }

    #[test]
    fn test_with_path_skips_discovery() {
        let remuxer = FfmpegRemuxer::with_path(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
        assert_eq!(
            remuxer.ffmpeg_path(),
            Some(&PathBuf::from("/opt/ffmpeg/bin/ffmpeg"))
        );
    }

    #[tokio::test]
    async fn test_remux_without_ffmpeg_fails() {
        let remuxer = FfmpegRemuxer {
            ffmpeg_path: None,
        };
        let result = remuxer
            .remux("https://host/x.m3u8", Path::new("/tmp/out.mp4"))
            .await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZowaloaderError>(),
            Some(ZowaloaderError::FfmpegNotFound)
        ));
    }
}
