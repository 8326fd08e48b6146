//! Error handling for Zowaloader

use thiserror::Error;

/// Main error type for Zowaloader
#[derive(Debug, Error)]
pub enum ZowaloaderError {
    #[error("cannot get video id from URL {0} (format must be https://zowa.app/play/[id])")]
    InvalidUrl(String),

    #[error("Zowa API reported status code {0}")]
    ApiStatus(u16),

    #[error("manifest fetch reported status code {0}")]
    ManifestStatus(u16),

    #[error("unable to find .m3u8 link in API response")]
    MissingManifestUrl,

    #[error("requested resolution {0}p is not offered by the manifest")]
    ResolutionUnavailable(u32),

    #[error("an output directory is required to download")]
    MissingOutputDir,

    #[error("ffmpeg not found. Please install ffmpeg")]
    FfmpegNotFound,

    #[error("ffmpeg exited with {0}")]
    RemuxFailed(std::process::ExitStatus),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
