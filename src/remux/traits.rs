use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Narrow seam around the external remux tool
///
/// The pipeline only ever needs "repackage this stream into that file", so
/// that is the whole surface. Tests substitute a recording fake.
#[async_trait]
pub trait Remuxer: Send + Sync {
    /// Returns a unique identifier for this remuxer (e.g. "ffmpeg")
    fn id(&self) -> &'static str;

    /// Copy the audio and video streams at `input_url` into `output_path`
    /// without re-encoding. Blocks until the tool exits.
    async fn remux(&self, input_url: &str, output_path: &Path) -> Result<()>;
}
