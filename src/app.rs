//! The resolve → fetch → select → remux pipeline

use crate::extractor::{extract_video_id, ZowaExtractor};
use crate::manifest::{select_variant, Selection};
use crate::remux::Remuxer;
use crate::utils::config::AppConfig;
use crate::utils::error::ZowaloaderError;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Terminal state of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Renditions reported by the list action; no file was produced
    Listed(Vec<u32>),
    /// Path of the remuxed file
    Downloaded(PathBuf),
}

/// Run the whole pipeline for one playback URL.
///
/// Control flow is strictly linear and every failure is terminal:
/// resolve id → fetch API record → fetch manifest → select rendition
/// (or list and stop) → invoke the remuxer.
pub async fn run(config: &AppConfig, remuxer: &dyn Remuxer) -> Result<RunOutcome> {
    info!("URL: {}", config.playback_url);

    let video_id = extract_video_id(&config.playback_url)?;
    debug!("Video id: {}", video_id);

    let extractor = ZowaExtractor::new(&config.api_base);
    let video = extractor.fetch_video(&video_id).await?;
    if let Some(title) = &video.title {
        info!("Title: {}", title);
    }

    let manifest_url = video.video_url.ok_or(ZowaloaderError::MissingManifestUrl)?;
    info!("Final m3u8 link: {}", manifest_url);

    let manifest = extractor.fetch_manifest(&manifest_url).await?;

    match select_variant(&manifest_url, &manifest, config.action)? {
        Selection::Renditions(resolutions) => {
            if resolutions.is_empty() {
                println!("No renditions advertised by the manifest");
            }
            for resolution in &resolutions {
                println!("{}p", resolution);
            }
            Ok(RunOutcome::Listed(resolutions))
        }
        Selection::Variant(final_url) => {
            let output_dir = config
                .output_dir
                .as_ref()
                .ok_or(ZowaloaderError::MissingOutputDir)?;
            let output_path = output_dir.join(format!("{}.mp4", video_id));

            info!(
                "Remuxing {} -> {} via {}",
                final_url,
                output_path.display(),
                remuxer.id()
            );
            remuxer.remux(&final_url, &output_path).await?;

            Ok(RunOutcome::Downloaded(output_path))
        }
    }
}
