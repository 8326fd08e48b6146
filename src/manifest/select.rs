//! Rendition selection over master-manifest text
//!
//! The master playlist advertises its renditions as variant playlists named
//! `<stem>-<height>p.m3u8`. Scanning for that marker is the only parsing
//! done here; no I/O, so the whole module is plain functions over text.

use crate::utils::error::ZowaloaderError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    static ref VARIANT_RE: Regex = Regex::new(r"-([0-9]{3,4})p\.m3u8").unwrap();
}

/// How the final rendition is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Report the available renditions and stop
    List,
    /// Download exactly this vertical resolution
    Custom(u32),
    /// Download the highest available resolution
    Best,
}

/// Result of rendition selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Renditions advertised by the manifest, in scan order (for `List`)
    Renditions(Vec<u32>),
    /// Final manifest URL to hand to the remuxer
    Variant(String),
}

/// Scan manifest text for `-<height>p.m3u8` markers.
///
/// Heights are parsed to integers once here so every later comparison is
/// numeric. Duplicates are kept in scan order.
pub fn parse_resolutions(manifest: &str) -> Vec<u32> {
    VARIANT_RE
        .captures_iter(manifest)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect()
}

/// Rewrite a master-manifest URL to its `<resolution>p` variant.
///
/// Only a trailing `.m3u8` is rewritten; a URL without that suffix is
/// returned unchanged.
pub fn variant_url(manifest_url: &str, resolution: u32) -> String {
    match manifest_url.strip_suffix(".m3u8") {
        Some(stem) => format!("{stem}-{resolution}p.m3u8"),
        None => manifest_url.to_string(),
    }
}

/// Resolve `action` against the manifest body.
///
/// A manifest with no rendition markers leaves the URL untouched for
/// `Custom`/`Best`; the remuxer still gets the master playlist.
pub fn select_variant(
    manifest_url: &str,
    manifest: &str,
    action: Action,
) -> Result<Selection, ZowaloaderError> {
    let resolutions = parse_resolutions(manifest);
    debug!("Renditions advertised by manifest: {:?}", resolutions);

    if action == Action::List {
        return Ok(Selection::Renditions(resolutions));
    }

    let best = match resolutions.iter().max() {
        Some(&best) => best,
        None => {
            warn!("No rendition markers found, using manifest URL as-is");
            return Ok(Selection::Variant(manifest_url.to_string()));
        }
    };

    let chosen = match action {
        Action::Custom(requested) => {
            if !resolutions.contains(&requested) {
                return Err(ZowaloaderError::ResolutionUnavailable(requested));
            }
            requested
        }
        // List is handled above
        _ => best,
    };

    Ok(Selection::Variant(variant_url(manifest_url, chosen)))
}
