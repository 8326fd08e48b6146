//! Zowaloader - zowa.app video downloader
//!
//! Resolves a zowa.app playback URL into its HLS manifest, picks a
//! rendition, and remuxes the stream into a local .mp4 with ffmpeg.

use clap::Parser;
use std::path::PathBuf;
use zowaloader::manifest::Action;
use zowaloader::remux::{find_ffmpeg, FfmpegRemuxer};
use zowaloader::utils::{AppConfig, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(name = "zowaloader", about = "Download videos from zowa.app")]
struct Args {
    /// URL of the video you want to download
    #[arg(long, short)]
    url: String,

    /// Directory the final .mp4 is written to
    #[arg(long, short, required_unless_present = "listresolutions")]
    output: Option<PathBuf>,

    /// Download exactly this rendition (vertical pixels, e.g. 720)
    #[arg(long, short)]
    resolution: Option<u32>,

    /// List the renditions advertised by the manifest and exit
    #[arg(long = "listresolutions", short = 'l', visible_alias = "lr")]
    listresolutions: bool,

    /// Enable debug diagnostics
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // listresolutions overrides an explicit --resolution
    let action = if args.listresolutions {
        Action::List
    } else if let Some(resolution) = args.resolution {
        Action::Custom(resolution)
    } else {
        Action::Best
    };

    let config = AppConfig {
        playback_url: args.url,
        api_base: DEFAULT_API_BASE.to_string(),
        action,
        output_dir: args.output,
        verbose: args.verbose,
    };

    // Initialize logging before anything can fail
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    check_ffmpeg_installed();

    let remuxer = FfmpegRemuxer::new();
    if let Err(err) = zowaloader::app::run(&config, &remuxer).await {
        eprintln!("zowaloader error: {:#}", err);
        std::process::exit(1);
    }
}

fn check_ffmpeg_installed() {
    if find_ffmpeg().is_some() {
        return;
    }

    // ffmpeg missing - warn but don't exit, listing renditions still works
    eprintln!("WARNING: ffmpeg not found in PATH or common locations");
    eprintln!("Listing renditions will work, but downloads will fail.");
    eprintln!("Please install ffmpeg:");
    eprintln!("  apt install ffmpeg");
    eprintln!("  or: brew install ffmpeg");
    eprintln!("  or visit: https://ffmpeg.org/download.html");
}
