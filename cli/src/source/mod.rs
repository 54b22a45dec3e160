//! Wallpaper providers and the sequential fallback between them.

use std::time::Duration;

use anyhow::Context;

use crate::config::{Config, SourceMode};

mod pexels;
mod reddit;

/// Timeout for listing/search requests.
const LISTING_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for full image downloads.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch raw image bytes from the configured provider chain.
///
/// In Pexels mode a failed or skipped Pexels attempt falls back to Reddit.
/// Reddit mode goes straight to Reddit. Any remaining failure aborts the
/// current wallpaper-update cycle; retries are deliberately not attempted.
pub fn fetch_wallpaper(cfg: &Config) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::blocking::Client::new();

    match cfg.source_mode {
        SourceMode::Reddit => {
            println!("Source mode: Reddit");
            reddit::fetch(&client, cfg.min_width, cfg.min_height)
        }
        SourceMode::Pexels => {
            println!("Source mode: Pexels (with Reddit fallback)");
            if cfg.pexels_api_key.is_empty() {
                println!("Pexels API key not specified, skipping Pexels...");
            } else {
                match pexels::fetch(
                    &client,
                    &cfg.pexels_api_key,
                    &cfg.theme,
                    cfg.min_width,
                    cfg.min_height,
                    &cfg.orientation,
                ) {
                    Ok(bytes) => return Ok(bytes),
                    Err(err) => eprintln!("Pexels failed: {err:#}"),
                }
            }
            println!("Falling back to Reddit...");
            reddit::fetch(&client, cfg.min_width, cfg.min_height)
                .context("all wallpaper sources failed")
        }
    }
}
