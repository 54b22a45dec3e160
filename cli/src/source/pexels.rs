//! Pexels search API provider.

use anyhow::{bail, Context};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::{DOWNLOAD_TIMEOUT, LISTING_TIMEOUT};

const SEARCH_URL: &str = "https://api.pexels.com/v1/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    src: PhotoSrc,
}

#[derive(Debug, Default, Deserialize)]
struct PhotoSrc {
    #[serde(default)]
    original: String,
}

/// Search Pexels for the theme and download one random suitable photo.
///
/// A random result page keeps repeated runs from always landing on the same
/// handful of images.
pub fn fetch(
    client: &reqwest::blocking::Client,
    api_key: &str,
    theme: &str,
    min_width: u32,
    min_height: u32,
    orientation: &str,
) -> anyhow::Result<Vec<u8>> {
    let mut rng = rand::thread_rng();
    let page = rng.gen_range(1..=10);

    println!("Searching for wallpapers by theme: {theme}...");
    let response = client
        .get(SEARCH_URL)
        .header("Authorization", api_key)
        .query(&[
            ("query", theme),
            ("per_page", "20"),
            ("orientation", orientation),
            ("size", "large"),
            ("page", &page.to_string()),
        ])
        .timeout(LISTING_TIMEOUT)
        .send()
        .context("Pexels search request")?
        .error_for_status()
        .context("Pexels search returned an error status")?;

    let body: SearchResponse = response.json().context("parse Pexels search response")?;

    let suitable: Vec<&Photo> = body
        .photos
        .iter()
        .filter(|p| p.width >= min_width && p.height >= min_height && !p.src.original.is_empty())
        .collect();

    let Some(photo) = suitable.choose(&mut rng) else {
        bail!("no Pexels images at {min_width}x{min_height} or larger");
    };

    println!(
        "Downloading randomly selected image: {}x{}...",
        photo.width, photo.height
    );
    let bytes = client
        .get(&photo.src.original)
        .timeout(DOWNLOAD_TIMEOUT)
        .send()
        .context("Pexels image download")?
        .error_for_status()
        .context("Pexels image download status")?
        .bytes()
        .context("read Pexels image body")?;

    Ok(bytes.to_vec())
}
