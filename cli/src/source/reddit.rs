//! Reddit top-listing provider.

use std::io::Cursor;

use anyhow::{bail, Context};
use rand::seq::SliceRandom;
use serde::Deserialize;

use super::{DOWNLOAD_TIMEOUT, LISTING_TIMEOUT};

/// Popular wallpaper subreddits, tried in random order.
const SUBREDDITS: &[&str] = &[
    "wallpaper",
    "wallpapers",
    "MinimalWallpaper",
    "EarthPorn",
    "SpacePorn",
    "CityPorn",
    "SkyPorn",
    "WaterPorn",
    "AbandonedPorn",
];

/// Reddit blocks default HTTP client user agents.
const USER_AGENT: &str = "WallpaperDownloader/1.0 (by /u/wallpaperbot)";

/// Candidate downloads per subreddit before moving to the next one.
const MAX_ATTEMPTS_PER_SUBREDDIT: usize = 20;

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    data: PostData,
}

#[derive(Debug, Default, Deserialize)]
struct PostData {
    #[serde(default)]
    url_overridden_by_dest: String,
    preview: Option<Preview>,
}

#[derive(Debug, Deserialize)]
struct Preview {
    #[serde(default)]
    images: Vec<PreviewImage>,
}

#[derive(Debug, Deserialize)]
struct PreviewImage {
    source: Option<PreviewSource>,
}

#[derive(Debug, Deserialize)]
struct PreviewSource {
    #[serde(default)]
    url: String,
}

/// Download a random wallpaper from the subreddit pool.
///
/// Walks shuffled subreddits, collects candidate image URLs from each top
/// listing, and returns the first download whose decoded dimensions meet
/// the minimums.
pub fn fetch(
    client: &reqwest::blocking::Client,
    min_width: u32,
    min_height: u32,
) -> anyhow::Result<Vec<u8>> {
    let mut rng = rand::thread_rng();
    let mut subreddits: Vec<&str> = SUBREDDITS.to_vec();
    subreddits.shuffle(&mut rng);

    for subreddit in subreddits {
        println!("Downloading from Reddit r/{subreddit}...");

        let listing = match fetch_listing(client, subreddit) {
            Ok(listing) => listing,
            Err(err) => {
                eprintln!("Error with r/{subreddit}: {err:#}, trying next...");
                continue;
            }
        };

        let mut urls = collect_image_urls(&listing);
        if urls.is_empty() {
            continue;
        }
        urls.shuffle(&mut rng);

        for url in urls.iter().take(MAX_ATTEMPTS_PER_SUBREDDIT) {
            let truncated: String = url.chars().take(60).collect();
            println!("Downloading: {truncated}...");

            let Ok(bytes) = download(client, url) else {
                continue;
            };
            match probe_dimensions(&bytes) {
                Ok((w, h)) if w >= min_width && h >= min_height => {
                    println!("Successfully downloaded {w}x{h} image from Reddit");
                    return Ok(bytes);
                }
                Ok((w, h)) => {
                    println!("Image too small ({w}x{h}), trying next...");
                }
                Err(_) => continue,
            }
        }
    }

    bail!("failed to download an image from Reddit")
}

fn fetch_listing(client: &reqwest::blocking::Client, subreddit: &str) -> anyhow::Result<Listing> {
    let url = format!("https://www.reddit.com/r/{subreddit}/top.json");
    let listing = client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .query(&[("limit", "100"), ("t", "month")])
        .timeout(LISTING_TIMEOUT)
        .send()
        .context("listing request")?
        .error_for_status()
        .context("listing status")?
        .json()
        .context("parse listing")?;
    Ok(listing)
}

fn download(client: &reqwest::blocking::Client, url: &str) -> anyhow::Result<Vec<u8>> {
    let bytes = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .timeout(DOWNLOAD_TIMEOUT)
        .send()?
        .error_for_status()?
        .bytes()?;
    Ok(bytes.to_vec())
}

/// Read image dimensions from the header without a full decode.
fn probe_dimensions(bytes: &[u8]) -> anyhow::Result<(u32, u32)> {
    let dims = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("probe image format")?
        .into_dimensions()
        .context("probe image dimensions")?;
    Ok(dims)
}

/// Collect candidate image URLs from a listing: direct image links first,
/// preview sources (with `&amp;` un-escaped) as fallback.
fn collect_image_urls(listing: &Listing) -> Vec<String> {
    let mut urls = Vec::new();

    for post in &listing.data.children {
        let direct = &post.data.url_overridden_by_dest;
        if !direct.is_empty() && is_direct_image_url(direct) {
            urls.push(direct.clone());
            continue;
        }

        if let Some(preview) = &post.data.preview {
            if let Some(source) = preview.images.first().and_then(|i| i.source.as_ref()) {
                if !source.url.is_empty() {
                    urls.push(source.url.replace("&amp;", "&"));
                }
            }
        }
    }

    urls
}

fn is_direct_image_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}
