//! JSON configuration loaded once per run.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use wallstack::{ScreenRect, SplitError, StackLayout};

/// Which provider to try first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Pexels search API first, Reddit as fallback.
    #[default]
    Pexels,
    /// Reddit listings only.
    Reddit,
}

/// Immutable run configuration. Defaults match a 1920x1080 upper screen over
/// a 1920x515 lower strip with a 100px bezel gap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub test_mode: bool,
    pub test_image: String,
    pub source_mode: SourceMode,
    pub pexels_api_key: String,
    pub theme: String,
    pub min_width: u32,
    pub min_height: u32,
    pub orientation: String,
    pub exe_path: String,
    pub output_dir: String,
    pub upper_width: u32,
    pub upper_height: u32,
    pub lower_width: u32,
    pub lower_height: u32,
    pub offset_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_mode: false,
            test_image: String::new(),
            source_mode: SourceMode::Pexels,
            pexels_api_key: String::new(),
            theme: "black and white minimalist".to_string(),
            min_width: 1920,
            min_height: 1695,
            orientation: "landscape".to_string(),
            exe_path: String::new(),
            output_dir: "./temp".to_string(),
            upper_width: 1920,
            upper_height: 1080,
            lower_width: 1920,
            lower_height: 515,
            offset_px: 100,
        }
    }
}

impl Config {
    /// Validate the screen geometry and build the stack layout.
    pub fn layout(&self) -> Result<StackLayout, SplitError> {
        Ok(StackLayout::new(
            ScreenRect::new(self.upper_width, self.upper_height)?,
            ScreenRect::new(self.lower_width, self.lower_height)?,
            self.offset_px,
        ))
    }
}

pub fn load(path: &Path) -> anyhow::Result<Config> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read configuration file {}", path.display()))?;
    let cfg: Config =
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_dual_monitor_stack() {
        let cfg = Config::default();
        assert_eq!(cfg.source_mode, SourceMode::Pexels);
        assert_eq!(cfg.upper_width, 1920);
        assert_eq!(cfg.upper_height, 1080);
        assert_eq!(cfg.lower_height, 515);
        assert_eq!(cfg.offset_px, 100);
        assert_eq!(cfg.min_height, 1695);
        assert!(!cfg.test_mode);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{"theme": "mountains", "source_mode": "reddit"}"#).unwrap();
        assert_eq!(cfg.theme, "mountains");
        assert_eq!(cfg.source_mode, SourceMode::Reddit);
        assert_eq!(cfg.upper_width, 1920);
        assert_eq!(cfg.output_dir, "./temp");
    }

    #[test]
    fn layout_uses_configured_geometry() {
        let cfg = Config {
            upper_width: 2560,
            upper_height: 1440,
            lower_width: 1920,
            lower_height: 515,
            offset_px: 80,
            ..Config::default()
        };
        let layout = cfg.layout().unwrap();
        assert_eq!(layout.required_width(), 2560);
        assert_eq!(layout.required_height(), 1440 + 80 + 515);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let cfg = Config {
            upper_width: 0,
            ..Config::default()
        };
        assert!(cfg.layout().is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg: Config = serde_json::from_str(r#"{"legacy_flag": true}"#).unwrap();
        assert_eq!(cfg.theme, "black and white minimalist");
    }
}
