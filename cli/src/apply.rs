//! Hand the finished crops to the external wallpaper-changer tool.

use std::path::Path;
use std::process::Command;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};

/// Pause between the two invocations; the changer tool misbehaves when
/// called back-to-back.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Apply the two crops to their monitors via the configured executable.
///
/// Contract with the tool: invoke with `-m <index> <image>`, check the exit
/// code. Upper screen is monitor 0, lower screen is monitor 1.
pub fn apply_wallpapers(exe_path: &Path, upper: &Path, lower: &Path) -> anyhow::Result<()> {
    if exe_path.as_os_str().is_empty() || !exe_path.exists() {
        bail!("wallpaper changer not found: {}", exe_path.display());
    }
    for artifact in [upper, lower] {
        if !artifact.exists() {
            bail!("wallpaper file not found: {}", artifact.display());
        }
    }

    println!("Applying wallpaper to upper screen (monitor 0)...");
    set_monitor(exe_path, 0, upper)?;

    thread::sleep(SETTLE_DELAY);

    println!("Applying wallpaper to lower screen (monitor 1)...");
    set_monitor(exe_path, 1, lower)?;

    println!("Wallpapers successfully applied to both screens!");
    Ok(())
}

fn set_monitor(exe_path: &Path, index: u32, image: &Path) -> anyhow::Result<()> {
    let status = Command::new(exe_path)
        .arg("-m")
        .arg(index.to_string())
        .arg(image)
        .status()
        .with_context(|| format!("run wallpaper changer for monitor {index}"))?;
    if !status.success() {
        return Err(anyhow!(
            "wallpaper changer exited with {status} for monitor {index}"
        ));
    }
    Ok(())
}
