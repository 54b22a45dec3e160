mod apply;
mod args;
mod config;
mod output;
mod source;

use std::path::{Path, PathBuf};

use anyhow::Context;

fn main() {
    if let Err(err) = real_main() {
        output::print_error(&err);
        std::process::exit(1);
    }
}

fn real_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    let cli = args::Cli::parse();
    let cfg = config::load(&cli.config)?;
    let layout = cfg.layout()?;

    let image_data = match cli.cmd.unwrap_or(args::Command::Run) {
        args::Command::FromFile { image } => std::fs::read(&image)
            .with_context(|| format!("read local image {}", image.display()))?,
        args::Command::Run => {
            if cfg.test_mode {
                anyhow::ensure!(
                    !cfg.test_image.is_empty(),
                    "test_mode is set but test_image is empty"
                );
                println!("Test mode: loading local image...");
                let path = PathBuf::from(&cfg.test_image);
                std::fs::read(&path)
                    .with_context(|| format!("read test image {}", path.display()))?
            } else {
                source::fetch_wallpaper(&cfg)?
            }
        }
    };

    let output_dir = PathBuf::from(&cfg.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let upper_path = output_dir.join("wallpaper_upper.jpg");
    let lower_path = output_dir.join("wallpaper_lower.jpg");

    let result = wallstack::WallpaperSplitter::new(image_data, layout)?
        .split_to_files(&upper_path, &lower_path)?;

    println!(
        "Upper screen saved: {} ({}x{}, scale {:.3})",
        upper_path.display(),
        result.upper.width,
        result.upper.height,
        result.scale,
    );
    println!(
        "Lower screen saved: {} ({}x{})",
        lower_path.display(),
        result.lower.width,
        result.lower.height,
    );

    apply::apply_wallpapers(Path::new(&cfg.exe_path), &upper_path, &lower_path)?;

    Ok(())
}
