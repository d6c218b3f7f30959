use crate::lightbulb::{render_lightbulb, ICON_SIZES};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

// Library-side options, filled in by the clap parser in main.rs
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
}

/// Render every icon size and write it as `<size>.png` into the output directory
pub fn generate_icons(args: Args) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    for size in ICON_SIZES {
        println!("Generating {size}x{size} icon...");
        let icon = render_lightbulb(size)?;

        let filename = format!("{size}.png");
        save_png(&icon, &args.output.join(&filename))?;
        println!("  ✓ Generated {filename}");
    }

    println!("All icons generated successfully!");
    Ok(())
}

/// Save an icon as PNG, replacing any existing file at `path`
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode square image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
