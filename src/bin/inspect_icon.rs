use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use lightbulb_icon::Palette;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Usage: inspect_icon <PNG>")?;

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image: {}", path))?
        .decode()
        .context("Failed to decode image")?;

    let rgba_img = img.to_rgba8();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());

    let center = rgba_img.get_pixel(img.width() / 2, img.height() / 2);
    println!(
        "Center pixel RGBA: [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );

    println!("\nPalette usage:");
    for (name, color) in Palette::NAMED {
        let count = rgba_img.pixels().filter(|p| **p == color).count();
        let mark = if count > 0 { "✓" } else { "·" };
        println!("  {mark} {name:<10} {count} px");
    }

    let transparent = rgba_img.pixels().filter(|p| p[3] == 0).count();
    println!("  transparent {transparent} px");

    Ok(())
}
