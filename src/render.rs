//! The icon renderer: composes the padlock onto a gradient canvas and writes
//! the PNG artifact.

use crate::draw;
use crate::geometry::LockGeometry;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

/// Canvas edge length. The downstream launcher-icon tooling resizes from
/// this single master image.
pub const ICON_SIZE: u32 = 1024;

/// Fixed output location consumed by the icon-packaging step.
pub const ICON_PATH: &str = "assets/icon.png";

/// Teal at the top of the gradient; also the fill of the keyhole shapes.
const BASE_COLOR: &str = "#0891b2";
/// Green at the bottom of the gradient.
const GRADIENT_END: &str = "#10b981";

const BODY_FILL: Rgb<u8> = Rgb([255, 255, 255]);
const BODY_CORNER_RADIUS: u32 = 30;
const SHACKLE_STROKE_WIDTH: u32 = 45;

/// Parse a CSS color into an RGB pixel (white on a malformed string).
fn css_rgb(color: &str) -> Rgb<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
            ])
        })
        .unwrap_or(Rgb([255, 255, 255]))
}

/// Render the padlock icon onto a fresh square canvas.
///
/// Deterministic: the same size always produces the same raster. The corner
/// radius and shackle stroke width are absolute pixel values, so proportions
/// only hold at the 1024px size this tool ships with.
pub fn render(size: u32) -> RgbImage {
    let base = css_rgb(BASE_COLOR);
    let mut img = RgbImage::from_pixel(size, size, base);

    draw::fill_vertical_gradient(&mut img, base, css_rgb(GRADIENT_END));

    let geom = LockGeometry::for_size(size);
    draw::fill_rounded_rect(&mut img, &geom.body, BODY_CORNER_RADIUS, BODY_FILL);
    draw::stroke_arc(
        &mut img,
        &geom.shackle,
        180.0,
        0.0,
        SHACKLE_STROKE_WIDTH,
        BODY_FILL,
    );
    draw::fill_ellipse(&mut img, &geom.keyhole, base);
    draw::fill_rect(&mut img, &geom.slot, base);

    img
}

/// Encode the raster as an RGB PNG at `path`, creating or overwriting it.
///
/// The parent directory must already exist; a failed create leaves no
/// partial file behind.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    out.flush()?;

    Ok(())
}

/// Render the icon and write it to [`ICON_PATH`].
pub fn generate_icon() -> Result<()> {
    println!("Generating {ICON_PATH}...");

    let img = render(ICON_SIZE);

    let path = Path::new(ICON_PATH);
    if let Some(parent) = path.parent() {
        create_dir_all(parent).context("Can't create output directory")?;
    }
    save_png(&img, path)?;

    println!("✓ Generated {ICON_PATH}");
    Ok(())
}
