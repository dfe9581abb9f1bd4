//! SVG rasterization into mipmap strips.
//!
//! Each icon is drawn once on a large canvas, inverted to a light glyph on a
//! dark background, then downscaled to every mipmap level. The levels sit side
//! by side, top aligned: 64 + 32 + 16 + 8 = 120 px wide, 64 px tall. Area
//! not covered by a level is opaque white.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg;

/// Edge length of the square canvas every SVG is rendered onto.
pub const CANVAS_SIZE: u32 = 1024;

/// Mipmap edge lengths, largest first.
pub const MIPMAP_SIZES: [u32; 4] = [64, 32, 16, 8];

const STRIP_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Width of a finished strip.
pub fn strip_width() -> u32 {
    MIPMAP_SIZES.iter().sum()
}

/// Render `svg` onto the canvas, flattened over white, with RGB negated.
pub fn render_canvas(svg: &[u8]) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default()).context("parse svg")?;
    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        bail!("svg has empty size {}x{}", size.width(), size.height());
    }

    let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE)
        .ok_or_else(|| anyhow!("allocate {0}x{0} canvas", CANVAS_SIZE))?;
    pixmap.fill(Color::WHITE);

    let scale = (CANVAS_SIZE as f32 / size.width()).min(CANVAS_SIZE as f32 / size.height());
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    // The white fill makes every pixel opaque, so premultiplied data is already straight RGBA.
    let mut canvas = RgbaImage::from_raw(CANVAS_SIZE, CANVAS_SIZE, pixmap.take())
        .ok_or_else(|| anyhow!("canvas buffer size mismatch"))?;
    for pixel in canvas.pixels_mut() {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }
    Ok(canvas)
}

/// Downscale `canvas` to every mipmap size and append the results horizontally.
pub fn mipmap_strip(canvas: &RgbaImage) -> RgbaImage {
    let height = MIPMAP_SIZES[0];
    let mut strip = RgbaImage::from_pixel(strip_width(), height, STRIP_FILL);
    let mut x = 0;
    for size in MIPMAP_SIZES {
        let level = imageops::resize(canvas, size, size, FilterType::Lanczos3);
        imageops::replace(&mut strip, &level, i64::from(x), 0);
        x += size;
    }
    strip
}

/// Rasterize the SVG at `svg_path` into a PNG strip at `png_path`.
pub fn rasterize_file(svg_path: &Path, png_path: &Path) -> Result<()> {
    let svg = std::fs::read(svg_path).with_context(|| format!("read {}", svg_path.display()))?;
    let canvas =
        render_canvas(&svg).with_context(|| format!("render {}", svg_path.display()))?;
    let strip = mipmap_strip(&canvas);
    strip
        .save_with_format(png_path, ImageFormat::Png)
        .with_context(|| format!("write {}", png_path.display()))?;
    Ok(())
}
