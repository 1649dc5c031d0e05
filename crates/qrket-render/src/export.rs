//! PNG export of rendered QR markup.
//!
//! Parses the vector markup, composites it onto an opaque white square
//! canvas, and encodes the result as a downloadable PNG. The white
//! background is not optional: QR symbols rendered on transparency scan
//! poorly.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use roxmltree::{Document, Node};
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};
use tracing::{debug, warn};

use qrket_core::QrRecord;
use qrket_core::error::{Error, ExportError};

/// Output canvas edge length in pixels.
pub const EXPORT_CANVAS_SIZE: u32 = 512;

/// Derive the download filename from a record title: ASCII alphanumerics
/// lower-cased, everything else mapped to `_`.
pub fn export_file_name(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("qr-{slug}.png")
}

fn markup_err(message: impl Into<String>) -> Error {
    ExportError::Markup {
        message: message.into(),
    }
    .into()
}

/// Rasterize vector markup onto an opaque white square canvas.
///
/// Supports the markup shape emitted by [`crate::render_svg`]: an `<svg>`
/// root carrying a viewBox (or width/height) and filled `<rect>`
/// children. Unknown elements are ignored.
pub fn rasterize(markup: &str) -> Result<RgbaImage, Error> {
    let doc = Document::parse(markup).map_err(|e| markup_err(e.to_string()))?;
    let svg = doc.root_element();
    if svg.tag_name().name() != "svg" {
        return Err(markup_err("root element is not <svg>"));
    }

    let (min_x, min_y, width, height) = view_box(&svg)?;
    if width <= 0.0 || height <= 0.0 {
        return Err(markup_err("viewBox has no area"));
    }

    let size = EXPORT_CANVAS_SIZE;
    let mut pixmap = Pixmap::new(size, size).ok_or_else(|| ExportError::Raster {
        message: "canvas allocation failed".to_string(),
    })?;
    pixmap.fill(Color::WHITE);

    let transform = Transform::from_scale(size as f32 / width, size as f32 / height)
        .pre_translate(-min_x, -min_y);

    for node in svg.descendants().filter(|n| n.has_tag_name("rect")) {
        let Some(color) = fill_color(&node) else {
            continue;
        };
        let x = length(&node, "x");
        let y = length(&node, "y");
        let w = length(&node, "width");
        let h = length(&node, "height");
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            continue;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = false;
        pixmap.fill_rect(rect, &paint, transform, None);
    }

    RgbaImage::from_raw(size, size, pixmap.take()).ok_or_else(|| {
        ExportError::Raster {
            message: "pixel buffer size mismatch".to_string(),
        }
        .into()
    })
}

/// Export a record's rendered markup as `qr-<slug>.png` in `out_dir`.
///
/// # Errors
///
/// Returns an export error if the markup cannot be rasterized or the
/// file cannot be written.
pub fn export_png(record: &QrRecord, markup: &str, out_dir: &Path) -> Result<PathBuf, Error> {
    let image = rasterize(markup)?;
    let path = out_dir.join(export_file_name(&record.title));

    DynamicImage::ImageRgba8(image)
        .save(&path)
        .map_err(|e| ExportError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(id = %record.id, path = %path.display(), "exported record");

    Ok(path)
}

/// Export each record independently, one file per record.
///
/// Records whose markup cannot be located are logged and skipped, and a
/// failed export never aborts the rest of the batch. Returns the paths
/// that were written.
pub fn export_batch<F>(records: &[&QrRecord], markup_for: F, out_dir: &Path) -> Vec<PathBuf>
where
    F: Fn(&QrRecord) -> Option<String>,
{
    let mut written = Vec::new();

    for record in records {
        let Some(markup) = markup_for(record) else {
            warn!(id = %record.id, "export source missing, skipping record");
            continue;
        };
        match export_png(record, &markup, out_dir) {
            Ok(path) => written.push(path),
            Err(e) => warn!(id = %record.id, error = %e, "export failed, skipping record"),
        }
    }

    written
}

fn view_box(svg: &Node<'_, '_>) -> Result<(f32, f32, f32, f32), Error> {
    if let Some(vb) = svg.attribute("viewBox") {
        let parts: Vec<f32> = vb
            .split_whitespace()
            .filter_map(|p| p.parse().ok())
            .collect();
        if let [min_x, min_y, width, height] = parts[..] {
            return Ok((min_x, min_y, width, height));
        }
        return Err(markup_err(format!("malformed viewBox '{vb}'")));
    }

    let width = svg.attribute("width").and_then(|v| v.parse().ok());
    let height = svg.attribute("height").and_then(|v| v.parse().ok());
    match (width, height) {
        (Some(width), Some(height)) => Ok((0.0, 0.0, width, height)),
        _ => Err(markup_err("missing viewBox and width/height")),
    }
}

fn length(node: &Node<'_, '_>, attr: &str) -> f32 {
    node.attribute(attr)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}

fn fill_color(node: &Node<'_, '_>) -> Option<Color> {
    match node.attribute("fill") {
        None => Some(Color::BLACK),
        Some("none") => None,
        Some(value) => parse_hex(value),
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            (nibble(0)?, nibble(1)?, nibble(2)?)
        }
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, 255))
}
