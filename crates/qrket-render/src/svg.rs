//! QR vector rendering.
//!
//! Turns a URL into minimal SVG markup: a module-unit viewBox with a
//! quiet zone and one `<rect>` per dark module. No background is drawn;
//! compositing is the exporter's job.

use qrcode::{Color as QrColor, QrCode};

use qrket_core::error::{Error, ExportError};

/// Quiet-zone width in modules on each side of the symbol.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Render a URL as SVG markup at the requested pixel size.
///
/// # Errors
///
/// Returns an export error if the data cannot be encoded as a QR symbol.
///
/// # Example
///
/// ```
/// use qrket_render::render_svg;
///
/// let markup = render_svg("https://example.com/", 200).unwrap();
/// assert!(markup.starts_with("<svg"));
/// ```
pub fn render_svg(url: &str, pixel_size: u32) -> Result<String, Error> {
    let code = QrCode::new(url.as_bytes()).map_err(|e| ExportError::Unencodable {
        message: e.to_string(),
    })?;

    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE_MODULES;

    let mut markup = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{pixel_size}\" \
         height=\"{pixel_size}\" viewBox=\"0 0 {total} {total}\" \
         shape-rendering=\"crispEdges\">"
    );

    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == QrColor::Dark {
                markup.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"#000000\"/>",
                    x + QUIET_ZONE_MODULES,
                    y + QUIET_ZONE_MODULES,
                ));
            }
        }
    }

    markup.push_str("</svg>");

    Ok(markup)
}
