//! qrket-render - QR vector rendering and PNG export.

mod export;
mod svg;

pub use export::{EXPORT_CANVAS_SIZE, export_batch, export_file_name, export_png, rasterize};
pub use svg::{QUIET_ZONE_MODULES, render_svg};
