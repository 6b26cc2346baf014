//! Invoice PDF renderer using lopdf.
//!
//! Text is set in the standard Type1 base fonts (not embedded). Logos are
//! decoded with the `image` crate and embedded as RGB image XObjects with an
//! optional soft mask for transparency.

mod page;
mod raster;
mod renderer;
mod writer;

pub use renderer::LopdfRenderer;
pub use writer::PdfWriter;
