//! Invoice layout engine.
//!
//! Maps an [`Invoice`](invoicer_model::Invoice) onto a fixed page grid and
//! produces pages of positioned drawing primitives. The only I/O performed
//! here is probing the logo's pixel dimensions through an [`ImageProbe`].

pub mod algorithms;
pub mod config;
mod elements;
pub(crate) mod engine;
pub mod fonts;
pub mod format;
pub mod logo;
pub mod output;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::elements::{ImageElement, LayoutElement, PositionedElement, TextAlign, TextElement};
pub use self::engine::LayoutEngine;
pub use self::fonts::StandardFont;
pub use self::logo::{FilesystemProbe, ImageProbe, ProbeError};
pub use self::output::{DrawCommand, LaidOutInvoice};

// Re-export geometry types used by the output from the foundation crate
pub use invoicer_types::{Rect, Size};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod test_utils;
