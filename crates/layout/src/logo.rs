//! Logo probing and fitting.
//!
//! Layout needs a logo's pixel dimensions to reserve an aspect-correct box.
//! Probing goes through the [`ImageProbe`] trait so the engine can be used
//! without filesystem access (tests, embedded sources).

use image::ImageReader;
use invoicer_types::Size;
use std::fmt::Debug;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Image not found: {0}")]
    NotFound(String),
    #[error("Image '{path}' could not be read: {message}")]
    Unreadable { path: String, message: String },
    #[error("Image '{0}' has zero width or height")]
    Empty(String),
}

/// Reports the pixel dimensions of a logo that is known to be drawable.
pub trait ImageProbe: Send + Sync + Debug {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError>;
}

/// Probes images on the local filesystem.
///
/// The whole image is decoded, not just its header, so a file with a valid
/// header and a truncated or corrupt body is rejected here rather than
/// failing later in the renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemProbe;

impl ImageProbe for FilesystemProbe {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        if !path.exists() {
            return Err(ProbeError::NotFound(path.display().to_string()));
        }
        let unreadable = |message: String| ProbeError::Unreadable {
            path: path.display().to_string(),
            message,
        };
        let img = ImageReader::open(path)
            .map_err(|e| unreadable(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| unreadable(e.to_string()))?
            .decode()
            .map_err(|e| unreadable(e.to_string()))?;
        let (w, h) = (img.width(), img.height());
        if w == 0 || h == 0 {
            return Err(ProbeError::Empty(path.display().to_string()));
        }
        Ok((w, h))
    }
}

/// Scales an image of `width` x `height` pixels into a box of at most
/// `max_width` x `max_height` points, keeping the aspect ratio.
///
/// The image first takes the full box width; if that makes it too tall it is
/// fitted to the box height instead.
pub fn fit_logo(width: u32, height: u32, max_width: f32, max_height: f32) -> Size {
    let aspect = height as f32 / width as f32;
    let mut target = Size::new(max_width, max_width * aspect);
    if target.height > max_height {
        target.height = max_height;
        target.width = max_height / aspect;
    }
    target
}
