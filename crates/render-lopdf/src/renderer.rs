use crate::page::{EmbeddedImage, PageContext};
use crate::raster::DecodedImage;
use crate::writer::PdfWriter;
use invoicer_layout::{LayoutElement, PositionedElement};
use invoicer_render_core::{DocumentRenderer, RenderError};
use invoicer_types::Size;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// A PDF renderer using the `lopdf` library.
pub struct LopdfRenderer<W: Write> {
    writer: Option<PdfWriter<W>>,
    images: HashMap<PathBuf, EmbeddedImage>,
}

impl<W: Write> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self {
            writer: None,
            images: HashMap::new(),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut PdfWriter<W>, RenderError> {
        self.writer.as_mut().ok_or(RenderError::NotStarted)
    }

    /// Decodes and writes an image the first time its path is seen.
    fn embed_image(&mut self, path: &Path) -> Result<(), RenderError> {
        if self.images.contains_key(path) {
            return Ok(());
        }
        let decoded = DecodedImage::open(path)?;
        let (width, height) = (decoded.width, decoded.height);
        let name = format!("Im{}", self.images.len() + 1);

        let writer = self.writer_mut()?;
        let smask_id = decoded.smask_stream().map(|s| writer.add_object(s));
        let image_id = writer.add_object(decoded.image_stream(smask_id));
        writer.register_xobject(&name, image_id);
        log::debug!(
            "Embedded image '{}' ({}x{}, mask: {}) as {}",
            path.display(),
            width,
            height,
            smask_id.is_some(),
            name
        );

        self.images.insert(path.to_path_buf(), EmbeddedImage { name, width, height });
        Ok(())
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Convenience for in-memory rendering.
    pub fn finish_into_buffer(self) -> Result<Vec<u8>, RenderError> {
        Ok(Box::new(self).finish()?.into_inner())
    }
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, title: &str) -> Result<(), RenderError> {
        self.writer = Some(PdfWriter::new(writer, "1.7", title));
        self.images.clear();
        Ok(())
    }

    fn render_page(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<(), RenderError> {
        self.writer_mut()?;
        for el in elements {
            if let LayoutElement::Image(image) = &el.element {
                self.embed_image(&image.path)?;
            }
        }

        let mut page_ctx = PageContext::new(page_size.height, &self.images);
        for el in elements {
            page_ctx.draw_element(el)?;
        }
        let content = page_ctx.finish();

        let writer = self.writer_mut()?;
        let content_id = writer.write_content_stream(content)?;
        writer.write_page(content_id, page_size.width, page_size.height);
        log::debug!("Rendered page {} ({} elements)", writer.page_count(), elements.len());
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let renderer = *self;
        match renderer.writer {
            Some(writer) => writer.finish(),
            None => Err(RenderError::NotStarted),
        }
    }
}
