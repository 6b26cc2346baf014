use crate::writer::font_resource_name;
use invoicer_layout::{ImageElement, LayoutElement, PositionedElement, StandardFont, TextElement};
use invoicer_render_core::utils::{flip_y, to_win_ansi};
use invoicer_render_core::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::HashMap;
use std::path::PathBuf;

/// An image already written to the document, referenced by resource name.
#[derive(Debug, Clone)]
pub(crate) struct EmbeddedImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<StandardFont>,
    font_size: f32,
}

/// Builds the content stream for one page.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    images: &'a HashMap<PathBuf, EmbeddedImage>,
}

impl<'a> PageContext<'a> {
    pub fn new(page_height: f32, images: &'a HashMap<PathBuf, EmbeddedImage>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            images,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Image(image) => self.draw_image(image, el)?,
        }
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        if self.state.font != Some(font) || self.state.font_size != size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font_resource_name(font).as_bytes().to_vec()), size.into()],
            ));
            self.state.font = Some(font);
            self.state.font_size = size;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(text.font, text.font_size);
        let pdf_y = flip_y(el.y, self.page_height);
        self.content
            .operations
            .push(Operation::new("Td", vec![el.left().into(), pdf_y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    /// Draws the image scaled into the element's box, keeping its aspect
    /// ratio and anchoring it to the box's top-left corner.
    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) -> Result<(), RenderError> {
        let embedded = self.images.get(&image.path).ok_or_else(|| {
            RenderError::Pdf(format!("Image '{}' was not embedded", image.path.display()))
        })?;
        let scale = (el.width / embedded.width as f32).min(el.height / embedded.height as f32);
        let w = embedded.width as f32 * scale;
        let h = embedded.height as f32 * scale;
        let pdf_y = flip_y(el.y + h, self.page_height);

        let ops = &mut self.content.operations;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![w.into(), 0.0f32.into(), 0.0f32.into(), h.into(), el.x.into(), pdf_y.into()],
        ));
        ops.push(Operation::new(
            "Do",
            vec![Object::Name(embedded.name.as_bytes().to_vec())],
        ));
        ops.push(Operation::new("Q", vec![]));
        Ok(())
    }
}
