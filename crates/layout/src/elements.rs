use crate::fonts::StandardFont;
use invoicer_types::Rect;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    /// The element's `x` is the right edge of the text.
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub align: TextAlign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub path: PathBuf,
    /// Pixel dimensions reported by the probe.
    pub intrinsic_width: u32,
    pub intrinsic_height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Image(ImageElement),
}

/// A drawing primitive placed on a page.
///
/// For text, `(x, y)` is the anchor point on the baseline, `width` the
/// measured advance and `height` the font size. For images, `(x, y)` is the
/// top-left corner of the target box.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn from_rect(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        }
    }

    pub fn text(
        x: f32,
        y: f32,
        content: impl Into<String>,
        font: StandardFont,
        font_size: f32,
        align: TextAlign,
    ) -> Self {
        let content = content.into();
        let width = font.text_width(&content, font_size);
        Self {
            x,
            y,
            width,
            height: font_size,
            element: LayoutElement::Text(TextElement {
                content,
                font,
                font_size,
                align,
            }),
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            LayoutElement::Image(_) => None,
        }
    }

    /// Horizontal start of the drawn content, accounting for alignment.
    pub fn left(&self) -> f32 {
        match &self.element {
            LayoutElement::Text(TextElement {
                align: TextAlign::Right,
                ..
            }) => self.x - self.width,
            _ => self.x,
        }
    }
}
