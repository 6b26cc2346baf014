//! Output types from the layout engine.

use crate::{LayoutElement, PositionedElement};
use invoicer_types::Size;

/// The result of laying out one invoice: positioned elements organized by page.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutInvoice {
    pub page_size: Size,
    pub pages: Vec<Vec<PositionedElement>>,
}

/// One entry of the flattened drawing stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand<'a> {
    Element(&'a PositionedElement),
    PageBreak,
}

impl LaidOutInvoice {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages as a single stream with a `PageBreak` between consecutive pages.
    pub fn commands(&self) -> impl Iterator<Item = DrawCommand<'_>> {
        self.pages.iter().enumerate().flat_map(|(i, page)| {
            let brk = (i > 0).then_some(DrawCommand::PageBreak);
            brk.into_iter().chain(page.iter().map(DrawCommand::Element))
        })
    }

    /// Every text content string on the given page, in drawing order.
    pub fn page_text(&self, page_index: usize) -> Vec<&str> {
        self.pages
            .get(page_index)
            .map(|page| {
                page.iter()
                    .filter_map(|el| match &el.element {
                        LayoutElement::Text(t) => Some(t.content.as_str()),
                        LayoutElement::Image(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
