use crate::error::RenderError;
use invoicer_layout::PositionedElement;
use invoicer_types::Size;
use std::io::Write;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// The call sequence is `begin_document`, one `render_page` per page, then
/// `finish`. Each `render_page` call closes a page, so a page break is the
/// boundary between two calls.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(&mut self, writer: W, title: &str) -> Result<(), RenderError>;

    fn render_page(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<(), RenderError>;

    /// Writes the finished document and hands the writer back.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
