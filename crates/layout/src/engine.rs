use crate::algorithms::PageCursor;
use crate::config::LayoutConfig;
use crate::fonts::StandardFont;
use crate::format::{format_amount, format_money, format_number};
use crate::logo::{fit_logo, FilesystemProbe, ImageProbe};
use crate::output::LaidOutInvoice;
use crate::text::wrap_fixed;
use crate::{ImageElement, LayoutElement, PositionedElement, TextAlign};
use invoicer_model::Invoice;
use invoicer_types::{mm, Rect};

// Offsets in millimetres, relative to the page margins.
const HEADER_OFFSET_MM: f32 = 5.0;
const LOGO_MAX_WIDTH_MM: f32 = 40.0;
const LOGO_MAX_HEIGHT_MM: f32 = 25.0;
const LOGO_GAP_MM: f32 = 5.0;
const TABLE_OFFSET_MM: f32 = 55.0;
const COL_QTY_MM: f32 = 95.0;
const COL_UNIT_PRICE_MM: f32 = 110.0;
const COL_TOTAL_MM: f32 = 140.0;
const QTY_RIGHT_MM: f32 = 120.0;
const UNIT_PRICE_RIGHT_MM: f32 = 150.0;
/// Distance from the bottom edge below which no line starts, and from the top
/// edge at which continuation pages resume.
const LOW_MARGIN_MM: f32 = 40.0;

// Vertical steps in points.
const COMPANY_NAME_STEP: f32 = 12.0;
const ADDRESS_STEP: f32 = 11.0;
const META_TITLE_STEP: f32 = 14.0;
const META_STEP: f32 = 11.0;
const TABLE_HEADER_GAP: f32 = 10.0;
const ROW_STEP: f32 = 11.0;
const TOTALS_GAP: f32 = 8.0;
const TOTALS_STEP: f32 = 12.0;
const NOTES_GAP: f32 = 25.0;
const NOTES_TITLE_STEP: f32 = 12.0;
const NOTES_STEP: f32 = 10.0;

/// Lays out invoices onto fixed-size pages.
///
/// Layout is a pure function of the invoice, the config and whatever the
/// probe reports for the logo, so identical inputs give identical pages.
#[derive(Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    probe: Box<dyn ImageProbe>,
}

/// Horizontal reference lines for one page.
#[derive(Debug, Clone, Copy)]
struct Columns {
    left: f32,
    right: f32,
    top: f32,
}

impl Columns {
    fn at(&self, offset_mm: f32) -> f32 {
        self.left + mm(offset_mm)
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_probe(config, Box::new(FilesystemProbe))
    }

    pub fn with_probe(config: LayoutConfig, probe: Box<dyn ImageProbe>) -> Self {
        Self { config, probe }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, invoice: &Invoice) -> LaidOutInvoice {
        let page_size = self.config.page_size.size_pt();
        let margin = self.config.margin();
        let cols = Columns {
            left: margin,
            right: page_size.width - margin,
            top: margin,
        };
        let table_top = cols.top + mm(TABLE_OFFSET_MM);
        let mut cursor = PageCursor::new(
            table_top + TABLE_HEADER_GAP,
            page_size.height - mm(LOW_MARGIN_MM),
            mm(LOW_MARGIN_MM),
        );

        self.layout_logo(invoice, cols, &mut cursor);
        self.layout_company(invoice, cols, &mut cursor);
        self.layout_meta(invoice, cols, &mut cursor);
        self.layout_table_header(cols, table_top, &mut cursor);
        self.layout_rows(invoice, cols, &mut cursor);
        self.layout_totals(invoice, cols, &mut cursor);
        self.layout_notes(invoice, cols, &mut cursor);

        let pages = cursor.finish();
        log::debug!(
            "Laid out invoice {} with {} items on {} page(s)",
            invoice.meta().invoice_number(),
            invoice.items().len(),
            pages.len()
        );
        LaidOutInvoice { page_size, pages }
    }

    fn layout_logo(&self, invoice: &Invoice, cols: Columns, cursor: &mut PageCursor) {
        let Some(path) = invoice.logo_path() else {
            return;
        };
        let (width, height) = match self.probe.dimensions(path) {
            Ok(dims) => dims,
            Err(e) => {
                log::warn!("Skipping logo: {}", e);
                return;
            }
        };
        let size = fit_logo(width, height, mm(LOGO_MAX_WIDTH_MM), mm(LOGO_MAX_HEIGHT_MM));
        let rect = Rect::new(
            cols.left,
            cols.top + mm(HEADER_OFFSET_MM),
            size.width,
            size.height,
        );
        cursor.push(PositionedElement::from_rect(
            rect,
            LayoutElement::Image(ImageElement {
                path: path.to_path_buf(),
                intrinsic_width: width,
                intrinsic_height: height,
            }),
        ));
    }

    fn layout_company(&self, invoice: &Invoice, cols: Columns, cursor: &mut PageCursor) {
        let company = invoice.company();
        // The logo column is reserved whether or not a logo is drawn.
        let x = cols.at(LOGO_MAX_WIDTH_MM + LOGO_GAP_MM);
        let mut y = cols.top + mm(HEADER_OFFSET_MM);

        cursor.push(left_text(x, y, &company.name, StandardFont::HelveticaBold, 14.0));
        y += COMPANY_NAME_STEP;
        for line in &company.address_lines {
            cursor.push(left_text(x, y, line, StandardFont::Helvetica, 10.0));
            y += ADDRESS_STEP;
        }
    }

    fn layout_meta(&self, invoice: &Invoice, cols: Columns, cursor: &mut PageCursor) {
        let meta = invoice.meta();
        let mut y = cols.top + mm(HEADER_OFFSET_MM);

        cursor.push(right_text(cols.right, y, "Invoice", StandardFont::HelveticaBold, 12.0));
        y += META_TITLE_STEP;
        cursor.push(right_text(
            cols.right,
            y,
            format!("Date: {}", meta.formatted_date()),
            StandardFont::Helvetica,
            9.0,
        ));
        y += META_STEP;
        cursor.push(right_text(
            cols.right,
            y,
            format!("Invoice #: {}", meta.invoice_number()),
            StandardFont::Helvetica,
            9.0,
        ));
    }

    fn layout_table_header(&self, cols: Columns, y: f32, cursor: &mut PageCursor) {
        let font = StandardFont::HelveticaBold;
        cursor.push(left_text(cols.left, y, "Description", font, 10.0));
        cursor.push(left_text(cols.at(COL_QTY_MM), y, "Qty", font, 10.0));
        cursor.push(left_text(cols.at(COL_UNIT_PRICE_MM), y, "Unit Price", font, 10.0));
        cursor.push(left_text(cols.at(COL_TOTAL_MM), y, "Total", font, 10.0));
    }

    fn layout_rows(&self, invoice: &Invoice, cols: Columns, cursor: &mut PageCursor) {
        let font = StandardFont::Helvetica;
        for item in invoice.items() {
            let lines = wrap_fixed(item.description(), self.config.max_description_chars);
            for (i, line) in lines.into_iter().enumerate() {
                let y = cursor.line_y();
                cursor.push(left_text(cols.left, y, line, font, 9.0));
                if i == 0 {
                    cursor.push(right_text(
                        cols.at(QTY_RIGHT_MM),
                        y,
                        format_number(item.quantity()),
                        font,
                        9.0,
                    ));
                    cursor.push(right_text(
                        cols.at(UNIT_PRICE_RIGHT_MM),
                        y,
                        format_amount(item.unit_price()),
                        font,
                        9.0,
                    ));
                    cursor.push(right_text(
                        cols.right,
                        y,
                        format_amount(item.line_total()),
                        font,
                        9.0,
                    ));
                }
                cursor.advance(ROW_STEP);
            }
        }
    }

    fn layout_totals(&self, invoice: &Invoice, cols: Columns, cursor: &mut PageCursor) {
        let totals = invoice.totals();
        let currency = self.config.currency.as_str();
        let label_x = cols.at(UNIT_PRICE_RIGHT_MM);
        let rows = [
            (
                "Subtotal:".to_string(),
                format_money(totals.subtotal, currency),
                StandardFont::HelveticaBold,
                10.0,
            ),
            (
                format!("Discount ({}%):", format_number(totals.discount_percent)),
                format!("-{}", format_money(totals.discount_amount, currency)),
                StandardFont::Helvetica,
                10.0,
            ),
            (
                "Total Due:".to_string(),
                format_money(totals.total_due, currency),
                StandardFont::HelveticaBold,
                12.0,
            ),
        ];

        cursor.advance(TOTALS_GAP);
        for (i, (label, amount, font, size)) in rows.into_iter().enumerate() {
            if i > 0 {
                cursor.advance(TOTALS_STEP);
            }
            let y = cursor.line_y();
            cursor.push(right_text(label_x, y, label, font, size));
            cursor.push(right_text(cols.right, y, amount, font, size));
        }
    }

    fn layout_notes(&self, invoice: &Invoice, cols: Columns, cursor: &mut PageCursor) {
        let Some(notes) = invoice.company().notes() else {
            return;
        };
        cursor.advance(NOTES_GAP);
        let y = cursor.line_y();
        cursor.push(left_text(cols.left, y, "Notes:", StandardFont::Helvetica, 9.0));
        cursor.advance(NOTES_TITLE_STEP);
        for line in notes.split('\n') {
            let y = cursor.line_y();
            cursor.push(left_text(cols.left, y, line, StandardFont::Helvetica, 8.0));
            cursor.advance(NOTES_STEP);
        }
    }
}

fn left_text(x: f32, y: f32, content: impl Into<String>, font: StandardFont, size: f32) -> PositionedElement {
    PositionedElement::text(x, y, content, font, size, TextAlign::Left)
}

fn right_text(x: f32, y: f32, content: impl Into<String>, font: StandardFont, size: f32) -> PositionedElement {
    PositionedElement::text(x, y, content, font, size, TextAlign::Right)
}
