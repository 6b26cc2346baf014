use crate::test_utils::*;
use crate::{DrawCommand, LayoutElement, PositionedElement, StandardFont, TextAlign};
use invoicer_types::mm;

fn find_text<'a>(page: &'a [PositionedElement], content: &str) -> Option<&'a PositionedElement> {
    page.iter()
        .find(|el| el.as_text().is_some_and(|t| t.content == content))
}

fn low_threshold() -> f32 {
    invoicer_types::PageSize::A4.size_pt().height - mm(40.0)
}

#[test]
fn consulting_invoice_totals_block() {
    let engine = create_test_engine(StubProbe::Missing);
    let invoice = invoice_with(vec![item("Consulting", 2.0, 100.0)], 10.0, None);
    let laid_out = engine.layout(&invoice);

    assert_eq!(laid_out.page_count(), 1);
    let text = laid_out.page_text(0);
    for expected in [
        "Consulting",
        "2",
        "100.00",
        "200.00",
        "Subtotal:",
        "200.00 USD",
        "Discount (10%):",
        "-20.00 USD",
        "Total Due:",
        "180.00 USD",
    ] {
        assert!(text.contains(&expected), "missing {:?} in {:?}", expected, text);
    }
}

#[test]
fn totals_appear_in_order_on_increasing_baselines() {
    let engine = create_test_engine(StubProbe::Missing);
    let laid_out = engine.layout(&invoice_with(vec![item("a", 1.0, 1.0)], 0.0, None));
    let page = &laid_out.pages[0];
    let subtotal = find_text(page, "Subtotal:").unwrap();
    let discount = find_text(page, "Discount (0%):").unwrap();
    let total = find_text(page, "Total Due:").unwrap();
    assert!((discount.y - subtotal.y - 12.0).abs() < 1e-3);
    assert!((total.y - discount.y - 12.0).abs() < 1e-3);
    assert_eq!(total.as_text().unwrap().font, StandardFont::HelveticaBold);
    assert_eq!(total.as_text().unwrap().font_size, 12.0);
}

#[test]
fn header_block_positions() {
    let engine = create_test_engine(StubProbe::Missing);
    let laid_out = engine.layout(&invoice_with(vec![item("a", 1.0, 1.0)], 0.0, None));
    let page = &laid_out.pages[0];

    let name = find_text(page, "Acme Consulting").unwrap();
    assert!((name.x - mm(20.0 + 45.0)).abs() < 1e-3);
    assert!((name.y - mm(25.0)).abs() < 1e-3);
    let name_text = name.as_text().unwrap();
    assert_eq!(name_text.font, StandardFont::HelveticaBold);
    assert_eq!(name_text.font_size, 14.0);

    let street = find_text(page, "123 Business St").unwrap();
    assert!((street.y - name.y - 12.0).abs() < 1e-3);
    let city = find_text(page, "Springfield").unwrap();
    assert!((city.y - street.y - 11.0).abs() < 1e-3);

    let right_margin = laid_out.page_size.width - mm(20.0);
    for label in ["Invoice", "Date: 2024-05-17", "Invoice #: 20240517101500"] {
        let el = find_text(page, label).unwrap();
        assert_eq!(el.as_text().unwrap().align, TextAlign::Right, "{}", label);
        assert!((el.x - right_margin).abs() < 1e-3);
    }
}

#[test]
fn table_header_sits_below_header_block() {
    let engine = create_test_engine(StubProbe::Missing);
    let laid_out = engine.layout(&invoice_with(vec![item("a", 1.0, 1.0)], 0.0, None));
    let page = &laid_out.pages[0];
    let table_top = mm(75.0);
    for (label, offset) in [("Description", 0.0), ("Qty", 95.0), ("Unit Price", 110.0), ("Total", 140.0)] {
        let el = find_text(page, label).unwrap();
        assert!((el.y - table_top).abs() < 1e-3, "{}", label);
        assert!((el.x - mm(20.0 + offset)).abs() < 1e-3, "{}", label);
    }
    let first_row = find_text(page, "a").unwrap();
    assert!((first_row.y - table_top - 10.0).abs() < 1e-3);
}

#[test]
fn wrapped_description_emits_numbers_once() {
    let engine = create_test_engine(StubProbe::Missing);
    let description = "x".repeat(120);
    let laid_out = engine.layout(&invoice_with(vec![item(&description, 3.0, 1234.5)], 0.0, None));
    let page = &laid_out.pages[0];

    let rows: Vec<&PositionedElement> = page
        .iter()
        .filter(|el| el.as_text().is_some_and(|t| t.content.starts_with('x')))
        .collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].as_text().unwrap().content.len(), 50);
    assert_eq!(rows[2].as_text().unwrap().content.len(), 20);
    assert!((rows[1].y - rows[0].y - 11.0).abs() < 1e-3);
    assert!((rows[2].y - rows[1].y - 11.0).abs() < 1e-3);

    let numeric: Vec<&PositionedElement> = page
        .iter()
        .filter(|el| {
            el.as_text()
                .is_some_and(|t| t.align == TextAlign::Right && (t.content == "1,234.50" || t.content == "3,703.50"))
        })
        .collect();
    assert_eq!(numeric.len(), 2);
    assert!(numeric.iter().all(|el| (el.y - rows[0].y).abs() < 1e-3));
}

#[test]
fn many_rows_paginate_below_threshold() {
    let engine = create_test_engine(StubProbe::Missing);
    let items = (0..120).map(|i| item(&format!("Row {}", i), 1.0, 10.0)).collect();
    let laid_out = engine.layout(&invoice_with(items, 5.0, None));

    assert!(laid_out.page_count() >= 2);
    let threshold = low_threshold();
    for (index, page) in laid_out.pages.iter().enumerate() {
        assert!(!page.is_empty(), "page {} is empty", index);
        for el in page {
            if el.as_text().is_some() {
                assert!(el.y <= threshold + 1e-3, "page {}: {:?} below threshold", index, el);
            }
        }
    }
    // Continuation pages start at the top offset and never repeat the table header.
    let second = &laid_out.pages[1];
    assert!((second[0].y - mm(40.0)).abs() < 1e-3);
    assert!(find_text(second, "Description").is_none());
    // Every row is emitted exactly once.
    let rows: usize = laid_out
        .pages
        .iter()
        .flatten()
        .filter(|el| el.as_text().is_some_and(|t| t.content.starts_with("Row ")))
        .count();
    assert_eq!(rows, 120);
}

#[test]
fn totals_and_notes_follow_rows_onto_new_page() {
    let engine = create_test_engine(StubProbe::Missing);
    // Fill the first page up to just above the threshold.
    let rows_per_page = ((low_threshold() - (mm(75.0) + 10.0)) / 11.0).floor() as usize + 1;
    let items = (0..rows_per_page).map(|i| item(&format!("Row {}", i), 1.0, 1.0)).collect();
    let laid_out = engine.layout(&invoice_with(items, 0.0, None));

    assert_eq!(laid_out.page_count(), 2);
    let last = laid_out.pages.last().unwrap();
    assert!(find_text(last, "Subtotal:").is_some());
    assert!(find_text(last, "Notes:").is_some());
    assert!(find_text(last, "Payment due in 30 days.").is_some());
}

#[test]
fn notes_are_split_per_line_and_skipped_when_empty() {
    let engine = create_test_engine(StubProbe::Missing);
    let laid_out = engine.layout(&invoice_with(vec![item("a", 1.0, 1.0)], 0.0, None));
    let page = &laid_out.pages[0];
    let label = find_text(page, "Notes:").unwrap();
    let first = find_text(page, "Thank you for your business!").unwrap();
    let second = find_text(page, "Payment due in 30 days.").unwrap();
    assert!((first.y - label.y - 12.0).abs() < 1e-3);
    assert!((second.y - first.y - 10.0).abs() < 1e-3);
    assert_eq!(first.as_text().unwrap().font_size, 8.0);

    let mut company = test_company();
    company.notes = Some(String::new());
    let invoice = invoicer_model::Invoice::new(company, test_meta(), None, vec![item("a", 1.0, 1.0)], 0.0).unwrap();
    let laid_out = engine.layout(&invoice);
    assert!(find_text(&laid_out.pages[0], "Notes:").is_none());
}

#[test]
fn logo_box_preserves_aspect_ratio() {
    let engine = create_test_engine(StubProbe::Fixed(300, 100));
    let laid_out = engine.layout(&invoice_with(vec![item("a", 1.0, 1.0)], 0.0, Some("logo.png")));
    let logo = laid_out.pages[0]
        .iter()
        .find(|el| matches!(el.element, LayoutElement::Image(_)))
        .unwrap();
    assert!(logo.width <= mm(40.0) + 1e-3);
    assert!(logo.height <= mm(25.0) + 1e-3);
    assert!((logo.width / logo.height - 3.0).abs() < 1e-4);
    assert!((logo.x - mm(20.0)).abs() < 1e-3);
    assert!((logo.y - mm(25.0)).abs() < 1e-3);
}

#[test]
fn missing_logo_is_skipped_without_error() {
    let engine = create_test_engine(StubProbe::Missing);
    let laid_out = engine.layout(&invoice_with(vec![item("a", 1.0, 1.0)], 0.0, Some("gone.png")));
    assert!(laid_out
        .pages
        .iter()
        .flatten()
        .all(|el| !matches!(el.element, LayoutElement::Image(_))));
    // The company block keeps its position regardless of the logo.
    let name = find_text(&laid_out.pages[0], "Acme Consulting").unwrap();
    assert!((name.x - mm(65.0)).abs() < 1e-3);
}

#[test]
fn layout_is_deterministic() {
    let engine = create_test_engine(StubProbe::Fixed(64, 64));
    let items = (0..80).map(|i| item(&format!("Item number {} with a long description that wraps", i), i as f64, 2.5)).collect();
    let invoice = invoice_with(items, 12.5, Some("logo.png"));
    assert_eq!(engine.layout(&invoice), engine.layout(&invoice));
}

#[test]
fn command_stream_separates_pages() {
    let engine = create_test_engine(StubProbe::Missing);
    let items = (0..120).map(|i| item(&format!("Row {}", i), 1.0, 1.0)).collect();
    let laid_out = engine.layout(&invoice_with(items, 0.0, None));
    let breaks = laid_out
        .commands()
        .filter(|c| matches!(c, DrawCommand::PageBreak))
        .count();
    assert_eq!(breaks, laid_out.page_count() - 1);
    assert!(matches!(laid_out.commands().next(), Some(DrawCommand::Element(_))));
}

#[test]
fn currency_comes_from_config() {
    let engine = crate::LayoutEngine::with_probe(
        crate::LayoutConfig::default().with_currency("LKR"),
        Box::new(StubProbe::Missing),
    );
    let laid_out = engine.layout(&invoice_with(vec![item("a", 2.0, 1500.0)], 0.0, None));
    assert!(laid_out.page_text(0).contains(&"3,000.00 LKR"));
}
