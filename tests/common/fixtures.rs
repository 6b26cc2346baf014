use chrono::NaiveDate;
use invoicer::{CompanyInfo, Invoice, InvoiceMeta, LineItem};
use std::path::{Path, PathBuf};

pub fn company() -> CompanyInfo {
    CompanyInfo::new("Acme Consulting")
        .with_address_text("123 Business St\nSpringfield")
        .with_notes("Thank you for your business!\nPayment due in 30 days.")
}

pub fn meta() -> InvoiceMeta {
    InvoiceMeta::new(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(), "20240517101500")
}

pub fn item(description: &str, quantity: f64, unit_price: f64) -> LineItem {
    LineItem::new(description, quantity, unit_price).unwrap()
}

pub fn invoice(items: Vec<LineItem>, discount: f64, logo: Option<PathBuf>) -> Invoice {
    Invoice::new(company(), meta(), logo, items, discount).unwrap()
}

/// `{Consulting, 2, 100.00}` at 10% off.
pub fn consulting_invoice() -> Invoice {
    invoice(vec![item("Consulting", 2.0, 100.0)], 10.0, None)
}

/// Enough one-line rows to spill over the first page.
pub fn long_invoice(rows: usize) -> Invoice {
    let items = (1..=rows)
        .map(|i| item(&format!("Service line {}", i), 1.0, 10.0))
        .collect();
    invoice(items, 5.0, None)
}

pub fn write_rgba_logo(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("logo.png");
    image::RgbaImage::from_pixel(width, height, image::Rgba([20, 40, 200, 180]))
        .save(&path)
        .unwrap();
    path
}

pub fn write_rgb_logo(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("logo.jpg");
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 20]))
        .save(&path)
        .unwrap();
    path
}

/// A PNG whose header is intact but whose image data is cut short.
pub fn write_truncated_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("truncated.png");
    image::RgbImage::from_pixel(width, height, image::Rgb([90, 90, 90]))
        .save(&path)
        .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 20]).unwrap();
    path
}
