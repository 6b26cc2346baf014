use crate::logo::{ImageProbe, ProbeError};
use crate::{LayoutConfig, LayoutEngine};
use chrono::NaiveDate;
use invoicer_model::{CompanyInfo, Invoice, InvoiceMeta, LineItem};
use std::path::{Path, PathBuf};

/// A probe that reports fixed dimensions, or fails, without touching the disk.
#[derive(Debug, Clone)]
pub enum StubProbe {
    Fixed(u32, u32),
    Missing,
}

impl ImageProbe for StubProbe {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        match self {
            StubProbe::Fixed(w, h) => Ok((*w, *h)),
            StubProbe::Missing => Err(ProbeError::NotFound(path.display().to_string())),
        }
    }
}

pub fn create_test_engine(probe: StubProbe) -> LayoutEngine {
    LayoutEngine::with_probe(LayoutConfig::default(), Box::new(probe))
}

pub fn test_meta() -> InvoiceMeta {
    InvoiceMeta::new(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(), "20240517101500")
}

pub fn test_company() -> CompanyInfo {
    CompanyInfo::new("Acme Consulting")
        .with_address_line("123 Business St")
        .with_address_line("Springfield")
        .with_notes("Thank you for your business!\nPayment due in 30 days.")
}

pub fn item(description: &str, quantity: f64, unit_price: f64) -> LineItem {
    LineItem::new(description, quantity, unit_price).unwrap()
}

pub fn invoice_with(items: Vec<LineItem>, discount: f64, logo: Option<&str>) -> Invoice {
    Invoice::new(
        test_company(),
        test_meta(),
        logo.map(PathBuf::from),
        items,
        discount,
    )
    .unwrap()
}
