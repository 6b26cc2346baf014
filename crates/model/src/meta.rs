use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date and number stamped on an invoice at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMeta {
    date: NaiveDate,
    invoice_number: String,
}

impl InvoiceMeta {
    pub fn new(date: NaiveDate, invoice_number: impl Into<String>) -> Self {
        Self {
            date,
            invoice_number: invoice_number.into(),
        }
    }

    /// Derives the meta from a timestamp: the number is `YYYYMMDDHHMMSS`.
    pub fn generate(at: NaiveDateTime) -> Self {
        Self {
            date: at.date(),
            invoice_number: at.format("%Y%m%d%H%M%S").to_string(),
        }
    }

    pub fn now() -> Self {
        Self::generate(Local::now().naive_local())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
