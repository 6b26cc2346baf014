use crate::error::PipelineError;
use invoicer_model::InvoiceMeta;
use invoicer_types::PageSize;
use std::env;

pub const CURRENCY_ENV: &str = "INVOICER_CURRENCY";
pub const FILENAME_PREFIX_ENV: &str = "INVOICER_FILENAME_PREFIX";
pub const PAGE_SIZE_ENV: &str = "INVOICER_PAGE_SIZE";

/// Process-level settings for invoice generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Currency label printed next to the totals.
    pub currency: String,
    /// Output files are named `<prefix>_<invoice number>.pdf`.
    pub filename_prefix: String,
    pub page_size: PageSize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            filename_prefix: "invoice".to_string(),
            page_size: PageSize::A4,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `INVOICER_*` environment variables.
    pub fn from_env() -> Result<Self, PipelineError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PipelineError> {
        let mut config = Self::default();
        if let Some(currency) = lookup(CURRENCY_ENV) {
            config.currency = currency.trim().to_string();
        }
        if let Some(prefix) = lookup(FILENAME_PREFIX_ENV).filter(|p| !p.trim().is_empty()) {
            config.filename_prefix = prefix.trim().to_string();
        }
        if let Some(size) = lookup(PAGE_SIZE_ENV) {
            config.page_size = size
                .parse()
                .map_err(|e| PipelineError::Config(format!("{}: {}", PAGE_SIZE_ENV, e)))?;
        }
        Ok(config)
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn default_filename(&self, meta: &InvoiceMeta) -> String {
        format!("{}_{}.pdf", self.filename_prefix, meta.invoice_number())
    }
}
