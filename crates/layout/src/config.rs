use invoicer_types::{mm, PageSize};

/// Settings for the layout engine. Fixed for the lifetime of an engine,
/// so engines with different currencies can coexist.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Label appended to money amounts in the totals block, e.g. `USD`.
    pub currency: String,
    pub page_size: PageSize,
    /// Uniform page margin in millimetres.
    pub margin_mm: f32,
    /// Descriptions are sliced into chunks of at most this many characters.
    ///
    /// Defaults to `50`.
    pub max_description_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            page_size: PageSize::A4,
            margin_mm: 20.0,
            max_description_chars: 50,
        }
    }
}

impl LayoutConfig {
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn margin(&self) -> f32 {
        mm(self.margin_mm)
    }
}
