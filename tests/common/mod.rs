pub mod fixtures;
pub mod pdf_assertions;

use invoicer::{Invoice, PipelineBuilder, PipelineError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes. Streams are decompressed so
    /// content can be inspected.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut doc = LopdfDocument::load_mem(&bytes)?;
        doc.decompress();
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Every string shown on the given 1-based page, in drawing order.
    pub fn page_strings(&self, page_number: u32) -> Vec<String> {
        pdf_assertions::shown_strings(&self.doc, page_number)
            .into_iter()
            .map(|(_, s)| s)
            .collect()
    }

    /// Every string shown anywhere in the document.
    pub fn all_strings(&self) -> Vec<String> {
        (1..=self.page_count() as u32)
            .flat_map(|page| self.page_strings(page))
            .collect()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF for the invoice with a default pipeline
pub fn generate_pdf(invoice: &Invoice) -> Result<GeneratedPdf, PipelineError> {
    let pipeline = PipelineBuilder::new().build()?;
    let bytes = pipeline.generate_bytes(invoice)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| PipelineError::Config(e.to_string()))
}
