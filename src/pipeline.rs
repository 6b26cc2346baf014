use crate::config::GeneratorConfig;
use crate::error::PipelineError;
use invoicer_layout::{ImageProbe, LaidOutInvoice, LayoutConfig, LayoutEngine};
use invoicer_model::Invoice;
use invoicer_render_core::DocumentRenderer;
use invoicer_render_lopdf::LopdfRenderer;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A builder for creating an `InvoicePipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    config: GeneratorConfig,
    probe: Option<Box<dyn ImageProbe>>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the currency label printed in the totals block.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.config.currency = currency.into();
        self
    }

    /// Replaces the filesystem probe used to size the logo.
    pub fn with_image_probe(mut self, probe: impl ImageProbe + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Consumes the builder and creates the `InvoicePipeline`.
    pub fn build(self) -> Result<InvoicePipeline, PipelineError> {
        let prefix = &self.config.filename_prefix;
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            return Err(PipelineError::Config(format!(
                "Filename prefix '{}' must be a non-empty plain file name",
                prefix
            )));
        }

        let layout_config = LayoutConfig::default()
            .with_currency(self.config.currency.clone())
            .with_page_size(self.config.page_size);
        let engine = match self.probe {
            Some(probe) => LayoutEngine::with_probe(layout_config, probe),
            None => LayoutEngine::new(layout_config),
        };
        Ok(InvoicePipeline {
            config: self.config,
            engine,
        })
    }
}

/// Lays out and renders invoices with a fixed configuration.
#[derive(Debug)]
pub struct InvoicePipeline {
    config: GeneratorConfig,
    engine: LayoutEngine,
}

impl InvoicePipeline {
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn layout(&self, invoice: &Invoice) -> LaidOutInvoice {
        self.engine.layout(invoice)
    }

    /// Renders the invoice into `writer` and hands the writer back.
    pub fn generate<W: Write>(&self, invoice: &Invoice, writer: W) -> Result<W, PipelineError> {
        let laid_out = self.layout(invoice);
        let title = format!("Invoice {}", invoice.meta().invoice_number());

        let mut renderer: Box<LopdfRenderer<W>> = Box::new(LopdfRenderer::new());
        renderer.begin_document(writer, &title)?;
        for page in &laid_out.pages {
            renderer.render_page(page, laid_out.page_size)?;
        }
        let writer = renderer.finish()?;
        log::debug!("Rendered '{}' ({} pages)", title, laid_out.page_count());
        Ok(writer)
    }

    pub fn generate_bytes(&self, invoice: &Invoice) -> Result<Vec<u8>, PipelineError> {
        Ok(self.generate(invoice, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Writes the PDF to `path`. The file only appears once rendering has
    /// fully succeeded.
    pub fn generate_to_file(&self, invoice: &Invoice, path: impl AsRef<Path>) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir)?;
        let temp = self
            .generate(invoice, BufWriter::new(temp))?
            .into_inner()
            .map_err(|e| e.into_error())?;
        temp.persist(path).map_err(|e| e.error)?;

        log::info!("Wrote invoice {} to {}", invoice.meta().invoice_number(), path.display());
        Ok(())
    }

    /// Writes the PDF into `dir` under the configured default file name and
    /// returns the full path.
    pub fn generate_to_dir(&self, invoice: &Invoice, dir: impl AsRef<Path>) -> Result<PathBuf, PipelineError> {
        let path = dir.as_ref().join(self.config.default_filename(invoice.meta()));
        self.generate_to_file(invoice, &path)?;
        Ok(path)
    }
}
