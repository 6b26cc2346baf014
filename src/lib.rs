//! Single-invoice PDF generation.
//!
//! The pipeline takes a validated [`Invoice`], lays it out on a fixed page
//! grid with [`invoicer_layout`] and writes it with the `lopdf` renderer.

pub mod config;
pub mod error;
pub mod form;
pub mod pipeline;

pub use config::GeneratorConfig;
pub use error::PipelineError;
pub use form::InvoiceForm;
pub use pipeline::{InvoicePipeline, PipelineBuilder};

pub use invoicer_layout::{FilesystemProbe, ImageProbe, LaidOutInvoice, LayoutConfig, ProbeError};
pub use invoicer_model::{
    parse_lenient, CompanyInfo, DraftCommand, Invoice, InvoiceDraft, InvoiceMeta, LineItem,
    Totals, ValidationError,
};
pub use invoicer_render_core::RenderError;
pub use invoicer_types::PageSize;
