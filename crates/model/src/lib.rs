//! Data model for invoice generation.
//!
//! This crate owns everything the layout engine consumes:
//! - `LineItem`, `CompanyInfo`, `InvoiceMeta` and the `Invoice` aggregate
//! - `InvoiceDraft`, the versioned command target the front end mutates
//! - `parse_lenient`, the single place malformed numbers become zero

mod company;
mod draft;
mod error;
mod invoice;
mod line_item;
mod meta;
mod parse;

pub use company::CompanyInfo;
pub use draft::{DraftCommand, InvoiceDraft};
pub use error::ValidationError;
pub use invoice::{Invoice, Totals};
pub use line_item::LineItem;
pub use meta::InvoiceMeta;
pub use parse::parse_lenient;
