use crate::company::CompanyInfo;
use crate::error::ValidationError;
use crate::invoice::{clamp_discount, Invoice, Totals};
use crate::line_item::LineItem;
use crate::meta::InvoiceMeta;
use crate::parse::parse_lenient;
use std::path::PathBuf;

/// An edit to an [`InvoiceDraft`].
#[derive(Debug, Clone, PartialEq)]
pub enum DraftCommand {
    AddItem(LineItem),
    RemoveItem(usize),
    ClearItems,
    SetCompany(CompanyInfo),
    SetLogo(Option<PathBuf>),
    SetDiscount(f64),
}

/// Mutable, versioned form state from which invoices are snapshotted.
///
/// Every successful command increments the version. Items are never edited
/// in place; they are only added, removed or cleared.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    company: CompanyInfo,
    logo_path: Option<PathBuf>,
    items: Vec<LineItem>,
    discount_percent: f64,
    version: u64,
}

impl InvoiceDraft {
    pub fn new(company: CompanyInfo) -> Self {
        Self {
            company,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, command: DraftCommand) -> Result<u64, ValidationError> {
        match command {
            DraftCommand::AddItem(item) => self.items.push(item),
            DraftCommand::RemoveItem(index) => {
                if index >= self.items.len() {
                    return Err(ValidationError::ItemIndexOutOfRange {
                        index,
                        len: self.items.len(),
                    });
                }
                self.items.remove(index);
            }
            DraftCommand::ClearItems => self.items.clear(),
            DraftCommand::SetCompany(company) => self.company = company,
            DraftCommand::SetLogo(path) => self.logo_path = path,
            DraftCommand::SetDiscount(percent) => self.discount_percent = percent,
        }
        self.version += 1;
        Ok(self.version)
    }

    /// Applies a discount typed into a text field; malformed input means 0%.
    pub fn set_discount_text(&mut self, text: &str) -> u64 {
        self.version += 1;
        self.discount_percent = parse_lenient(text);
        self.version
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    /// Live totals preview for the current state.
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items, clamp_discount(self.discount_percent))
    }

    /// Snapshots the draft into an [`Invoice`]. Fails if there are no items.
    pub fn finalize(&self, meta: InvoiceMeta) -> Result<Invoice, ValidationError> {
        Invoice::new(
            self.company.clone(),
            meta,
            self.logo_path.clone(),
            self.items.clone(),
            self.discount_percent,
        )
    }
}
