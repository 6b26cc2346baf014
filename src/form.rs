//! JSON form input for the command line tool.

use crate::error::PipelineError;
use invoicer_model::{
    parse_lenient, CompanyInfo, DraftCommand, Invoice, InvoiceDraft, InvoiceMeta, LineItem,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTES: &str = "Thank you for your business!";

/// A number typed into a form field. Either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    pub fn value(&self) -> f64 {
        match self {
            FormNumber::Number(n) if n.is_finite() => *n,
            FormNumber::Number(_) => 0.0,
            FormNumber::Text(text) => parse_lenient(text),
        }
    }
}

fn value_or_zero(number: &Option<FormNumber>) -> f64 {
    number.as_ref().map_or(0.0, FormNumber::value)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyForm {
    pub name: String,
    /// Multi-line address, one line per `\n`.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Option<FormNumber>,
    #[serde(default)]
    pub unit_price: Option<FormNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceForm {
    pub company: CompanyForm,
    #[serde(default)]
    pub logo: Option<PathBuf>,
    #[serde(default)]
    pub discount: Option<FormNumber>,
    #[serde(default)]
    pub items: Vec<ItemForm>,
}

impl InvoiceForm {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replays the form into a draft and snapshots it. A relative logo path
    /// is resolved against `base_dir`.
    pub fn into_invoice(self, meta: InvoiceMeta, base_dir: Option<&Path>) -> Result<Invoice, PipelineError> {
        let company = CompanyInfo::new(self.company.name.trim())
            .with_address_text(&self.company.address)
            .with_notes(self.company.notes.unwrap_or_else(|| DEFAULT_NOTES.to_string()));
        let logo = self.logo.map(|path| match base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        });

        let mut draft = InvoiceDraft::new(company);
        draft.apply(DraftCommand::SetLogo(logo))?;
        draft.apply(DraftCommand::SetDiscount(value_or_zero(&self.discount)))?;
        for (index, item) in self.items.iter().enumerate() {
            let line = LineItem::new(
                item.description.as_str(),
                value_or_zero(&item.quantity),
                value_or_zero(&item.unit_price),
            )
            .inspect_err(|e| log::warn!("Item {} rejected: {}", index + 1, e))?;
            draft.apply(DraftCommand::AddItem(line))?;
        }
        log::debug!("Form replayed into draft version {}", draft.version());

        Ok(draft.finalize(meta)?)
    }
}
