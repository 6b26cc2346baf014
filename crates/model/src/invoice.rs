use crate::company::CompanyInfo;
use crate::error::ValidationError;
use crate::line_item::LineItem;
use crate::meta::InvoiceMeta;
use std::path::{Path, PathBuf};

/// Amounts derived from an invoice's items and discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub total_due: f64,
}

impl Totals {
    pub fn compute<'a>(items: impl IntoIterator<Item = &'a LineItem>, discount_percent: f64) -> Self {
        let subtotal: f64 = items.into_iter().map(LineItem::line_total).sum();
        let discount_amount = subtotal * (discount_percent / 100.0);
        Self {
            subtotal,
            discount_percent,
            discount_amount,
            total_due: subtotal - discount_amount,
        }
    }
}

/// A finalized invoice, built fresh for each generation request.
///
/// Always holds at least one item. The discount is clamped to be
/// non-negative but has no upper bound, so a discount above 100% yields a
/// negative total.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    company: CompanyInfo,
    meta: InvoiceMeta,
    logo_path: Option<PathBuf>,
    items: Vec<LineItem>,
    discount_percent: f64,
}

impl Invoice {
    pub fn new(
        company: CompanyInfo,
        meta: InvoiceMeta,
        logo_path: Option<PathBuf>,
        items: Vec<LineItem>,
        discount_percent: f64,
    ) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        Ok(Self {
            company,
            meta,
            logo_path,
            items,
            discount_percent: clamp_discount(discount_percent),
        })
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    pub fn meta(&self) -> &InvoiceMeta {
        &self.meta
    }

    pub fn logo_path(&self) -> Option<&Path> {
        self.logo_path.as_deref()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items, self.discount_percent)
    }
}

pub(crate) fn clamp_discount(percent: f64) -> f64 {
    if percent.is_finite() { percent.max(0.0) } else { 0.0 }
}
