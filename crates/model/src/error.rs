use thiserror::Error;

/// Input that cannot become part of an invoice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Line item is missing a description")]
    MissingDescription,
    #[error("Quantity must be a non-negative number, got {0}")]
    NegativeQuantity(f64),
    #[error("Unit price must be a non-negative number, got {0}")]
    NegativeUnitPrice(f64),
    #[error("An invoice needs at least one line item")]
    NoItems,
    #[error("No line item at index {index} (draft has {len} items)")]
    ItemIndexOutOfRange { index: usize, len: usize },
}
