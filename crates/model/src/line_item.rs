use crate::error::ValidationError;
use crate::parse::parse_lenient;
use serde::{Deserialize, Serialize};

/// One billable row. Immutable once constructed.
///
/// Deserialization goes through [`LineItem::new`], so serialized items are
/// validated like any other input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineItemFields")]
pub struct LineItem {
    description: String,
    quantity: f64,
    unit_price: f64,
}

#[derive(Deserialize)]
struct LineItemFields {
    description: String,
    quantity: f64,
    unit_price: f64,
}

impl TryFrom<LineItemFields> for LineItem {
    type Error = ValidationError;

    fn try_from(fields: LineItemFields) -> Result<Self, Self::Error> {
        Self::new(fields.description, fields.quantity, fields.unit_price)
    }
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Result<Self, ValidationError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(ValidationError::NegativeQuantity(quantity));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(ValidationError::NegativeUnitPrice(unit_price));
        }
        Ok(Self {
            description,
            quantity,
            unit_price,
        })
    }

    /// Builds an item from raw form text. Malformed numbers become zero.
    pub fn from_form(
        description: &str,
        quantity: &str,
        unit_price: &str,
    ) -> Result<Self, ValidationError> {
        Self::new(description, parse_lenient(quantity), parse_lenient(unit_price))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}
