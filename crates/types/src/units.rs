//! Physical units and page formats.
//!
//! All layout happens in PDF points (1/72 inch). Page formats and fixed
//! offsets are specified in millimetres and converted with [`mm`].

use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Converts millimetres to points.
pub const fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Page dimensions in millimetres.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }

    /// Page dimensions in points.
    pub fn size_pt(&self) -> Size {
        let (w, h) = self.dimensions_mm();
        Size::new(mm(w), mm(h))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A4 => f.write_str("a4"),
            PageSize::Letter => f.write_str("letter"),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            other => Err(format!("unknown page size '{}'", other)),
        }
    }
}
