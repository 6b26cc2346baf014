use serde::{Deserialize, Serialize};

/// The issuing company, printed in the invoice header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CompanyInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address_lines: Vec::new(),
            notes: None,
        }
    }

    pub fn with_address_line(mut self, line: impl Into<String>) -> Self {
        self.address_lines.push(line.into());
        self
    }

    /// Appends the lines of a multi-line address field. Segments are trimmed
    /// and blank ones dropped.
    pub fn with_address_text(mut self, text: &str) -> Self {
        self.address_lines.extend(
            text.split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Notes text if present and non-empty.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}
