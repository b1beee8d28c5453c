//! Page-level text from paginated sources.

use serde::{Deserialize, Serialize};

/// Plain text of a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text, as produced by the backend
    pub text: String,
}

impl PageText {
    /// Create a page text entry.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Check if the page carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_blank() {
        assert!(PageText::new(1, " \n\t").is_blank());
        assert!(!PageText::new(2, "Grade: A").is_blank());
    }
}
