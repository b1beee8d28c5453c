//! DOCX extractor implementation.

use crate::error::Result;
use crate::model::ExtractedText;
use crate::parser::{DocxParser, ParseOptions};
use std::path::Path;

use super::DocumentExtractor;

/// DOCX extractor: the paragraph text of `word/document.xml`.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    _private: (),
}

impl DocxExtractor {
    pub(crate) const NAME: &'static str = "docx";

    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx", "docm", "dotx"]
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn extract(&self, path: &Path, _options: &ParseOptions) -> Result<ExtractedText> {
        DocxParser::open(path)?.parse()
    }

    fn extract_bytes(&self, bytes: &[u8], _options: &ParseOptions) -> Result<ExtractedText> {
        DocxParser::from_bytes(bytes)?.parse()
    }
}
