//! PDF extractor implementation.

use crate::error::Result;
use crate::model::ExtractedText;
use crate::parser::{ParseOptions, PdfParser};
use std::path::Path;

use super::DocumentExtractor;

/// PDF extractor: page text split into non-blank lines, in page order.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    pub(crate) const NAME: &'static str = "pdf";

    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExtractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText> {
        PdfParser::open_with_options(path, options.clone())?.extract_text()
    }

    fn extract_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<ExtractedText> {
        PdfParser::from_bytes_with_options(bytes, options.clone())?.extract_text()
    }
}
