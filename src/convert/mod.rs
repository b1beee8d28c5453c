//! Extractor registry dispatching documents to format-specific extractors.
//!
//! # Example
//!
//! ```no_run
//! use docsift::convert::ExtractorRegistry;
//! use docsift::ParseOptions;
//! use std::path::Path;
//!
//! fn main() -> docsift::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let text = registry.extract(Path::new("resume.docx"), &ParseOptions::default())?;
//!     println!("{}", text.flatten());
//!     Ok(())
//! }
//! ```

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use crate::detect::{detect_format_from_path, DocumentFormat};
use crate::error::{Error, Result};
use crate::model::ExtractedText;
use crate::parser::ParseOptions;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for format-specific text extractors.
///
/// Implement this trait to add support for a new document format.
pub trait DocumentExtractor: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from a file.
    fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText>;

    /// Extract text from bytes.
    fn extract_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<ExtractedText>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping extensions and names to extractors.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn DocumentExtractor>>,
    by_name: HashMap<String, Arc<dyn DocumentExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the DOCX and PDF extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxExtractor::new()));
        registry.register(Arc::new(PdfExtractor::new()));
        registry
    }

    /// Register an extractor for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn DocumentExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentExtractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Pick the extractor for a file.
    ///
    /// The extension decides when it is registered; otherwise the file's
    /// magic bytes do.
    pub fn resolve(&self, path: &Path) -> Result<Arc<dyn DocumentExtractor>> {
        if let Some(extractor) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.get_by_extension(ext))
        {
            return Ok(extractor);
        }

        let format = detect_format_from_path(path)?;
        log::debug!("Detected {} for {}", format, path.display());
        let name = match format {
            DocumentFormat::Container => DocxExtractor::NAME,
            DocumentFormat::Pdf { .. } => PdfExtractor::NAME,
        };
        self.get_by_name(name)
            .ok_or_else(|| Error::Other(format!("No extractor registered for {}", format)))
    }

    /// Extract a file using the appropriate extractor.
    pub fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText> {
        self.resolve(path)?.extract(path, options)
    }

    /// Extract bytes using the extension to pick the extractor.
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ParseOptions,
    ) -> Result<ExtractedText> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::Other(format!("No extractor for extension: {}", ext)))?;

        extractor.extract_bytes(bytes, options)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.supports("docx"));
        assert!(registry.supports("PDF"));
        assert!(!registry.supports("xlsx"));
        assert_eq!(
            registry.supported_extensions(),
            vec!["docm", "docx", "dotx", "pdf"]
        );
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(registry.get_by_name("DOCX").unwrap().name(), "docx");
        assert!(registry.get_by_name("unknown").is_none());
    }

    #[test]
    fn test_resolve_missing_file_without_extension() {
        let registry = ExtractorRegistry::with_defaults();
        let result = registry.resolve(Path::new("definitely/not/here"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
