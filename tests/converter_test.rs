//! Integration tests for the extractor registry.

mod common;

use std::path::Path;
use std::sync::Arc;

use docsift::convert::{DocumentExtractor, DocxExtractor, ExtractorRegistry, PdfExtractor};
use docsift::error::Result;
use docsift::{ErrorKind, ExtractedText, ParseOptions};

/// Mock extractor for testing.
struct MockExtractor {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockExtractor {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentExtractor for MockExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, _path: &Path, _options: &ParseOptions) -> Result<ExtractedText> {
        Ok(ExtractedText::from_strings([format!("Extracted by {}", self.name)]))
    }

    fn extract_bytes(&self, _bytes: &[u8], _options: &ParseOptions) -> Result<ExtractedText> {
        Ok(ExtractedText::from_strings([format!(
            "Extracted bytes by {}",
            self.name
        )]))
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = ExtractorRegistry::new();

    assert!(!registry.supports("pdf"));
    assert!(!registry.supports("docx"));
    assert!(registry.supported_extensions().is_empty());
}

#[test]
fn test_registry_with_defaults() {
    let registry = ExtractorRegistry::with_defaults();

    assert!(registry.supports("docx"));
    assert!(registry.supports("DOCX")); // Case insensitive
    assert!(registry.supports("pdf"));
    assert!(!registry.supports("odt"));
}

#[test]
fn test_registry_register_mock() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::new(vec!["txt", "text"], "text")));

    assert!(registry.supports("txt"));
    assert!(registry.supports("TEXT"));

    let text = registry
        .extract(Path::new("notes.txt"), &ParseOptions::default())
        .unwrap();
    assert_eq!(text.paragraphs(), &["Extracted by text"]);
}

#[test]
fn test_registry_later_registration_wins() {
    let mut registry = ExtractorRegistry::with_defaults();
    registry.register(Arc::new(MockExtractor::new(vec!["docx"], "override")));

    let extractor = registry.get_by_extension("docx").unwrap();
    assert_eq!(extractor.name(), "override");
    assert_eq!(registry.get_by_name("docx").unwrap().name(), "docx");
}

#[test]
fn test_extractor_names() {
    assert_eq!(DocxExtractor::new().name(), "docx");
    assert_eq!(PdfExtractor::new().name(), "pdf");
    assert_eq!(PdfExtractor::new().supported_extensions(), &["pdf"]);
}

#[test]
fn test_registry_extract_docx_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_docx(dir.path(), "cv.docx", &[&["Clinical ", "trial"]]);

    let text = ExtractorRegistry::with_defaults()
        .extract(&path, &ParseOptions::default())
        .unwrap();
    assert_eq!(text.paragraphs(), &["Clinical trial"]);
}

#[test]
fn test_registry_detects_docx_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_docx(dir.path(), "download", &[&["sniffed"]]);

    let registry = ExtractorRegistry::with_defaults();
    assert_eq!(registry.resolve(&path).unwrap().name(), "docx");
    let text = registry.extract(&path, &ParseOptions::default()).unwrap();
    assert_eq!(text.paragraphs(), &["sniffed"]);
}

#[test]
fn test_registry_detects_pdf_with_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_pdf(dir.path(), "scan.dat", &["page"]);

    let registry = ExtractorRegistry::with_defaults();
    assert_eq!(registry.resolve(&path).unwrap().name(), "pdf");
}

#[test]
fn test_registry_unknown_content_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readme.xyz");
    std::fs::write(&path, "plain words").unwrap();

    let err = ExtractorRegistry::with_defaults()
        .extract(&path, &ParseOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}

#[test]
fn test_registry_extract_bytes() {
    let registry = ExtractorRegistry::with_defaults();
    let data = common::docx_bytes(&common::paragraph(&["in memory"]));

    let text = registry
        .extract_bytes(&data, "docx", &ParseOptions::default())
        .unwrap();
    assert_eq!(text.paragraphs(), &["in memory"]);

    let result = registry.extract_bytes(b"test", "xyz", &ParseOptions::default());
    assert!(result.is_err());
}
