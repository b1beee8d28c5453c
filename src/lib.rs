//! # docsift
//!
//! Plain-text extraction from DOCX and PDF documents, with case-insensitive
//! keyword line search over the result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::{extract, KeywordSet};
//!
//! fn main() -> docsift::Result<()> {
//!     let text = extract("resume.docx")?;
//!
//!     let keywords = KeywordSet::new(["multicentric", "trial"]);
//!     for line in text.filter(&keywords) {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **DOCX paragraphs**: every paragraph of `word/document.xml`, including
//!   those inside tables, text boxes and hyperlinks, in document order
//! - **Keyword filter**: case-insensitive substring matching, order preserved
//! - **PDF pages**: per-page text with per-document failure isolation
//! - **Typed errors**: callers branch on [`ErrorKind`] instead of messages

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod search;

// Re-export commonly used types
pub use convert::{DocumentExtractor, DocxExtractor, ExtractorRegistry, PdfExtractor};
pub use detect::{detect_format_from_bytes, detect_format_from_path, DocumentFormat};
pub use error::{Error, ErrorKind, Result};
pub use model::{ExtractedText, PageText, Paragraph, TextRun};
pub use parser::{
    extract_pdf_batch, extract_pdf_pages, DocxParser, ErrorMode, PageSelection, ParseOptions,
    PdfParser, PdfReport,
};
pub use render::{to_json, to_text, write_text, JsonFormat};
pub use search::{filter_lines, find_matches, KeywordSet, LineMatch};

use std::io::{Read, Seek};
use std::path::Path;

/// Extract the paragraph text of a DOCX file.
///
/// The file is opened as a zip container whatever its extension. Any
/// failure (missing file, corrupt container, missing `word/document.xml`,
/// malformed XML) is returned as an [`Error`]; no partial text is kept.
///
/// # Example
///
/// ```no_run
/// use docsift::extract;
///
/// let text = extract("resume.docx").unwrap();
/// std::fs::write("cv_content.txt", text.flatten()).unwrap();
/// ```
pub fn extract<P: AsRef<Path>>(path: P) -> Result<ExtractedText> {
    DocxParser::open(path)?.parse()
}

/// Extract the paragraph text of a DOCX held in memory.
pub fn extract_bytes(data: &[u8]) -> Result<ExtractedText> {
    DocxParser::from_bytes(data)?.parse()
}

/// Extract the paragraph text of a DOCX from a seekable reader.
pub fn extract_reader<R: Read + Seek>(reader: R) -> Result<ExtractedText> {
    DocxParser::from_reader(reader)?.parse()
}

/// Extract a DOCX or PDF, chosen by extension or magic bytes.
pub fn extract_document<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<ExtractedText> {
    ExtractorRegistry::with_defaults().extract(path.as_ref(), options)
}

/// Extract a DOCX and return the lines containing any keyword.
///
/// # Example
///
/// ```no_run
/// use docsift::{search, KeywordSet};
///
/// let lines = search("resume.docx", &KeywordSet::new(["trial"])).unwrap();
/// for line in lines {
///     println!("FOUND: {}", line);
/// }
/// ```
pub fn search<P: AsRef<Path>>(path: P, keywords: &KeywordSet) -> Result<Vec<String>> {
    Ok(extract(path)?.filter(keywords))
}
