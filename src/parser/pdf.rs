//! PDF page text extraction.
//!
//! Page text comes from a [`PageTextSource`]. [`LopdfSource`] is the
//! concrete backend; the trait keeps `lopdf` types out of the rest of the
//! crate and lets tests substitute their own source.

use std::path::{Path, PathBuf};

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_format_from_bytes, detect_format_from_path, DocumentFormat};
use crate::error::{Error, Result};
use crate::model::{ExtractedText, PageText};

use super::options::{ErrorMode, ParseOptions};

/// Abstract access to the plain text of a paginated document.
pub trait PageTextSource {
    /// Page numbers (1-indexed) in page order.
    fn pages(&self) -> Vec<u32>;

    /// Plain text of one page.
    fn page_text(&self, page: u32) -> Result<String>;
}

/// [`PageTextSource`] backed by `lopdf::Document`.
pub struct LopdfSource {
    doc: LopdfDocument,
}

impl LopdfSource {
    /// Load from a file path. The PDF header is checked first.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !detect_format_from_path(path)?.is_pdf() {
            return Err(Error::UnknownFormat);
        }
        let doc = LopdfDocument::load(path)?;
        Ok(Self { doc })
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        match detect_format_from_bytes(data)? {
            DocumentFormat::Pdf { .. } => {}
            DocumentFormat::Container => return Err(Error::UnknownFormat),
        }
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc })
    }

    /// Direct access to the underlying `lopdf::Document`.
    pub fn raw_doc(&self) -> &LopdfDocument {
        &self.doc
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

impl PageTextSource for LopdfSource {
    fn pages(&self) -> Vec<u32> {
        self.doc.get_pages().keys().copied().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))
    }
}

/// PDF page text parser.
pub struct PdfParser<S: PageTextSource = LopdfSource> {
    source: S,
    options: ParseOptions,
}

impl PdfParser<LopdfSource> {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let source = LopdfSource::load_file(path)?;
        if source.is_encrypted() {
            log::warn!("Document is encrypted; page text may be unreadable");
        }
        Ok(Self::with_source(source, options))
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Ok(Self::with_source(LopdfSource::load_bytes(data)?, options))
    }
}

impl<S: PageTextSource> PdfParser<S> {
    /// Wrap an arbitrary page text source.
    pub fn with_source(source: S, options: ParseOptions) -> Self {
        Self { source, options }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.source.pages().len() as u32
    }

    /// Extract the text of each selected page, in page order.
    ///
    /// In strict mode the first failing page aborts extraction; in lenient
    /// mode it is logged and skipped.
    pub fn extract_pages(&self) -> Result<Vec<PageText>> {
        let mut pages = Vec::new();

        for page_num in self.source.pages() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.source.page_text(page_num) {
                Ok(text) => pages.push(PageText::new(page_num, text)),
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        Ok(pages)
    }

    /// Extract selected pages as line-oriented text for searching.
    pub fn extract_text(&self) -> Result<ExtractedText> {
        Ok(ExtractedText::from_pages(&self.extract_pages()?))
    }
}

/// Outcome of extracting one document in a multi-document run.
#[derive(Debug)]
pub struct PdfReport {
    /// Input path
    pub path: PathBuf,

    /// Pages on success, the failure otherwise
    pub outcome: Result<Vec<PageText>>,
}

impl PdfReport {
    /// Check if extraction succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Extracted pages, if extraction succeeded.
    pub fn pages(&self) -> Option<&[PageText]> {
        self.outcome.as_ref().ok().map(Vec::as_slice)
    }

    /// The failure, if extraction failed.
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }
}

/// Extract the page text of every selected page of a PDF file.
pub fn extract_pdf_pages<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Vec<PageText>> {
    PdfParser::open_with_options(path, options.clone())?.extract_pages()
}

/// Extract several PDF files in order.
///
/// A failing document is recorded in its report and does not stop the
/// documents after it.
pub fn extract_pdf_batch<I, P>(paths: I, options: &ParseOptions) -> Vec<PdfReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| {
            let path = path.as_ref();
            let outcome = extract_pdf_pages(path, options);
            if let Err(ref e) = outcome {
                log::warn!("Error reading {}: {}", path.display(), e);
            }
            PdfReport {
                path: path.to_path_buf(),
                outcome,
            }
        })
        .collect()
}
