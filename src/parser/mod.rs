//! Document parsing module.

pub mod docx;
mod options;
pub mod pdf;

pub use docx::{parse_document_xml, DocxParser, DOCUMENT_PART, WORDPROCESSINGML_NS};
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use pdf::{
    extract_pdf_batch, extract_pdf_pages, LopdfSource, PageTextSource, PdfParser, PdfReport,
};
