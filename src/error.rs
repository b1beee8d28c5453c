//! Error types for docsift library.

use std::io;
use thiserror::Error;

/// Result type alias for docsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and search.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// The file could not be opened as a zip container, or an entry is corrupt.
    #[error("Unreadable container: {0}")]
    UnreadableContainer(String),

    /// A required part is absent from the container.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// The document part is not well-formed XML.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// The file format is neither a zip container nor a PDF.
    #[error("Unknown file format: not a DOCX container or PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a PDF page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Coarse failure category, for branching on cause without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input path does not exist.
    NotFound,
    /// Container cannot be opened or read.
    UnreadableContainer,
    /// Expected internal part is absent.
    MissingPart,
    /// Document XML is malformed.
    MalformedXml,
    /// Other I/O failure.
    Io,
    /// Input is not a recognised format.
    UnsupportedFormat,
    /// PDF-level failure (structure, encryption, page text).
    Pdf,
    /// Invalid caller input such as a bad page range.
    InvalidInput,
    /// Output rendering failure.
    Render,
    /// Anything else.
    Other,
}

impl Error {
    /// Get the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::UnreadableContainer(_) => ErrorKind::UnreadableContainer,
            Error::MissingPart(_) => ErrorKind::MissingPart,
            Error::MalformedXml(_) => ErrorKind::MalformedXml,
            Error::UnknownFormat | Error::UnsupportedVersion(_) => ErrorKind::UnsupportedFormat,
            Error::PdfParse(_) | Error::Encrypted | Error::TextExtract(_) => ErrorKind::Pdf,
            Error::PageOutOfRange(..) | Error::InvalidPageRange(_) => ErrorKind::InvalidInput,
            Error::Render(_) => ErrorKind::Render,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Map an I/O error raised while opening `path`, keeping "not found" distinct.
    pub(crate) fn from_open(err: io::Error, path: &std::path::Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Error::NotFound(format!("{}: {}", path.display(), err))
        } else {
            Error::Io(err)
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::UnreadableContainer(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
