//! Input format detection from magic bytes.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detected input format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    /// A zip container (DOCX and other packaged-XML documents)
    Container,
    /// A PDF file with its header version (e.g., "1.7", "2.0")
    Pdf { version: String },
}

impl DocumentFormat {
    /// Whether this is a PDF.
    pub fn is_pdf(&self) -> bool {
        matches!(self, DocumentFormat::Pdf { .. })
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Container => write!(f, "DOCX container"),
            DocumentFormat::Pdf { version } => write!(f, "PDF {}", version),
        }
    }
}

/// Zip local file header signature.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const HEADER_LEN: usize = 16;

/// Detect the format of a file from its first bytes.
///
/// # Example
/// ```no_run
/// use docsift::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("resume.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_open(e, path))?;

    // Short files are still classified; read_exact would reject them outright.
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format from a byte slice holding at least the start of the file.
///
/// # Returns
/// * `Ok(DocumentFormat)` for a zip container or a PDF with a valid version
/// * `Err(Error::UnknownFormat)` for anything else
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocumentFormat::Container);
    }

    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(DocumentFormat::Pdf { version })
}

fn is_valid_version(version: &str) -> bool {
    let chars: Vec<char> = version.chars().collect();
    chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

/// Check if a file is a PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(DocumentFormat::Pdf { .. }))
}

/// Check if a file is a zip container.
pub fn is_container<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(DocumentFormat::Container))
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(DocumentFormat::Pdf { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_container() {
        let data = b"PK\x03\x04\x14\x00\x06\x00";
        assert_eq!(
            detect_format_from_bytes(data).unwrap(),
            DocumentFormat::Container
        );
    }

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(
            format,
            DocumentFormat::Pdf {
                version: "1.7".to_string()
            }
        );
        assert!(format.is_pdf());
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_format_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        assert!(matches!(
            detect_format_from_bytes(b"%PDF"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b""),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_bad_pdf_version() {
        let result = detect_format_from_bytes(b"%PDF-x.y\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(_))));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"PK\x03\x04"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentFormat::Container.to_string(), "DOCX container");
        let pdf = DocumentFormat::Pdf {
            version: "2.0".into(),
        };
        assert_eq!(pdf.to_string(), "PDF 2.0");
    }
}
