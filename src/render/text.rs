//! Plain text rendering.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::ExtractedText;

/// Render extracted text in its flattened form, one paragraph per line.
pub fn to_text(text: &ExtractedText) -> String {
    text.flatten()
}

/// Write the flattened text to `path` as UTF-8.
///
/// An existing file is overwritten, never appended to.
pub fn write_text<P: AsRef<Path>>(path: P, text: &ExtractedText) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_text(text))?;
    log::debug!("Wrote {} paragraphs to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let text = ExtractedText::from_strings(["Hello, world!", "Second paragraph."]);
        assert_eq!(to_text(&text), "Hello, world!\nSecond paragraph.");
    }

    #[test]
    fn test_write_text_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv_content.txt");
        fs::write(&path, "stale content that is longer than the new one").unwrap();

        let text = ExtractedText::from_strings(["Überblick", "line two"]);
        write_text(&path, &text).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Überblick\nline two");
    }
}
