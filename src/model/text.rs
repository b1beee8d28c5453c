//! Extracted text: the ordered paragraph sequence of a document.

use serde::{Deserialize, Serialize};

use super::{PageText, Paragraph};
use crate::search::{self, KeywordSet, LineMatch};

/// Ordered paragraph strings extracted from a document.
///
/// Paragraph order mirrors document order. Paragraphs are never empty;
/// the newline-joined form returned by [`ExtractedText::flatten`] is the
/// canonical flattened representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    paragraphs: Vec<String>,
}

impl ExtractedText {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from paragraph strings, dropping empty ones.
    pub fn from_strings<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut text = Self::new();
        for p in paragraphs {
            text.push(p);
        }
        text
    }

    /// Materialize parsed paragraphs, dropping those without text.
    pub fn from_paragraphs(paragraphs: &[Paragraph]) -> Self {
        Self::from_strings(paragraphs.iter().map(Paragraph::plain_text))
    }

    /// Flatten PDF pages into lines, in page order.
    ///
    /// Blank lines are dropped; other lines are kept verbatim.
    pub fn from_pages(pages: &[PageText]) -> Self {
        Self::from_strings(
            pages
                .iter()
                .flat_map(|page| page.text.lines())
                .filter(|line| !line.trim().is_empty()),
        )
    }

    /// Re-split a flattened text on `'\n'`.
    ///
    /// The empty string yields an empty sequence, matching what
    /// [`ExtractedText::flatten`] produces for one.
    pub fn from_flat(flat: &str) -> Self {
        if flat.is_empty() {
            return Self::new();
        }
        Self {
            paragraphs: flat.split('\n').map(String::from).collect(),
        }
    }

    /// Append a paragraph unless it is empty.
    pub fn push(&mut self, paragraph: impl Into<String>) {
        let paragraph = paragraph.into();
        if !paragraph.is_empty() {
            self.paragraphs.push(paragraph);
        }
    }

    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Consume into the paragraph vector.
    pub fn into_paragraphs(self) -> Vec<String> {
        self.paragraphs
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if no paragraphs were extracted.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Newline-joined form, one paragraph per line.
    pub fn flatten(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// Lines of the flattened form.
    ///
    /// Differs from [`ExtractedText::paragraphs`] only when a paragraph
    /// itself contains a newline.
    pub fn lines(&self) -> Vec<&str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.split('\n'))
            .collect()
    }

    /// Lines containing any keyword, case-insensitively, in order.
    pub fn filter(&self, keywords: &KeywordSet) -> Vec<String> {
        search::filter_lines(self.lines(), keywords)
    }

    /// Matching lines with line numbers and the keywords that hit.
    pub fn find_matches(&self, keywords: &KeywordSet) -> Vec<LineMatch> {
        search::find_matches(self.lines(), keywords)
    }

    /// Whitespace-separated word count.
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum()
    }

    /// Character count of the flattened form.
    pub fn char_count(&self) -> usize {
        let separators = self.paragraphs.len().saturating_sub(1);
        self.paragraphs
            .iter()
            .map(|p| p.chars().count())
            .sum::<usize>()
            + separators
    }
}

impl<'a> IntoIterator for &'a ExtractedText {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paragraphs.iter()
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.flatten())
    }
}
