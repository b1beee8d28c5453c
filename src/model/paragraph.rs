//! Paragraph and run types.

use serde::{Deserialize, Serialize};

/// A paragraph: an ordered sequence of text runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in document order
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Append a run carrying text.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Append a run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Concatenate the non-empty run fragments, without separator.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|run| run.text.as_deref())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// True when no run carries any text.
    ///
    /// Whitespace counts as text: a run of `" "` keeps the paragraph.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(TextRun::is_empty)
    }
}

/// The smallest text-bearing unit within a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text fragment, absent for runs without character data
    pub text: Option<String>,
}

impl TextRun {
    /// Create a run with text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Create a run with no text.
    pub fn empty() -> Self {
        Self { text: None }
    }

    /// Check if this run has no text.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_concatenate_without_separator() {
        let mut p = Paragraph::new();
        p.add_text("Hello");
        p.add_text(", ");
        p.add_text("world");
        assert_eq!(p.plain_text(), "Hello, world");
    }

    #[test]
    fn test_empty_runs_are_skipped() {
        let mut p = Paragraph::with_text("a");
        p.add_run(TextRun::empty());
        p.add_text("");
        p.add_text("b");
        assert_eq!(p.plain_text(), "ab");
        assert!(!p.is_empty());
    }

    #[test]
    fn test_paragraph_without_text_is_empty() {
        let mut p = Paragraph::new();
        assert!(p.is_empty());
        p.add_run(TextRun::empty());
        p.add_text("");
        assert!(p.is_empty());
        assert_eq!(p.plain_text(), "");
    }

    #[test]
    fn test_whitespace_run_is_text() {
        let p = Paragraph::with_text(" ");
        assert!(!p.is_empty());
        assert_eq!(p.plain_text(), " ");
    }
}
