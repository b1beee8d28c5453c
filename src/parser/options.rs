//! Parsing options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for parsing documents.
///
/// DOCX extraction has no knobs; these apply to paginated (PDF) sources.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode for per-page failures
    pub error_mode: ErrorMode,

    /// Page selection (which pages to extract)
    pub pages: PageSelection,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose text cannot be extracted).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Skip invalid content and continue
    Lenient,
}

/// Page selection for paginated sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Several inclusive ranges, sorted and non-overlapping (1-indexed)
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10", "all").
    ///
    /// Lists are kept as ranges, so `"1,2-4000000000"` costs two entries.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                let (start, end) = parse_bounds(s, start, end)?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let (start, end) = parse_bounds(part, start, end)?;
                ranges.push(start..=end);
            } else {
                let page = parse_page(part)?;
                ranges.push(page..=page);
            }
        }

        Ok(PageSelection::Ranges(merge_ranges(ranges)))
    }
}

impl std::str::FromStr for PageSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Sort ranges and merge the overlapping or adjacent ones.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_unstable_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err(Error::InvalidPageRange(
            "page numbers start at 1".to_string(),
        )),
        Ok(page) => Ok(page),
        Err(_) => Err(Error::InvalidPageRange(format!(
            "invalid page number: {:?}",
            s.trim()
        ))),
    }
}

fn parse_bounds(range: &str, start: &str, end: &str) -> Result<(u32, u32)> {
    let start = parse_page(start)?;
    let end = parse_page(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(format!(
            "range {:?} is reversed",
            range
        )));
    }
    Ok((start, end))
}
