//! Keyword line filtering.
//!
//! A keyword matches a line when it occurs anywhere in it, ignoring case.
//! There is no tokenization and no word-boundary handling: `"trial"`
//! matches `"industrial design"`.

use serde::{Deserialize, Serialize};

/// A set of case-insensitive substring keywords.
///
/// Keywords differing only in case are kept once. The empty keyword occurs
/// in every line, so it matches all of them; only an empty set matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    /// (as given, lowercased)
    keywords: Vec<(String, String)>,
}

impl KeywordSet {
    /// Build a keyword set.
    ///
    /// # Example
    ///
    /// ```
    /// use docsift::KeywordSet;
    ///
    /// let keywords = KeywordSet::new(["multicentric", "trial"]);
    /// assert!(keywords.matches("Multicentric Trial coordinator"));
    /// ```
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for keyword in keywords {
            set.insert(keyword);
        }
        set
    }

    /// Add a keyword. Returns false if it was already present.
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        let lowered = keyword.to_lowercase();
        if self.keywords.iter().any(|(_, l)| *l == lowered) {
            return false;
        }
        self.keywords.push((keyword, lowered));
        true
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the set holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords as given by the caller.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|(k, _)| k.as_str())
    }

    /// Check if any keyword occurs in `line`, ignoring case.
    pub fn matches(&self, line: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let line = line.to_lowercase();
        self.keywords.iter().any(|(_, k)| line.contains(k.as_str()))
    }

    /// Keywords (as given) occurring in `line`.
    pub fn hits(&self, line: &str) -> Vec<String> {
        if self.keywords.is_empty() {
            return Vec::new();
        }
        let line = line.to_lowercase();
        self.keywords
            .iter()
            .filter(|(_, k)| line.contains(k.as_str()))
            .map(|(original, _)| original.clone())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A line that matched at least one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// Line number in the flattened text (1-indexed)
    pub line_number: usize,

    /// The line, verbatim
    pub line: String,

    /// Keywords that occur in the line
    pub keywords: Vec<String>,
}

/// Lines containing any keyword, case-insensitively, in original order.
///
/// No deduplication and no limit. Empty input or an empty keyword set
/// yields an empty result.
pub fn filter_lines<I, S>(lines: I, keywords: &KeywordSet) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if keywords.is_empty() {
        return Vec::new();
    }
    lines
        .into_iter()
        .filter(|line| keywords.matches(line.as_ref()))
        .map(|line| line.as_ref().to_string())
        .collect()
}

/// Like [`filter_lines`], also reporting line numbers and hit keywords.
pub fn find_matches<I, S>(lines: I, keywords: &KeywordSet) -> Vec<LineMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if keywords.is_empty() {
        return Vec::new();
    }
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.as_ref();
            let hits = keywords.hits(line);
            (!hits.is_empty()).then(|| LineMatch {
                line_number: idx + 1,
                line: line.to_string(),
                keywords: hits,
            })
        })
        .collect()
}
