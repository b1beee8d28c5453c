//! Document model types for extracted content.
//!
//! Parsers produce these types and the search and render layers consume
//! them. Nothing here knows about containers, XML or PDF objects.

mod page;
mod paragraph;
mod text;

pub use page::PageText;
pub use paragraph::{Paragraph, TextRun};
pub use text::ExtractedText;
