//! DOCX text extraction.
//!
//! A DOCX file is a zip container. The main body lives in the
//! `word/document.xml` part, where paragraphs are `w:p` elements and text
//! runs are `w:t` elements of the WordprocessingML main namespace.
//! Elements are matched by namespace URI and local name, so the prefix a
//! producer chose does not matter.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::model::{ExtractedText, Paragraph, TextRun};

/// Internal path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// WordprocessingML main namespace.
pub const WORDPROCESSINGML_NS: &str =
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// DOCX container reader.
///
/// The container handle is held for the lifetime of the parser and
/// released when it is dropped.
pub struct DocxParser<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl DocxParser<File> {
    /// Open a DOCX file.
    ///
    /// The extension is not checked; any file is attempted as a container.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::from_open(e, path))?;
        Self::from_reader(file).map_err(|e| match e {
            Error::UnreadableContainer(msg) => {
                Error::UnreadableContainer(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl<'a> DocxParser<Cursor<&'a [u8]>> {
    /// Read a DOCX container from memory.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }
}

impl<R: Read + Seek> DocxParser<R> {
    /// Read a DOCX container from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive =
            ZipArchive::new(reader).map_err(|e| Error::UnreadableContainer(e.to_string()))?;
        Ok(Self { archive })
    }

    /// Names of all parts in the container.
    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    /// Read the raw bytes of a part.
    pub fn read_part(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut part = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => Error::MissingPart(name.to_string()),
            other => Error::UnreadableContainer(format!("{}: {}", name, other)),
        })?;

        let mut data = Vec::with_capacity(part.size() as usize);
        part.read_to_end(&mut data)
            .map_err(|e| Error::UnreadableContainer(format!("{}: {}", name, e)))?;
        Ok(data)
    }

    /// Parse the main document part into paragraphs, including empty ones.
    pub fn paragraphs(&mut self) -> Result<Vec<Paragraph>> {
        let xml = self.read_part(DOCUMENT_PART)?;
        log::debug!("Read {} ({} bytes)", DOCUMENT_PART, xml.len());
        parse_document_xml(&xml)
    }

    /// Extract the paragraph text sequence of the document.
    ///
    /// Extraction is atomic: on any failure no partial text is returned.
    pub fn parse(&mut self) -> Result<ExtractedText> {
        let paragraphs = self.paragraphs()?;
        let text = ExtractedText::from_paragraphs(&paragraphs);
        log::debug!(
            "Extracted {} of {} paragraphs with text",
            text.len(),
            paragraphs.len()
        );
        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Paragraph,
    Text,
}

fn classify(
    ns: &ResolveResult<'_>,
    local_name: &[u8],
    position: usize,
) -> Result<Option<Element>> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) if *uri == WORDPROCESSINGML_NS.as_bytes() => {
            Ok(match local_name {
                b"p" => Some(Element::Paragraph),
                b"t" => Some(Element::Text),
                _ => None,
            })
        }
        ResolveResult::Unknown(prefix) => Err(Error::MalformedXml(format!(
            "unbound prefix {:?} at position {}",
            String::from_utf8_lossy(prefix),
            position
        ))),
        _ => Ok(None),
    }
}

/// An open `w:t` element.
struct OpenRun {
    /// (paragraph index, run index) slots reserved at the start tag
    slots: Vec<(usize, usize)>,
    text: String,
    /// Only character data before the first child element belongs to the run.
    collecting: bool,
}

/// Parse a `word/document.xml` body into paragraphs, in document order.
///
/// Every paragraph element anywhere in the tree is returned, positioned by
/// its start tag. A run belongs to every paragraph enclosing it, so the
/// text of a paragraph nested inside another (text box content) also
/// counts toward the outer one. A run's text is the character data that
/// precedes its first child element.
pub fn parse_document_xml(xml: &[u8]) -> Result<Vec<Paragraph>> {
    let mut reader = NsReader::from_reader(xml);
    let mut buf = Vec::new();

    let mut paragraphs: Vec<Paragraph> = Vec::new();
    // Indices of paragraphs whose end tag has not been seen yet.
    let mut open: Vec<usize> = Vec::new();
    let mut runs: Vec<OpenRun> = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let position = reader.buffer_position();
        let (ns, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok(resolved) => resolved,
            Err(e) => return Err(malformed(position, e)),
        };

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if seen_root && depth == 0 {
                    return Err(Error::MalformedXml(format!(
                        "element after the root element at position {}",
                        position
                    )));
                }
                seen_root = true;
                let element = classify(&ns, e.local_name().as_ref(), position)?;
                if let Some(run) = runs.last_mut() {
                    run.collecting = false;
                }
                let is_empty = matches!(event, Event::Empty(_));
                match element {
                    Some(Element::Paragraph) => {
                        if !is_empty {
                            open.push(paragraphs.len());
                        }
                        paragraphs.push(Paragraph::new());
                    }
                    Some(Element::Text) => {
                        let mut slots = Vec::with_capacity(open.len());
                        for &idx in &open {
                            slots.push((idx, paragraphs[idx].runs.len()));
                            paragraphs[idx].add_run(TextRun::empty());
                        }
                        if !is_empty {
                            runs.push(OpenRun {
                                slots,
                                text: String::new(),
                                collecting: true,
                            });
                        }
                    }
                    None => {}
                }
                if !is_empty {
                    depth += 1;
                }
            }
            Event::Text(e) => {
                if depth == 0 {
                    if !e.iter().all(u8::is_ascii_whitespace) {
                        return Err(Error::MalformedXml(format!(
                            "text outside the root element at position {}",
                            position
                        )));
                    }
                } else if let Some(run) = runs.last_mut().filter(|run| run.collecting) {
                    let unescaped = e.unescape().map_err(|err| malformed(position, err))?;
                    run.text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if depth == 0 {
                    return Err(Error::MalformedXml(format!(
                        "CDATA outside the root element at position {}",
                        position
                    )));
                }
                if let Some(run) = runs.last_mut().filter(|run| run.collecting) {
                    run.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::MalformedXml(format!("unexpected end tag at position {}", position))
                })?;
                match classify(&ns, e.local_name().as_ref(), position)? {
                    Some(Element::Paragraph) => {
                        open.pop();
                    }
                    Some(Element::Text) => {
                        if let Some(run) = runs.pop() {
                            for (idx, slot) in run.slots {
                                paragraphs[idx].runs[slot] = TextRun::new(run.text.clone());
                            }
                        }
                    }
                    None => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(Error::MalformedXml("no root element found".to_string()));
    }
    if depth != 0 {
        return Err(Error::MalformedXml(format!(
            "unexpected end of document: {} unclosed element(s)",
            depth
        )));
    }

    Ok(paragraphs)
}

fn malformed(position: usize, err: quick_xml::Error) -> Error {
    Error::MalformedXml(format!("{} (at position {})", err, position))
}
