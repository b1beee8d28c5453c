//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

/// A `w:p` element with one `w:r`/`w:t` per run.
pub fn paragraph(runs: &[&str]) -> String {
    let mut xml = String::from("<w:p>");
    for run in runs {
        xml.push_str(&format!(
            "<w:r><w:t xml:space=\"preserve\">{}</w:t></w:r>",
            run
        ));
    }
    xml.push_str("</w:p>");
    xml
}

/// A complete `word/document.xml` wrapping `body`.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        W_NS, body
    )
}

/// A zip container holding the given parts.
pub fn container(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// DOCX bytes whose body is `body`.
pub fn docx_bytes(body: &str) -> Vec<u8> {
    container(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("word/document.xml", &document_xml(body)),
    ])
}

/// Write a DOCX with the given paragraphs (each a list of runs) to `dir/name`.
pub fn write_docx(dir: &Path, name: &str, paragraphs: &[&[&str]]) -> PathBuf {
    let body: String = paragraphs.iter().map(|runs| paragraph(runs)).collect();
    let path = dir.join(name);
    std::fs::write(&path, docx_bytes(&body)).unwrap();
    path
}

/// A PDF with one page per entry, each showing its text in Courier.
pub fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    data
}

/// Write a PDF (see [`pdf_bytes`]) to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, pages: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pdf_bytes(pages)).unwrap();
    path
}
