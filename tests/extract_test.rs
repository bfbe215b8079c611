//! Integration tests for document extraction
//!
//! `.docx` fixtures are assembled in-test with the zip writer so the suite
//! needs no binary files checked in.

use formpatch::extract::docx::{read_docx, DOCUMENT_PART};
use formpatch::extract::{extract_docx_content, extract_printable, extract_sentences, ExtractError};
use formpatch::ExtractOptions;
use std::fs;
use std::io::{Cursor, Write};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn paragraph(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
}

fn table(rows: &[&[&str]]) -> String {
    let mut xml = String::from("<w:tbl>");
    for row in rows {
        xml.push_str("<w:tr>");
        for cell in row.iter() {
            xml.push_str("<w:tc>");
            xml.push_str(&paragraph(cell));
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

fn build_docx(parts: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

#[test]
fn test_docx_paragraphs_then_tables() {
    let body = format!(
        "{}{}{}{}",
        paragraph("Week 1 Personal Care Scenario"),
        table(&[&["Task", "", "Pass/Fail"], &["  ", ""], &["Oral care", "Pass"]]),
        paragraph("   "),
        paragraph("Student: Jordan &lt;J.&gt;"),
    );
    let docx = build_docx(&[
        ("[Content_Types].xml", "<Types/>".to_string()),
        (DOCUMENT_PART, document_xml(&body)),
    ]);

    let content = read_docx(Cursor::new(docx)).unwrap();
    assert_eq!(
        content.paragraphs,
        vec!["Week 1 Personal Care Scenario", "Student: Jordan <J.>"]
    );
    assert_eq!(content.table_rows, vec!["Task | Pass/Fail", "Oral care | Pass"]);
    assert_eq!(
        content.to_text(),
        "Week 1 Personal Care Scenario\n\nStudent: Jordan <J.>\n\nTask | Pass/Fail\n\nOral care | Pass"
    );
}

#[test]
fn test_docx_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.docx");
    fs::write(
        &path,
        build_docx(&[(DOCUMENT_PART, document_xml(&paragraph("Assess the patient.")))]),
    )
    .unwrap();

    assert_eq!(extract_docx_content(&path).unwrap(), "Assess the patient.");
}

#[test]
fn test_docx_missing_document_part() {
    let docx = build_docx(&[("word/styles.xml", "<w:styles/>".to_string())]);
    let err = read_docx(Cursor::new(docx)).unwrap_err();
    assert!(matches!(err, ExtractError::MissingPart(ref part) if part == DOCUMENT_PART));
}

#[test]
fn test_docx_reader_rejects_legacy_doc() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.doc");
    let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    bytes.extend(std::iter::repeat(0u8).take(504));
    fs::write(&path, bytes).unwrap();

    let err = extract_docx_content(&path).unwrap_err();
    assert!(matches!(err, ExtractError::Archive(_)));
}

#[test]
fn test_legacy_doc_heuristics() {
    // Word 97 stores body text as 8-bit runs between binary structures
    let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    bytes.extend(std::iter::repeat(0u8).take(64));
    bytes.extend_from_slice(b"Mrs. Lee needs help with morning care.\r");
    bytes.extend_from_slice(&[0x07, 0x00, 0x92, 0x15]);
    bytes.extend_from_slice(b"Provide privacy!\r");
    bytes.extend(std::iter::repeat(0xFFu8).take(16));

    let options = ExtractOptions::default();
    let printable = extract_printable(&bytes, &options);
    assert_eq!(printable, "Mrs. Lee needs help with morning care. Provide privacy!");
    assert!(printable
        .chars()
        .all(|c| matches!(c, '\x20'..='\x7E' | '\n' | '\t')));

    let sentences = extract_sentences(&bytes, &options).unwrap();
    assert_eq!(
        sentences,
        "Method with utf-8 encoding found:\nMrs.\nLee needs help with morning care.\nProvide privacy!"
    );
}
