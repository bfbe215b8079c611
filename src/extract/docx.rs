//! Paragraph and table text from `.docx` files
//!
//! Reads `word/document.xml` from the OOXML zip container. Body paragraphs
//! come first, then one line per table row with cells joined by ` | `.
//! Only direct children of `w:body` count as paragraphs and tables, so
//! content controls, text boxes and nested tables are skipped. Merged cells
//! repeat once per grid column they cover.

use super::ExtractError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Text recovered from a `.docx` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxContent {
    /// Non-blank body paragraphs, untrimmed
    pub paragraphs: Vec<String>,
    /// Top-level table rows, cells joined with ` | `
    pub table_rows: Vec<String>,
}

impl DocxContent {
    /// Paragraphs then table rows, separated by blank lines
    pub fn to_text(&self) -> String {
        self.paragraphs
            .iter()
            .chain(self.table_rows.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Extract the text of the `.docx` file at `path`
pub fn extract_docx_content(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::FileRead(path.to_path_buf(), e))?;
    Ok(read_docx(file)?.to_text())
}

/// Parse a `.docx` container from any seekable reader
pub fn read_docx<R: Read + Seek>(reader: R) -> Result<DocxContent, ExtractError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut entry = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
        ZipError::FileNotFound => ExtractError::MissingPart(DOCUMENT_PART.to_string()),
        other => other.into(),
    })?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    parse_document_xml(&xml)
}

/// Walk `word/document.xml` and collect paragraph and table text
pub fn parse_document_xml(xml: &str) -> Result<DocxContent, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut walker = DocumentWalker::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => walker.start(&e),
            Ok(Event::Empty(e)) => {
                walker.start(&e);
                walker.end();
            }
            Ok(Event::Text(e)) => {
                if walker.in_text() {
                    let text = e.unescape().map_err(|err| ExtractError::Xml(err.to_string()))?;
                    walker.push(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if walker.in_text() {
                    walker.push(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => walker.end(),
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(walker.content)
}

/// What an open element means to the walker. Only direct children of the
/// roles below are interpreted; anything else is an opaque subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Body,
    Table,
    Row,
    RowProps,
    Cell,
    CellProps,
    Paragraph,
    Hyperlink,
    Run,
    Text,
    Other,
}

/// Vertical merge state of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VMerge {
    Unmerged,
    Restart,
    Continue,
}

#[derive(Default)]
struct TableState {
    /// Text and span of the cell starting at each grid column, for merges
    columns: HashMap<usize, (String, usize)>,
}

#[derive(Default)]
struct RowState {
    cells: Vec<String>,
    column: usize,
}

struct CellState {
    paragraphs: Vec<String>,
    span: usize,
    merge: VMerge,
}

#[derive(Default)]
struct DocumentWalker {
    content: DocxContent,
    stack: Vec<Node>,
    table: Option<TableState>,
    row: Option<RowState>,
    cell: Option<CellState>,
    paragraph: Option<String>,
}

impl DocumentWalker {
    fn in_text(&self) -> bool {
        self.stack.last() == Some(&Node::Text)
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        let name = e.local_name();
        let node = match (self.stack.last().copied(), name.as_ref()) {
            (None, _) => Node::Other,
            (Some(_), b"body") if self.stack.len() == 1 => Node::Body,
            (Some(Node::Body), b"p") | (Some(Node::Cell), b"p") => {
                self.paragraph = Some(String::new());
                Node::Paragraph
            }
            (Some(Node::Body), b"tbl") => {
                self.table = Some(TableState::default());
                Node::Table
            }
            (Some(Node::Table), b"tr") => {
                self.row = Some(RowState::default());
                Node::Row
            }
            (Some(Node::Row), b"trPr") => Node::RowProps,
            (Some(Node::RowProps), b"gridBefore") => {
                if let Some(row) = self.row.as_mut() {
                    row.column = attr_value(e, b"val").and_then(|v| v.parse().ok()).unwrap_or(0);
                }
                Node::Other
            }
            (Some(Node::Row), b"tc") => {
                self.cell = Some(CellState {
                    paragraphs: Vec::new(),
                    span: 1,
                    merge: VMerge::Unmerged,
                });
                Node::Cell
            }
            (Some(Node::Cell), b"tcPr") => Node::CellProps,
            (Some(Node::CellProps), b"gridSpan") => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.span = attr_value(e, b"val")
                        .and_then(|v| v.parse().ok())
                        .filter(|&span| span > 0)
                        .unwrap_or(1);
                }
                Node::Other
            }
            (Some(Node::CellProps), b"vMerge") => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.merge = match attr_value(e, b"val").as_deref() {
                        Some("restart") => VMerge::Restart,
                        _ => VMerge::Continue,
                    };
                }
                Node::Other
            }
            (Some(Node::Paragraph), b"hyperlink") => Node::Hyperlink,
            (Some(Node::Paragraph), b"r") | (Some(Node::Hyperlink), b"r") => Node::Run,
            (Some(Node::Run), b"t") => Node::Text,
            (Some(Node::Run), b"tab") | (Some(Node::Run), b"ptab") => {
                self.push("\t");
                Node::Other
            }
            (Some(Node::Run), b"cr") => {
                self.push("\n");
                Node::Other
            }
            (Some(Node::Run), b"br") => {
                if is_line_break(e) {
                    self.push("\n");
                }
                Node::Other
            }
            (Some(Node::Run), b"noBreakHyphen") => {
                self.push("-");
                Node::Other
            }
            _ => Node::Other,
        };
        self.stack.push(node);
    }

    fn end(&mut self) {
        match self.stack.pop() {
            Some(Node::Paragraph) => self.end_paragraph(),
            Some(Node::Cell) => self.end_cell(),
            Some(Node::Row) => {
                if let Some(row) = self.row.take() {
                    if !row.cells.is_empty() {
                        self.content.table_rows.push(row.cells.join(" | "));
                    }
                }
            }
            Some(Node::Table) => self.table = None,
            _ => {}
        }
    }

    fn end_paragraph(&mut self) {
        let Some(text) = self.paragraph.take() else {
            return;
        };
        if let Some(cell) = self.cell.as_mut() {
            cell.paragraphs.push(text);
        } else if !text.trim().is_empty() {
            self.content.paragraphs.push(text);
        }
    }

    /// A cell yields its text once per grid column it spans. A vertical merge
    /// continuation yields the text of the cell that started the merge.
    fn end_cell(&mut self) {
        let (Some(cell), Some(row), Some(table)) =
            (self.cell.take(), self.row.as_mut(), self.table.as_mut())
        else {
            return;
        };

        let own = cell.paragraphs.join("\n").trim().to_string();
        let (text, span) = match cell.merge {
            VMerge::Continue => table
                .columns
                .get(&row.column)
                .cloned()
                .unwrap_or((own, cell.span)),
            VMerge::Unmerged | VMerge::Restart => {
                table.columns.insert(row.column, (own.clone(), cell.span));
                (own, cell.span)
            }
        };
        row.column += cell.span;

        if !text.is_empty() {
            row.cells.extend(std::iter::repeat(text).take(span));
        }
    }

    fn push(&mut self, text: &str) {
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// `w:br` without a type, or of type `textWrapping`, is a line break; page
/// and column breaks contribute no text.
fn is_line_break(e: &BytesStart<'_>) -> bool {
    attr_value(e, b"type").map_or(true, |kind| kind == "textWrapping")
}
