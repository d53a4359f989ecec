//! Read generated PDFs back.
//!
//! Only understands what this crate writes: simple fonts with
//! WinAnsiEncoding and one `BT`..`ET` text object per line. That is enough to
//! check page counts, metadata and text order of the fixtures.

use crate::error::{Error, Result};
use crate::render::encoding;
use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};
use serde::Serialize;
use std::fs;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Text of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageText {
    /// 1-based page number
    pub number: u32,
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Text lines in content stream order
    pub lines: Vec<String>,
}

impl PageText {
    /// Lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Summary of a PDF file.
#[derive(Debug, Clone, Serialize)]
pub struct PdfInfo {
    /// Header version (e.g. "1.5")
    pub version: String,
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub pages: Vec<PageText>,
}

impl PdfInfo {
    /// Load and inspect a PDF file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Inspect a PDF held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !data.starts_with(PDF_MAGIC) {
            return Err(Error::Pdf("missing %PDF- header".to_string()));
        }
        let doc = LopdfDocument::load_mem(data)?;

        let info = doc
            .trailer
            .get(b"Info")
            .and_then(Object::as_reference)
            .and_then(|id| doc.get_dictionary(id))
            .ok();
        let field = |key: &[u8]| info.and_then(|dict| get_string_from_dict(dict, key));

        let mut pages = Vec::new();
        for (number, page_id) in doc.get_pages() {
            let (width, height) = media_box(&doc, page_id).unwrap_or((0.0, 0.0));
            let content = page_content(&doc, page_id)?;
            pages.push(PageText {
                number,
                width,
                height,
                lines: text_lines(&content)?,
            });
        }

        Ok(Self {
            version: doc.version.clone(),
            page_count: pages.len(),
            title: field(b"Title"),
            author: field(b"Author"),
            subject: field(b"Subject"),
            creator: field(b"Creator"),
            producer: field(b"Producer"),
            pages,
        })
    }

    /// All text, pages separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(PageText::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// First page (1-based) containing `needle` on a single line.
    pub fn page_of(&self, needle: &str) -> Option<u32> {
        self.pages
            .iter()
            .find(|p| p.lines.iter().any(|l| l.contains(needle)))
            .map(|p| p.number)
    }

    /// Number of whitespace-separated words across all pages.
    pub fn word_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .map(|l| l.split_whitespace().count())
            .sum()
    }
}

/// MediaBox of a page, inherited from the page tree when not set locally.
fn media_box(doc: &LopdfDocument, page_id: ObjectId) -> Option<(f32, f32)> {
    let mut dict = doc.get_dictionary(page_id).ok()?;
    loop {
        if let Ok(array) = dict.get(b"MediaBox").and_then(Object::as_array) {
            if array.len() >= 4 {
                return Some((number(&array[2])?, number(&array[3])?));
            }
        }
        let parent = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
        dict = doc.get_dictionary(parent).ok()?;
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Decompressed content of a page's content stream(s).
fn page_content(doc: &LopdfDocument, page_id: ObjectId) -> Result<Vec<u8>> {
    let page_dict = doc.get_dictionary(page_id)?;
    let stream_data = |id: ObjectId| -> Option<Vec<u8>> {
        match doc.get_object(id) {
            Ok(Object::Stream(s)) => Some(
                s.decompressed_content()
                    .unwrap_or_else(|_| s.content.clone()),
            ),
            _ => None,
        }
    };

    match page_dict.get(b"Contents") {
        Ok(Object::Reference(id)) => {
            stream_data(*id).ok_or_else(|| Error::Pdf("invalid content stream".to_string()))
        }
        Ok(Object::Array(items)) => {
            let mut content = Vec::new();
            for item in items {
                if let Some(data) = item.as_reference().ok().and_then(|id| stream_data(id)) {
                    content.extend_from_slice(&data);
                    content.push(b' ');
                }
            }
            Ok(content)
        }
        // A page without content is blank
        _ => Ok(Vec::new()),
    }
}

fn text_lines(content: &[u8]) -> Result<Vec<String>> {
    let content = Content::decode(content)?;
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for op in content.operations {
        match op.operator.as_str() {
            "BT" => current = Some(String::new()),
            "ET" => {
                if let Some(line) = current.take() {
                    lines.push(line);
                }
            }
            "Tj" | "'" | "\"" => {
                if let (Some(line), Some(Object::String(bytes, _))) =
                    (current.as_mut(), op.operands.last())
                {
                    line.push_str(&encoding::decode(bytes));
                }
            }
            "TJ" => {
                if let (Some(line), Some(Object::Array(items))) =
                    (current.as_mut(), op.operands.first())
                {
                    for item in items {
                        if let Object::String(bytes, _) = item {
                            line.push_str(&encoding::decode(bytes));
                        }
                    }
                }
            }
            _ => {}
        }
    }
    Ok(lines)
}

fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => {
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                Some(encoding::decode(bytes))
            }
        }
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf() {
        assert!(PdfInfo::from_bytes(b"<!DOCTYPE html>").is_err());
        assert!(PdfInfo::from_bytes(b"").is_err());
    }

    #[test]
    fn test_text_lines_from_content() {
        let content = b"BT /F1 10 Tf 72 700 Td (Ol\xe1 ) Tj /F2 10 Tf (mundo) Tj ET BT [(a) -200 (b)] TJ ET";
        let lines = text_lines(content).unwrap();
        assert_eq!(lines, vec!["Olá mundo", "ab"]);
    }

    #[test]
    fn test_utf16_info_string() {
        let mut dict = Dictionary::new();
        dict.set(
            "Title",
            Object::String(vec![0xFE, 0xFF, 0x00, 0x43, 0x00, 0xE1], lopdf::StringFormat::Hexadecimal),
        );
        assert_eq!(get_string_from_dict(&dict, b"Title").as_deref(), Some("Cá"));
    }
}
