//! PDF serialization of laid-out pages using lopdf.

use super::encoding;
use super::options::RenderOptions;
use crate::error::Result;
use crate::layout::{LaidOutPage, PlacedLine};
use crate::model::{Font, Metadata, PageSetup};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document as LopdfDocument, Object, ObjectId, Stream, StringFormat};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Value written to the info dictionary's `/Producer`.
pub const PRODUCER: &str = concat!("samplepdf ", env!("CARGO_PKG_VERSION"));

/// Round to two decimals so coordinates serialize compactly and stably.
fn real(value: f32) -> Object {
    Object::Real((value * 100.0).round() / 100.0)
}

/// Info dictionary string: literal when ASCII, UTF-16BE with BOM otherwise.
fn text_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Builds a lopdf document from laid-out pages.
pub struct PdfBuilder<'a> {
    setup: &'a PageSetup,
    metadata: &'a Metadata,
    options: &'a RenderOptions,
}

impl<'a> PdfBuilder<'a> {
    /// Create a builder for one document.
    pub fn new(setup: &'a PageSetup, metadata: &'a Metadata, options: &'a RenderOptions) -> Self {
        Self {
            setup,
            metadata,
            options,
        }
    }

    /// Assemble the object graph: catalog, page tree, fonts, content and info.
    pub fn build(&self, pages: &[LaidOutPage]) -> Result<LopdfDocument> {
        let mut doc = LopdfDocument::with_version(self.options.pdf_version.as_str());
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in Font::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut substitutions: BTreeMap<usize, usize> = BTreeMap::new();
        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let content = page_content(page, &mut substitutions);
            let stream = self.content_stream(content)?;
            let content_id = doc.add_object(stream);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }
        for (block, count) in substitutions {
            log::warn!(
                "block {}: {} character(s) outside WinAnsiEncoding written as '?'",
                block,
                count
            );
        }

        let page_count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(self.setup.size.width),
                real(self.setup.size.height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = self.info(&mut doc);
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }

    fn content_stream(&self, content: Content) -> Result<Stream> {
        let raw = content.encode()?;
        if !self.options.compress {
            return Ok(Stream::new(Dictionary::new(), raw));
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        let compressed = encoder.finish()?;
        Ok(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            compressed,
        ))
    }

    fn info(&self, doc: &mut LopdfDocument) -> ObjectId {
        let meta = self.metadata;
        let mut info = Dictionary::new();
        let fields = [
            ("Title", &meta.title),
            ("Author", &meta.author),
            ("Subject", &meta.subject),
            ("Creator", &meta.creator),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                info.set(key, text_string(value));
            }
        }
        info.set("Producer", text_string(PRODUCER));
        if let Some(created) = meta.created {
            let date = created.format("D:%Y%m%d%H%M%SZ").to_string();
            info.set("CreationDate", Object::string_literal(date));
        }
        doc.add_object(info)
    }
}

/// Text operations for one page; each line is its own text object.
fn page_content(page: &LaidOutPage, substitutions: &mut BTreeMap<usize, usize>) -> Content {
    let mut operations = Vec::new();
    let mut word_spacing = 0.0;

    for line in page.lines.iter().filter(|l| !l.fragments.is_empty()) {
        if line.word_spacing != word_spacing {
            // Tw is text state and outlives ET
            operations.push(Operation::new("Tw", vec![real(line.word_spacing)]));
            word_spacing = line.word_spacing;
        }
        operations.extend(line_operations(line, substitutions));
    }
    Content { operations }
}

fn line_operations(line: &PlacedLine, substitutions: &mut BTreeMap<usize, usize>) -> Vec<Operation> {
    let [r, g, b] = line.color.components();
    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("rg", vec![real(r), real(g), real(b)]),
        Operation::new("Td", vec![real(line.x), real(line.baseline)]),
    ];

    let mut font = None;
    for fragment in &line.fragments {
        if font != Some(fragment.font) {
            ops.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(fragment.font.resource_name().as_bytes().to_vec()),
                    real(line.font_size),
                ],
            ));
            font = Some(fragment.font);
        }
        let (bytes, replaced) = encoding::encode(&fragment.text);
        if replaced > 0 {
            *substitutions.entry(line.block).or_default() += replaced;
        }
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(bytes, StringFormat::Literal)],
        ));
    }
    ops.push(Operation::new("ET", vec![]));
    ops
}

/// Serialize a document to bytes.
pub fn to_bytes(doc: &mut LopdfDocument) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}

/// Write a document to `path`, replacing any existing file.
pub fn write_file(doc: &mut LopdfDocument, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)?;
    writer.flush()?;
    Ok(())
}
