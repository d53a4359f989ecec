//! Reading generated PDFs back through `PdfInfo`.

use samplepdf::{render_to_bytes, Block, Document, Error, PdfInfo, RenderOptions};

fn render(blocks: Vec<Block>) -> PdfInfo {
    let bytes = render_to_bytes(&Document::with_blocks(blocks), &RenderOptions::default()).unwrap();
    PdfInfo::from_bytes(&bytes).unwrap()
}

#[test]
fn test_winansi_text_round_trips() {
    let info = render(vec![Block::paragraph(
        "Ação, café, pão e coração — “aspas” custam 50 € … ©",
    )]);
    assert_eq!(
        info.plain_text(),
        "Ação, café, pão e coração — “aspas” custam 50 € … ©"
    );
}

#[test]
fn test_unmappable_characters_become_question_marks() {
    let info = render(vec![Block::paragraph("Tóquio 東京")]);
    assert_eq!(info.plain_text(), "Tóquio ??");
}

#[test]
fn test_entities_and_bold_runs_join_on_one_line() {
    let info = render(vec![Block::paragraph(
        "<b>Passo 1:</b> abra Ajustes &gt; Geral &amp; Sobre",
    )]);
    assert_eq!(info.pages[0].lines, vec!["Passo 1: abra Ajustes > Geral & Sobre"]);
}

#[test]
fn test_line_breaks_start_new_lines() {
    let info = render(vec![Block::paragraph("um<br/>dois<br/>três")]);
    assert_eq!(info.pages[0].lines, vec!["um", "dois", "três"]);
}

#[test]
fn test_empty_document_has_one_blank_page() {
    let info = render(Vec::new());
    assert_eq!(info.page_count, 1);
    assert!(info.pages[0].lines.is_empty());
    assert_eq!(info.word_count(), 0);
}

#[test]
fn test_word_count_and_version() {
    let info = render(vec![
        Block::title("Três palavras aqui"),
        Block::paragraph("mais duas"),
    ]);
    assert_eq!(info.version, "1.5");
    assert_eq!(info.word_count(), 5);
}

#[test]
fn test_rejects_non_pdf_input() {
    let result = PdfInfo::from_bytes(b"just some text");
    assert!(matches!(result, Err(Error::Pdf(_))));
}

#[test]
fn test_creation_date_only_when_set() {
    use chrono::TimeZone;
    use samplepdf::Metadata;

    let blocks = vec![Block::paragraph("data")];
    let plain = render_to_bytes(
        &Document::with_blocks(blocks.clone()),
        &RenderOptions::new().uncompressed(),
    )
    .unwrap();
    assert!(!String::from_utf8_lossy(&plain).contains("CreationDate"));

    let created = chrono::Utc.with_ymd_and_hms(2024, 2, 15, 14, 22, 0).unwrap();
    let dated = Document::with_blocks(blocks)
        .with_metadata(Metadata::titled("Datado").with_created(created));
    let bytes = render_to_bytes(&dated, &RenderOptions::new().uncompressed()).unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("(D:20240215142200Z)"));
}
