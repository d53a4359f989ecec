//! End-to-end tests: block lists rendered to files and read back.

use samplepdf::{
    render_file, render_file_with_options, Assembler, Block, Document, Error, Metadata, PageSetup,
    PdfInfo, RenderOptions,
};
use std::fs;

fn filler_paragraph(index: usize) -> String {
    format!(
        "start-{:02} Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
         tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
         nostrud exercitation ullamco. end-{:02}",
        index, index
    )
}

#[test]
fn test_single_page_manual() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manual.pdf");

    let doc = Document::with_blocks(vec![
        Block::title("Manual"),
        Block::heading("Intro", 2),
        Block::paragraph("Hello world."),
    ]);
    let written = render_file(&doc, &path).unwrap();
    assert_eq!(written, path);
    assert!(fs::metadata(&path).unwrap().len() > 0);

    let info = PdfInfo::load(&path).unwrap();
    assert_eq!(info.page_count, 1);
    assert_eq!(info.pages[0].lines, vec!["Manual", "Intro", "Hello world."]);
}

#[test]
fn test_long_document_spans_pages_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.pdf");

    let blocks: Vec<Block> = (0..40)
        .map(|i| Block::paragraph(filler_paragraph(i)))
        .collect();
    render_file(&Document::with_blocks(blocks), &path).unwrap();

    let info = PdfInfo::load(&path).unwrap();
    assert!(info.page_count > 1, "got {} page(s)", info.page_count);

    let mut previous_end = 1;
    for i in 0..40 {
        let start = info
            .page_of(&format!("start-{:02}", i))
            .unwrap_or_else(|| panic!("paragraph {} start missing", i));
        let end = info
            .page_of(&format!("end-{:02}", i))
            .unwrap_or_else(|| panic!("paragraph {} end missing", i));
        assert!(start <= end, "paragraph {} ends before it starts", i);
        assert!(previous_end <= start, "paragraph {} out of order", i);
        previous_end = end;
    }

    // Every word made it through, once.
    let text = info.plain_text();
    let expected: usize = (0..40)
        .map(|i| filler_paragraph(i).split_whitespace().count())
        .sum();
    assert_eq!(text.split_whitespace().count(), expected);
}

#[test]
fn test_page_break_splits_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ab.pdf");

    let doc = Document::with_blocks(vec![
        Block::paragraph("A"),
        Block::page_break(),
        Block::paragraph("B"),
    ]);
    render_file(&doc, &path).unwrap();

    let info = PdfInfo::load(&path).unwrap();
    assert_eq!(info.page_count, 2);
    assert_eq!(info.pages[0].lines, vec!["A"]);
    assert_eq!(info.pages[1].lines, vec!["B"]);
}

#[test]
fn test_page_count_at_least_breaks_plus_one() {
    let blocks = vec![
        Block::page_break(),
        Block::paragraph("um"),
        Block::page_break(),
        Block::page_break(),
        Block::paragraph("dois"),
    ];
    let doc = Document::with_blocks(blocks);
    let bytes = samplepdf::render_to_bytes(&doc, &RenderOptions::default()).unwrap();
    let info = PdfInfo::from_bytes(&bytes).unwrap();
    assert!(info.page_count > doc.page_break_count());
    assert_eq!(info.page_of("dois"), Some(4));
}

#[test]
fn test_identical_inputs_give_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");

    let doc = samplepdf::Fixture::FootballManual.document();
    render_file(&doc, &first).unwrap();
    render_file(&doc, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_second_render_replaces_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    render_file(&Document::with_blocks(vec![Block::paragraph("primeiro")]), &path).unwrap();
    render_file(&Document::with_blocks(vec![Block::paragraph("segundo")]), &path).unwrap();

    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);

    let info = PdfInfo::load(&path).unwrap();
    assert_eq!(info.plain_text(), "segundo");
}

#[test]
fn test_malformed_markup_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.pdf");

    let doc = Document::with_blocks(vec![
        Block::paragraph("ok"),
        Block::paragraph("<b>sem fechamento"),
    ]);
    match render_file(&doc, &path) {
        Err(Error::Markup { block, .. }) => assert_eq!(block, 1),
        other => panic!("expected markup error, got {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as the output file.
    let result = render_file(&Document::with_blocks(vec![Block::paragraph("x")]), dir.path());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_a4_page_size_and_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a4.pdf");

    Assembler::new()
        .with_page_setup(PageSetup::a4())
        .with_metadata(
            Metadata::titled("Guia Rápido")
                .with_author("Equipe")
                .with_subject("Teste"),
        )
        .render(vec![Block::title("Guia Rápido")], &path)
        .unwrap();

    let info = PdfInfo::load(&path).unwrap();
    let page = &info.pages[0];
    assert!((page.width - 595.28).abs() < 0.01);
    assert!((page.height - 841.89).abs() < 0.01);
    assert_eq!(info.title.as_deref(), Some("Guia Rápido"));
    assert_eq!(info.author.as_deref(), Some("Equipe"));
    assert_eq!(info.subject.as_deref(), Some("Teste"));
    assert_eq!(info.producer.as_deref(), Some(samplepdf::render::PRODUCER));
}

#[test]
fn test_uncompressed_output_contains_plain_operators() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.pdf");

    let doc = Document::with_blocks(vec![Block::paragraph("Legivel")]);
    render_file_with_options(&doc, &path, &RenderOptions::new().uncompressed()).unwrap();

    let bytes = fs::read(&path).unwrap();
    let haystack = String::from_utf8_lossy(&bytes);
    assert!(haystack.contains("(Legivel) Tj"));
    assert!(!haystack.contains("FlateDecode"));
}

#[test]
fn test_json_block_list_renders() {
    let json = r#"[
        {"type": "title", "text": "Receita"},
        {"type": "spacer", "height": 12},
        {"type": "code_block", "text": "a = 1\n  b = 2"},
        {"type": "page_break"},
        {"type": "paragraph", "text": "Fim"}
    ]"#;
    let doc = Document::from_json(json).unwrap();
    let bytes = samplepdf::render_to_bytes(&doc, &RenderOptions::default()).unwrap();
    let info = PdfInfo::from_bytes(&bytes).unwrap();

    assert_eq!(info.page_count, 2);
    assert_eq!(info.pages[0].lines, vec!["Receita", "a = 1", "  b = 2"]);
    assert_eq!(info.page_of("Fim"), Some(2));
}

#[test]
fn test_negative_spacer_from_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spacer.pdf");

    let doc = Document::from_json(
        r#"[{"type": "paragraph", "text": "A"}, {"type": "spacer", "height": -300}, {"type": "paragraph", "text": "B"}]"#,
    )
    .unwrap();
    assert!(matches!(render_file(&doc, &path), Err(Error::Layout(_))));
    assert!(!path.exists());
}
