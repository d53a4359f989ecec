//! Tests for the built-in fixture documents and the generate driver.

use samplepdf::fixtures::{self, GenerateOptions};
use samplepdf::{generate_all, Fixture, PdfInfo};
use std::fs;

fn normalized(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn test_generate_all_writes_four_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data").join("pdfs");

    let files = generate_all(&out).unwrap();
    assert_eq!(files.len(), 4);

    let order: Vec<Fixture> = files.iter().map(|f| f.fixture).collect();
    assert_eq!(order, Fixture::ALL.to_vec());

    for file in &files {
        assert_eq!(file.path, out.join(file.fixture.file_name()));
        assert_eq!(fs::metadata(&file.path).unwrap().len(), file.bytes);

        let info = PdfInfo::load(&file.path).unwrap();
        assert!(info.page_count >= 2, "{}: {} page(s)", file.fixture, info.page_count);
        assert_eq!(info.page_count, file.pages);

        let doc = file.fixture.document();
        let title = doc.metadata.title.clone().unwrap();
        assert_eq!(info.title.as_deref(), Some(title.as_str()));
        assert!(info.page_count > doc.page_break_count());

        let first_heading = doc.blocks[0].text().unwrap();
        assert!(
            normalized(&info.pages[0].text()).contains(first_heading),
            "{}: missing {:?} on page 1",
            file.fixture,
            first_heading
        );
    }
}

#[test]
fn test_generated_text_keeps_accents() {
    let dir = tempfile::tempdir().unwrap();
    let files = fixtures::generate(
        dir.path(),
        &GenerateOptions::new().with_fixtures([Fixture::FootballManual]),
    )
    .unwrap();

    let info = PdfInfo::load(&files[0].path).unwrap();
    let text = normalized(&info.plain_text());
    assert!(text.contains("Regras Oficiais da FIFA"));
    assert!(text.contains("Dimensões do Campo:"));
    assert!(text.contains("Círculo central: raio de 9,15m"));
    assert!(!text.contains('?'), "unexpected replacement characters");
}

#[test]
fn test_sequential_and_parallel_match() {
    let parallel_dir = tempfile::tempdir().unwrap();
    let sequential_dir = tempfile::tempdir().unwrap();

    let parallel = fixtures::generate(parallel_dir.path(), &GenerateOptions::new()).unwrap();
    let sequential =
        fixtures::generate(sequential_dir.path(), &GenerateOptions::new().sequential()).unwrap();

    for (a, b) in parallel.iter().zip(&sequential) {
        assert_eq!(a.fixture, b.fixture);
        assert_eq!(fs::read(&a.path).unwrap(), fs::read(&b.path).unwrap());
    }
}

#[test]
fn test_regenerating_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(Fixture::RecipeBook.file_name());
    fs::write(&target, b"stale").unwrap();

    let options = GenerateOptions::new().with_fixtures([Fixture::RecipeBook]);
    fixtures::generate(dir.path(), &options).unwrap();
    fixtures::generate(dir.path(), &options).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    assert!(PdfInfo::load(&target).unwrap().page_count >= 2);
}

#[test]
fn test_api_reference_code_is_indented() {
    let bytes = samplepdf::render_to_bytes(
        &Fixture::ApiReference.document(),
        &samplepdf::RenderOptions::default(),
    )
    .unwrap();
    let info = PdfInfo::from_bytes(&bytes).unwrap();

    assert!(info.page_of("GET /products/{product_id}").is_some());
    let lines: Vec<&String> = info.pages.iter().flat_map(|p| p.lines.iter()).collect();
    assert!(lines.iter().any(|l| l.as_str() == "  \"pagination\": {"));
    assert!(lines.iter().any(|l| l.contains("\"city\": \"São Paulo\",")));
}
