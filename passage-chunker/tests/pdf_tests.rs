use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use passage_chunker::{
    extract_pdf_passages, extract_pdf_passages_or_empty, DocumentError, PageSource, PdfDocument, SegmentParams,
};
use tempfile::NamedTempFile;

/// Build a PDF with one text line per page; an empty string gives a page with no text.
fn write_pdf(pages: &[&str]) -> NamedTempFile {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(12)]),
                Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().expect("encode content")));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
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

    let mut file = NamedTempFile::with_suffix(".pdf").expect("temp file");
    doc.save_to(&mut file).expect("save pdf");
    file.flush().expect("flush pdf");
    file
}

#[test]
fn page_count_and_text_come_from_the_pdf() {
    let file = write_pdf(&["Hello World. This is page one.", "Second page text here."]);
    let doc = PdfDocument::open(file.path()).expect("fixture opens");

    assert_eq!(doc.page_count(), 2);
    assert!(doc.page_text(1).contains("Hello World"));
    assert!(doc.page_text(2).contains("Second page"));
    assert_eq!(doc.page_text(3), "");
    assert_eq!(doc.page_text(0), "");
}

#[test]
fn passages_follow_page_order() {
    let file = write_pdf(&[
        "Alpha beta gamma. Delta epsilon zeta.",
        "",
        "Eta theta iota. Kappa lambda mu.",
    ]);
    let out = extract_pdf_passages(file.path(), &SegmentParams::default()).expect("extracts");

    assert!(!out.is_empty());
    let pages: Vec<u32> = out.iter().map(|r| r.page).collect();
    assert!(pages.windows(2).all(|w| w[0] <= w[1]), "pages out of order: {pages:?}");
    assert!(!pages.contains(&2), "image-less blank page produced passages");
    assert!(out.iter().any(|r| r.page == 1 && r.text.contains("Alpha beta gamma")));
    assert!(out.iter().any(|r| r.page == 3 && r.text.contains("Kappa lambda mu")));
    assert!(out.iter().all(|r| !r.text.trim().is_empty()));
}

#[test]
fn bytes_can_be_opened_without_a_file() {
    let file = write_pdf(&["Some words on a page."]);
    let bytes = std::fs::read(file.path()).expect("read fixture");
    let doc = PdfDocument::from_bytes(&bytes).expect("parses");
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn missing_file_is_absorbed_into_an_empty_result() {
    let (out, err) = extract_pdf_passages_or_empty("/definitely/not/here.pdf", &SegmentParams::default());
    assert!(out.is_empty());
    assert!(matches!(err, Some(DocumentError::Io { .. })), "got {err:?}");
}

#[test]
fn non_pdf_content_is_absorbed_into_an_empty_result() {
    let mut file = NamedTempFile::with_suffix(".pdf").expect("temp file");
    file.write_all(b"this is plain text, not a PDF").expect("write");
    file.flush().expect("flush");

    let (out, err) = extract_pdf_passages_or_empty(file.path(), &SegmentParams::default());
    assert!(out.is_empty());
    let err = err.expect("parse failure reported");
    assert!(matches!(err, DocumentError::Parse(_)), "got {err:?}");
    assert!(!err.to_string().is_empty());
}
