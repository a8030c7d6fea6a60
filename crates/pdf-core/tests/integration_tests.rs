//! Integration tests for pdf-core
//!
//! These tests verify end-to-end functionality with real PDF operations.

use lopdf::{dictionary, Document, Object, StringFormat};
use pdf_core::{PdfDocument, PdfError, StandardFont, TextCanvas};
use pretty_assertions::assert_eq;

/// UTF-16BE hex string with byte-order mark, the way form tools write `/T`
fn hex_name(name: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in name.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Create a form PDF with `page_count` pages
///
/// Page `n` (1-indexed) carries one text widget named `f{n}_1[0]`, plus a
/// link annotation that must be ignored.
fn create_form_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    let mut fields = Vec::new();
    for n in 1..=page_count {
        let widget_id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => hex_name(&format!("f{n}_1[0]")),
            "Rect" => vec![50.into(), 700.into(), 300.into(), 720.into()],
        });
        let link_id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "T" => hex_name(&format!("f{n}_1[0]")),
        });
        let contents_id = doc.add_object(lopdf::Stream::new(dictionary! {}, vec![]));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => dictionary! {},
            "Contents" => contents_id,
            "Annots" => vec![widget_id.into(), link_id.into()],
        });
        kids.push(Object::Reference(page_id));
        fields.push(Object::Reference(widget_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );
    let acroform_id = doc.add_object(dictionary! {
        "Fields" => fields,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => acroform_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

const PAGE_1_KEY: &str = "<FEFF00660031005F0031005B0030005D>";
const PAGE_2_KEY: &str = "<FEFF00660032005F0031005B0030005D>";

#[test]
fn test_widget_keys_are_raw_tokens() {
    let doc = PdfDocument::open_from_bytes(&create_form_pdf(2)).expect("Failed to open PDF");
    let keys: Vec<String> = doc.widgets().into_iter().map(|w| w.field_key).collect();
    assert_eq!(keys, vec![PAGE_1_KEY.to_string(), PAGE_2_KEY.to_string()]);
}

#[test]
fn test_fill_fields_roundtrip() {
    let mut doc = PdfDocument::open_from_bytes(&create_form_pdf(2)).expect("Failed to open PDF");
    let filled = doc.fill_fields(|key| match key {
        PAGE_1_KEY => Some("Jane Doe".to_string()),
        PAGE_2_KEY => Some("Ford F-150".to_string()),
        _ => None,
    });
    assert_eq!(filled, 2);

    let bytes = doc.to_bytes().expect("Failed to save PDF");
    let reopened = PdfDocument::open_from_bytes(&bytes).expect("Failed to reopen PDF");
    let values: Vec<Option<String>> = reopened.widgets().into_iter().map(|w| w.value).collect();
    assert_eq!(
        values,
        vec![Some("(Jane Doe)".to_string()), Some("(Ford F-150)".to_string())]
    );
}

#[test]
fn test_fill_sets_need_appearances() {
    let mut doc = PdfDocument::open_from_bytes(&create_form_pdf(1)).expect("Failed to open PDF");
    doc.fill_fields(|_| Some("x".to_string()));

    let inner = doc.inner();
    let root = inner.trailer.get(b"Root").unwrap().as_reference().unwrap();
    let catalog = inner.get_dictionary(root).unwrap();
    let acroform_id = catalog.get(b"AcroForm").unwrap().as_reference().unwrap();
    let acroform = inner.get_dictionary(acroform_id).unwrap();
    assert!(acroform.get(b"NeedAppearances").unwrap().as_bool().unwrap());
}

#[test]
fn test_unmatched_keys_untouched() {
    let mut doc = PdfDocument::open_from_bytes(&create_form_pdf(1)).expect("Failed to open PDF");
    // Case differs from the stored token, so nothing matches
    let filled = doc.fill_fields(|key| {
        (key == PAGE_1_KEY.to_lowercase()).then(|| "ignored".to_string())
    });
    assert_eq!(filled, 0);
    assert_eq!(doc.widgets()[0].value, None);
}

#[test]
fn test_retain_first_pages() {
    for (pages, expected) in [(1, 1), (2, 2), (3, 2), (5, 2)] {
        let mut doc =
            PdfDocument::open_from_bytes(&create_form_pdf(pages)).expect("Failed to open PDF");
        doc.retain_first_pages(2).expect("Failed to trim pages");
        let bytes = doc.to_bytes().expect("Failed to save PDF");

        let reopened = PdfDocument::open_from_bytes(&bytes).expect("Failed to reopen PDF");
        assert_eq!(reopened.page_count(), expected, "template with {pages} pages");
    }
}

#[test]
fn test_retain_on_empty_document() {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();

    let mut doc = PdfDocument::open_from_bytes(&buffer).expect("Failed to open PDF");
    assert!(matches!(doc.retain_first_pages(2), Err(PdfError::NoPages)));
}

#[test]
fn test_canvas_output_is_loadable() {
    let mut canvas = TextCanvas::letter();
    canvas.draw_text(0, 50.0, 742.0, StandardFont::HelveticaBold, 16.0, "Heading");
    canvas.draw_text(0, 50.0, 712.0, StandardFont::Helvetica, 12.0, "Body (1)");
    canvas.draw_text(1, 50.0, 742.0, StandardFont::Helvetica, 12.0, "Next page");

    let bytes = canvas.to_bytes().expect("Failed to save canvas");
    let doc = PdfDocument::open_from_bytes(&bytes).expect("Failed to open canvas PDF");
    assert_eq!(doc.page_count(), 2);
    assert!(doc.widgets().is_empty());
}
