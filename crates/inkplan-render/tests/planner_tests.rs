use std::collections::HashSet;

use inkplan_render::planner::*;
use inkplan_render::*;
use lopdf::{Dictionary, Document, Object};

fn render(device: &str, layout: Option<&str>) -> Document {
    let options = PlannerOptions {
        year: 2026,
        device: device.to_string(),
        layout: layout.map(str::to_string),
        strict_layout: false,
    };
    let bytes = render_planner(&options, &Theme::default()).unwrap();
    Document::load_mem(&bytes).unwrap()
}

fn catalog_entry<'a>(doc: &'a Document, key: &[u8]) -> &'a Dictionary {
    let id = doc.catalog().unwrap().get(key).unwrap().as_reference().unwrap();
    doc.get_dictionary(id).unwrap()
}

fn name_of(object: &Object) -> String {
    match object {
        Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
        other => panic!("Expected a name, got {other:?}"),
    }
}

fn text_of(object: &Object) -> String {
    match object {
        Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
        other => panic!("Expected a string, got {other:?}"),
    }
}

#[test]
fn test_page_count_matches_expected() {
    for (device, layout) in [("remarkable", Some("full")), ("palma", None)] {
        let doc = render(device, layout);
        let expected = expected_page_count(2026, device, layout, false).unwrap();
        assert_eq!(doc.get_pages().len(), expected, "{device}");
    }
}

#[test]
fn test_expected_page_count_full_year() {
    // Cover, twelve months, one page per week row, every day
    let weeks: usize = (1..=12)
        .map(|month| month_matrix(2026, month).unwrap().len())
        .sum();
    let expected = expected_page_count(2026, "remarkable", Some("full"), false).unwrap();
    assert_eq!(expected, 1 + 12 + weeks + 365);
}

#[test]
fn test_named_destinations_and_links_resolve() {
    let doc = render("remarkable", Some("full"));
    let dests = catalog_entry(&doc, b"Dests");
    for key in ["Cover", "Month_1", "Month_12", "Day_2026_01_01", "Day_2026_12_31"] {
        assert!(dests.has(key.as_bytes()), "missing destination {key}");
    }
    assert!(dests.has(b"Week_1_1"));

    let known: HashSet<Vec<u8>> = dests.iter().map(|(key, _)| key.clone()).collect();
    let mut link_count = 0;
    for page_id in doc.get_pages().values() {
        let page = doc.get_dictionary(*page_id).unwrap();
        let Ok(annots) = page.get(b"Annots") else {
            continue;
        };
        for annot in annots.as_array().unwrap() {
            let annot = doc.get_dictionary(annot.as_reference().unwrap()).unwrap();
            let dest = name_of(annot.get(b"Dest").unwrap());
            assert!(known.contains(dest.as_bytes()), "dangling link to {dest}");
            link_count += 1;
        }
    }
    assert!(link_count > 365);
}

#[test]
fn test_outline_months_with_nested_weeks() {
    let doc = render("remarkable", Some("full"));
    let outlines = catalog_entry(&doc, b"Outlines");
    assert_eq!(outlines.get(b"Count").unwrap().as_i64().unwrap(), 12);

    let first_id = outlines.get(b"First").unwrap().as_reference().unwrap();
    let january = doc.get_dictionary(first_id).unwrap();
    assert_eq!(text_of(january.get(b"Title").unwrap()), "January (Monthly)");
    assert_eq!(name_of(january.get(b"Dest").unwrap()), "Month_1");
    assert!(january.get(b"Count").unwrap().as_i64().unwrap() < 0);

    let week_id = january.get(b"First").unwrap().as_reference().unwrap();
    let week = doc.get_dictionary(week_id).unwrap();
    assert_eq!(text_of(week.get(b"Title").unwrap()), "Week 01");

    assert_eq!(
        name_of(doc.catalog().unwrap().get(b"PageMode").unwrap()),
        "UseOutlines"
    );
}

#[test]
fn test_document_title() {
    let doc = render("scribe", None);
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_dictionary(info_id).unwrap();
    let title = text_of(info.get(b"Title").unwrap());
    assert!(title.starts_with("Planner 2026 (Kindle Scribe, "), "{title}");
    assert!(title.ends_with(", full)"), "{title}");
}

#[test]
fn test_invalid_inputs() {
    let theme = Theme::default();
    let options = PlannerOptions {
        year: 0,
        ..Default::default()
    };
    let err = render_planner(&options, &theme).unwrap_err();
    assert_eq!(err.to_string(), "year must be >= 1.");

    let options = PlannerOptions {
        device: "kindle".into(),
        ..Default::default()
    };
    assert!(render_planner(&options, &theme).is_err());
    assert!(expected_page_count(2026, "kindle", None, false).is_err());
}

#[test]
fn test_week_segments_follow_layout() {
    let week = [0, 0, 0, 1, 2, 3, 4];
    let compact = inkplan_layout::resolve_render_profile("palma", Some("compact")).unwrap();
    let segments = week_segments_for_week(&week, &compact).unwrap();
    // MON-THU still holds Thursday the 1st
    assert_eq!(segments.len(), 2);
    assert_eq!(segment_label(segments[0]).unwrap(), "MON-THU");

    let leading_blank = [0, 0, 0, 0, 0, 0, 1];
    let segments = week_segments_for_week(&leading_blank, &compact).unwrap();
    assert_eq!(segments, vec![&[4usize, 5, 6][..]]);

    let full = inkplan_layout::resolve_render_profile("remarkable", Some("full")).unwrap();
    assert_eq!(week_segments_for_week(&week, &full).unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_planner_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("planner.pdf");
    let options = PlannerOptions {
        device: "palma".into(),
        ..Default::default()
    };

    let written = generate_planner(&options, &Theme::default(), Some(target.clone()))
        .await
        .unwrap();

    assert_eq!(written, target);
    let doc = Document::load(&target).unwrap();
    assert_eq!(
        doc.get_pages().len(),
        expected_page_count(2026, "palma", None, false).unwrap()
    );
}
