use inkplan_render::templates::*;
use inkplan_render::*;
use lopdf::{Document, Object};

fn options(template: &str, device: &str, params: &[(&str, &str)]) -> TemplateOptions {
    TemplateOptions {
        template: template.to_string(),
        device: device.to_string(),
        layout: None,
        params: params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

fn render(options: &TemplateOptions) -> Document {
    let bytes = render_template(options, &Theme::default()).unwrap();
    Document::load_mem(&bytes).unwrap()
}

fn title_of(doc: &Document) -> String {
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    match doc.get_dictionary(info_id).unwrap().get(b"Title").unwrap() {
        Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
        other => panic!("Expected a string, got {other:?}"),
    }
}

fn render_error(options: &TemplateOptions) -> String {
    render_template(options, &Theme::default())
        .unwrap_err()
        .to_string()
}

#[test]
fn test_every_template_renders_one_page_on_every_device() {
    for spec in template_specs() {
        for device in ["palma", "remarkable", "scribe"] {
            let doc = render(&options(spec.id, device, &[]));
            assert_eq!(doc.get_pages().len(), 1, "{} on {device}", spec.id);
        }
    }
}

#[test]
fn test_notes_fills_render() {
    for fill in NOTES_FILL_TYPES {
        let doc = render(&options("notes", "remarkable", &[("notes_fill", fill)]));
        assert_eq!(doc.get_pages().len(), 1, "{fill}");
    }
}

#[test]
fn test_template_title_uses_spec_title_and_layout() {
    let doc = render(&options("dag", "palma", &[]));
    let title = title_of(&doc);
    assert!(title.starts_with("Day At A Glance Template ("), "{title}");

    let doc = render(&TemplateOptions {
        layout: Some("full".into()),
        ..options("lines", "scribe", &[])
    });
    assert_eq!(title_of(&doc), "Lines Template (Kindle Scribe, full)");
}

#[test]
fn test_parameter_errors() {
    assert_eq!(
        render_error(&options("lines", "remarkable", &[("margin_mm", "wide")])),
        "invalid value 'wide' for 'margin_mm' in template 'lines'. Expected a float."
    );
    assert_eq!(
        render_error(&options("task-list", "remarkable", &[("checklist_rows", "0")])),
        "invalid value '0' for 'checklist_rows' in template 'task-list'. Minimum allowed value is 1."
    );
    assert_eq!(
        render_error(&options("schedule", "remarkable", &[("schedule_end_hour", "25")])),
        "invalid value '25' for 'schedule_end_hour' in template 'schedule'. Maximum allowed value is 24."
    );
    assert_eq!(
        render_error(&options("notes", "remarkable", &[("notes_fill", "hex")])),
        "invalid value 'hex' for 'notes_fill' in template 'notes'. Valid values: lines, grid, \
         dotted-grid, millimeter."
    );
    let err = render_error(&options("grid", "remarkable", &[("colour", "red")]));
    assert!(
        err.starts_with("unknown parameter 'colour' for template 'grid'. Supported parameters: margin_mm,"),
        "{err}"
    );
}

#[test]
fn test_layout_validation_after_overrides() {
    let err = render_error(&options(
        "schedule",
        "remarkable",
        &[("schedule_start_hour", "20"), ("schedule_end_hour", "8")],
    ));
    assert_eq!(err, "template schedule end hour must be greater than start hour.");
}

#[test]
fn test_spacing_too_large_for_device_units() {
    for key in ["line_spacing_mm", "grid_spacing_mm", "dot_spacing_mm"] {
        let err = render_error(&options("lines", "remarkable", &[(key, "1e308")]));
        assert!(err.ends_with("is too large for device 'reMarkable 2'."), "{key}: {err}");
    }
    assert_eq!(
        render_error(&options("notes", "palma", &[("line_spacing_mm", "1e308")])),
        "template line spacing is too large for device 'BOOX Palma'."
    );
}

#[test]
fn test_draw_template_rejects_unvalidated_layout() {
    let mut resolved = options("dag", "remarkable", &[]).resolve().unwrap();
    resolved.layout.schedule_start_hour = 20;
    resolved.layout.schedule_end_hour = 8;
    let mut pdf = PdfCanvas::new(resolved.device.page_width, resolved.device.page_height);
    let err = draw_template(&mut pdf, &resolved, &Theme::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "template schedule end hour must be greater than start hour."
    );

    let mut resolved = options("task-list", "remarkable", &[]).resolve().unwrap();
    resolved.layout.checklist_rows = 0;
    let mut pdf = PdfCanvas::new(resolved.device.page_width, resolved.device.page_height);
    assert!(draw_template(&mut pdf, &resolved, &Theme::default()).is_err());
}

#[test]
fn test_unknown_template_and_device() {
    assert!(render_error(&options("calendar", "remarkable", &[]))
        .starts_with("unknown template 'calendar'. Valid templates: day-at-glance,"));
    assert_eq!(
        render_error(&options("lines", "kindle", &[])),
        "unknown device 'kindle'. Valid devices: palma, remarkable, scribe."
    );
}

#[test]
fn test_parse_param_pairs() {
    let pairs = parse_param_pairs(&["a=1", " b = two ", "a=3", "c="]).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "3".to_string()),
            ("b".to_string(), "two".to_string()),
            ("c".to_string(), String::new()),
        ]
    );

    assert_eq!(
        parse_param_pairs(&["novalue"]).unwrap_err().to_string(),
        "invalid --param 'novalue'. Expected key=value."
    );
    assert_eq!(
        parse_param_pairs(&[" =1"]).unwrap_err().to_string(),
        "invalid --param ' =1'. Key cannot be empty."
    );
}

#[test]
fn test_resolved_params_apply_layout_overrides() {
    let spec = template_spec("task-list").unwrap();
    let raw = parse_param_pairs(&["checklist_rows=5", "margin_mm=4.5"]).unwrap();
    let params = resolve_template_params(spec, &raw).unwrap();
    assert_eq!(params.str("notes_fill"), Some("lines"));

    let overrides = params.layout_overrides().unwrap();
    assert_eq!(overrides.checklist_rows, Some(5));
    assert_eq!(overrides.margin_mm, Some(4.5));
    assert_eq!(overrides.line_spacing_mm, None);
}

#[tokio::test]
async fn test_generate_template_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("grid.pdf");

    let written = generate_template(
        &options("grid", "palma", &[("grid_spacing_mm", "4")]),
        &Theme::default(),
        Some(target.clone()),
    )
    .await
    .unwrap();

    assert_eq!(written, target);
    assert_eq!(Document::load(&target).unwrap().get_pages().len(), 1);
}

#[tokio::test]
async fn test_generate_template_rejects_overflowing_spacing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("huge.pdf");
    let result = generate_template(
        &options("lines", "remarkable", &[("line_spacing_mm", "1e308")]),
        &Theme::default(),
        Some(target.clone()),
    )
    .await;
    assert!(result.is_err());
    assert!(!target.exists());
}

#[tokio::test]
async fn test_generate_template_rejects_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("bad.pdf");
    let result = generate_template(
        &options("lines", "remarkable", &[("dot_radius_mm", "0")]),
        &Theme::default(),
        Some(target.clone()),
    )
    .await;
    assert!(result.is_err());
    assert!(!target.exists());
}
