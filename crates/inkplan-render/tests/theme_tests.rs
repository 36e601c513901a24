use std::io::Write;

use inkplan_render::*;
use tempfile::NamedTempFile;

fn theme_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_builtin_profile_without_file() {
    let theme = resolve_theme("default", None).await.unwrap();
    assert_eq!(theme, Theme::default());
}

#[tokio::test]
async fn test_file_overrides_colors_and_fonts() {
    let file = theme_file(r##"{"accent": "#112233", "font_bold": "Courier-Bold"}"##);
    let theme = resolve_theme("default", Some(file.path())).await.unwrap();
    assert_eq!(theme.accent, Color::from_rgb_u32(0x112233));
    assert_eq!(theme.font_bold, "Courier-Bold");
    assert_eq!(theme.background, Theme::default().background);
}

#[tokio::test]
async fn test_unknown_profile() {
    let err = resolve_theme("midnight", None).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown theme profile 'midnight'. Valid profiles: default."
    );
}

#[tokio::test]
async fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = resolve_theme("default", Some(&path)).await.unwrap_err();
    assert!(err.to_string().ends_with("does not exist."), "{err}");
}

#[tokio::test]
async fn test_rejected_theme_files() {
    let cases = [
        ("[1, 2]", "theme file content must be a JSON object."),
        (
            r##"{"zeta": "#000", "alpha": "#000"}"##,
            "unknown theme key(s): alpha, zeta.",
        ),
        (
            r#"{"accent": ""}"#,
            "theme key 'accent' must be a non-empty color string.",
        ),
        (
            r#"{"font_regular": 12}"#,
            "theme key 'font_regular' must be a non-empty font name string.",
        ),
        (
            r#"{"accent": "sky"}"#,
            "invalid color value 'sky' for theme key 'accent'.",
        ),
        (
            r#"{"font_header": "Comic Sans"}"#,
            "unsupported font 'Comic Sans' for theme key 'font_header'. Use a standard PDF font name.",
        ),
    ];
    for (contents, expected) in cases {
        let file = theme_file(contents);
        let err = resolve_theme("default", Some(file.path())).await.unwrap_err();
        assert_eq!(err.to_string(), expected, "{contents}");
    }
}

#[tokio::test]
async fn test_invalid_json() {
    let file = theme_file("{not json");
    let err = resolve_theme("default", Some(file.path())).await.unwrap_err();
    assert!(err.to_string().contains("is not valid JSON"), "{err}");
}
