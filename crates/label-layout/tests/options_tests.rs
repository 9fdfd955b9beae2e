use label_layout::*;
use tempfile::TempDir;

#[test]
fn test_default_options_are_valid() {
    let options = LayoutOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.sheet.width_mm, 600.0);
    assert_eq!(options.sheet.height_mm, 300.0);
    assert_eq!(options.text_fit.glyph_aspect, 0.55);
}

#[test]
fn test_validation_text_fit() {
    let mut options = LayoutOptions::default();
    options.text_fit.glyph_aspect = 0.0;
    match options.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("Glyph aspect")),
        _ => panic!("Expected Config error"),
    }

    let mut options = LayoutOptions::default();
    options.text_fit.padding_mm = -1.0;
    assert!(options.validate().is_err());
}

#[tokio::test]
async fn test_save_and_load_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");

    let mut options = LayoutOptions::default();
    options.sheet = SheetConfig::new(400.0, 200.0)
        .with_margin(5.0)
        .with_gap(1.5);
    options.text_fit.padding_mm = 2.0;

    options.save(&path).await.unwrap();
    let loaded = LayoutOptions::load(&path).await.unwrap();
    assert_eq!(loaded.sheet, options.sheet);
    assert_eq!(loaded.text_fit.padding_mm, 2.0);
}

#[tokio::test]
async fn test_partial_options_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");
    tokio::fs::write(&path, r#"{"sheet": {"marginMm": 4.0}}"#)
        .await
        .unwrap();

    let loaded = LayoutOptions::load(&path).await.unwrap();
    assert_eq!(loaded.sheet.width_mm, 600.0);
    assert_eq!(loaded.sheet.margin_mm, 4.0);
    assert_eq!(loaded.text_fit, TextFitConfig::default());
}

#[tokio::test]
async fn test_load_malformed_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");
    tokio::fs::write(&path, "not json").await.unwrap();

    assert!(matches!(
        LayoutOptions::load(&path).await,
        Err(LayoutError::Config(_))
    ));
}
