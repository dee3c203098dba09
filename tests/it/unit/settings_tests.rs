//! Settings persistence tests.

use crate::helpers::TestCanvasBuilder;
use moodboard::{SettingsError, Settings, ShapeType, ToolType};
use std::fs;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodboard").join("settings.json");
    let settings = Settings {
        pen_color: "#101010".to_string(),
        pen_width: 12.0,
        default_shape: ShapeType::Triangle,
        max_history: Some(50),
        ..Default::default()
    };

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ pen_width: ").unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Settings::load_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io(_))
    ));
}

#[test]
fn test_settings_seed_tool_state() {
    let settings = Settings {
        pen_color: "#FF00FF".to_string(),
        pen_width: 9.0,
        default_shape: ShapeType::Circle,
        ..Default::default()
    };
    let mut canvas = TestCanvasBuilder::new()
        .with_settings(settings)
        .with_tool(ToolType::Shape)
        .build();

    crate::helpers::click(&mut canvas, 0.0, 0.0);
    assert_eq!(
        canvas.items()[0].content,
        moodboard::ItemContent::Shape {
            shape_type: ShapeType::Circle
        }
    );
    assert_eq!(canvas.tools().pen_color, "#FF00FF");
    assert_eq!(canvas.tools().pen_width, 9.0);
}
