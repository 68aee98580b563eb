use std::io::Cursor;

use color_name::{Bridge, PluginMessage, serve};
use serde_json::{Value, json};
use shades::VariationKind;

fn run(lines: &[&str]) -> Vec<Value> {
    let mut bridge = Bridge::default();
    let input = Cursor::new(lines.join("\n"));
    let mut output = Vec::new();
    serve(&mut bridge, input, &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn selection(shapes: Value) -> String {
    json!({"type": "selectionchange", "content": shapes.to_string()}).to_string()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn selection_replies_with_palettes() {
    let line = selection(json!([
        {"color": "#FF0000", "opacity": 1, "shapeInfo": [
            {"property": "fill", "index": 0, "shapeId": "a1"}
        ]}
    ]));
    let replies = run(&[&line]);

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["type"], "palettes");

    let variations = replies[0]["content"][0]["variations"].as_array().unwrap();
    let names: Vec<_> = variations.iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["brown", "firebrick", "red", "tomato", "indianred"]);

    let types: Vec<_> = variations.iter().map(|v| v["type"].as_str().unwrap()).collect();
    assert_eq!(types, ["darker", "darker", "selected", "lighter", "lighter"]);
    assert_eq!(variations[2]["color"], "#FF0000");
    assert_eq!(variations[2]["isSelected"], true);
}

#[test]
fn selection_accepts_css_functions() {
    let bridge = Bridge::default();
    let content = json!([{"color": "rgb(255, 140, 0)", "opacity": 0.5, "shapeInfo": []}]);
    let palettes = bridge.palettes(&content.to_string()).unwrap();

    assert_eq!(palettes[0].color, "rgb(255, 140, 0)");
    assert_eq!(palettes[0].opacity, 0.5);
    let selected = palettes[0]
        .variations
        .iter()
        .find(|v| v.kind == Some(VariationKind::Selected))
        .unwrap();
    assert_eq!(selected.name, "darkorange");
    assert_eq!(selected.color, "#ff8c00");
}

#[test]
fn selection_keeps_distinct_colors_in_order() {
    let bridge = Bridge::default();
    let content = json!([
        {"color": "#4682B4", "opacity": 1, "shapeInfo": []},
        {"color": "#FF0000", "opacity": 1, "shapeInfo": []},
        {"color": "#4682b4", "opacity": 1, "shapeInfo": []}
    ]);
    let palettes = bridge.palettes(&content.to_string()).unwrap();
    let colors: Vec<_> = palettes.iter().map(|p| p.color.as_str()).collect();
    assert_eq!(colors, ["#4682B4", "#FF0000"]);
}

#[test]
fn empty_selection_gives_no_palettes() {
    let replies = run(&[&selection(json!([]))]);
    assert_eq!(replies[0], json!({"type": "palettes", "content": []}));
}

#[test]
fn malformed_selection_is_reported() {
    let line = json!({"type": "selectionchange", "content": "not json"}).to_string();
    let replies = run(&[&line]);
    assert_eq!(replies[0]["type"], "error");
    assert!(replies[0]["content"].as_str().unwrap().starts_with("Malformed selection"));
}

// ============================================================================
// Other messages
// ============================================================================

#[test]
fn create_color_shape_becomes_create_text() {
    let mut bridge = Bridge::default();
    let reply = bridge
        .handle_line(r#"{"type":"create-color-shape","content":"tomato"}"#)
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(reply, @r#"{"type":"create-text","content":"tomato"}"#);
}

#[test]
fn theme_is_echoed() {
    let mut bridge = Bridge::default();
    let reply = bridge.handle(PluginMessage::Theme("dark".to_string()));
    assert_eq!(reply, Some(PluginMessage::Theme("dark".to_string())));
    assert_eq!(bridge.theme(), Some("dark"));
}

// ============================================================================
// Line handling
// ============================================================================

#[test]
fn malformed_lines_do_not_stop_the_stream() {
    let replies = run(&[
        "{not json",
        "",
        r#"{"type":"launch-rocket","content":""}"#,
        r#"{"type":"theme","content":"light"}"#,
    ]);

    let types: Vec<_> = replies.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(types, ["error", "error", "theme"]);
    assert!(replies[0]["content"].as_str().unwrap().starts_with("Malformed message"));
    assert_eq!(replies[2]["content"], "light");
}

#[test]
fn outbound_messages_are_ignored() {
    let replies = run(&[
        r#"{"type":"create-text","content":"x"}"#,
        r#"{"type":"error","content":"x"}"#,
    ]);
    assert!(replies.is_empty());
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn load_dictionary_and_config_files() {
    let dir = std::env::temp_dir().join(format!("color-name-load-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let dictionary = dir.join("colors.json");
    let config = dir.join("config.json");
    std::fs::write(
        &dictionary,
        r##"[{"name": "Red", "hex": "#FF0000"}, {"name": "DarkRed", "hex": "#8B0000"}]"##,
    )
    .unwrap();
    std::fs::write(&config, r#"{"variationCount": 1}"#).unwrap();

    let bridge = Bridge::load(Some(&dictionary), Some(&config)).unwrap();
    assert_eq!(bridge.dictionary().len(), 2);
    assert_eq!(bridge.config().variation_count, 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_without_files_uses_defaults() {
    let bridge = Bridge::load(None, None).unwrap();
    assert_eq!(bridge.dictionary().len(), shades::css_named_colors().len());
    assert_eq!(bridge.config(), &shades::AnalysisConfig::default());
}

#[test]
fn load_reports_missing_file() {
    let missing = std::path::Path::new("/nonexistent/colors.json");
    let err = Bridge::load(Some(missing), None).unwrap_err();
    assert!(matches!(err, color_name::BridgeError::Io(_)));
}
