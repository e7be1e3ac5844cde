//! Tests for project save/load

use zx_engine::formats::project::ProjectDocument;
use zx_engine::{Attribute, EngineError, Position, Profile};
use zx_engine_edit::{EditState, LevelEditState, Tool};

use crate::helpers::{attribute_bytes, create_sprite_state, create_udg_state, pixel_rows};

fn assert_same_project(a: &EditState, b: &EditState) {
    assert_eq!(a.profile(), b.profile());
    assert_eq!(a.size(), b.size());
    assert_eq!(a.project_name(), b.project_name());
    assert_eq!(a.pen(), b.pen());
    assert_eq!(a.frames(), b.frames());
    assert_eq!(a.current_frame_index(), b.current_frame_index());
    assert_eq!(a.fps(), b.fps());
    assert_eq!(a.is_looping(), b.is_looping());
}

#[test]
fn test_udg_round_trip() {
    let mut state = create_udg_state(3, 2);
    state.set_project_name("ship");
    state.set_ink(2);
    state.draw_line(Position::new(0, 0), Position::new(23, 15));
    state.set_ink(6);
    state.bucket_fill(20, 3);

    let text = state.save_project().unwrap();
    let mut loaded = EditState::new(Profile::Udg);
    loaded.load_project(&text).unwrap();

    assert_same_project(&state, &loaded);
}

#[test]
fn test_sprite_round_trip() {
    let mut state = create_sprite_state();
    state.set_project_name("hero");
    state.set_pixel(1, 1, true);
    state.add_frame();
    state.set_ink(3);
    state.set_pixel(2, 2, true);
    state.rename_frame(1, "Step");
    state.set_frame_duration(1, 200);
    state.set_fps(12);
    state.set_looping(false);

    let text = state.save_project().unwrap();
    let mut loaded = create_sprite_state();
    loaded.load_project(&text).unwrap();

    assert_same_project(&state, &loaded);
    assert_eq!(loaded.frames()[1].duration_ms(), 200);
}

#[test]
fn test_load_resets_transient_state() {
    let mut source = create_sprite_state();
    source.add_frame();
    let text = source.save_project().unwrap();

    let mut state = create_sprite_state();
    state.add_frame();
    state.play(0);
    state.stop();
    state.select_tool(Tool::Line);
    state.pointer_down(Position::new(1, 1));

    state.load_project(&text).unwrap();

    assert_eq!(state.tool(), Tool::Pencil);
    assert_eq!(state.tool_state().line_start(), None);
    assert!(!state.is_playing());
}

#[test]
fn test_wrong_type_leaves_state_untouched() {
    let mut tile = EditState::new_tile(16).unwrap();
    tile.set_pixel(1, 1, true);
    let text = tile.save_project().unwrap();

    let mut state = create_udg_state(2, 2);
    state.set_pixel(3, 3, true);
    let pixels = pixel_rows(&state);
    let attributes = attribute_bytes(&state);

    let result = state.load_project(&text);

    assert!(matches!(result, Err(EngineError::WrongProjectType { .. })));
    assert_eq!(pixel_rows(&state), pixels);
    assert_eq!(attribute_bytes(&state), attributes);
    assert_eq!(state.width_chars(), 2);
}

#[test]
fn test_unsupported_size_rejected() {
    let mut state = EditState::new_tile(16).unwrap();
    state.set_pixel(0, 0, true);

    let result = state.load_project(r#"{"version":1,"type":"tile","tileSize":12}"#);
    assert!(matches!(result, Err(EngineError::UnsupportedSize { .. })));

    let result = state.load_project(r#"{"version":1,"charsWidth":6,"charsHeight":4}"#);
    assert!(result.is_err());
    assert!(state.pixel(0, 0));
}

#[test]
fn test_udg_budget_rejected_on_load() {
    let mut state = create_udg_state(1, 1);
    assert!(state.load_project(r#"{"charsWidth":6,"charsHeight":4}"#).is_err());
    assert!(state.load_project("not json").is_err());
    assert_eq!(state.size().total_chars, 1);
}

#[test]
fn test_load_pads_truncates_and_defaults() {
    let text = r#"{
        "version": 1,
        "charsWidth": 1,
        "charsHeight": 1,
        "pixels": [[false, true, false, false, false, false, false, false, true, true]],
        "attributes": [[{"ink": 2}, {"ink": 4}], [{"paper": 3}]]
    }"#;
    let mut state = create_udg_state(2, 2);
    state.load_project(text).unwrap();

    assert_eq!(state.width_chars(), 1);
    assert!(state.pixel(1, 0));
    assert!(!state.pixel(0, 1));
    assert_eq!(state.canvas().byte_at(0, 0), 0x40);
    assert_eq!(state.cell_attribute(0, 0), Some(Attribute::new(2, 0, true)));
}

#[test]
fn test_attribute_values_are_clamped() {
    let text = r#"{"charsWidth":1,"charsHeight":1,"attributes":[[{"ink":12,"paper":-3,"bright":false}]]}"#;
    let mut state = create_udg_state(1, 1);
    state.load_project(text).unwrap();
    assert_eq!(state.cell_attribute(0, 0), Some(Attribute::new(7, 0, false)));
}

#[test]
fn test_document_carries_type_and_size_tags() {
    let state = create_sprite_state();
    let doc: ProjectDocument = state.to_document();
    assert_eq!(doc.kind.as_deref(), Some("software_sprite"));
    assert_eq!(doc.sprite_width, Some(16));
    assert_eq!(doc.sprite_height, Some(16));

    let udg = create_udg_state(2, 1);
    let json = udg.save_project().unwrap();
    assert!(!json.contains("\"type\""));
    assert!(json.contains("\"charsWidth\": 2"));
}

#[test]
fn test_load_project_file_names_project_after_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sprite = create_sprite_state();
    sprite.set_project_name("");
    sprite.set_pixel(2, 2, true);
    let path = dir.path().join("hero_sprite_sprite.json");
    std::fs::write(&path, sprite.save_project().unwrap()).unwrap();

    let mut state = EditState::new(Profile::Sprite);
    state.load_project_file(&path).unwrap();

    assert_eq!(state.project_name(), "hero_sprite");
    assert!(state.pixel(2, 2));
}

#[test]
fn test_load_project_file_keeps_document_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut tile = EditState::new_tile(8).unwrap();
    tile.set_project_name("brick");
    let path = dir.path().join("wall_tile.json");
    std::fs::write(&path, tile.save_project().unwrap()).unwrap();

    let mut state = EditState::new(Profile::Tile);
    state.load_project_file(&path).unwrap();
    assert_eq!(state.project_name(), "brick");

    let missing = dir.path().join("missing_tile.json");
    assert!(matches!(state.load_project_file(&missing), Err(EngineError::ReadFile { .. })));
    assert_eq!(state.project_name(), "brick");
}

#[test]
fn test_oversized_documents_rejected_without_panic() {
    let mut state = create_udg_state(2, 1);
    state.set_pixel(1, 1, true);

    assert!(state.load_project(r#"{"charsWidth":65536,"charsHeight":65536}"#).is_err());
    assert!(state.load_project(r#"{"charsWidth":2147483647,"charsHeight":2}"#).is_err());
    assert_eq!(state.size().total_chars, 2);
    assert!(state.pixel(1, 1));

    let mut sprite = create_sprite_state();
    let result = sprite.load_project(r#"{"type":"software_sprite","spriteWidth":800000,"spriteHeight":800000}"#);
    assert!(result.is_err());
    assert_eq!(sprite.width_chars(), 2);

    let mut level = LevelEditState::default();
    let result = level.load_project(r#"{"type":"level","mapWidth":100000,"mapHeight":100000}"#);
    assert!(matches!(result, Err(EngineError::UnsupportedSize { .. })));
    assert_eq!(level.level().width(), 16);
}
