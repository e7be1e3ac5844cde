//! Tests for the level editor

use zx_engine::{EngineError, ExportOptions, Position};
use zx_engine_edit::{EditState, LevelEditState};

#[test]
fn test_blank_level_is_not_exported() {
    let state = LevelEditState::default();
    assert!(!state.has_content());
    assert!(matches!(state.export_asm(&ExportOptions::default()), Err(EngineError::BlankExport)));
}

#[test]
fn test_place_and_erase() {
    let mut state = LevelEditState::new(8, 4, 3).unwrap();
    state.add_tile();
    state.place_tile(1, 2);
    state.place_tile(9, 9);
    assert_eq!(state.level().cell(1, 2), Some(1));
    assert!(state.has_content());

    state.erase_cell(1, 2);
    assert_eq!(state.level().cell(1, 2), Some(0));
}

#[test]
fn test_tile_drawing_uses_canvas_rules() {
    let mut state = LevelEditState::new(16, 2, 2).unwrap();
    state.set_ink(3);
    state.set_tile_pixel(9, 0, true);
    state.set_ink(5);
    state.set_tile_pixel(9, 0, false);

    let tile = state.tile().unwrap();
    assert!(!tile.pixel(9, 0));
    assert_eq!(tile.cell_attribute(1, 0).map(|a| a.ink()), Some(3));
}

#[test]
fn test_level_round_trip() {
    let mut state = LevelEditState::new(8, 5, 4).unwrap();
    state.set_project_name("cave");
    state.set_tile_pixel(0, 0, true);
    state.duplicate_tile();
    state.draw_tile_pixels_line(Position::new(0, 7), Position::new(7, 7));
    state.draw_tile_line(Position::new(0, 0), Position::new(4, 3));
    state.resize_map(6, 4).unwrap();

    let text = state.save_project().unwrap();
    let mut loaded = LevelEditState::default();
    loaded.load_project(&text).unwrap();

    assert_eq!(loaded.level(), state.level());
    assert_eq!(loaded.project_name(), "cave");
}

#[test]
fn test_level_rejects_other_projects() {
    let mut sprite = EditState::new_sprite(8, 8).unwrap();
    sprite.set_pixel(0, 0, true);
    let text = sprite.save_project().unwrap();

    let mut state = LevelEditState::default();
    state.place_tile(0, 0);
    assert!(matches!(state.load_project(&text), Err(EngineError::WrongProjectType { .. })));
    assert_eq!(state.level().width(), 16);
}

#[test]
fn test_level_asm_sections() {
    let mut state = LevelEditState::new(8, 2, 1).unwrap();
    state.set_project_name("cave");
    state.add_tile();
    state.set_tile_pixel(0, 0, true);
    state.place_tile(1, 0);

    let asm = state.export_asm(&ExportOptions::default()).unwrap();

    assert!(asm.contains("cave_tile_count"));
    assert!(asm.contains("cave_tile1:\n    DEFB $80,$00,$00,$00,$00,$00,$00,$00"));
    assert!(asm.contains("cave_map:\n    DEFB $00,$01\n"));
    assert!(asm.find("cave_map:").unwrap() < asm.find("cave_tile_attr:").unwrap());
}
