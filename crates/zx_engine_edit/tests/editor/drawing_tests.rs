//! Tests for pixel, line and cell-fill operations

use zx_engine::formats::mask_byte;
use zx_engine::{Attribute, Position};
use zx_engine_edit::{LinePhase, Tool};

use crate::helpers::{attribute_bytes, create_sprite_state, create_udg_state, pixel_rows};

// ============================================================================
// Set Pixel
// ============================================================================

#[test]
fn test_set_pixel_stamps_ink_and_bright() {
    let mut state = create_udg_state(1, 1);
    state.set_ink(2);
    state.set_bright(false);

    state.set_pixel(3, 3, true);

    assert!(state.pixel(3, 3));
    assert_eq!(state.cell_attribute(0, 0), Some(Attribute::new(2, 0, false)));
    assert_eq!(state.canvas().byte_at(0, 3), 0x10);
}

#[test]
fn test_set_pixel_is_idempotent() {
    let mut once = create_udg_state(2, 1);
    once.set_ink(4);
    once.set_pixel(9, 5, true);

    let mut twice = create_udg_state(2, 1);
    twice.set_ink(4);
    twice.set_pixel(9, 5, true);
    twice.set_pixel(9, 5, true);

    assert_eq!(pixel_rows(&once), pixel_rows(&twice));
    assert_eq!(attribute_bytes(&once), attribute_bytes(&twice));
}

#[test]
fn test_out_of_bounds_is_ignored() {
    let mut state = create_udg_state(2, 2);
    state.set_pixel(1, 1, true);
    let pixels = pixel_rows(&state);
    let attributes = attribute_bytes(&state);

    for (x, y) in [(-1, 0), (0, -1), (16, 0), (0, 16), (100, 100), (-8, -8)] {
        state.set_pixel(x, y, true);
        state.bucket_fill(x, y);
    }

    assert_eq!(pixel_rows(&state), pixels);
    assert_eq!(attribute_bytes(&state), attributes);
}

#[test]
fn test_erase_keeps_attribute() {
    let mut state = create_udg_state(1, 1);
    state.set_ink(3);
    state.set_bright(false);
    state.set_pixel(0, 0, true);
    state.bucket_fill(0, 0);
    let before = state.cell_attribute(0, 0);

    state.set_ink(6);
    state.set_bright(true);
    state.set_pixel(0, 0, false);

    assert!(!state.pixel(0, 0));
    assert_eq!(state.cell_attribute(0, 0), before);
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn test_horizontal_line_fills_row() {
    let mut state = create_udg_state(1, 1);
    state.draw_line(Position::new(0, 0), Position::new(7, 0));

    let byte = state.canvas().byte_at(0, 0);
    assert_eq!(byte, 0xFF);
    assert_eq!(mask_byte(byte), 0x00);
    assert_eq!(state.canvas().byte_at(0, 1), 0x00);
}

#[test]
fn test_line_writes_attribute_of_every_touched_cell() {
    let mut state = create_udg_state(3, 2);
    state.set_ink(1);
    state.draw_line(Position::new(0, 0), Position::new(23, 15));

    assert_eq!(state.cell_attribute(0, 0).map(|a| a.ink()), Some(1));
    assert_eq!(state.cell_attribute(1, 1).map(|a| a.ink()), Some(1));
    assert_eq!(state.cell_attribute(2, 1).map(|a| a.ink()), Some(1));
    // never touched by the diagonal
    assert_eq!(state.cell_attribute(0, 1), Some(Attribute::DEFAULT));
}

#[test]
fn test_line_tool_two_click_cycle() {
    let mut state = create_udg_state(2, 2);
    state.select_tool(Tool::Line);

    state.pointer_down(Position::new(1, 1));
    assert_eq!(state.tool_state().line_phase(), LinePhase::AwaitingEnd);
    assert!(!state.pixel(1, 1));

    state.pointer_move(Position::new(40, 1));
    assert_eq!(state.tool_state().line_preview(), Some(Position::new(15, 1)));
    assert_eq!(state.line_preview_points().last(), Some(&Position::new(15, 1)));

    state.pointer_down(Position::new(10, 1));
    assert_eq!(state.tool_state().line_phase(), LinePhase::AwaitingStart);
    for x in 1..=10 {
        assert!(state.pixel(x, 1));
    }
    assert!(!state.pixel(11, 1));
    assert!(state.line_preview_points().is_empty());
}

#[test]
fn test_select_tool_resets_line_anchor() {
    let mut state = create_udg_state(1, 1);
    state.select_tool(Tool::Line);
    state.pointer_down(Position::new(2, 2));

    state.select_tool(Tool::Line);

    assert_eq!(state.tool_state().line_start(), None);
    assert_eq!(state.tool_state().line_preview(), None);
}

// ============================================================================
// Pointer handling
// ============================================================================

#[test]
fn test_pencil_drag_only_while_drawing() {
    let mut state = create_udg_state(2, 1);
    state.pointer_move(Position::new(1, 1));
    assert!(!state.pixel(1, 1));

    state.pointer_down(Position::new(0, 0));
    state.pointer_move(Position::new(1, 0));
    state.pointer_up();
    state.pointer_move(Position::new(2, 0));

    assert!(state.pixel(0, 0));
    assert!(state.pixel(1, 0));
    assert!(!state.pixel(2, 0));
}

#[test]
fn test_rubber_and_pan_tools() {
    let mut state = create_udg_state(1, 1);
    state.set_pixel(4, 4, true);

    state.select_tool(Tool::Pan);
    state.pointer_down(Position::new(5, 5));
    assert!(!state.pixel(5, 5));

    state.select_tool(Tool::Rubber);
    state.set_pixel(5, 4, true);
    state.pointer_down(Position::new(4, 4));
    state.pointer_move(Position::new(5, 4));
    assert!(!state.pixel(4, 4));
    assert!(!state.pixel(5, 4));
}

// ============================================================================
// Bucket fill
// ============================================================================

#[test]
fn test_bucket_fill_paints_one_cell() {
    let mut state = create_udg_state(2, 1);
    state.set_ink(5);
    state.set_bright(false);

    state.bucket_fill(3, 3);

    let attr = state.cell_attribute(0, 0).unwrap();
    assert_eq!(attr.paper(), 5);
    assert!(!attr.bright());
    assert_eq!(attr.ink(), Attribute::DEFAULT.ink());
    assert_eq!(state.cell_attribute(1, 0), Some(Attribute::DEFAULT));
}

// ============================================================================
// Clearing
// ============================================================================

#[test]
fn test_clear_uses_profile_attribute() {
    let mut udg = create_udg_state(1, 1);
    udg.set_ink(2);
    udg.set_pixel(0, 0, true);
    udg.clear_frame();
    assert!(!udg.has_content());
    assert_eq!(udg.cell_attribute(0, 0), Some(Attribute::DEFAULT));

    let mut sprite = create_sprite_state();
    sprite.set_ink(3);
    sprite.set_bright(false);
    sprite.set_pixel(0, 0, true);
    sprite.clear_frame();
    assert!(!sprite.pixel(0, 0));
    assert_eq!(sprite.cell_attribute(1, 1), Some(Attribute::new(3, 0, false)));
}

#[test]
fn test_has_content_tracks_attributes() {
    let mut state = create_udg_state(1, 1);
    assert!(!state.has_content());
    state.bucket_fill(0, 0);
    assert!(state.has_content());
}
