//! Tests for frame management and playback

use zx_engine::{Attribute, EngineError, MAX_FRAMES, Position};
use zx_engine_edit::Tool;

use crate::helpers::{create_sprite_state, create_udg_state};

/// Sprite with `count` frames, frame `i` marked by a pixel at (i, 0)
fn create_marked_frames(count: usize) -> zx_engine_edit::EditState {
    let mut state = create_sprite_state();
    for i in 0..count {
        if i > 0 {
            assert!(state.add_frame());
        }
        state.set_pixel(i as i32, 0, true);
    }
    state
}

fn marker(state: &zx_engine_edit::EditState, index: usize) -> i32 {
    let canvas = state.frames()[index].canvas();
    (0..canvas.width()).find(|&x| canvas.pixel(x, 0)).unwrap_or(-1)
}

// ============================================================================
// Frame management
// ============================================================================

#[test]
fn test_add_frame_selects_new_blank_frame() {
    let mut state = create_sprite_state();
    state.set_ink(4);
    state.set_bright(false);
    state.set_pixel(0, 0, true);

    assert!(state.add_frame());

    assert_eq!(state.frames().len(), 2);
    assert_eq!(state.current_frame_index(), 1);
    assert!(!state.canvas().has_ink());
    assert_eq!(state.cell_attribute(0, 0), Some(Attribute::new(4, 0, false)));
    assert_ne!(state.frames()[0].id(), state.frames()[1].id());
}

#[test]
fn test_add_frame_stops_at_limit() {
    let mut state = create_sprite_state();
    while state.frames().len() < MAX_FRAMES {
        assert!(state.add_frame());
    }
    assert!(!state.add_frame());
    assert!(!state.duplicate_frame());
    assert_eq!(state.frames().len(), MAX_FRAMES);
}

#[test]
fn test_duplicate_frame_deep_copies() {
    let mut state = create_sprite_state();
    state.set_pixel(5, 5, true);
    state.rename_frame(0, "Walk");

    assert!(state.duplicate_frame());
    assert_eq!(state.current_frame_index(), 1);
    assert_eq!(state.frames()[1].name(), "Walk (copy)");
    assert_ne!(state.frames()[0].id(), state.frames()[1].id());
    assert!(state.pixel(5, 5));

    state.set_pixel(6, 6, true);
    assert!(!state.frames()[0].canvas().pixel(6, 6));
}

#[test]
fn test_delete_frame_clamps_selection() {
    let mut state = create_marked_frames(3);
    assert_eq!(state.current_frame_index(), 2);

    assert!(state.delete_frame());
    assert_eq!(state.current_frame_index(), 1);
    assert_eq!(marker(&state, 1), 1);

    state.set_current_frame(0);
    assert!(state.delete_frame());
    assert_eq!(state.current_frame_index(), 0);
    assert_eq!(marker(&state, 0), 1);

    assert!(!state.delete_frame());
    assert_eq!(state.frames().len(), 1);
}

#[test]
fn test_reorder_tracks_moved_frame() {
    let mut state = create_marked_frames(4);
    state.set_current_frame(1);

    assert!(state.reorder_frames(1, 3));
    assert_eq!(state.current_frame_index(), 3);
    assert_eq!(marker(&state, 3), 1);
    let order: Vec<i32> = (0..4).map(|i| marker(&state, i)).collect();
    assert_eq!(order, vec![0, 2, 3, 1]);
}

#[test]
fn test_reorder_shifts_crossed_selection() {
    let mut state = create_marked_frames(4);
    state.set_current_frame(2);

    assert!(state.reorder_frames(0, 3));
    assert_eq!(state.current_frame_index(), 1);
    assert_eq!(marker(&state, 1), 2);

    assert!(state.reorder_frames(3, 0));
    assert_eq!(state.current_frame_index(), 2);
    assert_eq!(marker(&state, 2), 2);

    assert!(!state.reorder_frames(0, 9));
}

#[test]
fn test_set_current_frame_clamps_and_resets_line() {
    let mut state = create_marked_frames(2);
    state.select_tool(Tool::Line);
    state.pointer_down(Position::new(1, 1));

    state.set_current_frame(10);

    assert_eq!(state.current_frame_index(), 1);
    state.set_current_frame(0);
    assert_eq!(state.tool_state().line_start(), None);
}

#[test]
fn test_frame_operations_ignored_for_static_profiles() {
    let mut state = create_udg_state(1, 1);
    assert!(!state.add_frame());
    assert!(!state.duplicate_frame());
    assert!(!state.play(0));
    assert_eq!(state.frames().len(), 1);
}

// ============================================================================
// Playback
// ============================================================================

#[test]
fn test_playback_wraps_when_looping() {
    let mut state = create_marked_frames(3);
    state.set_fps(10);
    state.set_current_frame(0);

    assert!(state.play(1000));
    assert!(!state.tick(1050));
    assert!(state.tick(1100));
    assert_eq!(state.current_frame_index(), 1);
    assert!(state.tick(1300));
    assert_eq!(state.current_frame_index(), 0);
    assert!(state.is_playing());
}

#[test]
fn test_playback_stops_on_last_frame_without_loop() {
    let mut state = create_marked_frames(3);
    state.set_fps(10);
    state.set_looping(false);
    state.set_current_frame(0);

    state.play(0);
    state.tick(1000);

    assert_eq!(state.current_frame_index(), 2);
    assert!(!state.is_playing());

    assert!(state.play(2000));
    assert_eq!(state.current_frame_index(), 0);
}

#[test]
fn test_stop_cancels_further_advances() {
    let mut state = create_marked_frames(2);
    state.set_current_frame(0);
    state.play(0);
    state.stop();

    assert!(!state.tick(10_000));
    assert_eq!(state.current_frame_index(), 0);
}

#[test]
fn test_single_frame_does_not_play() {
    let mut state = create_sprite_state();
    assert!(!state.play(0));
    assert!(!state.toggle_playback(0));
    assert!(!state.is_playing());
}

#[test]
fn test_mutators_disabled_while_playing() {
    let mut state = create_marked_frames(2);
    state.set_current_frame(0);
    state.play(0);
    let before = state.canvas().clone();

    state.set_pixel(10, 10, true);
    state.draw_line(Position::new(0, 15), Position::new(15, 15));
    state.bucket_fill(0, 0);
    state.clear_frame();
    state.pointer_down(Position::new(12, 12));

    assert_eq!(state.canvas(), &before);
    assert!(!state.add_frame());
    assert!(!state.delete_frame());
    assert!(matches!(state.resize_canvas(3, 3), Err(EngineError::PlaybackActive)));
    assert_eq!(state.width_chars(), 2);

    assert!(!state.toggle_playback(0));
    state.set_pixel(10, 10, true);
    assert!(state.pixel(10, 10));
}
