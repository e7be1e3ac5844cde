//! Shared test helpers

#![allow(dead_code)]

use zx_engine::Profile;
use zx_engine_edit::EditState;

/// A UDG editor of `width_chars × height_chars` characters
pub fn create_udg_state(width_chars: i32, height_chars: i32) -> EditState {
    EditState::with_size(Profile::Udg, width_chars, height_chars).unwrap()
}

/// A 16x16 sprite editor
pub fn create_sprite_state() -> EditState {
    EditState::new_sprite(16, 16).unwrap()
}

/// Snapshot of every pixel of the current frame
pub fn pixel_rows(state: &EditState) -> Vec<Vec<bool>> {
    state.pixels().to_rows()
}

/// Snapshot of every attribute byte of the current frame
pub fn attribute_bytes(state: &EditState) -> Vec<u8> {
    state.attributes().iter().map(|a| a.to_byte()).collect()
}
