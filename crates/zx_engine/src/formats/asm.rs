//! Assembly source export.
//!
//! Output layout, in order:
//! 1. comment header
//! 2. `EQU` constants
//! 3. pixel data (per character, per sprite row, per frame and per shift)
//! 4. mask block (only with [`MaskInterleaving::SeparateBlocks`])
//! 5. `DEFW` lookup table
//! 6. level map (levels only)
//! 7. attribute block
//!
//! The output is a pure function of its inputs; there are no timestamps.

use lazy_static::lazy_static;
use regex::Regex;

use super::{ExportOptions, ExportSource, MaskInterleaving, bytes};
use crate::{Canvas, CellRect, Frame, LevelMap, Result};

lazy_static! {
    static ref LABEL_REGEX: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();
}

/// Number of horizontal pre-shift positions.
pub const SHIFT_COUNT: u8 = 8;

/// Assembler label derived from a project name: every non-alphanumeric
/// character becomes `_`, the result is lower case.
pub fn asm_label(name: &str) -> String {
    let label = LABEL_REGEX.replace_all(name, "_").to_lowercase();
    if label.is_empty() { "untitled".to_string() } else { label }
}

/// Render `source` as assembly text.
///
/// # Errors
///
/// Blank projects are rejected with [`crate::EngineError::BlankExport`]; a UDG
/// whose drawn area is larger than the UDG budget fails with
/// [`crate::EngineError::ExportTooLarge`].
pub fn export_asm(name: &str, source: &ExportSource<'_>, options: &ExportOptions) -> Result<String> {
    source.check_exportable()?;
    let label = asm_label(name);
    let mut w = AsmWriter::default();

    match source {
        ExportSource::Udg(canvas) => {
            let rect = source.export_rect().unwrap_or_else(|| canvas.full_rect());
            write_cell_project(&mut w, name, &label, "User defined graphics", canvas, rect, options);
        }
        ExportSource::Tile(canvas) => {
            write_cell_project(&mut w, name, &label, "Tile", canvas, canvas.full_rect(), options);
        }
        ExportSource::Scene(canvas) => {
            write_cell_project(&mut w, name, &label, "Scene", canvas, canvas.full_rect(), options);
        }
        ExportSource::Sprite { frames, fps, looping } => {
            write_sprite_project(&mut w, name, &label, frames, *fps, *looping, options);
        }
        ExportSource::Level(level) => {
            write_level_project(&mut w, name, &label, level, options);
        }
    }

    log::debug!("exported '{}' as assembly ({} bytes)", name, w.out.len());
    Ok(w.out)
}

// ═══════════════════════════════════════════════════════════════════════════
// Writer
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct AsmWriter {
    out: String,
}

impl AsmWriter {
    fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.out.push_str(";\n");
        } else {
            self.out.push_str(&format!("; {text}\n"));
        }
    }

    fn rule(&mut self) {
        self.out.push_str(&format!(";{}\n", "-".repeat(60)));
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn equ(&mut self, name: &str, value: impl std::fmt::Display) {
        self.out.push_str(&format!("{name:<24} EQU {value}\n"));
    }

    fn label(&mut self, name: &str) {
        self.out.push_str(&format!("{name}:\n"));
    }

    fn defb(&mut self, data: &[u8], comment: Option<&str>) {
        let values: Vec<String> = data.iter().map(|b| format!("${b:02X}")).collect();
        match comment {
            Some(comment) => self.out.push_str(&format!("    DEFB {:<40} ; {comment}\n", values.join(","))),
            None => self.out.push_str(&format!("    DEFB {}\n", values.join(","))),
        }
    }

    fn defw(&mut self, labels: &[String]) {
        self.out.push_str(&format!("    DEFW {}\n", labels.join(",")));
    }

    fn header(&mut self, name: &str, kind: &str, lines: &[String]) {
        self.rule();
        self.comment(&format!("{name} - {kind}"));
        self.comment("ZX Spectrum graphics data");
        self.rule();
        for line in lines {
            self.comment(line);
        }
        if !lines.is_empty() {
            self.comment("");
        }
        self.comment("Pixel bytes: bit 7 is the leftmost pixel, 1 = ink");
        self.comment("Attribute bytes: 0-B-PPP-III (bright, paper, ink)");
        self.blank();
    }
}

/// Pixel bytes with optional interleaved masks (mask byte first).
fn with_masks(data: &[u8], interleave: bool) -> Vec<u8> {
    if !interleave {
        return data.to_vec();
    }
    data.iter().flat_map(|&b| [bytes::mask_byte(b), b]).collect()
}

fn masks_of(data: &[u8]) -> Vec<u8> {
    data.iter().map(|&b| bytes::mask_byte(b)).collect()
}

fn interleave_masks(options: &ExportOptions) -> bool {
    options.include_mask && options.interleaving == MaskInterleaving::SpriteMask
}

fn separate_masks(options: &ExportOptions) -> bool {
    options.include_mask && options.interleaving == MaskInterleaving::SeparateBlocks
}

fn mask_comment(w: &mut AsmWriter, options: &ExportOptions) {
    if interleave_masks(options) {
        w.comment("Masks interleaved: each pixel byte is preceded by its mask byte");
    } else if separate_masks(options) {
        w.comment("Masks follow the pixel data in a separate block");
    }
}

fn write_attribute_rows(w: &mut AsmWriter, canvas: &Canvas, rect: CellRect) {
    for cy in rect.y..rect.y + rect.height {
        let row: Vec<u8> = (rect.x..rect.x + rect.width)
            .map(|cx| canvas.cell_attribute(cx, cy).unwrap_or_default().to_byte())
            .collect();
        w.defb(&row, None);
    }
}

/// One DEFB line per character cell, cells left to right, top to bottom.
fn write_cells(w: &mut AsmWriter, canvas: &Canvas, rect: CellRect, options: &ExportOptions, first_index: usize) {
    let interleave = interleave_masks(options);
    for (i, cell) in rect.cells().enumerate() {
        let data = canvas.cell_bytes(cell.x, cell.y);
        w.defb(&with_masks(&data, interleave), Some(&format!("char {} ({},{})", first_index + i, cell.x, cell.y)));
    }
}

fn write_cell_masks(w: &mut AsmWriter, canvas: &Canvas, rect: CellRect, first_index: usize) {
    for (i, cell) in rect.cells().enumerate() {
        let data = canvas.cell_bytes(cell.x, cell.y);
        w.defb(&masks_of(&data), Some(&format!("char {} mask", first_index + i)));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UDG / Tile / Scene
// ═══════════════════════════════════════════════════════════════════════════

fn write_cell_project(w: &mut AsmWriter, name: &str, label: &str, kind: &str, canvas: &Canvas, rect: CellRect, options: &ExportOptions) {
    w.header(
        name,
        kind,
        &[
            format!("Size: {}x{} characters ({}x{} pixels)", rect.width, rect.height, rect.pixel_width(), rect.pixel_height()),
            format!("Characters: {}", rect.cell_count()),
            "Order: 8 bytes per character, characters left to right, top to bottom".to_string(),
        ],
    );

    w.equ(&format!("{label}_width"), rect.width);
    w.equ(&format!("{label}_height"), rect.height);
    w.equ(&format!("{label}_chars"), rect.cell_count());
    w.blank();

    mask_comment(w, options);
    w.label(&format!("{label}_gfx"));
    write_cells(w, canvas, rect, options, 0);
    w.blank();

    if separate_masks(options) {
        w.label(&format!("{label}_mask"));
        write_cell_masks(w, canvas, rect, 0);
        w.blank();
    }

    if options.generate_lookup_table {
        let interleave = interleave_masks(options);
        let char_size = if interleave { 16 } else { 8 };
        w.comment("Character address table");
        w.label(&format!("{label}_table"));
        let entries: Vec<String> = (0..rect.cell_count()).map(|i| format!("{label}_gfx+{}", i * char_size)).collect();
        for chunk in entries.chunks(8) {
            w.defw(chunk);
        }
        w.blank();
    }

    w.comment("Attributes, one byte per character");
    w.label(&format!("{label}_attr"));
    write_attribute_rows(w, canvas, rect);
}

// ═══════════════════════════════════════════════════════════════════════════
// Software sprites
// ═══════════════════════════════════════════════════════════════════════════

/// Shift positions emitted for each frame.
fn shifts(options: &ExportOptions) -> Vec<u8> {
    if options.include_pre_shifts { (0..SHIFT_COUNT).collect() } else { vec![0] }
}

fn shift_label(label: &str, frame: usize, shift: u8, options: &ExportOptions) -> String {
    if options.include_pre_shifts {
        format!("{label}_f{frame}_s{shift}")
    } else {
        format!("{label}_f{frame}")
    }
}

/// Row `y` of a frame at `shift`, each byte independently expanded.
fn sprite_row(canvas: &Canvas, y: i32, shift: u8) -> Vec<u8> {
    (0..canvas.width_chars()).flat_map(|cx| bytes::shifted_bytes(canvas.byte_at(cx, y), shift)).collect()
}

fn write_sprite_project(w: &mut AsmWriter, name: &str, label: &str, frames: &[Frame], fps: u32, looping: bool, options: &ExportOptions) {
    let Some(first) = frames.first() else {
        return;
    };
    let canvas = first.canvas();
    let width_bytes = canvas.width_chars();
    let height = canvas.height();
    let shift_list = shifts(options);

    w.header(
        name,
        "Software sprite",
        &[
            format!("Size: {}x{} pixels ({} bytes per row)", canvas.width(), height, width_bytes),
            format!("Frames: {} at {} fps{}", frames.len(), fps, if looping { ", looping" } else { "" }),
            if options.include_pre_shifts {
                "Pre-shifted: 8 tables per frame, shift 0 is 1 byte per column, shifts 1-7 are 2".to_string()
            } else {
                "Order: one line per pixel row, columns left to right".to_string()
            },
        ],
    );

    w.equ(&format!("{label}_width"), width_bytes);
    w.equ(&format!("{label}_height"), height);
    w.equ(&format!("{label}_frames"), frames.len());
    w.equ(&format!("{label}_fps"), fps);
    if options.include_pre_shifts {
        w.equ(&format!("{label}_shifts"), SHIFT_COUNT);
    }
    w.blank();

    mask_comment(w, options);
    let interleave = interleave_masks(options);
    for (n, frame) in frames.iter().enumerate() {
        let canvas = frame.canvas();
        w.comment(&format!("Frame {n}: {} ({} ms)", frame.name(), frame.duration_ms()));
        if options.include_pre_shifts {
            w.label(&format!("{label}_f{n}"));
        }
        for &shift in &shift_list {
            w.label(&shift_label(label, n, shift, options));
            for y in 0..canvas.height() {
                w.defb(&with_masks(&sprite_row(canvas, y, shift), interleave), None);
            }
        }
        w.blank();
    }

    if separate_masks(options) {
        w.comment("Masks");
        for (n, frame) in frames.iter().enumerate() {
            let canvas = frame.canvas();
            for &shift in &shift_list {
                w.label(&format!("{}_mask", shift_label(label, n, shift, options)));
                for y in 0..canvas.height() {
                    w.defb(&masks_of(&sprite_row(canvas, y, shift)), None);
                }
            }
        }
        w.blank();
    }

    if options.generate_lookup_table {
        w.comment("Frame address table");
        w.label(&format!("{label}_frame_table"));
        let entries: Vec<String> = (0..frames.len()).map(|n| format!("{label}_f{n}")).collect();
        for chunk in entries.chunks(8) {
            w.defw(chunk);
        }
        if separate_masks(options) {
            w.label(&format!("{label}_mask_table"));
            let entries: Vec<String> = (0..frames.len()).map(|n| format!("{}_mask", shift_label(label, n, 0, options))).collect();
            for chunk in entries.chunks(8) {
                w.defw(chunk);
            }
        }
        if options.include_pre_shifts {
            for n in 0..frames.len() {
                w.label(&format!("{label}_f{n}_shifts"));
                let entries: Vec<String> = shift_list.iter().map(|&s| shift_label(label, n, s, options)).collect();
                w.defw(&entries);
            }
        }
        w.blank();
    }

    w.comment("Attributes, one byte per character, per frame");
    w.label(&format!("{label}_attr"));
    for (n, frame) in frames.iter().enumerate() {
        w.label(&format!("{label}_f{n}_attr"));
        write_attribute_rows(w, frame.canvas(), frame.canvas().full_rect());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Level maps
// ═══════════════════════════════════════════════════════════════════════════

fn write_level_project(w: &mut AsmWriter, name: &str, label: &str, level: &LevelMap, options: &ExportOptions) {
    let chars = level.tile_chars();
    let chars_per_tile = (chars * chars) as usize;

    w.header(
        name,
        "Level",
        &[
            format!("Map: {}x{} tiles", level.width(), level.height()),
            format!("Tiles: {} of {}x{} pixels", level.tiles().len(), level.tile_size(), level.tile_size()),
            "Order: tiles as 8 bytes per character, map row by row".to_string(),
        ],
    );

    w.equ(&format!("{label}_tile_size"), chars);
    w.equ(&format!("{label}_tile_count"), level.tiles().len());
    w.equ(&format!("{label}_map_width"), level.width());
    w.equ(&format!("{label}_map_height"), level.height());
    w.blank();

    mask_comment(w, options);
    w.label(&format!("{label}_tiles"));
    for (n, tile) in level.tiles().iter().enumerate() {
        w.label(&format!("{label}_tile{n}"));
        write_cells(w, tile, tile.full_rect(), options, n * chars_per_tile);
    }
    w.blank();

    if separate_masks(options) {
        w.label(&format!("{label}_tiles_mask"));
        for (n, tile) in level.tiles().iter().enumerate() {
            write_cell_masks(w, tile, tile.full_rect(), n * chars_per_tile);
        }
        w.blank();
    }

    if options.generate_lookup_table {
        w.comment("Tile address table");
        w.label(&format!("{label}_tile_table"));
        let entries: Vec<String> = (0..level.tiles().len()).map(|n| format!("{label}_tile{n}")).collect();
        for chunk in entries.chunks(8) {
            w.defw(chunk);
        }
        w.blank();
    }

    w.comment("Map, one tile index per byte");
    w.label(&format!("{label}_map"));
    for row in level.map().rows() {
        w.defb(row, None);
    }
    w.blank();

    w.comment("Tile attributes, one byte per character");
    w.label(&format!("{label}_tile_attr"));
    for (n, tile) in level.tiles().iter().enumerate() {
        w.label(&format!("{label}_tile{n}_attr"));
        write_attribute_rows(w, tile, tile.full_rect());
    }
}
