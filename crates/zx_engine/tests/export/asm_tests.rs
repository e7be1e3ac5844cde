//! Assembly output checks

use pretty_assertions::assert_eq;
use zx_engine::formats::export_asm;
use zx_engine::{Attribute, Canvas, EngineError, ExportOptions, ExportSource, Frame, LevelMap, MaskInterleaving, Pen, Position};

fn dot_canvas() -> Canvas {
    let mut canvas = Canvas::new(1, 1);
    canvas.set_pixel(3, 3, true, Pen::new(2, false));
    canvas
}

fn sprite_frames(rows: &[u8]) -> Vec<Frame> {
    let mut canvas = Canvas::new(1, 1);
    for (y, &byte) in rows.iter().enumerate() {
        for x in 0..8 {
            if byte & (0x80 >> x) != 0 {
                canvas.set_pixel(x, y as i32, true, Pen::default());
            }
        }
    }
    vec![Frame::new("frame-1", "Frame 1", canvas)]
}

#[test]
fn test_udg_listing() {
    let canvas = dot_canvas();
    let asm = export_asm("dot", &ExportSource::Udg(&canvas), &ExportOptions::default()).unwrap();

    let expected = concat!(
        ";------------------------------------------------------------\n",
        "; dot - User defined graphics\n",
        "; ZX Spectrum graphics data\n",
        ";------------------------------------------------------------\n",
        "; Size: 1x1 characters (8x8 pixels)\n",
        "; Characters: 1\n",
        "; Order: 8 bytes per character, characters left to right, top to bottom\n",
        ";\n",
        "; Pixel bytes: bit 7 is the leftmost pixel, 1 = ink\n",
        "; Attribute bytes: 0-B-PPP-III (bright, paper, ink)\n",
        "\n",
        "dot_width                EQU 1\n",
        "dot_height               EQU 1\n",
        "dot_chars                EQU 1\n",
        "\n",
        "dot_gfx:\n",
        "    DEFB $00,$00,$00,$10,$00,$00,$00,$00          ; char 0 (0,0)\n",
        "\n",
        "; Attributes, one byte per character\n",
        "dot_attr:\n",
        "    DEFB $02\n",
    );
    assert_eq!(asm, expected);
}

#[test]
fn test_udg_listing_is_cropped() {
    let mut canvas = Canvas::new(4, 4);
    canvas.draw_line(Position::new(8, 8), Position::new(23, 8), Pen::default());

    let asm = export_asm("bar", &ExportSource::Udg(&canvas), &ExportOptions::default()).unwrap();

    assert!(asm.contains("bar_width                EQU 2\n"));
    assert!(asm.contains("bar_height               EQU 1\n"));
    assert!(asm.contains("; char 0 (1,1)"));
    assert!(asm.contains("; char 1 (2,1)"));
    assert!(!asm.contains("char 2"));
}

#[test]
fn test_udg_over_budget_fails() {
    let mut canvas = Canvas::new(6, 4);
    canvas.draw_line(Position::new(0, 0), Position::new(47, 31), Pen::default());
    let result = export_asm("big", &ExportSource::Udg(&canvas), &ExportOptions::default());
    assert!(matches!(result, Err(EngineError::ExportTooLarge { cells: 24, max: 21 })));
}

#[test]
fn test_lookup_table_addresses() {
    let mut canvas = Canvas::new(2, 1);
    canvas.bucket_fill(0, 0, Pen::default());
    let options = ExportOptions {
        include_mask: true,
        generate_lookup_table: true,
        ..Default::default()
    };

    let asm = export_asm("t", &ExportSource::Tile(&canvas), &options).unwrap();

    assert!(asm.contains("t_table:\n    DEFW t_gfx+0,t_gfx+16\n"));
}

#[test]
fn test_sprite_pre_shift_tables() {
    let frames = sprite_frames(&[0x81, 0x3C]);
    let options = ExportOptions {
        include_pre_shifts: true,
        generate_lookup_table: true,
        ..Default::default()
    };
    let source = ExportSource::Sprite {
        frames: &frames,
        fps: 8,
        looping: true,
    };

    let asm = export_asm("Ghost", &source, &options).unwrap();

    assert!(asm.contains("ghost_shifts             EQU 8\n"));
    assert!(asm.contains("ghost_f0:\nghost_f0_s0:\n    DEFB $81\n    DEFB $3C\n"));
    assert!(asm.contains("ghost_f0_s1:\n    DEFB $40,$80\n    DEFB $1E,$00\n"));
    assert!(asm.contains("ghost_f0_s7:\n    DEFB $01,$02\n"));
    assert!(asm.contains("ghost_frame_table:\n    DEFW ghost_f0\n"));
    assert!(asm.contains("ghost_f0_shifts:\n    DEFW ghost_f0_s0,ghost_f0_s1,"));
    assert!(asm.contains("ghost_f0_attr:\n    DEFB $47\n"));
}

#[test]
fn test_sprite_separate_masks_follow_data() {
    let frames = sprite_frames(&[0xF0]);
    let options = ExportOptions {
        include_mask: true,
        interleaving: MaskInterleaving::SeparateBlocks,
        ..Default::default()
    };
    let source = ExportSource::Sprite {
        frames: &frames,
        fps: 8,
        looping: false,
    };

    let asm = export_asm("s", &source, &options).unwrap();

    assert!(asm.contains("s_f0:\n    DEFB $F0\n"));
    assert!(asm.contains("s_f0_mask:\n    DEFB $0F\n"));
    assert!(asm.find("s_f0:").unwrap() < asm.find("s_f0_mask:").unwrap());
    assert!(asm.find("s_f0_mask:").unwrap() < asm.find("s_attr:").unwrap());
}

#[test]
fn test_level_listing_order() {
    let mut level = LevelMap::new(8, 3, 2).unwrap();
    level.add_tile();
    if let Some(tile) = level.tile_mut(1) {
        tile.set_cell_attribute(0, 0, Attribute::new(1, 2, false));
    }
    level.set_cell(2, 1, 1);

    let asm = export_asm("lvl", &ExportSource::Level(&level), &ExportOptions::default()).unwrap();

    let tiles = asm.find("lvl_tiles:").unwrap();
    let map = asm.find("lvl_map:").unwrap();
    let attrs = asm.find("lvl_tile_attr:").unwrap();
    assert!(tiles < map && map < attrs);
    assert!(asm.contains("lvl_map:\n    DEFB $00,$00,$00\n    DEFB $00,$00,$01\n"));
    assert!(asm.contains("lvl_tile1_attr:\n    DEFB $11\n"));
}

#[test]
fn test_output_is_stable() {
    let canvas = dot_canvas();
    let options = ExportOptions {
        include_mask: true,
        include_pre_shifts: true,
        interleaving: MaskInterleaving::SeparateBlocks,
        generate_lookup_table: true,
    };
    let first = export_asm("dot", &ExportSource::Scene(&canvas), &options).unwrap();
    let second = export_asm("dot", &ExportSource::Scene(&canvas), &options).unwrap();
    assert_eq!(first, second);
}
