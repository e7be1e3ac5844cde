use serde::{Deserialize, Serialize};

/// How mask bytes are laid out relative to the pixel bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskInterleaving {
    /// Each pixel byte is preceded by its mask byte.
    #[default]
    SpriteMask,
    /// All pixel data first, masks in a trailing block.
    SeparateBlocks,
}

/// Options for the assembly export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub include_mask: bool,
    /// Sprites only: emit tables for all 8 horizontal pixel offsets.
    pub include_pre_shifts: bool,
    pub interleaving: MaskInterleaving,
    /// Emit a `DEFW` table of frame (and shift) addresses.
    pub generate_lookup_table: bool,
}
