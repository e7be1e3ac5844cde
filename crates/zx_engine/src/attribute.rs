//! Spectrum colour attributes.
//!
//! One [`Attribute`] exists per 8×8 character cell. The hardware only has a
//! single ink/paper pair per cell, no matter how many pixels are set.

use serde::{Deserialize, Serialize};

/// Highest colour index (white).
pub const MAX_COLOR: u8 = 7;

pub const BRIGHT_BIT: u8 = 0x40;

/// Colour names in palette order, used for export comments.
pub const COLOR_NAMES: [&str; 8] = ["black", "blue", "red", "magenta", "green", "cyan", "yellow", "white"];

/// Ink, paper and bright flag of one character cell.
///
/// Fields are private so ink and paper can never leave `0..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    ink: u8,
    paper: u8,
    bright: bool,
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Attribute {
    /// White ink on black paper, bright.
    pub const DEFAULT: Attribute = Attribute {
        ink: 7,
        paper: 0,
        bright: true,
    };

    pub fn new(ink: u8, paper: u8, bright: bool) -> Self {
        Self {
            ink: ink.min(MAX_COLOR),
            paper: paper.min(MAX_COLOR),
            bright,
        }
    }

    pub fn ink(&self) -> u8 {
        self.ink
    }

    pub fn paper(&self) -> u8 {
        self.paper
    }

    pub fn bright(&self) -> bool {
        self.bright
    }

    pub fn set_ink(&mut self, ink: u8) {
        self.ink = ink.min(MAX_COLOR);
    }

    pub fn set_paper(&mut self, paper: u8) {
        self.paper = paper.min(MAX_COLOR);
    }

    pub fn set_bright(&mut self, bright: bool) {
        self.bright = bright;
    }

    /// Encode as the `0-B-PPP-III` attribute byte (flash is always off).
    pub fn to_byte(self) -> u8 {
        (if self.bright { BRIGHT_BIT } else { 0 }) | (self.paper << 3) | self.ink
    }

    /// Decode an attribute byte. The flash bit is dropped.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            ink: byte & 0x07,
            paper: (byte >> 3) & 0x07,
            bright: byte & BRIGHT_BIT != 0,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {}{}",
            COLOR_NAMES[self.ink as usize],
            COLOR_NAMES[self.paper as usize],
            if self.bright { ", bright" } else { "" }
        )
    }
}

/// The colour selection new ink is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pen {
    ink: u8,
    bright: bool,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            ink: Attribute::DEFAULT.ink,
            bright: Attribute::DEFAULT.bright,
        }
    }
}

impl Pen {
    pub fn new(ink: u8, bright: bool) -> Self {
        Self {
            ink: ink.min(MAX_COLOR),
            bright,
        }
    }

    pub fn ink(&self) -> u8 {
        self.ink
    }

    pub fn bright(&self) -> bool {
        self.bright
    }

    pub fn set_ink(&mut self, ink: u8) {
        self.ink = ink.min(MAX_COLOR);
    }

    pub fn set_bright(&mut self, bright: bool) {
        self.bright = bright;
    }

    /// Attribute of a freshly cleared cell painted with this pen.
    pub fn blank_attribute(&self) -> Attribute {
        Attribute::new(self.ink, 0, self.bright)
    }
}
