use zx_engine::formats::{self, ExportOptions, ExportSource};
use zx_engine::{Profile, Result};

use super::EditState;

impl EditState {
    /// The exportable view of this editor's data
    pub fn export_source(&self) -> ExportSource<'_> {
        match self.profile {
            Profile::Udg => ExportSource::Udg(self.canvas()),
            Profile::Tile => ExportSource::Tile(self.canvas()),
            Profile::Scene => ExportSource::Scene(self.canvas()),
            Profile::Sprite => ExportSource::Sprite {
                frames: self.reel.frames(),
                fps: self.reel.fps(),
                looping: self.reel.is_looping(),
            },
        }
    }

    /// Assembly listing labelled after the project name
    pub fn export_asm(&self, options: &ExportOptions) -> Result<String> {
        formats::export_asm(&self.project_name, &self.export_source(), options)
    }

    pub fn export_binary(&self) -> Result<Vec<u8>> {
        formats::export_binary(&self.export_source())
    }

    /// Screen dump of the current frame. Only a full-screen canvas qualifies.
    pub fn export_scr(&self) -> Result<Vec<u8>> {
        self.export_source().check_exportable()?;
        formats::export_scr(self.canvas())
    }
}
