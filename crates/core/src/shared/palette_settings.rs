use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compositing::domain::strip_width::StripWidthPolicy;
use crate::shared::constants::{DEFAULT_PALETTE_HEIGHT, DEFAULT_PALETTE_WIDTH};
use crate::shared::error::PaletteError;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Options for one palette run.
///
/// Loaded from JSON; every field is optional in the file and falls back to
/// its default. The CLI overlays its flags on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub width: u32,
    pub height: u32,
    /// Color selection method name, parsed when the run starts.
    pub method: String,
    /// Frames skipped after each selected frame. Derived from the video
    /// length and `width` when absent.
    pub stride: Option<usize>,
    pub strip_width: StripWidthPolicy,
    pub display: bool,
    pub seed: Option<u64>,
    /// Not applied to the palette yet.
    pub border_size: u32,
    /// Not applied to the palette yet.
    pub border_color: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_PALETTE_WIDTH,
            height: DEFAULT_PALETTE_HEIGHT,
            method: "average".to_string(),
            stride: None,
            strip_width: StripWidthPolicy::Even,
            display: false,
            seed: None,
            border_size: 0,
            border_color: "(255,255,255)".to_string(),
        }
    }
}

impl PaletteSettings {
    /// `<config dir>/Video Palette/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Video Palette").join("settings.json"))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if given, otherwise the default location if a file
    /// exists there, otherwise built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading settings from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.height == 0 {
            return Err(PaletteError::InvalidSettings(
                "height must be greater than 0".to_string(),
            ));
        }
        if self.width == 0 {
            return Err(PaletteError::InvalidSettings(
                "width must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
