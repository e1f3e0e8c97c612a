//! Centralized runtime options with TOML preset support.
//!
//! Camera-move, prompt-service and display settings are consolidated here.
//! Options serialize to/from TOML so a lab setup can be shared as a file.
//! Scene state itself is never persisted.

mod camera;
mod display;
mod prompt;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use prompt::PromptOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[prompt]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and camera-move parameters.
    pub camera: CameraOptions,
    /// Hosted text-generation settings.
    #[schemars(skip)]
    pub prompt: PromptOptions,
    /// Overlay and label presentation.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CineError> {
        let content = std::fs::read_to_string(path).map_err(CineError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CineError> {
        toml::from_str(content)
            .map_err(|e| CineError::OptionsParse(e.to_string()))
    }

    /// Write a lab preset. Every field is written out, so the file doubles
    /// as a template to edit.
    pub fn save(&self, path: &Path) -> Result<(), CineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CineError::OptionsParse(e.to_string()))?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, content)?;
        log::info!("wrote lab preset {}", path.display());
        Ok(())
    }

    /// Names of the lab presets (`*.toml` stems) in `dir`, sorted.
    pub fn list_presets(dir: &Path) -> Result<Vec<String>, CineError> {
        let mut names: Vec<String> = std::fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
