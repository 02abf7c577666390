//! # Generation Settings
//!
//! Persisted settings for producing flower images, stored as JSON.
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `size` | 300 | Side length of the square image in pixels |
//! | `images_folder` | `flowers` | Root folder for saved images |
//! | `random_seed` | false | Always pick a fresh random seed |
//! | `seed` | none | Fixed seed used when `random_seed` is off |
//!
//! Missing keys fall back to their defaults, so `{}` is a valid file.
//!
//! ```
//! use blossom::config::FlowerConfig;
//!
//! let config: FlowerConfig = serde_json::from_str(r#"{ "size": 512 }"#).unwrap();
//! assert_eq!(config.size, 512);
//! assert_eq!(config.images_folder.to_str(), Some("flowers"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BlossomError;
use crate::seed::Seed;

/// Default image side length in pixels.
pub const DEFAULT_SIZE: u32 = 300;

/// Default folder for saved images.
pub const DEFAULT_IMAGES_FOLDER: &str = "flowers";

/// Settings for producing flower images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    pub size: u32,
    pub images_folder: PathBuf,
    pub random_seed: bool,
    pub seed: Option<Seed>,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            images_folder: PathBuf::from(DEFAULT_IMAGES_FOLDER),
            random_seed: false,
            seed: None,
        }
    }
}

impl FlowerConfig {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, BlossomError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| BlossomError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Write settings as pretty JSON, creating parent folders as needed.
    pub fn save(&self, path: &Path) -> Result<(), BlossomError> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| BlossomError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, text)?;
        Ok(())
    }

    /// These settings with `seed` fixed, so loading them regenerates the same flower.
    pub fn pinned(&self, seed: Seed) -> Self {
        Self {
            random_seed: false,
            seed: Some(seed),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), BlossomError> {
        if self.size == 0 {
            return Err(BlossomError::InvalidSize { size: 0 });
        }
        Ok(())
    }

    /// Seed to generate with: random when asked for, else the fixed seed,
    /// else a random one.
    pub fn resolve_seed(&self) -> Seed {
        if self.random_seed {
            return Seed::random();
        }
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = Seed::random();
                warn!(%seed, "No seed configured, picked a random one");
                seed
            }
        }
    }

    /// Where an image for `seed` at this size is saved: `<folder>/<seed>/<size>.png`.
    pub fn image_path(&self, seed: Seed) -> PathBuf {
        self.images_folder
            .join(seed.to_string())
            .join(format!("{}.png", self.size))
    }
}
