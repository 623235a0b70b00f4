//! Layered configuration.
//!
//! Settings come from built-in defaults, then an optional TOML file, then
//! `PAWSOME_*` environment variables (nested keys use `__`, e.g.
//! `PAWSOME_IMAGES__WIDTH=640`). Command-line flags are applied on top by
//! the binary.
//!
//! ```toml
//! theme = "dark"
//! log_file = "pawsome.log"
//!
//! [images]
//! enabled = true
//! base_url = "https://source.unsplash.com"
//! width = 400
//! height = 300
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::images::{ImageProvider, NoImages, UnsplashImages, UNSPLASH_BASE_URL};
use crate::ui::ThemeChoice;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pawsome.toml";

const ENV_PREFIX: &str = "PAWSOME";

/// Image provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSettings {
    pub enabled: bool,
    pub base_url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageSettings {
    /// Build the provider these settings describe.
    pub fn provider(&self) -> Box<dyn ImageProvider> {
        if self.enabled {
            Box::new(UnsplashImages::new(&self.base_url, self.width, self.height))
        } else {
            Box::new(NoImages)
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub images: ImageSettings,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path` (or [`DEFAULT_CONFIG_FILE`] if present) and
    /// the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], but reads environment variables from `env`
    /// instead of the process when it is given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("theme", "auto")?
            .set_default("images.enabled", true)?
            .set_default("images.base_url", UNSPLASH_BASE_URL)?
            .set_default("images.width", 400)?
            .set_default("images.height", 300)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder.add_source(
                File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
            ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("Failed to load configuration")?;

        let settings: Settings = config
            .try_deserialize()
            .context("Invalid configuration")?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
