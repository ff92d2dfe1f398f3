//! Generator configuration.
//!
//! Handles loading, validating, and merging `icons.toml`. Stock defaults are
//! the classic layout of an Android project: logos under `logo/`, resources
//! under `app/src/main/res/`, and the six-bucket density table. A user file
//! only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! project_root = "."                # Base for the two relative paths below
//! res_dir = "app/src/main/res"      # Output root (drawable-* folders go here)
//! logo_dir = "logo"                 # Where source images live
//! compression = "best"              # PNG compression: "fast" or "best"
//!
//! [[sources]]
//! file = "shumiao.jpg"              # Relative to logo_dir
//! # base_name = "shumiao"           # Defaults to the file stem
//!
//! [[sources]]
//! file = "zhigeyun.jpg"
//!
//! [[densities]]
//! name = "ldpi"
//! size = 36
//! # ... mdpi 48, hdpi 72, xhdpi 96, xxhdpi 144, xxxhdpi 192
//! ```
//!
//! Arrays replace their defaults wholesale: a file that declares
//! `[[densities]]` gets exactly the entries it lists.
//!
//! Unknown keys are rejected to catch typos early.

use crate::density::{MAX_EDGE, SizeSpec, find_duplicate_density, stock_size_table};
use crate::imaging::Compression;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "icons.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `icons.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Base directory that `res_dir` and `logo_dir` are resolved against.
    pub project_root: PathBuf,
    /// Output root, relative to `project_root` unless absolute.
    pub res_dir: PathBuf,
    /// Source image directory, relative to `project_root` unless absolute.
    pub logo_dir: PathBuf,
    /// PNG compression effort.
    pub compression: CompressionSetting,
    /// Images to process, in order.
    pub sources: Vec<Source>,
    /// Density table applied to every source.
    pub densities: Vec<SizeSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            res_dir: PathBuf::from("app/src/main/res"),
            logo_dir: PathBuf::from("logo"),
            compression: CompressionSetting::default(),
            sources: vec![Source::new("shumiao.jpg"), Source::new("zhigeyun.jpg")],
            densities: stock_size_table(),
        }
    }
}

/// Serializable mirror of [`Compression`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionSetting {
    Fast,
    #[default]
    Best,
}

impl From<CompressionSetting> for Compression {
    fn from(setting: CompressionSetting) -> Self {
        match setting {
            CompressionSetting::Fast => Compression::Fast,
            CompressionSetting::Best => Compression::Best,
        }
    }
}

/// One source image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
    /// Path relative to `logo_dir` unless absolute.
    pub file: PathBuf,
    /// Output file stem. Falls back to the stem of `file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
}

impl Source {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            base_name: None,
        }
    }

    /// Explicit `base_name`, else the file stem, else empty.
    pub fn base_name(&self) -> String {
        match &self.base_name {
            Some(name) => name.clone(),
            None => self
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

impl GeneratorConfig {
    /// Directory the `drawable-*` folders are written into.
    pub fn output_root(&self) -> PathBuf {
        self.project_root.join(&self.res_dir)
    }

    /// Directory holding the source images.
    pub fn logo_root(&self) -> PathBuf {
        self.project_root.join(&self.logo_dir)
    }

    /// Full path of a source image.
    pub fn source_path(&self, source: &Source) -> PathBuf {
        self.logo_root().join(&source.file)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.densities.is_empty() {
            return Err(ConfigError::Validation(
                "densities must not be empty".into(),
            ));
        }
        for spec in &self.densities {
            if spec.size == 0 {
                return Err(ConfigError::Validation(format!(
                    "density '{}' has size 0",
                    spec.name
                )));
            }
            if spec.size > MAX_EDGE {
                return Err(ConfigError::Validation(format!(
                    "density '{}' size {} exceeds the {MAX_EDGE} px limit",
                    spec.name, spec.size
                )));
            }
            if !is_plain_name(&spec.name) {
                return Err(ConfigError::Validation(format!(
                    "density name '{}' must be a non-empty folder suffix",
                    spec.name
                )));
            }
        }
        if let Some(dup) = find_duplicate_density(&self.densities) {
            return Err(ConfigError::Validation(format!(
                "density '{dup}' is listed more than once"
            )));
        }

        if self.sources.is_empty() {
            return Err(ConfigError::Validation("sources must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for source in &self.sources {
            let base_name = source.base_name();
            if !is_plain_name(&base_name) {
                return Err(ConfigError::Validation(format!(
                    "source '{}' has an invalid base name '{}'",
                    source.file.display(),
                    base_name
                )));
            }
            if !seen.insert(base_name.clone()) {
                return Err(ConfigError::Validation(format!(
                    "base name '{base_name}' is used by more than one source"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `icons.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GeneratorConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `icons.toml` in the given directory.
///
/// A relative `project_root` is resolved against `dir`, so a config file
/// describes paths from its own location.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let mut config = resolve_config(load_raw_config(dir)?)?;
    if config.project_root.is_relative() {
        config.project_root = dir.join(&config.project_root);
    }
    Ok(config)
}

/// Returns a fully-commented stock `icons.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# density-icons configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Base directory for res_dir and logo_dir. Relative paths are resolved
# against the directory containing this file.
project_root = "."

# Output root. One drawable-<density>/ folder per density is created here.
res_dir = "app/src/main/res"

# Directory containing the source images.
logo_dir = "logo"

# PNG compression effort: "fast" or "best". Output is lossless either way.
compression = "best"

# ---------------------------------------------------------------------------
# Source images, processed in order. base_name defaults to the file stem
# and names the generated <base_name>.png in every density folder.
# ---------------------------------------------------------------------------
[[sources]]
file = "shumiao.jpg"

[[sources]]
file = "zhigeyun.jpg"

# ---------------------------------------------------------------------------
# Density table. Every source is resized to size x size for each entry.
# Declaring any [[densities]] replaces the whole table.
# ---------------------------------------------------------------------------
[[densities]]
name = "ldpi"      # 0.75x
size = 36

[[densities]]
name = "mdpi"      # 1x
size = 48

[[densities]]
name = "hdpi"      # 1.5x
size = 72

[[densities]]
name = "xhdpi"     # 2x
size = 96

[[densities]]
name = "xxhdpi"    # 3x
size = 144

[[densities]]
name = "xxxhdpi"   # 4x
size = 192
"##
}
