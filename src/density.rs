//! Android density buckets and the size table.
//!
//! Android picks a raster asset per screen density from folders named
//! `drawable-<density>`. Each bucket expects the same logical icon at a
//! different pixel edge length:
//!
//! | Density | Scale | Edge |
//! |---------|-------|------|
//! | ldpi    | 0.75x | 36   |
//! | mdpi    | 1x    | 48   |
//! | hdpi    | 1.5x  | 72   |
//! | xhdpi   | 2x    | 96   |
//! | xxhdpi  | 3x    | 144  |
//! | xxxhdpi | 4x    | 192  |
//!
//! A [`SizeSpec`] pairs one density name with its edge length. The table is
//! the only data structure the generator iterates over.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Folder prefix shared by every density bucket.
pub const DRAWABLE_PREFIX: &str = "drawable-";

/// Largest accepted edge length. One RGBA raster at this size is 256 MiB.
pub const MAX_EDGE: u32 = 8192;

/// One entry of the size table: square edge length plus density folder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeSpec {
    /// Density identifier, e.g. `"xhdpi"`.
    pub name: String,
    /// Edge length in pixels.
    pub size: u32,
}

impl SizeSpec {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// `drawable-<name>`
    pub fn folder_name(&self) -> String {
        format!("{}{}", DRAWABLE_PREFIX, self.name)
    }

    /// Directory that receives this density's icons.
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.folder_name())
    }

    /// Full path of the PNG written for `base_name`.
    pub fn output_path(&self, output_root: &Path, base_name: &str) -> PathBuf {
        self.output_dir(output_root).join(format!("{base_name}.png"))
    }
}

/// The stock Android table, ldpi through xxxhdpi.
pub fn stock_size_table() -> Vec<SizeSpec> {
    vec![
        SizeSpec::new("ldpi", 36),
        SizeSpec::new("mdpi", 48),
        SizeSpec::new("hdpi", 72),
        SizeSpec::new("xhdpi", 96),
        SizeSpec::new("xxhdpi", 144),
        SizeSpec::new("xxxhdpi", 192),
    ]
}

/// First density name that appears more than once, if any.
pub fn find_duplicate_density(table: &[SizeSpec]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    table
        .iter()
        .find(|spec| !seen.insert(spec.name.as_str()))
        .map(|spec| spec.name.as_str())
}
