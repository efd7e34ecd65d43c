//! Allow-list configuration for dependency pruning
//!
//! Loaded from TOML:
//!
//! ```toml
//! libraries = ["libSDL2", "libgme", "libopenmpt"]
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Library name fragments bundled into the AppImage by default
pub const DEFAULT_LIBRARIES: [&str; 21] = [
    "libSDL2",
    "libSDL2_mixer",
    "libgme",
    "libopenmpt",
    "libpng",
    "libfluidsynth",
    "libpulse",
    "libmodplug",
    "libvorbisfile",
    "libFLAC",
    "libmad",
    "libmpg123",
    "libvorbis",
    "libpulsecommon",
    "libsndfile",
    "libogg",
    "libvorbisenc",
    "libjson",
    "libreadline",
    "libwrap",
    "libtinfo",
];

/// Substrings a dependency's file name must contain to be kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyWhitelist {
    pub libraries: Vec<String>,
}

impl Default for DependencyWhitelist {
    fn default() -> Self {
        Self {
            libraries: DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DependencyWhitelist {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
