//! Unified path management for ledge configuration files.
//!
//! All paths are resolved through the `dirs` crate so the layout is
//! correct on every platform.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/ledge/             # Config directory
//! └── settings.toml            # Desktop settings
//!
//! ~/.local/share/ledge/        # Data directory (for large files)
//! ```

use std::path::PathBuf;

use ledge_core::{LedgeError, Result};

/// Unified path management for ledge.
pub struct LedgePaths;

impl LedgePaths {
    /// Returns the ledge configuration directory.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the platform config directory cannot
    /// be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("ledge"))
            .ok_or_else(|| LedgeError::config("Cannot find config directory"))
    }

    /// Returns the ledge data directory, used for larger files.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the platform data directory cannot
    /// be determined.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("ledge"))
            .ok_or_else(|| LedgeError::config("Cannot find data directory"))
    }

    /// Returns the path to the desktop settings file.
    pub fn settings_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = LedgePaths::config_dir().unwrap();
        assert!(config_dir.ends_with("ledge"));
    }

    #[test]
    fn test_settings_file() {
        let settings_file = LedgePaths::settings_file().unwrap();
        assert!(settings_file.ends_with("settings.toml"));
        let config_dir = LedgePaths::config_dir().unwrap();
        assert!(settings_file.starts_with(&config_dir));
    }

    #[test]
    fn test_data_dir() {
        let data_dir = LedgePaths::data_dir().unwrap();
        assert!(data_dir.ends_with("ledge"));
    }
}
