//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\line-reader\
//!   macOS:   ~/Library/Application Support/line-reader/
//!   Linux:   ~/.config/line-reader/
//!
//! Data dir (reading position):
//!   Windows: %LOCALAPPDATA%\line-reader\
//!   macOS:   ~/Library/Application Support/line-reader/
//!   Linux:   ~/.local/share/line-reader/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Directory for persisted reader state.
    pub data_dir: PathBuf,
    /// Full path to `state.toml` (last viewed line index).
    pub state_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "line-reader";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let state_file = data_dir.join("state.toml");

        Self {
            config_dir,
            settings_file,
            data_dir,
            state_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
