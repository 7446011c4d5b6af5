//! Platform directories used by the local stores.

use std::path::PathBuf;

const APP_DIR: &str = "infragenie";

/// Per-user data directory, e.g. `~/.local/share/infragenie`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

/// Per-user config directory, e.g. `~/.config/infragenie`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

/// Default location of a file in the data directory, falling back to the
/// working directory when no data directory is known.
pub fn data_file(name: &str) -> PathBuf {
    data_dir()
        .map(|d| d.join(name))
        .unwrap_or_else(|| PathBuf::from(name))
}
