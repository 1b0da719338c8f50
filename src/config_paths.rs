//! Centralized paths for the message log, config and diagnostics
//!
//! The message log lives directly in the per-user application-data directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME` or `~/.config`
//! - Windows: `%APPDATA%`
//!
//! Config and diagnostic logs live under `<app data>/filetext/`.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "filetext";

/// Per-user application-data directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME`
///   - Else: `~/.config`
///
/// Windows:
///   - `%APPDATA%`
pub fn app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }
}

/// `<app data>/filetext/`
pub fn config_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(APP_DIR))
}

/// `<app data>/filetext/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<app data>/filetext/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the diagnostics logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
