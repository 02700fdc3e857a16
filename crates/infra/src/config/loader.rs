//! Configuration loader
//!
//! Builds the application configuration from defaults, an optional file and
//! environment overrides, in that order.
//!
//! ## Environment Variables
//! - `INTRASYNC_TIMEZONE`: IANA zone the intranet page uses
//! - `INTRASYNC_EXPORT_PATH`: iCalendar output path
//! - `INTRASYNC_CALENDAR_NAME`: Remote calendar name
//! - `INTRASYNC_GOOGLE_API_BASE`: Google Calendar API base URL
//! - `INTRASYNC_GOOGLE_ACCESS_TOKEN`: OAuth access token for sync
//! - `INTRASYNC_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `INTRASYNC_HTTP_MAX_ATTEMPTS`: Total attempts per request
//! - `INTRASYNC_SYNC_ENABLED`: Whether sync is enabled (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./intrasync.toml` or `./intrasync.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use intrasync_domain::{AppConfig, IntraSyncError, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["intrasync.toml", "intrasync.json", "config.toml", "config.json"];

/// Load configuration from `path` (or a probed file) plus the environment
///
/// An explicit path must exist. When no path is given and no file is found,
/// defaults are used.
///
/// # Errors
/// Returns `IntraSyncError::Config` if:
/// - The explicit file does not exist
/// - The file format is invalid
/// - An environment override has an invalid value
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => load_from_file(path)?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(&found)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                AppConfig::default()
            }
        },
    };

    apply_env_overrides(config)
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension). Missing
/// sections and fields take their default values.
///
/// # Errors
/// Returns `IntraSyncError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(IntraSyncError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| IntraSyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| IntraSyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(IntraSyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Overlay `INTRASYNC_*` variables on `config`
///
/// # Errors
/// Returns `IntraSyncError::Config` when a numeric variable does not parse or
/// the time zone is unknown.
pub fn apply_env_overrides(mut config: AppConfig) -> Result<AppConfig> {
    if let Some(timezone) = env_var("INTRASYNC_TIMEZONE") {
        config.extraction.timezone = timezone;
    }
    if let Some(path) = env_var("INTRASYNC_EXPORT_PATH") {
        config.export.output_path = path;
    }
    if let Some(name) = env_var("INTRASYNC_CALENDAR_NAME") {
        config.sync.calendar_name = name;
    }
    if let Some(base) = env_var("INTRASYNC_GOOGLE_API_BASE") {
        config.sync.api_base_url = base;
    }
    if let Some(token) = env_var("INTRASYNC_GOOGLE_ACCESS_TOKEN") {
        config.sync.access_token = Some(token);
    }
    if let Some(timeout) = env_var("INTRASYNC_HTTP_TIMEOUT_SECS") {
        config.sync.http_timeout_secs = timeout.parse().map_err(|e| {
            IntraSyncError::Config(format!("Invalid HTTP timeout: {}", e))
        })?;
    }
    if let Some(attempts) = env_var("INTRASYNC_HTTP_MAX_ATTEMPTS") {
        config.sync.http_max_attempts = attempts.parse().map_err(|e| {
            IntraSyncError::Config(format!("Invalid HTTP max attempts: {}", e))
        })?;
    }
    config.sync.enabled = env_bool("INTRASYNC_SYNC_ENABLED", config.sync.enabled);

    parse_timezone(&config.extraction.timezone)?;
    Ok(config)
}

/// Parse an IANA time zone name such as `Europe/Paris`
///
/// # Errors
/// Returns `IntraSyncError::Config` for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    Tz::from_str(name.trim())
        .map_err(|_| IntraSyncError::Config(format!("Unknown time zone: {}", name)))
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut directories = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        directories.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            directories.push(exe_dir.to_path_buf());
        }
    }

    directories
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
