//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_NAME, DEFAULT_EXPORT_FILENAME, DEFAULT_TIMEZONE, GOOGLE_CALENDAR_API_BASE,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
    pub sync: SyncConfig,
}

/// Extraction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// IANA time zone the intranet displays its times in.
    pub timezone: String,
}

/// iCalendar export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_path: String,
}

/// Remote calendar sync configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub enabled: bool,
    pub calendar_name: String,
    pub api_base_url: String,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub http_timeout_secs: u64,
    pub http_max_attempts: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_TIMEZONE.to_string() }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output_path: DEFAULT_EXPORT_FILENAME.to_string() }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            api_base_url: GOOGLE_CALENDAR_API_BASE.to_string(),
            access_token: None,
            http_timeout_secs: 30,
            http_max_attempts: 3,
        }
    }
}
