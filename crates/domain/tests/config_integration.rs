//! Integration tests for configuration and error types
//!
//! Covers the shapes other crates and config files depend on.

use intrasync_domain::constants::{DEFAULT_CALENDAR_NAME, GOOGLE_CALENDAR_API_BASE};
use intrasync_domain::{AppConfig, CanonicalEvent, IntraSyncError, Language};

// ============================================================================
// AppConfig
// ============================================================================

#[test]
fn test_defaults_target_google_and_utc() {
    let config = AppConfig::default();

    assert_eq!(config.extraction.timezone, "UTC");
    assert_eq!(config.sync.calendar_name, DEFAULT_CALENDAR_NAME);
    assert_eq!(config.sync.api_base_url, GOOGLE_CALENDAR_API_BASE);
    assert!(config.sync.enabled);
    assert!(config.sync.access_token.is_none());
}

#[test]
fn test_token_is_read_but_not_written() {
    let config: AppConfig =
        serde_json::from_str(r#"{"sync":{"access_token":"ya29.abc","enabled":false}}"#).unwrap();
    assert_eq!(config.sync.access_token.as_deref(), Some("ya29.abc"));
    assert!(!config.sync.enabled);

    let value = serde_json::to_value(&config).unwrap();
    assert!(value["sync"].get("access_token").is_none());
    assert_eq!(value["sync"]["enabled"], false);
}

// ============================================================================
// IntraSyncError
// ============================================================================

#[test]
fn test_error_serializes_as_tagged_message() {
    let error = IntraSyncError::Auth("token expired".into());
    let value = serde_json::to_value(&error).unwrap();

    assert_eq!(value["type"], "Auth");
    assert_eq!(value["message"], "token expired");
    assert_eq!(error.to_string(), "Authentication error: token expired");
}

// ============================================================================
// CanonicalEvent
// ============================================================================

#[test]
fn test_event_json_uses_wire_names() {
    let event: CanonicalEvent = serde_json::from_str(
        r#"{
            "group": "G3",
            "course": "Algorithms",
            "room": "204",
            "startTime": "2024-04-21T09:00:00Z",
            "endTime": "2024-04-21T12:00:00Z",
            "language": "fr"
        }"#,
    )
    .unwrap();

    assert_eq!(event.summary(), "G3 - Algorithms");
    assert_eq!(event.activity, "");
    assert_eq!(event.language, Language::Fr);
    assert_eq!(event.duration().num_minutes(), 180);
}
