use std::time::Duration;

use chrono::NaiveDate;
use chrono_tz::Tz;
use intrasync_core::ExtractOptions;
use intrasync_infra::{GoogleCalendarClient, HtmlPage, HttpClient};

pub const MONTHLY_FR: &str = include_str!("fixtures/monthly_fr.html");
pub const DAILY_EN: &str = include_str!("fixtures/daily_en.html");

pub const TEST_TOKEN: &str = "test-token";

/// Extraction options pinned to a reference date inside the fixtures' month.
pub fn options(timezone: Tz) -> ExtractOptions {
    ExtractOptions::new(NaiveDate::from_ymd_opt(2024, 4, 10).expect("valid date"), timezone)
}

pub fn page(markup: &str) -> HtmlPage {
    HtmlPage::parse(markup)
}

/// Google client pointed at a mock server, without retry delays.
pub fn google_client(base_url: &str) -> GoogleCalendarClient {
    let http = HttpClient::builder()
        .bearer_token(TEST_TOKEN)
        .base_backoff(Duration::from_millis(1))
        .max_attempts(1)
        .build()
        .expect("http client should build");
    GoogleCalendarClient::new(http, base_url)
}

/// Route test logs through the libtest writer.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}
