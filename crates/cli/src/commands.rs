//! Subcommand implementations

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Args;
use intrasync_core::{
    extract_events, render_listing, CalendarSyncService, ExtractOptions, ExtractionReport,
    SyncOutcome,
};
use intrasync_domain::AppConfig;
use intrasync_infra::{config, write_ics, GoogleCalendarClient, HtmlPage};
use tracing::info;

/// Options shared by every subcommand that reads a page.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Saved intranet planning page (HTML)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Reference date (YYYY-MM-DD) supplying the year and month; defaults to today
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// IANA time zone of the page's times; overrides the configuration
    #[arg(long, value_name = "ZONE")]
    pub timezone: Option<String>,
}

struct LoadedPage {
    report: ExtractionReport,
    timezone: Tz,
}

fn load_page(app_config: &AppConfig, page: &PageArgs) -> Result<LoadedPage> {
    let zone = page.timezone.as_deref().unwrap_or(app_config.extraction.timezone.as_str());
    let timezone = config::parse_timezone(zone)?;

    let document = HtmlPage::from_file(&page.input)
        .with_context(|| format!("failed to read page {}", page.input.display()))?;

    let options = match page.today {
        Some(today) => ExtractOptions::new(today, timezone),
        None => ExtractOptions::today_in(timezone),
    };

    Ok(LoadedPage { report: extract_events(&document, &options), timezone })
}

fn report_counts(report: &ExtractionReport) {
    eprintln!(
        "{} event(s) found on the {} page ({} skipped, {} failed)",
        report.emitted(),
        report.layout.view_type,
        report.skipped(),
        report.failed()
    );
}

pub fn extract(app_config: &AppConfig, page: &PageArgs, json: bool) -> Result<ExitCode> {
    let LoadedPage { report, timezone } = load_page(app_config, page)?;
    report_counts(&report);

    let events = report.into_events();
    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else if events.is_empty() {
        println!("No events found.");
    } else {
        println!("{}", render_listing(&events, timezone));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn export(
    app_config: &AppConfig,
    page: &PageArgs,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let LoadedPage { report, .. } = load_page(app_config, page)?;
    report_counts(&report);

    let events = report.into_events();
    if events.is_empty() {
        println!("No events found, nothing exported.");
        return Ok(ExitCode::SUCCESS);
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&app_config.export.output_path));
    write_ics(&path, &events, Utc::now())
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Exported {} event(s) to {}", events.len(), display(&path));
    Ok(ExitCode::SUCCESS)
}

/// Exits with failure when any event could not be created.
pub async fn sync(app_config: &AppConfig, page: &PageArgs) -> Result<ExitCode> {
    if !app_config.sync.enabled {
        bail!("sync is disabled in the configuration");
    }

    let LoadedPage { report, timezone } = load_page(app_config, page)?;
    report_counts(&report);

    let events = report.into_events();
    if events.is_empty() {
        println!("No events found, nothing to sync.");
        return Ok(ExitCode::SUCCESS);
    }

    let client = GoogleCalendarClient::from_config(&app_config.sync)
        .context("failed to create the Google Calendar client")?;
    let service =
        CalendarSyncService::new(Arc::new(client), app_config.sync.calendar_name.clone(), timezone);

    let sync_report = service.sync(&events).await.context("calendar sync failed")?;
    info!(calendar_id = %sync_report.calendar_id, "sync complete");

    for entry in &sync_report.entries {
        if let SyncOutcome::Failed { error } = &entry.outcome {
            eprintln!("failed: {} ({}): {error}", entry.event.summary(), entry.event.start_time);
        }
    }
    println!(
        "Synced to \"{}\": {} created, {} skipped, {} failed, {} total",
        app_config.sync.calendar_name,
        sync_report.created_count(),
        sync_report.skipped_count(),
        sync_report.failed_count(),
        sync_report.total_attempted()
    );

    Ok(if sync_report.failed_count() == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn display(path: &Path) -> String {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf()).display().to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const PAGE: &str = r#"
        <html><body><div class="calendar planner daysview">
          <div class="planning-week-day">
            <div class="day-header">Mon 22/4</div>
            <div class="event_registered">G3-Algorithms » Lecture
              09:00 - 12:00
              Room 204</div>
          </div>
        </div></body></html>"#;

    fn page_args(dir: &TempDir, timezone: Option<&str>) -> PageArgs {
        let input = dir.path().join("planning.html");
        fs::write(&input, PAGE).unwrap();
        PageArgs {
            input,
            today: NaiveDate::from_ymd_opt(2024, 4, 10),
            timezone: timezone.map(str::to_string),
        }
    }

    #[test]
    fn page_timezone_overrides_configuration() {
        let dir = TempDir::new().unwrap();
        let loaded =
            load_page(&AppConfig::default(), &page_args(&dir, Some("Europe/Paris"))).unwrap();
        assert_eq!(loaded.timezone, Tz::Europe__Paris);

        let event = loaded.report.events().next().unwrap();
        assert_eq!(event.start_time.to_rfc3339(), "2024-04-22T07:00:00+00:00");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_page(&AppConfig::default(), &page_args(&dir, Some("Nowhere/City"))).is_err());
    }

    #[test]
    fn export_writes_to_requested_path() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.ics");

        export(&AppConfig::default(), &page_args(&dir, None), Some(output.clone())).unwrap();

        let ics = fs::read_to_string(output).unwrap();
        assert!(ics.contains("DTSTART:20240422T090000Z\r\n"));
    }

    #[tokio::test]
    async fn sync_requires_it_to_be_enabled() {
        let dir = TempDir::new().unwrap();
        let mut app_config = AppConfig::default();
        app_config.sync.enabled = false;

        let error = sync(&app_config, &page_args(&dir, None)).await.unwrap_err();
        assert!(error.to_string().contains("disabled"));
    }

    #[tokio::test]
    async fn sync_without_token_fails_before_any_request() {
        let dir = TempDir::new().unwrap();
        let error = sync(&AppConfig::default(), &page_args(&dir, None)).await.unwrap_err();
        assert!(format!("{error:#}").contains("access token"));
    }
}
