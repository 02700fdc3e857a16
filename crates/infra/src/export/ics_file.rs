//! iCalendar file writer

use std::path::Path;

use chrono::{DateTime, Utc};
use intrasync_core::export::render_ics;
use intrasync_domain::{CanonicalEvent, Result};
use tracing::info;

use crate::errors::InfraError;

/// Renders `events` and writes them to `path`, creating parent directories.
///
/// Returns the number of bytes written.
pub fn write_ics(
    path: &Path,
    events: &[CanonicalEvent],
    generated_at: DateTime<Utc>,
) -> Result<usize> {
    let contents = render_ics(events, generated_at);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(InfraError::from)?;
    }
    std::fs::write(path, &contents).map_err(InfraError::from)?;

    info!(
        path = %path.display(),
        events = events.len(),
        bytes = contents.len(),
        "wrote iCalendar file"
    );
    Ok(contents.len())
}
