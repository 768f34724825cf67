//! Daily puzzle retrieval
//!
//! The publisher serves one document per day at
//! `https://www.nytimes.com/svc/pips/v1/<YYYY-MM-DD>.json`. Retrieval shells
//! out to `curl` rather than linking an HTTP client.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default endpoint prefix for the daily document
pub const DEFAULT_SOURCE_URL: &str = "https://www.nytimes.com/svc/pips/v1";

/// Download the puzzle document for a date (today when `None`) to `dest`.
///
/// `date` must be formatted `YYYY-MM-DD`. Fails with a descriptive error when
/// curl is unavailable or the download does not succeed; on success the
/// document is ready to be loaded with
/// [`DailyPuzzles::load_from_file`](super::DailyPuzzles::load_from_file).
pub fn fetch_daily(source_url: &str, date: Option<&str>, dest: &Path) -> Result<()> {
    let date = match date {
        Some(date) => {
            validate_date(date)?;
            date.to_string()
        }
        None => today()?,
    };

    let url = format!("{}/{}.json", source_url.trim_end_matches('/'), date);

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let status = Command::new("curl")
        .arg("-s")
        .arg("-f")
        .arg("-o")
        .arg(dest)
        .arg(&url)
        .status()
        .context("Failed to run curl. Check that curl is installed.")?;

    if !status.success() {
        anyhow::bail!(
            "Failed to download puzzle for {} (curl exited with {}). The puzzle may not be published yet.",
            date,
            status
        );
    }

    Ok(())
}

fn validate_date(date: &str) -> Result<()> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && date
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });

    if !well_formed {
        anyhow::bail!("Invalid date '{}' (expected YYYY-MM-DD)", date);
    }
    Ok(())
}

/// Today's date (UTC) as `YYYY-MM-DD`
fn today() -> Result<String> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is set before the Unix epoch")?;
    let (year, month, day) = civil_from_days((since_epoch.as_secs() / 86_400) as i64);
    Ok(format!("{:04}-{:02}-{:02}", year, month, day))
}

/// Gregorian civil date from a count of days since 1970-01-01
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month as u32, day as u32)
}
