//! Kaspersky OpenTIP file scanning.
//!
//! The scan endpoint may answer with a complete report straight away; when it
//! does not, completion is polled on the getresult endpoint keyed by one of
//! the file hashes from the basic response.

use crate::config::{OpenTipConfig, PollPolicy};
use crate::domain::models::{FileGeneralInfo, OpenTipReport, Verdict};
use crate::providers::ProviderError;
use crate::services::output::Ui;
use reqwest::blocking::Client;
use std::path::Path;

const PROVIDER: &str = "Kaspersky OpenTIP";

pub fn parse_report(body: &str) -> anyhow::Result<OpenTipReport> {
    Ok(serde_json::from_str(body)?)
}

pub fn is_complete(status: Option<&str>) -> bool {
    status
        .map(|s| s.eq_ignore_ascii_case("complete"))
        .unwrap_or(false)
}

/// Zone is a three-valued risk level; anything unrecognized stays UNKNOWN.
pub fn verdict_from_zone(zone: &str) -> Verdict {
    match zone.to_ascii_lowercase().as_str() {
        "red" => Verdict::Malicious,
        "yellow" => Verdict::PotentiallyUnwanted,
        "green" => Verdict::Clean,
        _ => Verdict::Unknown,
    }
}

pub fn report_verdict(report: &OpenTipReport) -> Verdict {
    report
        .zone
        .as_deref()
        .map(verdict_from_zone)
        .unwrap_or(Verdict::Unknown)
}

/// Strongest available hash for the follow-up poll: SHA256, then SHA1,
/// then MD5.
pub fn preferred_hash(info: &FileGeneralInfo) -> Option<&str> {
    info.sha256
        .as_deref()
        .or(info.sha1.as_deref())
        .or(info.md5.as_deref())
}

/// POST the raw file bytes with the name as a query parameter.
pub fn upload(
    client: &Client,
    cfg: &OpenTipConfig,
    key: &str,
    path: &Path,
) -> anyhow::Result<OpenTipReport> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;
    let resp = client
        .post(&cfg.scan_url)
        .query(&[("filename", name.as_str())])
        .header("x-api-key", key)
        .header("Content-Type", "application/octet-stream")
        .body(bytes)
        .send()?;
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() {
        return Err(ProviderError::Status {
            provider: PROVIDER,
            status: status.as_u16(),
            body,
        }
        .into());
    }
    parse_report(&body)
}

/// Poll the getresult endpoint by file hash until the report is complete.
pub fn poll_result(
    client: &Client,
    cfg: &OpenTipConfig,
    key: &str,
    file_hash: &str,
    poll: &PollPolicy,
    ui: &Ui,
) -> anyhow::Result<OpenTipReport> {
    for attempt in 1..=poll.max_attempts {
        let resp = client
            .post(&cfg.result_url)
            .query(&[("request", file_hash)])
            .header("x-api-key", key)
            .send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            }
            .into());
        }
        let report = parse_report(&body)?;
        if is_complete(report.status.as_deref()) {
            return Ok(report);
        }
        ui.say(format!(
            "  Still scanning on Kaspersky OpenTIP, retrying in {}s ({}/{})",
            poll.interval.as_secs(),
            attempt,
            poll.max_attempts
        ));
        std::thread::sleep(poll.interval);
    }
    Err(ProviderError::Pending {
        provider: PROVIDER,
        attempts: poll.max_attempts,
    }
    .into())
}
