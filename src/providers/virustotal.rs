//! VirusTotal v3 file scanning: multipart upload, then poll the analysis
//! endpoint until the report is complete.

use crate::config::{PollPolicy, VtConfig};
use crate::domain::models::{Verdict, VtStats};
use crate::providers::ProviderError;
use crate::services::output::Ui;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::path::Path;

const PROVIDER: &str = "VirusTotal";

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    data: UploadData,
}

#[derive(Deserialize, Default)]
struct UploadData {
    #[serde(default)]
    id: String,
}

#[derive(Deserialize)]
struct AnalysisResponse {
    data: AnalysisData,
}

#[derive(Deserialize)]
struct AnalysisData {
    attributes: AnalysisAttributes,
}

#[derive(Deserialize)]
struct AnalysisAttributes {
    #[serde(default)]
    status: String,
    #[serde(default)]
    stats: VtStats,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub status: String,
    pub stats: VtStats,
}

impl Analysis {
    pub fn completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }
}

/// Extract the analysis id from an upload response body.
pub fn parse_upload_response(body: &str) -> anyhow::Result<String> {
    let parsed: UploadResponse = serde_json::from_str(body)?;
    if parsed.data.id.is_empty() {
        return Err(ProviderError::MissingField {
            provider: PROVIDER,
            field: "data.id",
        }
        .into());
    }
    Ok(parsed.data.id)
}

pub fn parse_analysis_response(body: &str) -> anyhow::Result<Analysis> {
    let parsed: AnalysisResponse = serde_json::from_str(body)?;
    Ok(Analysis {
        status: parsed.data.attributes.status,
        stats: parsed.data.attributes.stats,
    })
}

/// MALICIOUS on any malicious detection; the other counters never override it.
pub fn verdict_from_stats(stats: &VtStats) -> Verdict {
    if stats.malicious > 0 {
        Verdict::Malicious
    } else {
        Verdict::Clean
    }
}

/// POST the file bytes and return the analysis id.
pub fn upload(client: &Client, cfg: &VtConfig, key: &str, path: &Path) -> anyhow::Result<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;
    let part = Part::bytes(bytes)
        .file_name(name)
        .mime_str("application/pdf")?;
    let form = Form::new().part("file", part);
    let resp = client
        .post(&cfg.upload_url)
        .header("accept", "application/json")
        .header("x-apikey", key)
        .multipart(form)
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
    parse_upload_response(&body)
}

/// Poll the analysis endpoint on the configured cadence until completion.
pub fn poll_analysis(
    client: &Client,
    cfg: &VtConfig,
    key: &str,
    analysis_id: &str,
    poll: &PollPolicy,
    ui: &Ui,
) -> anyhow::Result<VtStats> {
    let url = format!("{}/{}", cfg.analysis_url.trim_end_matches('/'), analysis_id);
    for attempt in 1..=poll.max_attempts {
        let resp = client
            .get(&url)
            .header("accept", "application/json")
            .header("x-apikey", key)
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
        let analysis = parse_analysis_response(&body)?;
        if analysis.completed() {
            return Ok(analysis.stats);
        }
        ui.say(format!(
            "  Still scanning on VirusTotal, retrying in {}s ({}/{})",
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
