//! Process-wide configuration, built once at startup.
//!
//! Every endpoint, key, directory, and polling knob comes from the
//! environment with a home-relative default, so tests can point the tool at
//! temp directories and mock endpoints without touching real services.

use std::path::PathBuf;
use std::time::Duration;

pub const VT_UPLOAD_URL: &str = "https://www.virustotal.com/api/v3/files";
pub const VT_ANALYSIS_URL: &str = "https://www.virustotal.com/api/v3/analyses";
pub const OPENTIP_SCAN_URL: &str = "https://opentip.kaspersky.com/api/v1/scan/file";
pub const OPENTIP_RESULT_URL: &str = "https://opentip.kaspersky.com/api/v1/getresult/file";

#[derive(Debug, Clone)]
pub struct VtConfig {
    pub upload_url: String,
    pub analysis_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenTipConfig {
    pub scan_url: String,
    pub result_url: String,
    pub api_key: Option<String>,
}

/// Bounded polling cadence for provider analyses.
///
/// The interval matches the original 5-second cadence; the attempt cap is a
/// deliberate change so an unresponsive provider cannot block a run forever.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub downloads_dir: PathBuf,
    pub sanitized_dir: PathBuf,
    pub log_file: PathBuf,
    pub virustotal: VtConfig,
    pub opentip: OpenTipConfig,
    pub poll: PollPolicy,
    pub http_timeout: Duration,
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().unwrap_or(default)
}

fn env_path_or(key: &str, default: PathBuf) -> PathBuf {
    std::env::var(key).ok().map(PathBuf::from).unwrap_or(default)
}

/// A blank or whitespace-only key counts as "not configured".
fn env_key(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_u64_or(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let home = PathBuf::from(std::env::var("HOME")?);
        let downloads_dir = env_path_or("PDFSEC_DOWNLOADS_DIR", home.join("Downloads"));
        let sanitized_dir = env_path_or(
            "PDFSEC_SANITIZED_DIR",
            home.join("Downloads").join("sanitized"),
        );
        let log_file = env_path_or(
            "PDFSEC_LOG_FILE",
            home.join(".local")
                .join("share")
                .join("pdfsec")
                .join("pdfsec.log"),
        );
        Ok(Self {
            downloads_dir,
            sanitized_dir,
            log_file,
            virustotal: VtConfig {
                upload_url: env_or("PDFSEC_VT_UPLOAD_URL", VT_UPLOAD_URL.to_string()),
                analysis_url: env_or("PDFSEC_VT_ANALYSIS_URL", VT_ANALYSIS_URL.to_string()),
                api_key: env_key("PDFSEC_VT_API_KEY"),
            },
            opentip: OpenTipConfig {
                scan_url: env_or("PDFSEC_OPENTIP_SCAN_URL", OPENTIP_SCAN_URL.to_string()),
                result_url: env_or("PDFSEC_OPENTIP_RESULT_URL", OPENTIP_RESULT_URL.to_string()),
                api_key: env_key("PDFSEC_OPENTIP_API_KEY"),
            },
            poll: PollPolicy {
                interval: Duration::from_secs(env_u64_or("PDFSEC_POLL_INTERVAL_SECS", 5)),
                max_attempts: env_u64_or("PDFSEC_POLL_MAX_ATTEMPTS", 60) as u32,
            },
            http_timeout: Duration::from_secs(env_u64_or("PDFSEC_HTTP_TIMEOUT_SECS", 60)),
        })
    }
}
