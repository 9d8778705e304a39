use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Final human-facing classification of a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Clean,
    Malicious,
    PotentiallyUnwanted,
    Unknown,
}

impl Verdict {
    /// Flagged verdicts are rendered in red; everything else in green.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Verdict::Malicious | Verdict::PotentiallyUnwanted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Clean => "CLEAN",
            Verdict::Malicious => "MALICIOUS",
            Verdict::PotentiallyUnwanted => "POTENTIALLY UNWANTED",
            Verdict::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// A scannable PDF, enumerated fresh at each run.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl Candidate {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let meta = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| anyhow::anyhow!("path has no file name: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: meta.len(),
        })
    }
}

/// Detection counters from a completed VirusTotal analysis.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct VtStats {
    #[serde(default)]
    pub harmless: u32,
    #[serde(default)]
    pub malicious: u32,
    #[serde(default)]
    pub suspicious: u32,
    #[serde(default)]
    pub undetected: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct VtReport {
    pub stats: VtStats,
    pub verdict: Verdict,
}

/// Hash and metadata block from an OpenTIP response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileGeneralInfo {
    #[serde(rename = "MD5")]
    pub md5: Option<String>,
    #[serde(rename = "SHA1")]
    pub sha1: Option<String>,
    #[serde(rename = "SHA256")]
    pub sha256: Option<String>,
    #[serde(rename = "Size")]
    pub size: Option<u64>,
    #[serde(rename = "Type")]
    pub file_type: Option<String>,
}

/// Body of both the OpenTIP scan and getresult endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpenTipReport {
    #[serde(rename = "Zone")]
    pub zone: Option<String>,
    #[serde(rename = "FileStatus")]
    pub status: Option<String>,
    #[serde(rename = "FileGeneralInfo", default)]
    pub info: FileGeneralInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenTipSummary {
    #[serde(flatten)]
    pub report: OpenTipReport,
    pub verdict: Verdict,
}

/// One run's outcome; an absent provider entry means that provider was
/// skipped or failed.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub file: String,
    pub sha256: String,
    pub virustotal: Option<VtReport>,
    pub opentip: Option<OpenTipSummary>,
}

#[derive(Debug, Serialize)]
pub struct SanitizeReport {
    pub input: String,
    pub output: String,
    pub pages: usize,
    pub image_format: String,
}
