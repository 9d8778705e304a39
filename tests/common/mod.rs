use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment for CLI runs: fresh HOME, fresh source directories,
/// providers pointed at a closed local port so any accidental network call
/// fails immediately instead of reaching a real service.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub downloads: PathBuf,
    pub sanitized: PathBuf,
    pub log_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let downloads = home.join("Downloads");
        let sanitized = downloads.join("sanitized");
        fs::create_dir_all(&downloads).expect("create downloads dir");
        fs::create_dir_all(&sanitized).expect("create sanitized dir");
        let log_file = home.join("pdfsec.log");
        Self {
            _tmp: tmp,
            home,
            downloads,
            sanitized,
            log_file,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pdfsec").expect("binary under test");
        cmd.env("HOME", &self.home)
            .env("PDFSEC_DOWNLOADS_DIR", &self.downloads)
            .env("PDFSEC_SANITIZED_DIR", &self.sanitized)
            .env("PDFSEC_LOG_FILE", &self.log_file)
            .env("PDFSEC_VT_UPLOAD_URL", "http://127.0.0.1:9/files")
            .env("PDFSEC_VT_ANALYSIS_URL", "http://127.0.0.1:9/analyses")
            .env("PDFSEC_OPENTIP_SCAN_URL", "http://127.0.0.1:9/scan")
            .env("PDFSEC_OPENTIP_RESULT_URL", "http://127.0.0.1:9/getresult")
            .env("PDFSEC_POLL_INTERVAL_SECS", "0")
            .env("PDFSEC_POLL_MAX_ATTEMPTS", "2")
            .env("PDFSEC_HTTP_TIMEOUT_SECS", "2")
            .env_remove("PDFSEC_VT_API_KEY")
            .env_remove("PDFSEC_OPENTIP_API_KEY");
        cmd
    }

    pub fn add_pdf(&self, name: &str) -> PathBuf {
        let path = self.downloads.join(name);
        fs::write(&path, b"%PDF-1.4\nnot a real pdf, scan tests never parse it\n")
            .expect("write fixture pdf");
        path
    }

    pub fn add_sanitized_pdf(&self, name: &str) -> PathBuf {
        let path = self.sanitized.join(name);
        fs::write(&path, b"%PDF-1.4\nfixture\n").expect("write fixture pdf");
        path
    }

    pub fn log_contents(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}
