//! Append-only run log: `<timestamp> | <module-tag> | <message>`.
//!
//! This is the only persistent audit trail the tool keeps. Writes are
//! best-effort: a log failure never aborts a scan or a sanitization.

use std::io::Write;
use std::path::PathBuf;

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn write(&self, module: &str, message: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let line = format!("{} | {} | {}\n", timestamp(), module, message);
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()));
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
