//! Candidate PDF discovery and interactive selection.

use crate::domain::models::Candidate;
use crate::services::output::Ui;
use std::path::Path;

/// PDFs from the downloads directory followed by previously sanitized
/// outputs, each listing sorted by file name. A missing directory simply
/// contributes nothing.
pub fn list_candidates(downloads: &Path, sanitized: &Path) -> anyhow::Result<Vec<Candidate>> {
    let mut out = list_dir(downloads)?;
    out.extend(list_dir(sanitized)?);
    Ok(out)
}

fn list_dir(dir: &Path) -> anyhow::Result<Vec<Candidate>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && entry.file_type()?.is_file() {
            found.push(Candidate::from_path(&path)?);
        }
    }
    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} TB", value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Pick(usize),
    Cancel,
    Invalid,
}

/// Parse one picker input line against a menu of `len` entries.
/// Menu numbers are 1-based; the returned index is 0-based.
pub fn parse_selection(input: &str, len: usize) -> Selection {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Selection::Cancel;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Selection::Pick(n - 1),
        _ => Selection::Invalid,
    }
}

/// Numbered menu over the candidates; loops until a valid pick or a
/// cancellation (`q` or EOF).
pub fn choose<'a>(candidates: &'a [Candidate], ui: &Ui) -> anyhow::Result<Option<&'a Candidate>> {
    ui.say("\nAvailable PDFs:\n");
    for (idx, c) in candidates.iter().enumerate() {
        ui.say(format!("  {}) {}  ({})", idx + 1, c.name, human_size(c.size)));
    }
    ui.say("");
    loop {
        let prompt = format!("Enter number (1-{}) or 'q' to cancel: ", candidates.len());
        let line = match ui.ask(&prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match parse_selection(&line, candidates.len()) {
            Selection::Cancel => return Ok(None),
            Selection::Pick(i) => return Ok(Some(&candidates[i])),
            Selection::Invalid => ui.say("  Invalid selection, try again."),
        }
    }
}
