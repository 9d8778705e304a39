use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Pretty-print the standard `{ ok, data }` envelope to stdout.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Human-facing chatter sink.
///
/// In `--json` mode all chatter moves to stderr so stdout carries exactly one
/// JSON document; otherwise it goes to stdout like any interactive CLI.
pub struct Ui {
    json: bool,
}

impl Ui {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn say(&self, msg: impl AsRef<str>) {
        if self.json {
            eprintln!("{}", msg.as_ref());
        } else {
            println!("{}", msg.as_ref());
        }
    }

    /// Prompt and read one trimmed line from stdin; `None` on EOF.
    pub fn ask(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        if self.json {
            eprint!("{}", prompt);
            std::io::stderr().flush()?;
        } else {
            print!("{}", prompt);
            std::io::stdout().flush()?;
        }
        let mut line = String::new();
        let n = std::io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
