//! The sanitizer: rasterize every page and rebuild a content-only PDF.

use crate::config::Config;
use crate::domain::models::SanitizeReport;
use crate::sanitizer::assemble::{assemble_pdf, ImageCodec};
use crate::sanitizer::render::{PageRenderer, PdfiumRenderer};
use crate::sanitizer::{output_path_for, RENDER_DPI};
use crate::services::audit::AuditLog;
use crate::services::output::{print_json, Ui};
use std::path::Path;

pub fn run(json: bool, input: &Path, codec: ImageCodec, config: &Config) -> anyhow::Result<()> {
    let log = AuditLog::new(config.log_file.clone());
    // Validate before touching the filesystem: a bad argument must not
    // leave an empty sanitized directory behind.
    if !input.is_file() {
        anyhow::bail!("invalid filename: {}", input.display());
    }

    let result = sanitize(json, input, codec, &log);
    if let Err(e) = &result {
        log.write("sanitize", &format!("error: {:#}", e));
    }
    result
}

fn sanitize(json: bool, input: &Path, codec: ImageCodec, log: &AuditLog) -> anyhow::Result<()> {
    let ui = Ui::new(json);
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    log.write(
        "sanitize",
        &format!("rasterizing {} at {} dpi ({})", name, RENDER_DPI, codec),
    );

    let renderer = PdfiumRenderer::new()?;
    let pages = renderer.render(input, RENDER_DPI, &ui)?;
    let bytes = assemble_pdf(&pages, codec, RENDER_DPI)?;

    let output = output_path_for(input);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, &bytes)?;
    log.write(
        "sanitize",
        &format!("wrote {} ({} pages)", output.display(), pages.len()),
    );

    if json {
        print_json(SanitizeReport {
            input: input.display().to_string(),
            output: output.display().to_string(),
            pages: pages.len(),
            image_format: codec.to_string(),
        })?;
    } else {
        println!("Sanitized PDF saved as: {}", output.display());
    }
    Ok(())
}
