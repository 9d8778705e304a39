//! PDF sanitization pipeline.
//!
//! Sanitization here means rebuilding a PDF out of raster copies of its
//! pages: scripts, embedded files, launch actions, and form logic cannot
//! survive the round trip through pixels.
//!
//! ## Layout
//! - `render.rs` — page rasterization behind the [`PageRenderer`] trait.
//! - `assemble.rs` — image-to-PDF assembly.

pub mod assemble;
pub mod render;

pub use render::{PageRenderer, RenderedPage};

/// Fixed rasterization resolution (the PDF user-space unit is 1/72 inch).
pub const RENDER_DPI: f32 = 150.0;

use std::path::{Path, PathBuf};

/// `<parent>/sanitized/sanitized_<name>`, derived deterministically so a
/// rerun overwrites the same output.
pub fn output_path_for(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    parent.join("sanitized").join(format!("sanitized_{}", name))
}
