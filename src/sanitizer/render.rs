//! Page rasterization.
//!
//! Rendering sits behind a trait so the assembly and naming logic stays
//! testable without a pdfium install; the production implementation binds
//! the pdfium library at runtime.

use crate::services::output::Ui;
use anyhow::{anyhow, bail};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;

pub struct RenderedPage {
    /// 0-based page index; pages are always rendered in document order.
    pub index: usize,
    pub image: DynamicImage,
}

pub trait PageRenderer {
    /// Rasterize every page of `input` at `dpi`. Any single page failing
    /// fails the whole call; partial output is never returned.
    fn render(&self, input: &Path, dpi: f32, ui: &Ui) -> anyhow::Result<Vec<RenderedPage>>;
}

pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Bind the system pdfium library, falling back to one next to the
    /// executable.
    pub fn new() -> anyhow::Result<Self> {
        let bindings = Pdfium::bind_to_system_library()
            .or_else(|_| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            })
            .map_err(|e| anyhow!("could not load the pdfium library: {:?}", e))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render(&self, input: &Path, dpi: f32, ui: &Ui) -> anyhow::Result<Vec<RenderedPage>> {
        let document = self
            .pdfium
            .load_pdf_from_file(&input, None)
            .map_err(|e| anyhow!("could not open {}: {:?}", input.display(), e))?;
        let page_count = document.pages().len() as usize;
        ui.say(format!(
            "Opened '{}' ({} pages)...",
            input
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            page_count
        ));

        let config = PdfRenderConfig::new().scale_page_by_factor(dpi / 72.0);
        let mut pages = Vec::with_capacity(page_count);
        for (index, page) in document.pages().iter().enumerate() {
            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| anyhow!("could not render page {}: {:?}", index + 1, e))?;
            pages.push(RenderedPage {
                index,
                image: bitmap.as_image(),
            });
            ui.say(format!("  Rendered page {}/{}", index + 1, page_count));
        }
        if pages.is_empty() {
            bail!("nothing to sanitize: {} has no pages", input.display());
        }
        Ok(pages)
    }
}
