use crate::sanitizer::assemble::ImageCodec;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdfsec", version, about = "PDF malware scanning and sanitization toolkit")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a PDF with VirusTotal and Kaspersky OpenTIP
    Scan {
        /// PDF to scan; omit to pick interactively from the downloads folder
        file: Option<PathBuf>,
    },
    /// Rasterize a PDF's pages and rebuild it without active content
    Sanitize {
        /// Input PDF; output lands in <parent>/sanitized/sanitized_<name>
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = ImageCodec::Png)]
        image_format: ImageCodec,
    },
}
