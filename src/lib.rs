//! # pdfsec
//!
//! Personal PDF-security toolkit with two workflows:
//!
//! - **scan**: pick a PDF from the downloads/sanitized folders (or pass one
//!   directly), submit it to VirusTotal and Kaspersky OpenTIP, poll each
//!   analysis to completion, and print both verdicts.
//! - **sanitize**: rasterize every page of a PDF at 150 DPI and reassemble
//!   the images into a new content-only PDF, stripping scripts, embedded
//!   files, and other active content.
//!
//! Every significant step is appended to a flat audit log
//! (`<timestamp> | <module-tag> | <message>`), which is the only persistent
//! state the tool keeps.
//!
//! The binary in `main.rs` is a thin clap front end; all behavior lives here
//! so the picker, provider parsing, and PDF assembly stay testable without
//! network access or a pdfium install.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod providers;
pub mod sanitizer;
pub mod services;
