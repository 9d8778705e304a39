//! Service layer containing side-effect helpers shared by the commands.
//!
//! ## Service map
//! - `audit.rs` — append-only run log (`timestamp | tag | message`).
//! - `catalog.rs` — candidate PDF discovery and interactive selection.
//! - `output.rs` — JSON/text output helpers and the `Ui` chatter sink.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod catalog;
pub mod output;
