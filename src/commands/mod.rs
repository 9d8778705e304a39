//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — candidate selection + provider upload/poll/verdict flow.
//! - `sanitize.rs` — rasterize-and-reassemble pipeline.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`, `providers/*`, `sanitizer/*`.
//! - One provider failing must never abort the other's flow.

pub mod sanitize;
pub mod scan;
