//! Scanning providers, consumed as black boxes over HTTP.
//!
//! ## Layout
//! - `virustotal.rs` — multipart upload + analysis polling.
//! - `opentip.rs` — raw-body upload + hash-keyed result polling.
//!
//! ## Conventions
//! - Response parsing is kept in pure functions over the body text so it can
//!   be tested without a network.
//! - Polling is bounded by [`PollPolicy`](crate::config::PollPolicy); an
//!   exhausted loop is an error, not a hang.
//! - A provider failure is reported to the caller as an ordinary error; it is
//!   the orchestrator's job to isolate it from the other provider.

pub mod opentip;
pub mod virustotal;

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("{provider} response missing {field}")]
    MissingField {
        provider: &'static str,
        field: &'static str,
    },
    #[error("{provider} analysis still pending after {attempts} attempts")]
    Pending {
        provider: &'static str,
        attempts: u32,
    },
}
