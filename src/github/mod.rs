//! GitHub REST access: query building and the fail-soft HTTP client.

pub mod client;
pub mod query;

pub use client::GitHubClient;

use thiserror::Error;

/// Why a GitHub call produced no usable data.
///
/// Never escapes [`GitHubClient`]'s public lookups; it only feeds logging.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Connection, DNS, body read or JSON decode failure.
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("GitHub API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
