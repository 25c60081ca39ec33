//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `WishBackend`.
///
/// `WishGenerator` never surfaces these to the user; they are logged and
/// replaced by a fixed fallback message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WishGenError {
    #[error("wish generation is not configured")]
    Disabled,
    #[error("wish generation returned an empty response")]
    EmptyResponse,
    #[error("wish generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
