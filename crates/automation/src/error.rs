//! Error types for desktop automation operations.

use thiserror::Error;

/// Main error type for desktop automation operations.
///
/// There is a single kind: any failure to reach the OS automation surface
/// (permission denial, no active desktop session, `osascript` missing, a
/// garbled reply) is reported as unavailable and propagates unmodified to
/// the caller. Nothing is caught, retried, or logged-and-swallowed.
#[derive(Debug, Error)]
pub enum AutomationError {
    /// The desktop automation surface could not be reached or gave an
    /// unusable reply.
    #[error("Desktop automation unavailable: {0}")]
    Unavailable(String),
}
