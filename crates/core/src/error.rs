use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the bootstrap and launch sequence.
///
/// Every fetch or write failure aborts the remaining bootstrap steps and is
/// returned to the invoking command verbatim; none of these are fatal to the
/// host process.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to construct HTTP client")]
    Client(#[source] reqwest::Error),

    /// The remote endpoint could not be reached (DNS, connect, timeout).
    #[error("request for {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("script path is {len} bytes, over the {max} byte ceiling")]
    CommandTooLong { len: usize, max: usize },

    #[error("bootstrap cancelled")]
    Cancelled,

    /// The host console rejected the dispatched command; `status` is the
    /// host's own result code, passed through unchanged.
    #[error("host console returned status {status:#010x}")]
    Console { status: i32 },

    /// The host console capability could not be acquired.
    #[error("host console unavailable: {0}")]
    ConsoleUnavailable(String),
}
