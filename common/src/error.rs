use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to obtain any answer from the lookup service.
///
/// Unexpected HTTP statuses are not errors; they travel in
/// [`Vendor::UnexpectedStatus`](crate::vendors::Vendor::UnexpectedStatus).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("{0}")]
    Transport(#[source] BoxError),
    /// A 200 answer whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[source] BoxError),
}

#[derive(Debug, Error)]
pub enum ArpError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("output of `{command}` is not valid UTF-8: {source}")]
    Decode {
        command: String,
        #[source]
        source: FromUtf8Error,
    },
}
