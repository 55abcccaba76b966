//! Contracts for the Data Access Layer: where Quake 3 server events come from

mod config;
pub use config::*;

use std::pin::Pin;
use futures::Stream;
use model::quake3_events::Quake3Events;


/// The only errors a log source surfaces -- anything wrong with individual log lines is skipped, not reported
#[derive(Debug, thiserror::Error)]
pub enum LogSourceError {

    /// The log source is absent
    #[error("The Quake3 Server log '{locator}' does not exist")]
    NotFound { locator: String },

    /// The log source exists, but has no content (or only whitespaces)
    #[error("The Quake3 Server log '{locator}' is empty")]
    InvalidInput { locator: String },

    /// Any other failure while reading the log source
    #[error("An error occurred while reading the Quake3 Server log '{locator}': {source}")]
    IoFailure { locator: String, source: std::io::Error },

}

impl LogSourceError {

    /// Classifies an IO error that happened while reading `locator`
    pub fn from_io(locator: impl Into<String>, err: std::io::Error) -> Self {
        let locator = locator.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => LogSourceError::NotFound { locator },
            _ => LogSourceError::IoFailure { locator, source: err },
        }
    }

}

pub type Result<T> = std::result::Result<T, LogSourceError>;


/// Feed for Quake 3 server events
pub trait Quake3LogSource {

    /// Consumes this object, returning a `Stream` which yields Quake 3 server events.\
    /// The whole source is read before any event is yielded: absent or empty sources fail here,
    /// while unrecognized log lines are simply skipped by the returned `Stream`.
    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Quake3Events>>>>;

}
