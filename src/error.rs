use serde::{Deserialize, Serialize};
use std::{fmt, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse the lifecycle event document")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "Encountered and IO error while reading the event document ({})",
        .0.kind()
    )]
    Io(#[from] io::Error),
}

/// An upstream failure carried inside a lifecycle [`Event`](crate::Event).
///
/// Only the rendered message is kept, so events stay cheap to clone and
/// can be recorded and replayed.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Error, Serialize, Deserialize)]
#[error("{0}")]
#[serde(transparent)]
pub struct EventError(String);

impl EventError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        EventError(message.into())
    }

    /// Renders `err` and its source chain, joined with `": "`.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(s) = source {
            message.push_str(": ");
            message.push_str(&s.to_string());
            source = s.source();
        }
        EventError(message)
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventError {
    fn from(v: &str) -> Self {
        EventError::new(v)
    }
}

impl From<String> for EventError {
    fn from(v: String) -> Self {
        EventError(v)
    }
}

impl From<io::Error> for EventError {
    fn from(v: io::Error) -> Self {
        EventError::from_error(&v)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for EventError {
    fn from(v: Box<dyn std::error::Error + Send + Sync>) -> Self {
        EventError::from_error(v.as_ref())
    }
}

/// Display adapter for an error that may be absent.
pub(crate) struct MaybeError<'a>(pub(crate) Option<&'a EventError>);

impl fmt::Display for MaybeError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(e) => fmt::Display::fmt(e, f),
            None => f.write_str("<none>"),
        }
    }
}
