#![doc = include_str!("../README.md")]

pub use crate::error::{Error, EventError};
pub use crate::logger::{EventLogger, EventSink};
pub use crate::types::*;

pub mod error;
pub mod logger;
pub mod replay;
pub mod types;
