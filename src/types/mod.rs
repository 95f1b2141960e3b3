use derive_more::Display;
use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

pub use event::{
    Decorated, Event, Invoked, Invoking, LoggerInitialized, OnStartExecuted, OnStartExecuting,
    OnStopExecuted, OnStopExecuting, Provided, Replaced, RolledBack, RollingBack, Run, Started,
    Stopped, Stopping, Supplied,
};

pub mod event;

/// An OS signal that triggered application shutdown.
///
/// Displays as the lower-case description of the signal.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(i32)]
pub enum Signal {
    #[display("hangup")]
    Hangup = 1,
    #[display("interrupt")]
    Interrupt = 2,
    #[display("quit")]
    Quit = 3,
    #[display("killed")]
    Kill = 9,
    #[display("user defined signal 1")]
    User1 = 10,
    #[display("user defined signal 2")]
    User2 = 12,
    #[display("broken pipe")]
    BrokenPipe = 13,
    #[display("terminated")]
    Terminate = 15,
    #[display("signal {_0}")]
    #[num_enum(catch_all)]
    Other(i32),
}
