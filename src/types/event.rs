use crate::{error::EventError, types::Signal};
use derive_more::From;
use internment::Intern;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A lifecycle or diagnostic event reported by the application container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, From, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Event {
    OnStartExecuting(OnStartExecuting),
    OnStartExecuted(OnStartExecuted),
    OnStopExecuting(OnStopExecuting),
    OnStopExecuted(OnStopExecuted),
    Supplied(Supplied),
    Provided(Provided),
    Replaced(Replaced),
    Decorated(Decorated),
    Run(Run),
    Invoking(Invoking),
    Invoked(Invoked),
    Stopping(Stopping),
    Stopped(Stopped),
    RollingBack(RollingBack),
    RolledBack(RolledBack),
    Started(Started),
    LoggerInitialized(LoggerInitialized),
}

/// An OnStart hook is about to be executed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OnStartExecuting {
    /// Name of the hook function.
    pub function_name: Intern<String>,
    /// Name of the function that registered the hook.
    pub caller_name: Intern<String>,
}

/// An OnStart hook has finished executing.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OnStartExecuted {
    pub function_name: Intern<String>,
    pub caller_name: Intern<String>,
    /// How the hook was run (e.g. "hook", "func").
    #[serde(default)]
    pub method: String,
    /// Time spent executing the hook.
    #[serde(default)]
    pub runtime: Duration,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// An OnStop hook is about to be executed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OnStopExecuting {
    pub function_name: Intern<String>,
    pub caller_name: Intern<String>,
}

/// An OnStop hook has finished executing.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OnStopExecuted {
    pub function_name: Intern<String>,
    pub caller_name: Intern<String>,
    #[serde(default)]
    pub runtime: Duration,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A value was supplied directly to the container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Supplied {
    pub type_name: Intern<String>,
    /// Module the value was supplied to, empty for the root module.
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub stack_trace: Vec<String>,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A constructor was registered with the container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Provided {
    pub constructor_name: Intern<String>,
    #[serde(default)]
    pub module_name: String,
    /// Types produced by the constructor, in declaration order.
    #[serde(default)]
    pub output_type_names: Vec<Intern<String>>,
    #[serde(default)]
    pub stack_trace: Vec<String>,
    /// Whether the constructor is private to its module.
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A value was replaced in the container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Replaced {
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub output_type_names: Vec<Intern<String>>,
    #[serde(default)]
    pub stack_trace: Vec<String>,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A decorator was applied to values in the container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Decorated {
    pub decorator_name: Intern<String>,
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub output_type_names: Vec<Intern<String>>,
    #[serde(default)]
    pub stack_trace: Vec<String>,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A constructor or decorator was run by the container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Run {
    pub name: Intern<String>,
    /// "provide", "decorate", "supply" or "replace".
    pub kind: String,
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub runtime: Duration,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A function is about to be invoked by the container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Invoking {
    pub function_name: Intern<String>,
    #[serde(default)]
    pub module_name: String,
}

/// A function invocation has completed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Invoked {
    pub function_name: Intern<String>,
    #[serde(default)]
    pub module_name: String,
    /// Stack trace of the invocation site, only meaningful on failure.
    #[serde(default)]
    pub trace: String,
    #[serde(default)]
    pub err: Option<EventError>,
}

/// The application received a signal and is shutting down.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Stopping {
    pub signal: Signal,
}

/// All OnStop hooks have run.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Stopped {
    #[serde(default)]
    pub err: Option<EventError>,
}

/// Startup failed and the already-started hooks are being stopped.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RollingBack {
    /// The failure that triggered the rollback.
    pub start_err: EventError,
}

/// The rollback has finished.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RolledBack {
    #[serde(default)]
    pub err: Option<EventError>,
}

/// All OnStart hooks have run.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Started {
    #[serde(default)]
    pub err: Option<EventError>,
}

/// A custom event logger was built from a user constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggerInitialized {
    pub constructor_name: Intern<String>,
    #[serde(default)]
    pub err: Option<EventError>,
}
