use crate::{error::MaybeError, types::Event};
use std::sync::Arc;
use tracing::{debug, dispatcher, error, Dispatch, Subscriber};

/// Receiver of container lifecycle events.
pub trait EventSink {
    fn log_event(&self, event: &Event);
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn log_event(&self, event: &Event) {
        (**self).log_event(event)
    }
}

impl<T: EventSink + ?Sized> EventSink for Box<T> {
    fn log_event(&self, event: &Event) {
        (**self).log_event(event)
    }
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn log_event(&self, event: &Event) {
        (**self).log_event(event)
    }
}

/// An [`EventSink`] that emits `tracing` events.
///
/// All non-errors are logged at `DEBUG` to keep the output quiet,
/// failures are still logged at `ERROR`.
///
/// Records are always routed to the [`Dispatch`] the logger was built
/// with, regardless of the thread's current default.
#[derive(Clone, Debug)]
pub struct EventLogger {
    dispatch: Dispatch,
}

impl EventLogger {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub fn from_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::new(Dispatch::new(subscriber))
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn log_event(&self, event: &Event) {
        dispatcher::with_default(&self.dispatch, || emit(event))
    }
}

/// Uses the dispatcher that is the default at construction time.
impl Default for EventLogger {
    fn default() -> Self {
        Self::new(Dispatch::default())
    }
}

impl From<Dispatch> for EventLogger {
    fn from(dispatch: Dispatch) -> Self {
        Self::new(dispatch)
    }
}

impl EventSink for EventLogger {
    fn log_event(&self, event: &Event) {
        EventLogger::log_event(self, event)
    }
}

fn emit(event: &Event) {
    match event {
        Event::OnStartExecuting(e) => {
            debug!(
                callee = %e.function_name,
                caller = %e.caller_name,
                "on start hook executing"
            );
        }
        Event::OnStartExecuted(e) => match &e.err {
            Some(err) => error!(
                callee = %e.function_name,
                caller = %e.caller_name,
                "on start hook failed: {err}"
            ),
            None => debug!(
                callee = %e.function_name,
                caller = %e.caller_name,
                runtime = ?e.runtime,
                "on start hook executed"
            ),
        },
        Event::OnStopExecuting(e) => {
            debug!(
                callee = %e.function_name,
                caller = %e.caller_name,
                "on stop hook executing"
            );
        }
        Event::OnStopExecuted(e) => match &e.err {
            Some(err) => error!(
                callee = %e.function_name,
                caller = %e.caller_name,
                "on stop hook failed: {err}"
            ),
            None => debug!(
                callee = %e.function_name,
                caller = %e.caller_name,
                runtime = ?e.runtime,
                "on stop hook executed"
            ),
        },
        Event::Supplied(e) => {
            debug!(
                module = %e.module_name,
                "type" = %e.type_name,
                "supplied: {}",
                MaybeError(e.err.as_ref())
            );
        }
        Event::Provided(e) => {
            for rtype in e.output_type_names.iter() {
                debug!(
                    constructor = %e.constructor_name,
                    module = %e.module_name,
                    "type" = %rtype,
                    "provided"
                );
            }
            if let Some(err) = &e.err {
                error!(
                    module = %e.module_name,
                    "error encountered while applying options: {err}"
                );
            }
        }
        Event::Replaced(e) => {
            for rtype in e.output_type_names.iter() {
                debug!(module = %e.module_name, "type" = %rtype, "replaced");
            }
            if let Some(err) = &e.err {
                error!(
                    module = %e.module_name,
                    "error encountered while replacing: {err}"
                );
            }
        }
        Event::Decorated(e) => {
            for rtype in e.output_type_names.iter() {
                debug!(module = %e.module_name, "type" = %rtype, "decorated");
            }
            if let Some(err) = &e.err {
                error!(
                    module = %e.module_name,
                    "error encountered while applying options: {err}"
                );
            }
        }
        // Stack is left out, it makes the output hard to read
        Event::Invoking(e) => {
            debug!(
                function = %e.function_name,
                module = %e.module_name,
                "invoking"
            );
        }
        Event::Invoked(e) => {
            if let Some(err) = &e.err {
                error!(
                    stack = %e.trace,
                    function = %e.function_name,
                    module = %e.module_name,
                    "invoke failed: {err}"
                );
            }
        }
        Event::Stopping(e) => {
            debug!("received signal: {}", e.signal.to_string().to_uppercase());
        }
        Event::Stopped(e) => {
            if let Some(err) = &e.err {
                error!("received signal: {err}");
            }
        }
        Event::RollingBack(e) => {
            error!("start failed, rolling back: {}", e.start_err);
        }
        Event::RolledBack(e) => {
            if let Some(err) = &e.err {
                error!("rollback failed: {err}");
            }
        }
        Event::Started(e) => match &e.err {
            Some(err) => error!("start failed: {err}"),
            None => debug!("started"),
        },
        Event::LoggerInitialized(e) => match &e.err {
            Some(err) => error!("custom logger initialization failed: {err}"),
            None => debug!(
                function = %e.constructor_name,
                "initialized custom event logger"
            ),
        },
        Event::Run(_) => (),
    }
}
