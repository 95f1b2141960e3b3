//! Replay of recorded lifecycle events.
//!
//! Events are stored as a YAML sequence of externally tagged variants:
//!
//! ```yaml
//! - on-start-executing:
//!     function-name: app::start_server
//!     caller-name: app::new_server
//! - started: {}
//! ```

use crate::{error::Error, logger::EventSink, types::Event};
use serde_yaml::with::singleton_map_recursive;
use std::io::{Read, Write};
use tracing::debug;

/// Reads a YAML sequence of events.
///
/// Enum variants, including nested ones such as [`Signal::Other`](crate::Signal::Other),
/// are single-key maps rather than YAML tags.
pub fn read_events<R: Read>(reader: R) -> Result<Vec<Event>, Error> {
    let events: Vec<Event> =
        singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_reader(reader))?;
    debug!(events = events.len(), "Read lifecycle events");
    Ok(events)
}

/// Parses a YAML sequence of events from a string.
pub fn events_from_str(s: &str) -> Result<Vec<Event>, Error> {
    read_events(s.as_bytes())
}

/// Writes `events` in the format [`read_events`] accepts.
pub fn write_events<W: Write>(writer: W, events: &[Event]) -> Result<(), Error> {
    let mut ser = serde_yaml::Serializer::new(writer);
    singleton_map_recursive::serialize(&events, &mut ser)?;
    debug!(events = events.len(), "Wrote lifecycle events");
    Ok(())
}

/// Renders `events` as a YAML document.
pub fn events_to_string(events: &[Event]) -> Result<String, Error> {
    let value = singleton_map_recursive::serialize(&events, serde_yaml::value::Serializer)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// Delivers `events` to `sink` in order, returning how many were delivered.
pub fn replay<S, I>(sink: &S, events: I) -> usize
where
    S: EventSink + ?Sized,
    I: IntoIterator,
    I::Item: std::borrow::Borrow<Event>,
{
    use std::borrow::Borrow;

    let mut count = 0;
    for event in events {
        sink.log_event(event.borrow());
        count += 1;
    }
    count
}
