use clap::Parser as ClapParser;
use lifecycle_logger::{replay, Error, EventLogger};
use std::{fs, path::PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Lifecycle event replay example
#[derive(Debug, clap::Parser)]
struct Opts {
    /// The recorded lifecycle events yaml file
    pub events: PathBuf,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let file = fs::File::open(&opts.events)?;
    let events = match replay::read_events(file) {
        Ok(events) => events,
        Err(e) => {
            error!("{e}");
            return Err(e);
        }
    };

    let logger = EventLogger::default();
    let count = replay::replay(&logger, &events);
    info!(count, "Replayed lifecycle events");

    Ok(())
}
