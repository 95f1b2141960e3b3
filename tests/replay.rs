use common::Capture;
use internment::Intern;
use lifecycle_logger::*;
use pretty_assertions::assert_eq;
use test_log::test;
use tracing::Level;

mod common;

const EVENTS: &str = "test_resources/fixtures/startup.yaml";

fn events() -> Vec<Event> {
    let f = std::fs::File::open(EVENTS).unwrap();
    replay::read_events(f).unwrap()
}

#[test]
fn fixture_parses() {
    let events = events();
    assert_eq!(events.len(), 13);
    assert_eq!(
        events.get(3),
        Some(&Event::from(Provided {
            constructor_name: Intern::new("db::open".to_owned()),
            module_name: "storage".to_owned(),
            output_type_names: vec![Intern::new("sql::Pool".to_owned())],
            stack_trace: vec![],
            private: false,
            err: EventError::new(
                "missing dependencies for function db::open: missing type: config::Dsn"
            )
            .into(),
        }))
    );
    assert!(matches!(events.get(5), Some(Event::Run(r)) if r.kind == "provide"));
}

#[test]
fn failed_start_replay() {
    let capture = Capture::default();
    let logger = capture.logger();

    let delivered = replay::replay(&logger, events());
    assert_eq!(delivered, 13);

    let records = capture.records();
    assert_eq!(records.len(), 13);

    let errors: Vec<&str> = records
        .iter()
        .filter(|r| r.level == Level::ERROR)
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(
        errors,
        vec![
            "error encountered while applying options: missing dependencies for function db::open: missing type: config::Dsn",
            "invoke failed: could not build arguments for function app::register",
            "on start hook failed: listen tcp :8080 address already in use",
            "start failed, rolling back: listen tcp :8080 address already in use",
            "start failed: listen tcp :8080 address already in use",
        ]
    );
    assert_eq!(
        records.iter().filter(|r| r.level == Level::DEBUG).count(),
        8
    );
}
