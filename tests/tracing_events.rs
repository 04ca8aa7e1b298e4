//! Structured events emitted under the `safename::*` targets.

#![cfg(feature = "tracing")]

use std::fmt;
use std::sync::{Arc, Mutex};

use safename::registry;
use safename::registry::LOCAL_WINDOWS;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Recorded {
    target: String,
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct RecordingLayer {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingLayer {
    fn take(&self) -> Vec<Recorded> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name().to_owned(), format!("{value:?}")));
        }
    }
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Recorded {
            target: event.metadata().target().to_owned(),
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Recorded>) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, layer.take())
}

fn field<'a>(event: &'a Recorded, name: &str) -> Option<&'a str> {
    event
        .fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn rewritten_name_emits_encode_event() {
    let (encoded, events) = capture(|| LOCAL_WINDOWS.encode_str("con.").into_owned());
    assert_eq!(encoded, "con．");

    let event = events
        .iter()
        .find(|event| event.message == "name_encoded")
        .expect("encode event recorded");
    assert_eq!(event.target, "safename::encode");
    assert_eq!(event.level, Level::TRACE);
    assert_eq!(field(event, "input_len"), Some("4"));
    assert_eq!(field(event, "output_len"), Some("6"));
}

#[test]
fn unchanged_name_emits_nothing() {
    let (_, events) = capture(|| LOCAL_WINDOWS.encode_str("plain").into_owned());
    assert!(
        events.iter().all(|event| event.target != "safename::encode"),
        "{events:?}"
    );
}

#[test]
fn decode_emits_event_when_name_changes() {
    let (decoded, events) = capture(|| LOCAL_WINDOWS.decode("a␠".as_bytes()).into_owned());
    assert_eq!(decoded, b"a ");
    assert!(
        events
            .iter()
            .any(|event| event.message == "name_decoded" && event.target == "safename::encode")
    );
}

#[test]
fn registry_reports_hits_and_misses() {
    let (_, events) = capture(|| {
        let _ = registry::lookup("Dropbox");
        let _ = registry::lookup("s3");
    });
    let registry_events: Vec<_> = events
        .iter()
        .filter(|event| event.target == "safename::registry")
        .collect();
    assert_eq!(registry_events.len(), 2, "{events:?}");

    assert_eq!(registry_events[0].message, "encoding_lookup_hit");
    assert_eq!(registry_events[0].level, Level::DEBUG);
    assert_eq!(field(registry_events[0], "name"), Some("Dropbox"));
    assert!(field(registry_events[0], "policy").is_some());

    assert_eq!(registry_events[1].message, "encoding_lookup_miss");
    assert_eq!(field(registry_events[1], "name"), Some("s3"));
}

#[test]
fn resolve_reports_rule_list_fallback() {
    let (policy, events) = capture(|| registry::resolve("Slash,RightSpace"));
    assert!(policy.is_ok());
    let event = events
        .iter()
        .find(|event| event.message == "encoding_rule_list")
        .expect("rule list event recorded");
    assert_eq!(field(event, "policy"), Some("Slash,RightSpace"));
}
