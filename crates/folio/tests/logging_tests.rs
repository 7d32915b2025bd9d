//! Span and event names emitted while driving lists and loading definitions.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use folio::logging::{span_names, targets};
use folio::prelude::*;
use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Recorded {
    spans: Arc<Mutex<Vec<&'static str>>>,
    events: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl Recorded {
    fn spans(&self) -> Vec<&'static str> {
        self.spans.lock().clone()
    }

    fn has_event(&self, target: &str, message: &str) -> bool {
        self.events
            .lock()
            .iter()
            .any(|(t, m)| *t == target && m == message)
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorded {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.spans.lock().push(attrs.metadata().name());
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        self.events.lock().push((event.metadata().target(), message));
    }
}

fn record<R>(f: impl FnOnce() -> R) -> (R, Recorded) {
    let recorded = Recorded::default();
    let subscriber = tracing_subscriber::registry().with(recorded.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, recorded)
}

fn list() -> DisclosureList {
    DisclosureList::new(
        vec![
            DisclosureItem::new("Rust", "Systems programming"),
            DisclosureItem::new("Go", "Services"),
        ],
        DisclosureConfig::new(Exclusivity::Single),
    )
}

#[test]
fn toggle_and_key_spans_use_named_spans() {
    let (_, recorded) = record(|| {
        let mut list = list();
        list.item_toggled.connect(|_| {});
        list.toggle(0).unwrap();
        list.handle_key(DisclosureKey::ArrowDown).unwrap();
    });

    let spans = recorded.spans();
    assert!(spans.contains(&span_names::TOGGLE), "{spans:?}");
    assert!(spans.contains(&span_names::KEY), "{spans:?}");
    assert!(spans.contains(&span_names::SIGNAL), "{spans:?}");
    assert!(recorded.has_event(targets::DISCLOSURE, "item toggled"));
}

#[test]
fn file_and_string_loads_log_the_same_parse_event() {
    let text = r#"
        [[items]]
        title = "Rust"
        content = "Systems programming"
    "#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();

    let (definition, recorded) = record(|| DisclosureDefinition::from_file(file.path()));
    assert_eq!(definition.unwrap().items.len(), 1);
    assert!(recorded.spans().contains(&span_names::CONFIG_LOAD));
    assert!(recorded.has_event(targets::CONFIG, "parsed disclosure definition"));

    let (definition, recorded) = record(|| DisclosureDefinition::from_toml_str(text));
    assert_eq!(definition.unwrap().items.len(), 1);
    assert!(recorded.has_event(targets::CONFIG, "parsed disclosure definition"));
}
